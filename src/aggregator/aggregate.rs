use tracing::debug;

use crate::aggregator::types::{DetailStats, MajorAggregate};
use crate::aggregator::utility::{
    mean, min_max, select_records, top_n_by_jobs, total_jobs, weighted_growth,
};
use crate::mapping::MajorMapping;
use crate::record::OccupationRecord;

/// Number of careers listed per major in the comparison table.
pub const TOP_CAREERS: usize = 3;

/// Aggregates the occupation records of every major in `mapping`.
///
/// Rows follow the mapping's order. Majors with no matching occupation are
/// left out. Every call recomputes from `records`.
pub fn aggregate_all(records: &[OccupationRecord], mapping: &MajorMapping) -> Vec<MajorAggregate> {
    let mut rows = Vec::with_capacity(mapping.len());

    for (major, occupations) in mapping.iter() {
        let selected = select_records(records, occupations);
        if selected.is_empty() {
            debug!(major, "No matching occupations, skipping major");
            continue;
        }

        let stats = summarize(&selected);
        rows.push(MajorAggregate {
            major: major.to_string(),
            avg_salary: stats.avg_salary,
            min_salary: stats.min_salary,
            max_salary: stats.max_salary,
            total_jobs: stats.total_jobs,
            weighted_avg_growth: stats.weighted_avg_growth,
            num_career_paths: stats.num_careers,
            top_3_careers: top_n_by_jobs(&selected, TOP_CAREERS),
        });
    }

    debug!(
        majors = mapping.len(),
        aggregated = rows.len(),
        "Major aggregation complete"
    );
    rows
}

/// Salary, job and growth statistics over a non-empty selection.
pub(crate) fn summarize(selected: &[&OccupationRecord]) -> DetailStats {
    let salaries: Vec<f64> = selected.iter().map(|r| r.salary_numeric).collect();
    let (min_salary, max_salary) = min_max(&salaries);

    DetailStats {
        avg_salary: mean(&salaries),
        min_salary,
        max_salary,
        total_jobs: total_jobs(selected),
        weighted_avg_growth: weighted_growth(selected),
        num_careers: selected.len(),
    }
}
