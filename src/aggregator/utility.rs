use std::collections::HashSet;

use crate::record::OccupationRecord;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns `(min, max)` of the values, or `(0.0, 0.0)` for empty input.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Sum of job counts, saturating at `u64::MAX` instead of overflowing.
pub fn total_jobs(records: &[&OccupationRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |total, r| total.saturating_add(r.job_count))
}

/// Growth rate averaged with each occupation weighted by its job count.
///
/// Normalized by the total job count, not the number of records; a zero
/// total gives 0.0. Weights are summed as floats so huge counts cannot
/// overflow the denominator.
pub fn weighted_growth(records: &[&OccupationRecord]) -> f64 {
    let total_jobs: f64 = records.iter().map(|r| r.job_count as f64).sum();
    if total_jobs == 0.0 {
        return 0.0;
    }
    let weighted: f64 = records
        .iter()
        .map(|r| r.growth_rate * r.job_count as f64)
        .sum();
    weighted / total_jobs
}

/// Records whose occupation name appears in `occupations`, in dataset order.
pub fn select_records<'a>(
    records: &'a [OccupationRecord],
    occupations: &[String],
) -> Vec<&'a OccupationRecord> {
    let wanted: HashSet<&str> = occupations.iter().map(String::as_str).collect();
    records
        .iter()
        .filter(|r| wanted.contains(r.occupation_name.as_str()))
        .collect()
}

/// Sorts by job count, largest first. Stable, so equal counts keep dataset order.
pub fn sort_by_jobs_desc(records: &mut [&OccupationRecord]) {
    records.sort_by(|a, b| b.job_count.cmp(&a.job_count));
}

/// Names of the `n` records with the most jobs, largest first.
pub fn top_n_by_jobs(records: &[&OccupationRecord], n: usize) -> Vec<String> {
    let mut ranked = records.to_vec();
    sort_by_jobs_desc(&mut ranked);
    ranked
        .into_iter()
        .take(n)
        .map(|r| r.occupation_name.clone())
        .collect()
}
