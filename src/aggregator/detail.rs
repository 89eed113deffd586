use tracing::debug;

use crate::aggregator::aggregate::summarize;
use crate::aggregator::types::MajorDetail;
use crate::aggregator::utility::{select_records, sort_by_jobs_desc};
use crate::mapping::MajorMapping;
use crate::record::OccupationRecord;

/// Builds the drill-down view for `major_name`.
///
/// Careers are sorted by job count, largest first, with ties in dataset
/// order. An unknown major or one with no matching rows gives
/// [`MajorDetail::empty`]; that is a normal outcome, not an error.
pub fn get_major_detail(
    major_name: &str,
    records: &[OccupationRecord],
    mapping: &MajorMapping,
) -> MajorDetail {
    let Some(occupations) = mapping.occupations_for(major_name) else {
        debug!(major = major_name, "Major not in mapping");
        return MajorDetail::empty(major_name);
    };

    let mut selected = select_records(records, occupations);
    if selected.is_empty() {
        debug!(major = major_name, "No matching occupations for major");
        return MajorDetail::empty(major_name);
    }

    let stats = summarize(&selected);
    sort_by_jobs_desc(&mut selected);

    MajorDetail {
        major: major_name.to_string(),
        careers: selected.into_iter().cloned().collect(),
        stats: Some(stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<OccupationRecord> {
        vec![
            OccupationRecord::new("Chemical technicians", "$56,000", "60", "2% (Slower than average)"),
            OccupationRecord::new("Chemists", "$84,000", "90", "6% (Faster than average)"),
            OccupationRecord::new("Materials scientists", "$104,000", "60", "-1% (Decline)"),
        ]
    }

    fn mapping() -> MajorMapping {
        MajorMapping::new(vec![
            (
                "Chemistry",
                vec!["Chemists", "Chemical technicians", "Materials scientists"],
            ),
            ("Philosophy", vec!["Philosophers"]),
        ])
    }

    #[test]
    fn test_detail_sorted_by_jobs_with_stable_ties() {
        let detail = get_major_detail("Chemistry", &records(), &mapping());
        let names: Vec<&str> = detail
            .careers
            .iter()
            .map(|r| r.occupation_name.as_str())
            .collect();

        assert_eq!(
            names,
            vec!["Chemists", "Chemical technicians", "Materials scientists"]
        );
    }

    #[test]
    fn test_detail_stats() {
        let detail = get_major_detail("Chemistry", &records(), &mapping());
        let stats = detail.stats.unwrap();

        assert_eq!(stats.num_careers, 3);
        assert_eq!(stats.total_jobs, 210);
        assert_eq!(stats.min_salary, 56000.0);
        assert_eq!(stats.max_salary, 104000.0);
        assert!((stats.avg_salary - 244000.0 / 3.0).abs() < 1e-9);
        // (2*60 + 6*90 - 1*60) / 210
        assert!((stats.weighted_avg_growth - 600.0 / 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_detail_huge_job_counts_saturate() {
        let records = vec![
            OccupationRecord::new("Chemists", "$84,000", "1e30", "6%"),
            OccupationRecord::new("Chemical technicians", "$56,000", "1e30", "6%"),
        ];
        let detail = get_major_detail("Chemistry", &records, &mapping());
        let stats = detail.stats.unwrap();

        assert_eq!(stats.total_jobs, u64::MAX);
        assert!((stats.weighted_avg_growth - 6.0).abs() < 1e-9);
        assert_eq!(detail.careers[0].occupation_name, "Chemists");
    }

    #[test]
    fn test_detail_unknown_major_is_empty() {
        let detail = get_major_detail("Astrology", &records(), &mapping());

        assert!(detail.is_empty());
        assert!(detail.stats.is_none());
        assert_eq!(detail.major, "Astrology");
    }

    #[test]
    fn test_detail_major_without_matches_is_empty() {
        let detail = get_major_detail("Philosophy", &records(), &mapping());

        assert!(detail.is_empty());
        assert!(detail.stats.is_none());
    }
}
