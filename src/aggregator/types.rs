//! Data types produced by the aggregation engine.

use serde::Serialize;

use crate::record::OccupationRecord;

/// Summary statistics for one major across its matching occupations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorAggregate {
    pub major: String,
    pub avg_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub total_jobs: u64,
    pub weighted_avg_growth: f64,
    pub num_career_paths: usize,
    pub top_3_careers: Vec<String>,
}

/// Statistics shown above the career list of a single major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailStats {
    pub avg_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub total_jobs: u64,
    pub weighted_avg_growth: f64,
    pub num_careers: usize,
}

/// Drill-down view for one major.
///
/// An unknown major, or one without matching occupations, yields an empty
/// detail: no careers and no statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorDetail {
    pub major: String,
    pub careers: Vec<OccupationRecord>,
    pub stats: Option<DetailStats>,
}

impl MajorDetail {
    pub fn empty(major: &str) -> Self {
        MajorDetail {
            major: major.to_string(),
            careers: Vec::new(),
            stats: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}
