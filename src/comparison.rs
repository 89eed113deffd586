//! Selection, ordering and headline figures for the comparison table.
//!
//! The aggregator returns majors in mapping order; everything here is the
//! display side of that table.

use std::cmp::Ordering;
use std::collections::HashSet;

use clap::ValueEnum;
use serde::Serialize;

use crate::aggregator::MajorAggregate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum SortKey {
    Major,
    #[default]
    AvgSalary,
    TotalJobs,
    GrowthRate,
    CareerPaths,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Keeps the aggregates whose major is in `selected`, preserving their order.
pub fn select_majors<S: AsRef<str>>(
    aggregates: &[MajorAggregate],
    selected: &[S],
) -> Vec<MajorAggregate> {
    let wanted: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();
    aggregates
        .iter()
        .filter(|a| wanted.contains(a.major.as_str()))
        .cloned()
        .collect()
}

/// Stable sort of the comparison rows.
pub fn sort_aggregates(rows: &mut [MajorAggregate], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ord = compare_by(a, b, key);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

fn compare_by(a: &MajorAggregate, b: &MajorAggregate, key: SortKey) -> Ordering {
    match key {
        SortKey::Major => a.major.cmp(&b.major),
        SortKey::AvgSalary => a.avg_salary.total_cmp(&b.avg_salary),
        SortKey::TotalJobs => a.total_jobs.cmp(&b.total_jobs),
        SortKey::GrowthRate => a.weighted_avg_growth.total_cmp(&b.weighted_avg_growth),
        SortKey::CareerPaths => a.num_career_paths.cmp(&b.num_career_paths),
    }
}

/// Majors leading each headline figure of the comparison.
#[derive(Debug, Serialize)]
pub struct KeyStatistics<'a> {
    pub highest_salary: &'a MajorAggregate,
    pub most_jobs: &'a MajorAggregate,
    pub fastest_growth: &'a MajorAggregate,
    pub most_career_paths: &'a MajorAggregate,
}

impl<'a> KeyStatistics<'a> {
    /// Returns `None` when there is nothing to compare. The earliest row wins ties.
    pub fn from_aggregates(rows: &'a [MajorAggregate]) -> Option<Self> {
        Some(KeyStatistics {
            highest_salary: leader(rows, SortKey::AvgSalary)?,
            most_jobs: leader(rows, SortKey::TotalJobs)?,
            fastest_growth: leader(rows, SortKey::GrowthRate)?,
            most_career_paths: leader(rows, SortKey::CareerPaths)?,
        })
    }
}

fn leader(rows: &[MajorAggregate], key: SortKey) -> Option<&MajorAggregate> {
    rows.iter().fold(None, |best, row| match best {
        Some(b) if compare_by(row, b, key) != Ordering::Greater => Some(b),
        _ => Some(row),
    })
}
