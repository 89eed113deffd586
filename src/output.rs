//! Output formatting and persistence for aggregated major statistics.
//!
//! Supports display formatting, pretty-printing, JSON logging and CSV export.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregator::MajorAggregate;
use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;

/// Longest description shown before it is cut off with `...`.
pub const DESCRIPTION_LIMIT: usize = 500;

/// Formats a salary as whole dollars with thousands separators, e.g. `$131,450`.
pub fn format_salary(salary: f64) -> String {
    let rounded = salary.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Formats a job count with a `K`/`M` suffix, e.g. `1.5M`, `45K`, `950`.
pub fn format_jobs(jobs: u64) -> String {
    if jobs >= 1_000_000 {
        format!("{:.1}M", jobs as f64 / 1_000_000.0)
    } else if jobs >= 1_000 {
        format!("{:.0}K", jobs as f64 / 1_000.0)
    } else {
        jobs.to_string()
    }
}

/// Formats a growth rate with an explicit sign, e.g. `+13.3%`.
pub fn format_growth(growth: f64) -> String {
    format!("{growth:+.1}%")
}

/// Cuts `text` to [`DESCRIPTION_LIMIT`] characters, appending `...` when it does.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl std::fmt::Debug) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line of the exported comparison table.
#[derive(Debug, Serialize)]
struct ComparisonRow<'a> {
    major: &'a str,
    avg_salary: f64,
    min_salary: f64,
    max_salary: f64,
    total_jobs: u64,
    weighted_avg_growth: f64,
    num_career_paths: usize,
    top_careers: String,
}

impl<'a> From<&'a MajorAggregate> for ComparisonRow<'a> {
    fn from(a: &'a MajorAggregate) -> Self {
        ComparisonRow {
            major: &a.major,
            avg_salary: a.avg_salary,
            min_salary: a.min_salary,
            max_salary: a.max_salary,
            total_jobs: a.total_jobs,
            weighted_avg_growth: a.weighted_avg_growth,
            num_career_paths: a.num_career_paths,
            top_careers: a.top_3_careers.join(", "),
        }
    }
}

/// Writes the comparison table to a CSV file, replacing any existing file.
pub fn write_comparison_csv(path: impl AsRef<Path>, rows: &[MajorAggregate]) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), rows = rows.len(), "Writing comparison CSV");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in rows {
        writer.serialize(ComparisonRow::from(row))?;
    }
    writer.flush()?;

    Ok(())
}
