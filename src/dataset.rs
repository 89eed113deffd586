//! Occupation dataset loading.
//!
//! The dataset is a CSV file with one row per occupation. The schema is
//! assumed rather than validated beyond the presence of the required
//! columns; cell contents are never a reason to reject a row.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::record::{OccupationRecord, RawOccupation};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "occupation_name",
    "median_pay_annual",
    "number_of_jobs",
    "job_outlook",
    "entry_level_education",
    "what_they_do",
];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Loads and enriches every occupation row from the CSV file at `path`.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<OccupationRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_records(file)
}

/// Reads occupation rows from any CSV source.
///
/// Short rows are accepted; their missing trailing cells read as empty.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<OccupationRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let raw: RawOccupation = result?;
        records.push(OccupationRecord::from_raw(raw));
    }

    debug!(rows = records.len(), "Occupation dataset loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "occupation_name,median_pay_annual,number_of_jobs,job_outlook,entry_level_education,what_they_do\n";

    #[test]
    fn test_read_records_parses_rows() {
        let data = format!(
            "{HEADER}Actuaries,\"$120,000\",30000,22% (Much faster than average),Bachelor's degree,Analyze risk\n"
        );
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].occupation_name, "Actuaries");
        assert_eq!(records[0].salary_numeric, 120000.0);
        assert_eq!(records[0].job_count, 30000);
        assert_eq!(records[0].growth_rate, 22.0);
    }

    #[test]
    fn test_read_records_tolerates_bad_cells() {
        let data = format!("{HEADER}Actors,,,,,\nMusicians and singers,n/a,lots,unknown,,\n");
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.salary_numeric, 0.0);
            assert_eq!(record.job_count, 0);
            assert_eq!(record.growth_rate, 0.0);
        }
        assert!(records[0].median_pay_annual.is_none());
    }

    #[test]
    fn test_read_records_pads_short_rows() {
        let data = format!("{HEADER}A,\"$1\",10,5%,x,y\nB,\"$2\",20\n");
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].occupation_name, "B");
        assert_eq!(records[1].salary_numeric, 2.0);
        assert_eq!(records[1].job_count, 20);
        assert_eq!(records[1].growth_rate, 0.0);
        assert!(records[1].job_outlook.is_none());
        assert!(records[1].what_they_do.is_none());
    }

    #[test]
    fn test_read_records_ignores_extra_columns() {
        let data = "extra,occupation_name,median_pay_annual,number_of_jobs,job_outlook,entry_level_education,what_they_do\n\
                    x,Chemists,\"$84,150\",90000,6% (Faster than average),Bachelor's degree,Study substances\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].occupation_name, "Chemists");
    }

    #[test]
    fn test_read_records_missing_columns() {
        let data = "occupation_name,median_pay_annual\nChemists,\"$84,150\"\n";
        let err = read_records(data.as_bytes()).unwrap_err();

        match err {
            LoadError::MissingColumns(cols) => {
                assert_eq!(
                    cols,
                    vec![
                        "number_of_jobs",
                        "job_outlook",
                        "entry_level_education",
                        "what_they_do"
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{HEADER}Foresters,\"$66,000\",14000,-3% (Decline),Bachelor's degree,Manage forests\n")
            .unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].growth_rate, -3.0);
    }
}
