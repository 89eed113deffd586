use serde::{Deserialize, Serialize};

use crate::parser::{parse_currency, parse_integer_count, parse_percentage_with_label};

/// A single row as it appears in the occupation CSV.
///
/// Empty or absent cells deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOccupation {
    pub occupation_name: String,
    pub median_pay_annual: Option<String>,
    pub job_outlook: Option<String>,
    pub number_of_jobs: Option<String>,
    pub entry_level_education: Option<String>,
    pub what_they_do: Option<String>,
}

/// An occupation row together with its derived numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupationRecord {
    pub occupation_name: String,
    pub median_pay_annual: Option<String>,
    pub job_outlook: Option<String>,
    pub number_of_jobs: Option<String>,
    pub entry_level_education: Option<String>,
    pub what_they_do: Option<String>,

    // derived
    pub salary_numeric: f64,
    pub growth_rate: f64,
    pub job_count: u64,
}

impl OccupationRecord {
    pub fn from_raw(raw: RawOccupation) -> Self {
        let salary_numeric = parse_currency(raw.median_pay_annual.as_deref());
        let growth_rate = parse_percentage_with_label(raw.job_outlook.as_deref());
        let job_count = parse_integer_count(raw.number_of_jobs.as_deref());

        OccupationRecord {
            occupation_name: raw.occupation_name,
            median_pay_annual: raw.median_pay_annual,
            job_outlook: raw.job_outlook,
            number_of_jobs: raw.number_of_jobs,
            entry_level_education: raw.entry_level_education,
            what_they_do: raw.what_they_do,
            salary_numeric,
            growth_rate,
            job_count,
        }
    }

    /// Builds a record from the three fields that drive the statistics.
    /// Handy for hosts that already hold the data in memory.
    pub fn new(name: &str, median_pay: &str, number_of_jobs: &str, outlook: &str) -> Self {
        Self::from_raw(RawOccupation {
            occupation_name: name.to_string(),
            median_pay_annual: Some(median_pay.to_string()),
            job_outlook: Some(outlook.to_string()),
            number_of_jobs: Some(number_of_jobs.to_string()),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_derives_numeric_fields() {
        let record = OccupationRecord::new(
            "Registered nurses",
            "$86,070",
            "3,300,000",
            "6% (Faster than average)",
        );

        assert_eq!(record.salary_numeric, 86070.0);
        assert_eq!(record.growth_rate, 6.0);
        // thousands separators are not accepted in counts
        assert_eq!(record.job_count, 0);
    }

    #[test]
    fn test_from_raw_missing_fields_are_zero() {
        let record = OccupationRecord::from_raw(RawOccupation {
            occupation_name: "Historians".to_string(),
            ..Default::default()
        });

        assert_eq!(record.salary_numeric, 0.0);
        assert_eq!(record.growth_rate, 0.0);
        assert_eq!(record.job_count, 0);
        assert!(record.what_they_do.is_none());
    }
}
