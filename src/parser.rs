//! Field parsers for raw occupation data.
//!
//! Every parser here is total: malformed or missing input degrades to zero
//! so that a single bad cell never blocks aggregation of the rest of the
//! dataset.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static PERCENTAGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(-?\d+)%").unwrap());

/// Converts a currency string such as `"$131,450"` into a float.
///
/// Dollar signs and thousands separators are stripped before parsing.
/// Returns `0.0` for missing, empty, non-numeric, non-finite or negative input.
pub fn parse_currency(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };

    let cleaned: String = text.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            trace!(raw = text, "Unparseable salary, using 0");
            0.0
        }
    }
}

/// Extracts the signed percentage from an outlook string such as
/// `"15% (Much faster than average)"`.
///
/// Only the first `digits%` occurrence counts; any label after it is ignored.
pub fn parse_percentage_with_label(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };

    PERCENTAGE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or_else(|| {
            if !text.trim().is_empty() {
                trace!(raw = text, "No percentage in job outlook, using 0");
            }
            0.0
        })
}

/// Coerces a job count cell into an integer.
///
/// Float text (`"45000.0"`) is accepted since spreadsheet exports write
/// counts that way; the fraction is truncated. Negative, non-numeric and
/// empty cells give `0`.
pub fn parse_integer_count(value: Option<&str>) -> u64 {
    let Some(value) = value else {
        return 0;
    };
    let value = value.trim();
    if value.is_empty() {
        return 0;
    }

    if let Ok(count) = value.parse::<u64>() {
        return count;
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
        _ => {
            trace!(raw = value, "Unparseable job count, using 0");
            0
        }
    }
}
