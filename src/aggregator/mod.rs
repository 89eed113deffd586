//! Major aggregation engine.
//!
//! Joins occupation records to majors through an injected [`MajorMapping`]
//! and computes salary, job count and job-weighted growth statistics, both
//! for the whole comparison table ([`aggregate_all`]) and for the drill-down
//! of a single major ([`get_major_detail`]). Everything here is a pure
//! function of its inputs.

pub mod aggregate;
pub mod detail;
pub mod types;
pub mod utility;

pub use aggregate::{TOP_CAREERS, aggregate_all};
pub use detail::get_major_detail;
pub use types::{DetailStats, MajorAggregate, MajorDetail};

use std::path::Path;

use crate::dataset::{LoadError, load_records};
use crate::mapping::MajorMapping;

/// Loads the dataset at `path` and aggregates every major.
pub fn aggregate_dataset(
    path: impl AsRef<Path>,
    mapping: &MajorMapping,
) -> Result<Vec<MajorAggregate>, LoadError> {
    let records = load_records(path)?;
    Ok(aggregate_all(&records, mapping))
}

/// Loads the dataset at `path` and builds the detail view of `major_name`.
pub fn major_detail_from_dataset(
    major_name: &str,
    path: impl AsRef<Path>,
    mapping: &MajorMapping,
) -> Result<MajorDetail, LoadError> {
    let records = load_records(path)?;
    Ok(get_major_detail(major_name, &records, mapping))
}
