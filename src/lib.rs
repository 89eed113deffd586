pub mod aggregator;
pub mod cache;
pub mod comparison;
pub mod dataset;
pub mod mapping;
pub mod output;
pub mod parser;
pub mod record;

pub use aggregator::{MajorAggregate, MajorDetail, aggregate_all, get_major_detail};
pub use mapping::MajorMapping;
pub use record::OccupationRecord;
