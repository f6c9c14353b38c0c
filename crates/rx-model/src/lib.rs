//! Data model for prescription cost reporting.
//!
//! Input rows become [`Record`]s, are aggregated into [`DrugStatistics`]
//! keyed by drug name, and leave the pipeline as ordered [`RankedEntry`]s.

pub mod cost;
pub mod error;
pub mod prescriber;
pub mod record;
pub mod statistics;

pub use cost::parse_cost;
pub use error::{ModelError, Result};
pub use prescriber::PrescriberIdentity;
pub use record::{COST_FIELD, DRUG_NAME_FIELD, FIRST_NAME_FIELD, LAST_NAME_FIELD, Record};
pub use statistics::{DrugStatistics, RankedEntry};
