//! Output of the ranked drug cost report.
//!
//! The report is a comma-separated file with a
//! `drug_name,num_prescriber,total_cost` header followed by one row per
//! drug, in ranked order.

mod error;
mod writer;

pub use error::{ReportError, Result};
pub use writer::{REPORT_HEADER, write_report, write_report_to};
