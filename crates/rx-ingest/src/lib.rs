//! Prescription record ingestion.
//!
//! Reads comma-separated prescription events into [`rx_model::Record`]s,
//! one row at a time, skipping the header line.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rx_ingest::RecordReader;
//!
//! for record in RecordReader::open(Path::new("input/itcont.txt"))? {
//!     let record = record?;
//!     println!("{:?}", record.drug_name());
//! }
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Record Reading ===
pub use reader::{RecordReader, read_records};
