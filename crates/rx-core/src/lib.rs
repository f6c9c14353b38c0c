//! Aggregation and ranking of prescription drug costs.
//!
//! Records are folded by an [`Aggregator`] in one pass, then the finished
//! [`AggregationState`] is ordered by [`rank_with`] into report entries.
//!
//! ```
//! use rx_core::{TieBreak, accumulate, rank_with};
//! use rx_model::Record;
//!
//! let records: Vec<Record> = vec![
//!     ["1", "Doe", "John", "DrugA", "10.40"].into_iter().collect(),
//!     ["2", "Doe", "John", "DrugB", "100.00"].into_iter().collect(),
//! ];
//! let state = accumulate(records).unwrap();
//! let ranked = rank_with(state, TieBreak::Ascending);
//! assert_eq!(ranked[0].drug_name, "DrugB");
//! ```

pub mod aggregate;
pub mod error;
pub mod options;
pub mod rank;

pub use aggregate::{AggregationState, Aggregator, RecordOutcome, accumulate};
pub use error::{AggregateError, Result};
pub use options::RunOptions;
pub use rank::{TieBreak, compare_entries, rank, rank_with};
