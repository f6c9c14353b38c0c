use rx_model::ModelError;
use thiserror::Error;

/// Errors that abort an aggregation run.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Cost field present but not usable as a number.
    #[error("malformed record{}: {source}", line_suffix(.line))]
    MalformedRecord {
        line: Option<u64>,
        #[source]
        source: ModelError,
    },

    /// Total cost for a drug no longer fits in an integer.
    #[error("total cost overflow for drug '{drug_name}'")]
    CostOverflow { drug_name: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, AggregateError>;
