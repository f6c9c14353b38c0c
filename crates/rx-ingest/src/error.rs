//! Error types for record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the input file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be parsed as delimited text.
    #[error("failed to parse {path}{}: {message}", line_suffix(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// Input has no header line.
    #[error("input file is empty: {path}")]
    EmptyInput { path: PathBuf },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("input/itcont.txt"),
        };
        assert_eq!(err.to_string(), "input file not found: input/itcont.txt");
    }

    #[test]
    fn test_parse_error_display_includes_line() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("input/itcont.txt"),
            line: Some(12),
            message: "invalid UTF-8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse input/itcont.txt at line 12: invalid UTF-8"
        );
    }
}
