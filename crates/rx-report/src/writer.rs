//! Report writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use rx_model::RankedEntry;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ReportError, Result};

/// Column names of the report, in output order.
pub const REPORT_HEADER: [&str; 3] = ["drug_name", "num_prescriber", "total_cost"];

#[derive(Serialize)]
struct ReportRow<'a> {
    drug_name: &'a str,
    num_prescriber: u64,
    total_cost: i64,
}

impl<'a> From<&'a RankedEntry> for ReportRow<'a> {
    fn from(entry: &'a RankedEntry) -> Self {
        Self {
            drug_name: &entry.drug_name,
            num_prescriber: entry.prescriber_count(),
            total_cost: entry.total_cost(),
        }
    }
}

/// Write the header and one row per entry, in the order given.
pub fn write_report_to<W: Write>(writer: W, entries: &[RankedEntry]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;
    for entry in entries {
        csv_writer.serialize(ReportRow::from(entry))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the report to `path`, creating missing parent directories.
pub fn write_report(path: &Path, entries: &[RankedEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!(path = %parent.display(), "creating output directory");
        }
        fs::create_dir_all(parent).map_err(|e| ReportError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let file = File::create(path).map_err(|e| ReportError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_report_to(BufWriter::new(file), entries)?;
    info!(path = %path.display(), rows = entries.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rx_model::DrugStatistics;

    fn render(entries: &[RankedEntry]) -> String {
        let mut buffer = Vec::new();
        write_report_to(&mut buffer, entries).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_report_has_header_only() {
        assert_eq!(render(&[]), "drug_name,num_prescriber,total_cost\n");
    }

    #[test]
    fn quotes_names_containing_delimiters() {
        let entries = [RankedEntry::new(
            "DRUG, EXTENDED",
            DrugStatistics {
                prescriber_count: 3,
                total_cost: 42,
            },
        )];
        assert_eq!(
            render(&entries),
            "drug_name,num_prescriber,total_cost\n\"DRUG, EXTENDED\",3,42\n"
        );
    }
}
