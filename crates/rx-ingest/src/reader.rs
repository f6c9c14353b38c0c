//! Streaming record reader.
//!
//! The first line of the input is treated as a header and never reaches the
//! caller. Rows may have any number of fields; field values are passed
//! through untouched.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Position, ReaderBuilder, StringRecord};
use rx_model::Record;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Iterator over the data records of one input source.
pub struct RecordReader<R: Read> {
    inner: csv::Reader<R>,
    path: PathBuf,
    buffer: StringRecord,
    header_len: usize,
}

impl RecordReader<File> {
    /// Open an input file and consume its header line.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::from_reader(file, path)
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader; `path` is only used to label errors.
    pub fn from_reader(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut inner = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let header_len = inner
            .headers()
            .map_err(|e| csv_error(&path, e))?
            .len();
        if header_len == 0 {
            return Err(IngestError::EmptyInput { path });
        }
        debug!(path = %path.display(), columns = header_len, "read input header");
        Ok(Self {
            inner,
            path,
            buffer: StringRecord::new(),
            header_len,
        })
    }

    /// Number of columns named by the header line.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.read_record(&mut self.buffer) {
            Ok(true) => {
                let record: Record = self.buffer.iter().collect();
                Some(Ok(match self.buffer.position().map(Position::line) {
                    Some(line) => record.with_line(line),
                    None => record,
                }))
            }
            Ok(false) => None,
            Err(e) => Some(Err(csv_error(&self.path, e))),
        }
    }
}

/// Read every data record of a file into memory.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    RecordReader::open(path)?.collect()
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let line = err.position().map(Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}
