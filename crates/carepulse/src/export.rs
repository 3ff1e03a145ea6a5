//! CSV export of scored results. Headers come from the result field names.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode CSV row: {0}")]
    Csv(#[from] csv::Error),
}

pub struct CsvExporter;

impl CsvExporter {
    /// Creates or truncates `path` and writes one row per result.
    pub fn to_path<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<(), ExportError> {
        let file = std::fs::File::create(path)?;
        Self::to_writer(file, rows)
    }

    /// Writes nothing, not even a header, when `rows` is empty.
    pub fn to_writer<T: Serialize, W: Write>(writer: W, rows: &[T]) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
