use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, warn};

use rowsift_model::{Dataset, Row, RowSource};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file with a header row into a [`Dataset`].
///
/// Each data record becomes one [`Row`] keyed by header name. Cells are kept
/// verbatim. Short records leave their trailing columns out of the row and
/// extra fields are dropped; both are logged.
pub fn read_csv_dataset(path: &Path) -> Result<Dataset> {
    let csv_error = |err| IngestError::from_csv(path.to_path_buf(), err);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for header in &headers {
        if columns.contains(header) {
            warn!(path = %path.display(), column = %header, "duplicate column header, later values win");
        } else {
            columns.push(header.clone());
        }
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        if record.len() != headers.len() {
            warn!(
                path = %path.display(),
                row = index,
                expected = headers.len(),
                found = record.len(),
                "record length does not match header"
            );
        }
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.as_str(), value))
            .collect();
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "read CSV dataset"
    );
    Ok(Dataset::new(columns, rows))
}

/// A CSV file used as a row source.
///
/// Every [`RowSource::load`] re-reads the file, so each caller gets an
/// independent copy of the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for CsvSource {
    type Error = IngestError;

    fn load(&self) -> Result<Dataset> {
        read_csv_dataset(&self.path)
    }
}
