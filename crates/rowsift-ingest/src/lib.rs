//! CSV ingestion for rowsift.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rowsift_ingest::{CsvSource, read_csv_dataset};
//! use rowsift_model::RowSource;
//!
//! let dataset = read_csv_dataset(Path::new("products.csv"))?;
//! let again = CsvSource::new("products.csv").load()?;
//! assert_eq!(dataset, again);
//! ```

mod csv_table;
mod error;

pub use csv_table::{CsvSource, read_csv_dataset};
pub use error::{IngestError, Result};
