//! Seams to the collaborators that load and render rows.

use std::convert::Infallible;

use crate::dataset::Dataset;

/// Something rows can be loaded from.
///
/// Every call to [`RowSource::load`] returns an independent copy, so work done
/// on a loaded dataset never leaks back into the source.
pub trait RowSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> Result<Dataset, Self::Error>;
}

impl RowSource for Dataset {
    type Error = Infallible;

    fn load(&self) -> Result<Dataset, Self::Error> {
        Ok(self.clone())
    }
}

/// Turns rows into human-readable text.
pub trait RowRenderer {
    fn render(&self, dataset: &Dataset) -> String;
}
