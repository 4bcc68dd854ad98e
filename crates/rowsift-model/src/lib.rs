//! Shared types for the rowsift workspace.
//!
//! - [`Row`] / [`Dataset`]: rows held in memory, keyed by column name
//! - [`Operation`]: a validated filter, aggregate or sort request
//! - [`Capabilities`]: which operations a pipeline accepts
//! - [`PipelineError`]: configuration, validation and data errors
//! - [`RowSource`] / [`RowRenderer`]: seams to the load and render collaborators

pub mod dataset;
pub mod error;
pub mod io;
pub mod operation;

pub use dataset::{Dataset, Row};
pub use error::{ErrorKind, PipelineError, Result};
pub use io::{RowRenderer, RowSource};
pub use operation::{
    AggregationKind, Capabilities, Capability, FilterOperator, Operation, SortDirection,
};
