//! Error types for the row pipeline.

use thiserror::Error;

use crate::operation::{AggregationKind, Capability};

/// Broad classification of a [`PipelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operation was invoked whose capability was never enabled.
    Configuration,
    /// An argument fell outside its enumerated set of legal values.
    Validation,
    /// The dataset does not satisfy the operation's precondition.
    Data,
}

/// Errors raised by filter, aggregate and sort operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    // === Configuration ===
    #[error("{capability} functionality is not enabled")]
    CapabilityDisabled { capability: Capability },

    // === Validation ===
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Unsupported aggregation type: {0}")]
    UnsupportedAggregation(String),

    #[error("Unsupported sort order: {0}")]
    UnsupportedSortOrder(String),

    // === Data ===
    #[error("column '{column}' not found in row {row}")]
    MissingColumn { column: String, row: usize },

    #[error("non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        value: String,
        row: usize,
    },

    #[error("cannot compute {kind} of column '{column}': no data")]
    NoData { column: String, kind: AggregationKind },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CapabilityDisabled { .. } => ErrorKind::Configuration,
            Self::UnsupportedOperator(_)
            | Self::UnsupportedAggregation(_)
            | Self::UnsupportedSortOrder(_) => ErrorKind::Validation,
            Self::MissingColumn { .. } | Self::NonNumeric { .. } | Self::NoData { .. } => {
                ErrorKind::Data
            }
        }
    }

    pub fn missing_column(column: &str, row: usize) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
            row,
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
