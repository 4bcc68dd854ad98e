//! Operation descriptors and the enumerations they are validated against.
//!
//! Each enumeration parses from its lowercase CLI spelling via [`FromStr`];
//! anything outside the legal set yields the matching validation error, so a
//! bad argument is rejected before any row is touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Comparison used by the row filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Exact text equality, no numeric coercion.
    Eq,
    /// Less than; numeric when both sides are numeric.
    Lt,
    /// Greater than; numeric when both sides are numeric.
    Gt,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 3] = [Self::Eq, Self::Lt, Self::Gt];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Lt => "lt",
            FilterOperator::Gt => "gt",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| PipelineError::UnsupportedOperator(s.to_string()))
    }
}

/// Reduction applied by the row aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationKind {
    /// Arithmetic mean; produces a scalar observation.
    Avg,
    /// Smallest value; keeps every row holding it.
    Min,
    /// Largest value; keeps every row holding it.
    Max,
}

impl AggregationKind {
    pub const ALL: [AggregationKind; 3] = [Self::Avg, Self::Min, Self::Max];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationKind::Avg => "avg",
            AggregationKind::Min => "min",
            AggregationKind::Max => "max",
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PipelineError::UnsupportedAggregation(s.to_string()))
    }
}

/// Row ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(PipelineError::UnsupportedSortOrder(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// A pipeline feature that can be switched off at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Filter,
    Aggregate,
    Sort,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Filter => "Filter",
            Capability::Aggregate => "Aggregation",
            Capability::Sort => "Sorting",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which pipeline capabilities are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub filter: bool,
    pub aggregate: bool,
    pub sort: bool,
}

impl Capabilities {
    /// Everything enabled.
    pub fn all() -> Self {
        Self {
            filter: true,
            aggregate: true,
            sort: true,
        }
    }

    /// Everything disabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Enables exactly the capabilities the given operations need.
    pub fn for_operations<'a>(operations: impl IntoIterator<Item = &'a Operation>) -> Self {
        operations
            .into_iter()
            .fold(Self::none(), |caps, op| caps.with(op.capability()))
    }

    #[must_use]
    pub fn with(mut self, capability: Capability) -> Self {
        match capability {
            Capability::Filter => self.filter = true,
            Capability::Aggregate => self.aggregate = true,
            Capability::Sort => self.sort = true,
        }
        self
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::Filter => self.filter,
            Capability::Aggregate => self.aggregate,
            Capability::Sort => self.sort,
        }
    }

    /// Returns `Ok(())` if enabled, otherwise the configuration error.
    pub fn require(&self, capability: Capability) -> Result<(), PipelineError> {
        if self.is_enabled(capability) {
            Ok(())
        } else {
            Err(PipelineError::CapabilityDisabled { capability })
        }
    }
}

// ---------------------------------------------------------------------------
// Operation descriptor
// ---------------------------------------------------------------------------

/// A validated pipeline operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Filter {
        column: String,
        operator: FilterOperator,
        value: String,
    },
    Aggregate {
        column: String,
        kind: AggregationKind,
    },
    Sort {
        column: String,
        direction: SortDirection,
    },
}

impl Operation {
    /// Builds a filter descriptor, validating the operator name.
    pub fn filter(
        column: impl Into<String>,
        operator: &str,
        value: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        Ok(Operation::Filter {
            column: column.into(),
            operator: operator.parse()?,
            value: value.into(),
        })
    }

    /// Builds an aggregate descriptor, validating the aggregation type.
    pub fn aggregate(column: impl Into<String>, kind: &str) -> Result<Self, PipelineError> {
        Ok(Operation::Aggregate {
            column: column.into(),
            kind: kind.parse()?,
        })
    }

    /// Builds a sort descriptor, validating the direction.
    pub fn sort(column: impl Into<String>, direction: &str) -> Result<Self, PipelineError> {
        Ok(Operation::Sort {
            column: column.into(),
            direction: direction.parse()?,
        })
    }

    pub fn capability(&self) -> Capability {
        match self {
            Operation::Filter { .. } => Capability::Filter,
            Operation::Aggregate { .. } => Capability::Aggregate,
            Operation::Sort { .. } => Capability::Sort,
        }
    }

    pub fn column(&self) -> &str {
        match self {
            Operation::Filter { column, .. }
            | Operation::Aggregate { column, .. }
            | Operation::Sort { column, .. } => column,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Filter {
                column,
                operator,
                value,
            } => write!(f, "filter {column} {operator} {value:?}"),
            Operation::Aggregate { column, kind } => write!(f, "aggregate {column} {kind}"),
            Operation::Sort { column, direction } => write!(f, "order-by {column} {direction}"),
        }
    }
}
