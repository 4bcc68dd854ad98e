//! Pipeline controller that chains filter, aggregate and sort over one
//! working dataset.
//!
//! # Architecture
//!
//! ```text
//!   RowSource ──load──▶ Processor (working Dataset)
//!                          │
//!          filter ─────────┤  replaces rows
//!          aggregate ──────┤  min/max replace rows, avg is observed
//!          order_by ───────┤  replaces rows
//!                          ▼
//!                     RowRenderer ──▶ text
//! ```
//!
//! Each operation checks its [`Capability`] first, so calling a disabled
//! operation is reported as a configuration error even when its arguments or
//! the data are also bad.

use std::fmt;

use rowsift_model::{
    AggregationKind, Capabilities, Capability, Dataset, FilterOperator, Operation, Result,
    RowRenderer, RowSource, SortDirection,
};
use tracing::{debug, info};

use crate::aggregate::{AggregateResult, aggregate};
use crate::filter::filter;
use crate::sort::order_by;

/// A scalar aggregation result reported instead of replacing rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub column: String,
    pub kind: AggregationKind,
    pub value: f64,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aggregation result ({}) for column '{}': {}",
            self.kind, self.column, self.value
        )
    }
}

/// Owns the working dataset and applies operations to it in call order.
#[derive(Debug, Clone)]
pub struct Processor {
    rows: Dataset,
    capabilities: Capabilities,
    observations: Vec<Observation>,
}

impl Processor {
    /// Creates a processor over already loaded rows.
    pub fn new(rows: Dataset, capabilities: Capabilities) -> Self {
        Self {
            rows,
            capabilities,
            observations: Vec::new(),
        }
    }

    /// Loads a fresh copy of the source and wraps it.
    pub fn from_source<S: RowSource>(
        source: &S,
        capabilities: Capabilities,
    ) -> std::result::Result<Self, S::Error> {
        let rows = source.load()?;
        info!(
            rows = rows.len(),
            columns = rows.columns.len(),
            "loaded source rows"
        );
        Ok(Self::new(rows, capabilities))
    }

    /// The current working rows.
    pub fn rows(&self) -> &Dataset {
        &self.rows
    }

    pub fn into_rows(self) -> Dataset {
        self.rows
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Scalar results recorded by `avg` aggregations, oldest first.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Keeps the rows where `column <operator> value` holds.
    pub fn filter(&mut self, column: &str, operator: &str, value: &str) -> Result<()> {
        self.capabilities.require(Capability::Filter)?;
        let operator: FilterOperator = operator.parse()?;
        self.run_filter(column, operator, value)
    }

    /// Aggregates `column`. Returns the scalar for `avg`, `None` when the
    /// working rows were replaced by the `min` / `max` selection.
    pub fn aggregate(&mut self, column: &str, kind: &str) -> Result<Option<f64>> {
        self.capabilities.require(Capability::Aggregate)?;
        let kind: AggregationKind = kind.parse()?;
        self.run_aggregate(column, kind)
    }

    /// Reorders the working rows by `column`.
    pub fn order_by(&mut self, column: &str, direction: &str) -> Result<()> {
        self.capabilities.require(Capability::Sort)?;
        let direction: SortDirection = direction.parse()?;
        self.run_sort(column, direction)
    }

    /// Applies one validated operation.
    pub fn apply(&mut self, operation: &Operation) -> Result<()> {
        self.capabilities.require(operation.capability())?;
        match operation {
            Operation::Filter {
                column,
                operator,
                value,
            } => self.run_filter(column, *operator, value),
            Operation::Aggregate { column, kind } => self.run_aggregate(column, *kind).map(|_| ()),
            Operation::Sort { column, direction } => self.run_sort(column, *direction),
        }
    }

    /// Applies operations in order, stopping at the first failure.
    pub fn apply_all<'a>(&mut self, operations: impl IntoIterator<Item = &'a Operation>) -> Result<()> {
        for operation in operations {
            self.apply(operation)?;
        }
        Ok(())
    }

    /// Renders the working rows.
    pub fn display<R: RowRenderer + ?Sized>(&self, renderer: &R) -> String {
        renderer.render(&self.rows)
    }

    fn run_filter(&mut self, column: &str, operator: FilterOperator, value: &str) -> Result<()> {
        let before = self.rows.len();
        self.rows = filter(&self.rows, column, operator, value)?;
        debug!(
            column,
            %operator,
            rows_in = before,
            rows_out = self.rows.len(),
            "filter applied"
        );
        Ok(())
    }

    fn run_aggregate(&mut self, column: &str, kind: AggregationKind) -> Result<Option<f64>> {
        match aggregate(&self.rows, column, kind)? {
            AggregateResult::Scalar(value) => {
                info!(column, %kind, value, "aggregation result");
                self.observations.push(Observation {
                    column: column.to_string(),
                    kind,
                    value,
                });
                Ok(Some(value))
            }
            AggregateResult::Rows(rows) => {
                debug!(
                    column,
                    %kind,
                    rows_in = self.rows.len(),
                    rows_out = rows.len(),
                    "aggregation selected rows"
                );
                self.rows = rows;
                Ok(None)
            }
        }
    }

    fn run_sort(&mut self, column: &str, direction: SortDirection) -> Result<()> {
        self.rows = order_by(&self.rows, column, direction)?;
        debug!(column, %direction, rows = self.rows.len(), "rows ordered");
        Ok(())
    }
}
