//! In-memory row transformations: filter → aggregate → order.
//!
//! The free functions in [`filter`], [`aggregate`] and [`sort`] are pure and
//! return new datasets. [`Processor`] owns a working dataset and chains them,
//! rejecting operations whose capability was not enabled.

pub mod aggregate;
pub mod filter;
pub mod pipeline;
pub mod sort;
pub mod value;

pub use aggregate::{AggregateResult, aggregate, numeric_column};
pub use filter::{filter, matches};
pub use pipeline::{Observation, Processor};
pub use sort::order_by;
pub use value::{CellValue, compare_cells, is_unsigned_decimal, parse_number};
