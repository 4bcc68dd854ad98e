//! Column reduction to avg / min / max.

use rowsift_model::{AggregationKind, Dataset, PipelineError, Result};

use crate::value::parse_number;

/// Outcome of an aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateResult {
    /// `avg`: a single value reported to the caller.
    Scalar(f64),
    /// `min` / `max`: every row holding the extreme value, in input order.
    Rows(Dataset),
}

/// Reduces `column` of `dataset` according to `kind`.
///
/// Every cell in the column must be numeric. `avg` over no rows fails with
/// [`PipelineError::NoData`]; so do `min` and `max`, which have no extreme to
/// select.
pub fn aggregate(dataset: &Dataset, column: &str, kind: AggregationKind) -> Result<AggregateResult> {
    let values = numeric_column(dataset, column)?;
    let no_data = || PipelineError::NoData {
        column: column.to_string(),
        kind,
    };

    match kind {
        AggregationKind::Avg => {
            if values.is_empty() {
                return Err(no_data());
            }
            let sum: f64 = values.iter().sum();
            Ok(AggregateResult::Scalar(sum / values.len() as f64))
        }
        AggregationKind::Min | AggregationKind::Max => {
            let target = extreme(&values, kind).ok_or_else(no_data)?;
            let rows = dataset
                .iter()
                .zip(&values)
                .filter(|&(_, value)| *value == target)
                .map(|(row, _)| row.clone())
                .collect();
            Ok(AggregateResult::Rows(dataset.with_rows(rows)))
        }
    }
}

/// Parses every cell of `column` as a number, in row order.
pub fn numeric_column(dataset: &Dataset, column: &str) -> Result<Vec<f64>> {
    dataset
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let cell = row
                .get(column)
                .ok_or_else(|| PipelineError::missing_column(column, index))?;
            parse_number(cell).ok_or_else(|| PipelineError::NonNumeric {
                column: column.to_string(),
                value: cell.to_string(),
                row: index,
            })
        })
        .collect()
}

fn extreme(values: &[f64], kind: AggregationKind) -> Option<f64> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, value| match kind {
        AggregationKind::Max => acc.max(value),
        _ => acc.min(value),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(
            ["name", "price", "brand"],
            [
                ["a", "30", "x"],
                ["b", "10", "y"],
                ["c", "20", "x"],
                ["d", "10.0", "z"],
            ],
        )
    }

    fn names(dataset: &Dataset) -> Vec<&str> {
        dataset.iter().filter_map(|row| row.get("name")).collect()
    }

    #[test]
    fn test_avg() {
        let result = aggregate(&sample(), "price", AggregationKind::Avg).unwrap();
        assert_eq!(result, AggregateResult::Scalar(17.5));
    }

    #[test]
    fn test_min_keeps_ties() {
        let AggregateResult::Rows(rows) =
            aggregate(&sample(), "price", AggregationKind::Min).unwrap()
        else {
            panic!("min should select rows");
        };
        assert_eq!(names(&rows), vec!["b", "d"]);
    }

    #[test]
    fn test_max() {
        let AggregateResult::Rows(rows) =
            aggregate(&sample(), "price", AggregationKind::Max).unwrap()
        else {
            panic!("max should select rows");
        };
        assert_eq!(names(&rows), vec!["a"]);
    }

    #[test]
    fn test_non_numeric_column() {
        let err = aggregate(&sample(), "brand", AggregationKind::Max).unwrap_err();
        assert_eq!(
            err,
            PipelineError::NonNumeric {
                column: "brand".to_string(),
                value: "x".to_string(),
                row: 0
            }
        );
    }

    #[test]
    fn test_empty_dataset() {
        let empty = Dataset::default();
        for kind in AggregationKind::ALL {
            let err = aggregate(&empty, "price", kind).unwrap_err();
            assert_eq!(
                err,
                PipelineError::NoData {
                    column: "price".to_string(),
                    kind
                }
            );
        }
    }
}
