//! Row selection by comparing one column against a literal.

use std::cmp::Ordering;

use rowsift_model::{Dataset, FilterOperator, PipelineError, Result};

use crate::value::compare_cells;

/// Returns `true` when `cell <operator> literal` holds.
///
/// `eq` compares text exactly; `lt` / `gt` compare numerically when both sides
/// are numbers and fall back to text comparison otherwise.
pub fn matches(operator: FilterOperator, cell: &str, literal: &str) -> bool {
    match operator {
        FilterOperator::Eq => cell == literal,
        FilterOperator::Lt => compare_cells(cell, literal) == Ordering::Less,
        FilterOperator::Gt => compare_cells(cell, literal) == Ordering::Greater,
    }
}

/// Keeps the rows whose `column` satisfies the comparison, in input order.
///
/// Fails with [`PipelineError::MissingColumn`] on the first row lacking
/// `column`. An empty dataset yields an empty dataset.
pub fn filter(
    dataset: &Dataset,
    column: &str,
    operator: FilterOperator,
    literal: &str,
) -> Result<Dataset> {
    let mut kept = Vec::new();
    for (index, row) in dataset.iter().enumerate() {
        let cell = row
            .get(column)
            .ok_or_else(|| PipelineError::missing_column(column, index))?;
        if matches(operator, cell, literal) {
            kept.push(row.clone());
        }
    }
    Ok(dataset.with_rows(kept))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(
            ["name", "price"],
            [["a", "10"], ["b", "9"], ["c", "100"], ["d", "free"]],
        )
    }

    fn names(dataset: &Dataset) -> Vec<&str> {
        dataset.iter().filter_map(|row| row.get("name")).collect()
    }

    #[test]
    fn test_eq_is_exact_text() {
        assert!(matches(FilterOperator::Eq, "10", "10"));
        assert!(!matches(FilterOperator::Eq, "10.0", "10"));
        assert!(!matches(FilterOperator::Eq, "Apple", "apple"));
    }

    #[test]
    fn test_lt_gt_numeric_when_both_parse() {
        let result = filter(&sample(), "price", FilterOperator::Lt, "50").unwrap();
        // "free" vs "50" compares as text: "f" > "5".
        assert_eq!(names(&result), vec!["a", "b"]);

        let result = filter(&sample(), "price", FilterOperator::Gt, "9").unwrap();
        assert_eq!(names(&result), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_text_fallback() {
        let result = filter(&sample(), "name", FilterOperator::Gt, "b").unwrap();
        assert_eq!(names(&result), vec!["c", "d"]);
    }

    #[test]
    fn test_missing_column() {
        let err = filter(&sample(), "brand", FilterOperator::Eq, "x").unwrap_err();
        assert_eq!(
            err,
            PipelineError::MissingColumn {
                column: "brand".to_string(),
                row: 0
            }
        );
    }

    #[test]
    fn test_empty_dataset() {
        let empty = Dataset::new(vec!["name".to_string()], Vec::new());
        let result = filter(&empty, "brand", FilterOperator::Eq, "x").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.columns, vec!["name"]);
    }
}
