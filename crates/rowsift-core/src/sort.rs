//! Row ordering by one column.

use std::cmp::Ordering;

use rowsift_model::{Dataset, PipelineError, Result, SortDirection};

use crate::value::{is_unsigned_decimal, parse_number};

/// Sort key for one column: numbers when every cell is an unsigned decimal,
/// raw text otherwise. Deciding per column keeps the ordering total.
enum SortKeys<'a> {
    Numeric(Vec<f64>),
    Text(Vec<&'a str>),
}

impl SortKeys<'_> {
    fn compare(&self, a: usize, b: usize) -> Ordering {
        match self {
            SortKeys::Numeric(keys) => keys[a].total_cmp(&keys[b]),
            SortKeys::Text(keys) => keys[a].cmp(keys[b]),
        }
    }
}

/// Returns all rows reordered by `column`.
///
/// The sort is stable in both directions: rows with equal keys keep their
/// input order. `desc` flips the comparison, not the input.
pub fn order_by(dataset: &Dataset, column: &str, direction: SortDirection) -> Result<Dataset> {
    let cells = dataset
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.get(column)
                .ok_or_else(|| PipelineError::missing_column(column, index))
        })
        .collect::<Result<Vec<&str>>>()?;

    let keys = if cells.iter().all(|cell| is_unsigned_decimal(cell)) {
        cells
            .iter()
            .map(|cell| parse_number(cell))
            .collect::<Option<Vec<f64>>>()
            .map_or_else(|| SortKeys::Text(cells.clone()), SortKeys::Numeric)
    } else {
        SortKeys::Text(cells)
    };

    let mut order: Vec<usize> = (0..dataset.len()).collect();
    match direction {
        SortDirection::Asc => order.sort_by(|&a, &b| keys.compare(a, b)),
        SortDirection::Desc => order.sort_by(|&a, &b| keys.compare(b, a)),
    }

    let rows = order
        .into_iter()
        .map(|index| dataset.rows[index].clone())
        .collect();
    Ok(dataset.with_rows(rows))
}
