//! In-memory rows and datasets.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Row – one data record
// ---------------------------------------------------------------------------

/// A single data record: column name → cell text.
///
/// Key order carries no meaning; display order comes from
/// [`Dataset::columns`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    /// Returns the cell text for `column`, if the row has that column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Sets a cell, returning the previous text if the column was present.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.cells.insert(column.into(), value.into())
    }

    /// Column names present in this row (sorted).
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – ordered rows plus source column order
// ---------------------------------------------------------------------------

/// An ordered sequence of rows.
///
/// `columns` keeps the header order of the source so rendering can follow it;
/// operations only ever drop or reorder rows, so the list stays valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names in source order.
    pub columns: Vec<String>,
    /// Rows in load order, or the order produced by the last sort.
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Builds a dataset whose rows all share `columns`, given one value list
    /// per row in column order. Extra values are ignored; missing ones are
    /// left out of the row.
    pub fn from_records<C, R, V>(columns: C, records: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let rows = records
            .into_iter()
            .map(|record| {
                columns
                    .iter()
                    .cloned()
                    .zip(record.into_iter().map(Into::into))
                    .collect::<Row>()
            })
            .collect();
        Self { columns, rows }
    }

    /// Returns a dataset with the same columns and the given rows.
    #[must_use]
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Column names to display: the source header order, or the sorted union
    /// of row keys when the header list is empty.
    pub fn display_columns(&self) -> Vec<String> {
        if !self.columns.is_empty() {
            return self.columns.clone();
        }
        let union: BTreeSet<&str> = self.rows.iter().flat_map(Row::columns).collect();
        union.into_iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
