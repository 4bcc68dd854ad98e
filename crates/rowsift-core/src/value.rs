//! Numeric-or-text interpretation of cell values.
//!
//! Filtering and aggregation go through [`CellValue::parse`], so "149" and
//! "4.2" compare by magnitude while "apple" compares as text. Ordering is
//! stricter: a column sorts numerically only when every key is an unsigned
//! decimal (see [`is_unsigned_decimal`]).

use std::cmp::Ordering;

/// A cell value after coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    /// Interprets `raw` as a number when possible, otherwise as text.
    pub fn parse(raw: &'a str) -> Self {
        match parse_number(raw) {
            Some(value) => CellValue::Number(value),
            None => CellValue::Text(raw),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }
}

/// Parses a cell as a finite number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are treated as text.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// True for ASCII digits with at most one `.` somewhere among them, such as
/// `149`, `4.2`, `.5` or `7.`. Signs, exponents and whitespace are rejected.
pub fn is_unsigned_decimal(raw: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for byte in raw.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if dots == 0 => dots += 1,
            _ => return false,
        }
    }
    digits > 0
}

/// Compares two cells: numerically when both are numbers, otherwise as raw
/// text.
pub fn compare_cells(left: &str, right: &str) -> Ordering {
    match (CellValue::parse(left), CellValue::parse(right)) {
        (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(&b),
        _ => left.cmp(right),
    }
}
