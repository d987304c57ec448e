//! Tabular data model for inspection sheets.
//!
//! The engine does not read spreadsheets itself; a collaborator materializes
//! one inspection item into a [`DataTable`]: column names, one spec row
//! (target/USL/LSL at fixed positions), and ordered batch rows of raw
//! [`Cell`] values. Order is significant: rows are successive production
//! batches.

use serde::{Deserialize, Serialize};

/// A raw cell value as read from the data source.
///
/// Measurements are usually [`Cell::Number`], but manually maintained
/// sheets mix in text (including numeric text) and blanks, so coercion
/// is explicit and fallible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// A numeric cell.
    Number(f64),
    /// A text cell; may still hold a parseable number.
    Text(String),
    /// A blank cell.
    Empty,
}

impl Cell {
    /// Coerce the cell to a finite number, if possible.
    ///
    /// Text is trimmed and parsed; blanks and unparseable text yield
    /// `None`, as do non-finite numerics.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Number(_) => None,
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Cell::Empty => None,
        }
    }

    /// Render the cell as a row label.
    ///
    /// Blank labels read as `"Unknown"` so batch enumeration never drops
    /// a row silently.
    pub fn as_label(&self) -> String {
        match self {
            Cell::Number(n) => format!("{n}"),
            Cell::Text(s) => s.clone(),
            Cell::Empty => "Unknown".to_string(),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// One inspection item's data: column names, the spec row, and batch rows.
///
/// `spec_row` mirrors the source sheet's first data row, where positions
/// 1, 2, and 3 hold target, USL, and LSL. `rows` hold only measurement
/// batches, so batch indices are 0-based over measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    /// Column names; the first column labels batches, the rest are
    /// measurement or metadata columns.
    pub columns: Vec<String>,
    /// The spec row (target/USL/LSL at positions 1/2/3).
    pub spec_row: Vec<Cell>,
    /// Batch rows, one per production batch, in production order.
    pub rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Enumerate batch labels from the first column, in order.
    pub fn batch_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.first().map(Cell::as_label).unwrap_or_else(|| "Unknown".to_string()))
            .collect()
    }
}

/// A batch-index selection over a table's rows.
///
/// Both ends are optional (open range = full sample) and deliberately
/// signed: callers forward raw request parameters, and out-of-range or
/// reversed requests are clamped and swapped rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRange {
    /// First batch index, 0-based; `None` means the first row.
    pub start: Option<i64>,
    /// Last batch index, inclusive; `None` means the last row.
    pub end: Option<i64>,
}

impl BatchRange {
    /// The full sample.
    pub fn all() -> Self {
        Self::default()
    }

    /// An explicit inclusive range.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Resolve against a sample of `len` rows.
    ///
    /// Clamps both ends into `[0, len-1]`, swaps them if reversed, and
    /// returns the inclusive index pair. `None` only when the sample is
    /// empty, a caller-visible no-data condition rather than an error here.
    pub fn resolve(&self, len: usize) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }
        let max = (len - 1) as i64;
        let s = self.start.unwrap_or(0).clamp(0, max);
        let e = self.end.unwrap_or(max).clamp(0, max);
        Some((s.min(e) as usize, s.max(e) as usize))
    }

    /// Slice `rows` to the resolved inclusive range.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        match self.resolve(rows.len()) {
            Some((first, last)) => &rows[first..=last],
            None => &[],
        }
    }
}
