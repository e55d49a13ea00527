//! Table grid type and detection settings.
//!
//! A [`Table`] is a rectangular grid of cell strings in reading order. Both
//! detectors build one from row vectors; rows shorter than the widest row are
//! padded with empty strings so every table is rectangular.

use crate::shapes::DEFAULT_LINE_THICKNESS;
use crate::words::WordOptions;

/// Configuration for table detection.
///
/// Word tolerances default to 3.0 points.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSettings {
    /// Options used to turn page characters into words.
    pub words: WordOptions,
    /// A line thinner than this along an axis is a rule along the other axis.
    pub line_thickness: f64,
    /// Decimal places `top` is rounded to when clustering words into rows.
    pub row_precision: u32,
    /// Maximum `x0` distance (exclusive) between a word and a column anchor.
    pub column_tolerance: f64,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            words: WordOptions::default(),
            line_thickness: DEFAULT_LINE_THICKNESS,
            row_precision: 1,
            column_tolerance: 10.0,
        }
    }
}

/// A detected table: rows of cell strings, top-to-bottom, left-to-right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")
)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from rows, padding short rows with empty strings.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows }
    }

    /// Cells organized into rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Text of the cell at `(row, column)`, if the position exists.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Table> for Vec<Vec<String>> {
    fn from(table: Table) -> Self {
        table.rows
    }
}
