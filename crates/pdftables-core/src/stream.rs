//! Borderless table detection from text alignment.
//!
//! Words are grouped into rows by their rounded `top` coordinate. Columns are
//! inferred online: the first word seen near a new `x0` position creates a
//! [`ColumnAnchor`], and later words snap to the first anchor within the
//! column tolerance.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::page::Page;
use crate::table::{Table, TableSettings};
use crate::words::Word;

/// Detect a table from word alignment alone.
///
/// Returns `None` when the page has no words.
pub fn detect_borderless(page: &Page, settings: &TableSettings) -> Option<Table> {
    let words = page.extract_words(&settings.words);
    if words.is_empty() {
        return None;
    }

    let rows = cluster_rows(&words, settings.row_precision);
    let mut anchors = ColumnAnchors::new(settings.column_tolerance);
    let rows: Vec<Vec<String>> = rows.iter().map(|row| anchors.lay_out_row(row)).collect();

    debug!(
        page = page.page_number(),
        rows = rows.len(),
        anchors = anchors.len(),
        "built borderless grid"
    );
    Some(Table::from_rows(rows))
}

/// Group words into rows keyed by `top` rounded to `precision` decimals.
///
/// Rows are returned top to bottom. Within a row, words are ordered by `x0`;
/// words with equal `x0` keep their extraction order.
pub fn cluster_rows(words: &[Word], precision: u32) -> Vec<Vec<&Word>> {
    let mut rows: BTreeMap<i64, Vec<&Word>> = BTreeMap::new();
    for word in words {
        rows.entry(row_key(word.bbox.top, precision))
            .or_default()
            .push(word);
    }

    rows.into_values()
        .map(|mut row| {
            row.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));
            row
        })
        .collect()
}

/// Scaled integer key for `top` rounded to `precision` decimals.
///
/// Rounding is decided on the exact binary value, with exact ties going to
/// the even digit: 0.15 (stored as 0.1499...) keys with 0.1, and 10.25 keys
/// with 10.2.
fn row_key(top: f64, precision: u32) -> i64 {
    let digits: String = format!("{:.*}", precision as usize, top)
        .chars()
        .filter(|c| *c != '.')
        .collect();
    digits
        .parse()
        .unwrap_or_else(|_| (top * 10f64.powi(precision as i32)).round() as i64)
}

/// Horizontal extent of the word that opened a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnAnchor {
    pub x0: f64,
    pub x1: f64,
}

/// The growing, ordered set of column anchors for one page.
///
/// Anchors are never reordered or merged; new positions are appended.
#[derive(Debug, Clone)]
pub struct ColumnAnchors {
    anchors: Vec<ColumnAnchor>,
    tolerance: f64,
}

impl ColumnAnchors {
    pub fn new(tolerance: f64) -> Self {
        Self {
            anchors: Vec::new(),
            tolerance,
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn anchors(&self) -> &[ColumnAnchor] {
        &self.anchors
    }

    /// Index of the first anchor whose `x0` is strictly within tolerance.
    pub fn locate(&self, x0: f64) -> Option<usize> {
        self.anchors
            .iter()
            .position(|anchor| (x0 - anchor.x0).abs() < self.tolerance)
    }

    /// Emit one row of cell text, creating anchors for unmatched words.
    ///
    /// A word matching anchor `i` while the row holds fewer than `i` cells
    /// is preceded by empty placeholders so it lands in column `i`. A word
    /// matching an anchor the row has already passed, or no anchor at all,
    /// is appended at the next position.
    pub fn lay_out_row(&mut self, row: &[&Word]) -> Vec<String> {
        let mut cells: Vec<String> = Vec::with_capacity(self.anchors.len());
        for word in row {
            match self.locate(word.bbox.x0) {
                Some(column) => {
                    if cells.len() < column {
                        cells.resize(column, String::new());
                    }
                }
                None => {
                    trace!(
                        column = self.anchors.len(),
                        x0 = word.bbox.x0,
                        text = %word.text,
                        "new column anchor"
                    );
                    self.anchors.push(ColumnAnchor {
                        x0: word.bbox.x0,
                        x1: word.bbox.x1,
                    });
                }
            }
            cells.push(word.text.clone());
        }
        cells
    }
}
