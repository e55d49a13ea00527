//! Bordered table detection.
//!
//! Ruling lines are reduced to their distinct boundary coordinates, adjacent
//! boundaries span a grid of [`CellBounds`], and each word is placed in the
//! first cell (row-major) that contains its top-left corner.

use tracing::debug;

use crate::geometry::CellBounds;
use crate::page::Page;
use crate::shapes::partition_rules;
use crate::table::{Table, TableSettings};
use crate::words::Word;

/// Detect a table from the ruling lines of a page.
///
/// Returns `None` when the page has no horizontal or no vertical rules, or
/// when the rules do not enclose at least one cell.
pub fn detect_bordered(page: &Page, settings: &TableSettings) -> Option<Table> {
    let (horizontal, vertical) = partition_rules(page.lines(), settings.line_thickness);
    if horizontal.is_empty() || vertical.is_empty() {
        return None;
    }

    let xs = boundary_coords(vertical.iter().flat_map(|l| [l.x0, l.x1]));
    let ys = boundary_coords(horizontal.iter().flat_map(|l| [l.top, l.bottom]));
    let grid = build_grid(&xs, &ys);
    if grid.first().is_none_or(Vec::is_empty) {
        debug!(
            page = page.page_number(),
            x_boundaries = xs.len(),
            y_boundaries = ys.len(),
            "rules enclose no cells"
        );
        return None;
    }

    let words = page.extract_words(&settings.words);
    let rows = assign_words(&grid, &words);
    debug!(
        page = page.page_number(),
        rows = rows.len(),
        columns = rows[0].len(),
        words = words.len(),
        "built bordered grid"
    );
    Some(Table::from_rows(rows))
}

/// Sorted, de-duplicated boundary coordinates.
///
/// Coordinates are compared exactly; two rules 0.01 apart yield two
/// boundaries and a sliver of cells between them.
pub fn boundary_coords(coords: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut coords: Vec<f64> = coords.into_iter().collect();
    coords.sort_by(f64::total_cmp);
    coords.dedup();
    coords
}

/// Build the cell grid spanned by adjacent boundary pairs.
///
/// The grid has `ys.len() - 1` rows of `xs.len() - 1` cells each (empty when
/// either axis has fewer than two boundaries).
pub fn build_grid(xs: &[f64], ys: &[f64]) -> Vec<Vec<CellBounds>> {
    ys.windows(2)
        .map(|y| {
            xs.windows(2)
                .map(|x| CellBounds::new(x[0], y[0], x[1], y[1]))
                .collect()
        })
        .collect()
}

/// Fill each cell with the text of the words it contains.
///
/// Cells are visited in row-major order and words in the given order. A word
/// belongs to the first cell containing its `(x0, top)` point; once placed it
/// is not tested against later cells, even if it lies on a shared boundary.
/// Cell text is the space-joined word text, trimmed.
pub fn assign_words(grid: &[Vec<CellBounds>], words: &[Word]) -> Vec<Vec<String>> {
    let mut placed = vec![false; words.len()];
    let mut rows = Vec::with_capacity(grid.len());

    for grid_row in grid {
        let mut row = Vec::with_capacity(grid_row.len());
        for cell in grid_row {
            let mut parts: Vec<&str> = Vec::new();
            for (word, done) in words.iter().zip(placed.iter_mut()) {
                if !*done && cell.contains(word.bbox.x0, word.bbox.top) {
                    *done = true;
                    parts.push(&word.text);
                }
            }
            row.push(parts.join(" ").trim().to_string());
        }
        rows.push(row);
    }

    rows
}
