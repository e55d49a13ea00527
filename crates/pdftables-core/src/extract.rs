//! Page-level orchestration and result aggregation.

use tracing::debug;

use crate::lattice::detect_bordered;
use crate::page::Page;
use crate::stream::detect_borderless;
use crate::table::{Table, TableSettings};

/// Which detector produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Detector {
    /// Grid built from ruling lines.
    Bordered,
    /// Rows and columns inferred from word alignment.
    Borderless,
}

/// A table tagged with the page it was found on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageTable {
    /// Page number (1-based).
    pub page: usize,
    pub detector: Detector,
    pub data: Table,
}

impl PageTable {
    pub fn new(page: usize, detector: Detector, data: Table) -> Self {
        Self {
            page,
            detector,
            data,
        }
    }

    /// Worksheet name for this table at 1-based position `index` in the output.
    pub fn sheet_name(&self, index: usize) -> String {
        format!("Page_{}_Table_{}", self.page, index)
    }
}

/// All tables extracted from a document, in page order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractionResult {
    entries: Vec<PageTable>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PageTable] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageTable> {
        self.entries.iter()
    }

    /// Entries paired with their worksheet names.
    pub fn named_entries(&self) -> impl Iterator<Item = (String, &PageTable)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.sheet_name(i + 1), entry))
    }

    pub fn into_entries(self) -> Vec<PageTable> {
        self.entries
    }
}

/// Collects entries from any order, restoring page order.
///
/// The sort is stable, so tables from the same page keep their relative
/// order.
impl FromIterator<PageTable> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = PageTable>>(iter: I) -> Self {
        let mut entries: Vec<PageTable> = iter.into_iter().collect();
        entries.sort_by_key(|entry| entry.page);
        Self { entries }
    }
}

impl IntoIterator for ExtractionResult {
    type Item = PageTable;
    type IntoIter = std::vec::IntoIter<PageTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExtractionResult {
    type Item = &'a PageTable;
    type IntoIter = std::slice::Iter<'a, PageTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Run the detectors on one page: bordered first, borderless as fallback.
pub fn detect_page(page: &Page, settings: &TableSettings) -> Option<PageTable> {
    let page_number = page.page_number();

    if let Some(table) = detect_bordered(page, settings) {
        debug!(page = page_number, detector = "bordered", "table found");
        return Some(PageTable::new(page_number, Detector::Bordered, table));
    }

    match detect_borderless(page, settings) {
        Some(table) => {
            debug!(page = page_number, detector = "borderless", "table found");
            Some(PageTable::new(page_number, Detector::Borderless, table))
        }
        None => {
            debug!(page = page_number, "no table found");
            None
        }
    }
}

/// Extract tables from pages, returned in ascending page number order.
pub fn extract_tables<'a, I>(pages: I, settings: &TableSettings) -> ExtractionResult
where
    I: IntoIterator<Item = &'a Page>,
{
    pages
        .into_iter()
        .filter_map(|page| detect_page(page, settings))
        .collect()
}
