//! Page-description documents: loading and table extraction.
//!
//! A document is a JSON object with a `pages` array. Each page lists its
//! ruling `lines` and its text as `chars` or pre-tokenized `words`; every
//! object carries `x0`, `top`, `x1` and `bottom` in top-left origin points.
//!
//! ```json
//! {"pages": [{"width": 612, "height": 792,
//!             "lines": [{"x0": 0, "top": 10, "x1": 200, "bottom": 10}],
//!             "words": [{"text": "Name", "x0": 5, "top": 12, "x1": 30, "bottom": 20}]}]}
//! ```

use std::io::Read;
use std::path::Path;

use pdftables_core::{
    BBox, Char, ExtractionResult, Line, Page, TableSettings, Word, extract_tables,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{DocumentError, Result};

#[derive(Debug, Deserialize)]
struct RawDocument {
    pages: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    lines: Vec<RawRect>,
    #[serde(default)]
    chars: Vec<RawText>,
    #[serde(default)]
    words: Vec<RawText>,
}

#[derive(Debug, Deserialize)]
struct RawRect {
    x0: f64,
    top: f64,
    x1: f64,
    bottom: f64,
}

#[derive(Debug, Deserialize)]
struct RawText {
    text: String,
    #[serde(flatten)]
    rect: RawRect,
}

impl RawRect {
    fn bbox(&self) -> BBox {
        BBox::new(self.x0, self.top, self.x1, self.bottom)
    }
}

impl RawPage {
    /// Pages with chars group them into words; `words` is then ignored.
    fn into_page(self, page_number: usize) -> Page {
        let lines = self
            .lines
            .iter()
            .map(|r| Line::new(r.x0, r.top, r.x1, r.bottom))
            .collect();

        let page = if self.chars.is_empty() {
            let words = self
                .words
                .into_iter()
                .map(|w| Word::new(w.text, w.rect.bbox()))
                .collect();
            Page::new(page_number, lines, words)
        } else {
            let chars = self
                .chars
                .into_iter()
                .map(|c| Char::new(c.text, c.rect.bbox()))
                .collect();
            Page::from_chars(page_number, lines, chars)
        };

        match (self.width, self.height) {
            (Some(width), Some(height)) => page.with_size(width, height),
            _ => page,
        }
    }
}

/// A loaded document: an ordered list of pages numbered from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Open a page-description file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] if the file cannot be read,
    /// [`DocumentError::Json`] if it is not a valid page description, and
    /// [`DocumentError::InvalidGeometry`] for non-finite coordinates.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let document = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            pages = document.page_count(),
            "loaded page description"
        );
        Ok(document)
    }

    /// Parse a page description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a page description from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let pages = raw
            .pages
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.into_page(i + 1))
            .collect();
        Self::from_pages(pages)
    }

    /// Build a document from pages constructed in code.
    ///
    /// Pages keep their own page numbers.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::PageOrder`] unless page numbers start at 1
    /// or above and strictly increase, and
    /// [`DocumentError::InvalidGeometry`] for non-finite coordinates.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self> {
        let mut previous = 0;
        for page in &pages {
            if page.page_number() <= previous {
                return Err(DocumentError::PageOrder {
                    page: page.page_number(),
                    previous,
                });
            }
            previous = page.page_number();
            validate_page(page)?;
        }
        Ok(Self { pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page by 1-based number.
    pub fn page(&self, page_number: usize) -> Option<&Page> {
        self.pages.iter().find(|p| p.page_number() == page_number)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Extract tables from every page, in page order.
    pub fn extract_tables(&self, settings: &TableSettings) -> ExtractionResult {
        let result = extract_tables(&self.pages, settings);
        debug!(
            pages = self.pages.len(),
            tables = result.len(),
            "extraction finished"
        );
        result
    }

    /// Extract tables from the listed pages only (1-based numbers).
    ///
    /// Numbers with no matching page are skipped. Output stays in document
    /// page order whatever the order of `page_numbers`.
    pub fn extract_tables_for(
        &self,
        page_numbers: &[usize],
        settings: &TableSettings,
    ) -> ExtractionResult {
        extract_tables(
            self.pages
                .iter()
                .filter(|p| page_numbers.contains(&p.page_number())),
            settings,
        )
    }

    /// Extract tables with pages processed concurrently using rayon.
    ///
    /// The result is identical to [`Document::extract_tables`].
    #[cfg(feature = "parallel")]
    pub fn extract_tables_parallel(&self, settings: &TableSettings) -> ExtractionResult {
        use rayon::prelude::*;

        self.pages
            .par_iter()
            .filter_map(|page| pdftables_core::detect_page(page, settings))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }
}

fn validate_page(page: &Page) -> Result<()> {
    let invalid = |object, index| DocumentError::InvalidGeometry {
        page: page.page_number(),
        object,
        index,
    };

    if let Some(i) = page.lines().iter().position(|l| !l.bbox().is_finite()) {
        return Err(invalid("line", i));
    }
    if let Some(i) = page.chars().iter().position(|c| !c.bbox.is_finite()) {
        return Err(invalid("char", i));
    }
    if let Some(i) = page.words().iter().position(|w| !w.bbox.is_finite()) {
        return Err(invalid("word", i));
    }
    Ok(())
}
