//! pdftables-core: table-structure inference from positioned page primitives.
//!
//! This crate provides the page data types (Line, Char, Word, Page) and the
//! two table detectors used by pdftables:
//!
//! - [`lattice`]: builds a cell grid from ruling lines (bordered tables)
//! - [`stream`]: infers rows and columns from word alignment (borderless tables)
//!
//! [`extract_tables`] runs the bordered detector on each page and falls back
//! to the borderless one when no grid is found. The crate performs no I/O.

pub mod extract;
pub mod geometry;
pub mod lattice;
pub mod page;
pub mod shapes;
pub mod stream;
pub mod table;
pub mod text;
pub mod words;

pub use extract::{Detector, ExtractionResult, PageTable, detect_page, extract_tables};
pub use geometry::{BBox, CellBounds};
pub use lattice::detect_bordered;
pub use page::Page;
pub use shapes::{DEFAULT_LINE_THICKNESS, Line};
pub use stream::{ColumnAnchor, ColumnAnchors, detect_borderless};
pub use table::{Table, TableSettings};
pub use text::Char;
pub use words::{Word, WordExtractor, WordOptions};
