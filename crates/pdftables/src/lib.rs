//! pdftables: recover tables from page descriptions and export them.
//!
//! This is the public API facade crate. It re-exports the detection types
//! from pdftables-core, loads page descriptions into a [`Document`], and
//! writes an [`ExtractionResult`] as an xlsx workbook, CSV or JSON.
//!
//! # Architecture
//!
//! - **pdftables-core**: page data types and the two table detectors
//! - **pdftables** (this crate): document loading, export and the
//!   optional rayon-backed parallel extraction (`parallel` feature)
//!
//! # Example
//!
//! ```no_run
//! use pdftables::{Document, OutputFormat, TableSettings, write_tables};
//!
//! let doc = Document::open_file("report.json")?;
//! let tables = doc.extract_tables(&TableSettings::default());
//! write_tables(&tables, "report.xlsx", OutputFormat::Xlsx)?;
//! # Ok::<(), pdftables::DocumentError>(())
//! ```

mod document;
mod error;
mod export;

pub use document::Document;
pub use error::{DocumentError, Result};
pub use export::{OutputFormat, column_letters, write_csv, write_json, write_tables, write_xlsx};

pub use pdftables_core;
pub use pdftables_core::{
    BBox, Char, Detector, ExtractionResult, Line, Page, PageTable, Table, TableSettings, Word,
    WordOptions,
};
