//! Error type for loading page descriptions and writing extracted tables.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Table detection itself
//! never fails; every variant here comes from the I/O layers around it.

use thiserror::Error;

/// Error type for document loading and table export.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Error reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed page description, or failure serializing JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A coordinate in the page description is NaN or infinite.
    #[error("page {page}: {object} {index} has a non-finite coordinate")]
    InvalidGeometry {
        /// Page number (1-based).
        page: usize,
        /// Kind of object: "line", "char" or "word".
        object: &'static str,
        /// Position of the object within its array (0-based).
        index: usize,
    },

    /// Page numbers must start at 1 or above and strictly increase.
    #[error("page number {page} follows page {previous}; pages must be numbered from 1 in ascending order")]
    PageOrder {
        /// The offending page number.
        page: usize,
        /// Number of the page before it (0 for the first page).
        previous: usize,
    },

    /// The requested export is not possible (e.g. unknown output format).
    #[error("export error: {0}")]
    Export(String),

    /// Error assembling the xlsx package.
    #[error("xlsx package error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error writing CSV records.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, DocumentError>;
