//! Error types for report generation.

use crate::ooxml::OoxmlError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report generation.
pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    /// A source file to embed could not be read
    #[error("cannot read source file {}", path.display())]
    Source {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A table row does not have as many cells as the header
    #[error("table '{table}': row {row} has {found} cells, expected {expected}")]
    MalformedTable {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The finished document could not be written
    #[error("cannot write document to {}", path.display())]
    Persist { path: PathBuf, source: OoxmlError },

    /// Document construction error
    #[error("document error: {0}")]
    Ooxml(#[from] OoxmlError),
}
