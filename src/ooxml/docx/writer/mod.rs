//! Mutable document writer components for DOCX.
//!
//! This module provides the writer API for creating Word documents.

pub mod doc;
pub mod package;
pub mod paragraph;
pub mod properties;
pub mod run;
pub mod section;
pub mod style;
pub mod table;

// Re-export main document type
pub use doc::{MAX_HEADING_LEVEL, MutableDocument};

// Re-export package writer
pub use package::DocxWriter;

// Re-export section types
pub use section::SectionProperties;

// Re-export paragraph types
pub use paragraph::MutableParagraph;

// Re-export run types
pub use run::{MutableRun, RunContent};

// Re-export table types
pub use table::{CellProperties, MutableCell, MutableRow, MutableTable, TableBorder, TableBorders};

// Re-export style types
pub use style::{DocumentDefaults, MutableStyle, StyleType, generate_styles_xml};

// Re-export metadata types
pub use properties::{AppProperties, DocumentProperties};

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
