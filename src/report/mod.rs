//! FinOps infrastructure report.
//!
//! [`ReportBuilder`] offers the styled primitives the report is made of
//! (headings, data tables, code blocks) on top of the DOCX writer, and
//! [`plan::assemble`] lays out the fixed six-chapter document from the
//! literals in [`content`] and the Terraform files read by [`SourceReader`].

mod builder;
pub mod content;
mod error;
pub mod plan;
mod source;
mod style;
pub mod theme;

pub use builder::{ReportBuilder, TableData};
pub use error::{ReportError, Result};
pub use source::SourceReader;
pub use style::{Alignment, TextStyle};
