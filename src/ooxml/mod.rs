//! Office Open XML (OOXML) writer.
//!
//! Two layers, following the structure of python-docx:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships,
//!    content types)
//! 2. **WordprocessingML** (`docx`): an in-memory, mutable Word document that
//!    serializes itself into an OPC package
//!
//! # Example
//!
//! ```rust,no_run
//! use finops_docgen::ooxml::docx::writer::MutableDocument;
//!
//! let mut doc = MutableDocument::new();
//! doc.add_heading("Overview", 1)?;
//! doc.add_paragraph_with_text("Hello, World!");
//! doc.save("hello.docx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
