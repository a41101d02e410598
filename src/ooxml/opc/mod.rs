//! Open Packaging Conventions (OPC), write side.
//!
//! This module provides the package structure used to emit Office Open XML
//! documents:
//!
//! - Part names and relative references ([`PackURI`])
//! - Parts and their relationships
//! - `[Content_Types].xml` generation
//! - Deterministic ZIP-based physical packaging
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use error::OpcError;
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use rel::{Relationship, Relationships};
