/// Document writer implementation for DOCX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::package::DocxWriter;
use super::paragraph::MutableParagraph;
use super::properties::{AppProperties, DocumentProperties};
use super::section::SectionProperties;
use super::style::{DocumentDefaults, MutableStyle};
use super::table::MutableTable;

/// Deepest heading level with a built-in style.
pub const MAX_HEADING_LEVEL: u8 = 3;

/// A mutable Word document for writing.
///
/// Holds the body content together with everything needed to serialize the
/// package: page setup, style defaults and metadata.
#[derive(Debug)]
pub struct MutableDocument {
    /// Document body content (paragraphs, tables) in document order
    body: DocumentBody,
    /// Section properties (page size, margins)
    section: SectionProperties,
    /// Run defaults written to `w:docDefaults`
    defaults: DocumentDefaults,
    /// Core properties (`docProps/core.xml`)
    properties: DocumentProperties,
    /// Extended properties (`docProps/app.xml`)
    app_properties: AppProperties,
}

impl MutableDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            body: DocumentBody::new(),
            section: SectionProperties::default(),
            defaults: DocumentDefaults::default(),
            properties: DocumentProperties::default(),
            app_properties: AppProperties::default(),
        }
    }

    pub fn set_section(&mut self, section: SectionProperties) {
        self.section = section;
    }

    /// Set the default run formatting for the whole document.
    pub fn set_defaults(&mut self, defaults: DocumentDefaults) {
        self.defaults = defaults;
    }

    pub fn defaults(&self) -> &DocumentDefaults {
        &self.defaults
    }

    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn app_properties(&self) -> &AppProperties {
        &self.app_properties
    }

    /// Add a new paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.add_paragraph()
    }

    /// Add a paragraph with text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Add a heading paragraph (levels 1 to 3).
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut MutableParagraph> {
        if !(1..=MAX_HEADING_LEVEL).contains(&level) {
            return Err(OoxmlError::InvalidFormat(format!(
                "Heading level must be 1-{}, got {}",
                MAX_HEADING_LEVEL, level
            )));
        }
        let para = self.add_paragraph();
        para.set_style(&MutableStyle::heading_style_id(level));
        para.add_run_with_text(text);
        Ok(para)
    }

    /// Add a table with specified rows and columns.
    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut MutableTable {
        self.body.add_table(rows, cols)
    }

    /// Add a page break.
    pub fn add_page_break(&mut self) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run().add_page_break();
        para
    }

    /// Get the number of paragraphs in the document body.
    pub fn paragraph_count(&self) -> usize {
        self.body.paragraph_count()
    }

    /// Get the number of tables in the document body.
    pub fn table_count(&self) -> usize {
        self.body.table_count()
    }

    /// Get a paragraph by index.
    pub fn paragraph(&mut self, index: usize) -> Option<&mut MutableParagraph> {
        self.body.paragraph(index)
    }

    /// Get a table by index.
    pub fn table(&mut self, index: usize) -> Option<&mut MutableTable> {
        self.body.table(index)
    }

    /// Styles referenced by the body.
    pub(crate) fn styles(&self) -> Vec<MutableStyle> {
        let mut styles = vec![MutableStyle::normal()];
        styles.extend((1..=MAX_HEADING_LEVEL).map(MutableStyle::heading));
        styles
    }

    /// Serialize the main document part (`word/document.xml`).
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(64 * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespace::WML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        self.body.to_xml(&mut xml)?;
        // sectPr must be the last child of the body
        self.section.to_xml(&mut xml)?;
        xml.push_str("</w:body></w:document>");
        Ok(xml)
    }

    /// Serialize the whole package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        DocxWriter::new(self).to_bytes()
    }

    /// Save the document to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        DocxWriter::new(self).save(path)
    }
}

impl Default for MutableDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// The document body containing all content elements.
#[derive(Debug)]
pub(crate) struct DocumentBody {
    /// Content elements in document order
    pub(crate) elements: Vec<BodyElement>,
}

impl DocumentBody {
    fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.elements
            .push(BodyElement::Paragraph(MutableParagraph::new()));
        match self.elements.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    fn add_table(&mut self, rows: usize, cols: usize) -> &mut MutableTable {
        self.elements
            .push(BodyElement::Table(MutableTable::new(rows, cols)));
        match self.elements.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    fn paragraph_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Paragraph(_)))
            .count()
    }

    fn table_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Table(_)))
            .count()
    }

    fn paragraph(&mut self, index: usize) -> Option<&mut MutableParagraph> {
        self.elements
            .iter_mut()
            .filter_map(|elem| match elem {
                BodyElement::Paragraph(p) => Some(p),
                BodyElement::Table(_) => None,
            })
            .nth(index)
    }

    fn table(&mut self, index: usize) -> Option<&mut MutableTable> {
        self.elements
            .iter_mut()
            .filter_map(|elem| match elem {
                BodyElement::Table(t) => Some(t),
                BodyElement::Paragraph(_) => None,
            })
            .nth(index)
    }

    /// Writes `<w:body>` and its content; the caller closes the element.
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:body>");

        for element in &self.elements {
            match element {
                BodyElement::Paragraph(p) => p.to_xml(xml)?,
                BodyElement::Table(t) => t.to_xml(xml)?,
            }
        }

        Ok(())
    }
}

/// A body element (paragraph or table).
#[derive(Debug)]
pub(crate) enum BodyElement {
    Paragraph(MutableParagraph),
    Table(MutableTable),
}
