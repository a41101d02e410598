/// Paragraph types and implementation for DOCX documents.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use crate::ooxml::docx::format::{LineSpacing, ParagraphAlignment};
use crate::ooxml::docx::format::points_to_twips;

use super::escape_xml;
use super::run::{MutableRun, RunContent};

/// A mutable paragraph in a document.
#[derive(Debug)]
pub struct MutableParagraph {
    /// Runs in this paragraph
    pub(crate) runs: Vec<MutableRun>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    /// Paragraph properties
    pub(crate) properties: ParagraphProperties,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: None,
            properties: ParagraphProperties::default(),
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        let index = self.runs.len();
        self.runs.push(MutableRun::new());
        &mut self.runs[index]
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Iterate mutably over the runs of this paragraph.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut MutableRun> {
        self.runs.iter_mut()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(MutableRun::get_text).collect()
    }

    /// Set the paragraph style.
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    /// Get the paragraph style ID, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Set spacing before this paragraph (in points).
    pub fn set_space_before(&mut self, points: f64) {
        self.properties.space_before = Some(points_to_twips(points));
    }

    /// Set spacing after this paragraph (in points).
    pub fn set_space_after(&mut self, points: f64) {
        self.properties.space_after = Some(points_to_twips(points));
    }

    /// Set line spacing for this paragraph.
    pub fn set_line_spacing(&mut self, spacing: LineSpacing) {
        self.properties.line_spacing = Some(spacing);
    }

    /// Get the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// A paragraph with no visible content.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| match &run.content {
            RunContent::Text(text) => text.is_empty(),
            RunContent::PageBreak => false,
        })
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        if self.style.is_some() || self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))?;
            }

            // w:spacing precedes w:jc in CT_PPr
            if self.properties.has_spacing() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.properties.space_before {
                    write!(xml, " w:before=\"{}\"", before)?;
                }
                if let Some(after) = self.properties.space_after {
                    write!(xml, " w:after=\"{}\"", after)?;
                }
                if let Some(line_spacing) = self.properties.line_spacing {
                    let (line, rule) = line_spacing.to_xml();
                    write!(xml, " w:line=\"{}\" w:lineRule=\"{}\"", line, rule)?;
                }
                xml.push_str("/>");
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");

        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    pub(crate) space_before: Option<u32>,
    pub(crate) space_after: Option<u32>,
    pub(crate) line_spacing: Option<LineSpacing>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some() || self.has_spacing()
    }

    fn has_spacing(&self) -> bool {
        self.space_before.is_some() || self.space_after.is_some() || self.line_spacing.is_some()
    }
}
