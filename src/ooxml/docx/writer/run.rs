/// Run types and implementation for DOCX documents.
use crate::ooxml::docx::format::RgbColor;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::escape_xml;

/// Run content type.
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    /// Plain text
    Text(String),
    /// Page break
    PageBreak,
}

/// A mutable run.
///
/// Runs contain text and character formatting.
#[derive(Debug)]
pub struct MutableRun {
    /// Run content
    pub(crate) content: RunContent,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self {
            content: RunContent::Text(String::new()),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.content = RunContent::Text(text.to_string());
    }

    /// Get the text content.
    pub fn get_text(&self) -> &str {
        match &self.content {
            RunContent::Text(s) => s,
            RunContent::PageBreak => "",
        }
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    /// Set the font used for Latin text (`w:ascii` and `w:hAnsi`).
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    /// Set the font used for East Asian text (`w:eastAsia`).
    pub fn east_asia_font(&mut self, name: &str) -> &mut Self {
        self.properties.east_asia_font = Some(name.to_string());
        self
    }

    /// Set the text color.
    pub fn color(&mut self, color: RgbColor) -> &mut Self {
        self.properties.color = Some(color);
        self
    }

    /// Turn this run into a page break.
    pub fn add_page_break(&mut self) -> &mut Self {
        self.content = RunContent::PageBreak;
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        if self.properties.has_properties() {
            self.properties.to_xml(xml)?;
        }

        match &self.content {
            RunContent::Text(text) if !text.is_empty() => {
                write!(
                    xml,
                    "<w:t xml:space=\"preserve\">{}</w:t>",
                    escape_xml(text)
                )?;
            },
            RunContent::PageBreak => {
                xml.push_str("<w:br w:type=\"page\"/>");
            },
            _ => {},
        }

        xml.push_str("</w:r>");

        Ok(())
    }
}

/// Run properties.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct RunProperties {
    pub(crate) bold: Option<bool>,
    pub(crate) font_size: Option<u32>,
    pub(crate) font_name: Option<String>,
    pub(crate) east_asia_font: Option<String>,
    pub(crate) color: Option<RgbColor>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold.is_some()
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.east_asia_font.is_some()
            || self.color.is_some()
    }

    /// Write `<w:rPr>` in schema order (fonts, bold, color, size).
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:rPr>");

        if self.font_name.is_some() || self.east_asia_font.is_some() {
            xml.push_str("<w:rFonts");
            if let Some(ref name) = self.font_name {
                let name = escape_xml(name);
                write!(xml, " w:ascii=\"{}\" w:hAnsi=\"{}\"", name, name)?;
            }
            if let Some(ref name) = self.east_asia_font {
                write!(xml, " w:eastAsia=\"{}\"", escape_xml(name))?;
            }
            xml.push_str("/>");
        }

        if let Some(bold) = self.bold {
            if bold {
                xml.push_str("<w:b/><w:bCs/>");
            } else {
                xml.push_str("<w:b w:val=\"0\"/>");
            }
        }

        if let Some(color) = self.color {
            write!(xml, "<w:color w:val=\"{}\"/>", color)?;
        }

        if let Some(size) = self.font_size {
            write!(xml, "<w:sz w:val=\"{}\"/><w:szCs w:val=\"{}\"/>", size, size)?;
        }

        xml.push_str("</w:rPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run() {
        let mut run = MutableRun::new();
        run.set_text("a < b & c");
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            "<w:r><w:t xml:space=\"preserve\">a &lt; b &amp; c</w:t></w:r>"
        );
    }

    #[test]
    fn test_formatted_run() {
        let mut run = MutableRun::new();
        run.set_text("제목");
        run.bold(true)
            .font_size(56)
            .font_name("맑은 고딕")
            .east_asia_font("맑은 고딕")
            .color(RgbColor(0x2E, 0x40, 0x57));

        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(
            "<w:r><w:rPr><w:rFonts w:ascii=\"맑은 고딕\" w:hAnsi=\"맑은 고딕\" w:eastAsia=\"맑은 고딕\"/>"
        ));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("<w:color w:val=\"2E4057\"/>"));
        assert!(xml.contains("<w:sz w:val=\"56\"/>"));
        assert!(xml.ends_with("<w:t xml:space=\"preserve\">제목</w:t></w:r>"));
    }

    #[test]
    fn test_page_break_run() {
        let mut run = MutableRun::new();
        run.add_page_break();
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert_eq!(xml, "<w:r><w:br w:type=\"page\"/></w:r>");
        assert_eq!(run.get_text(), "");
    }
}
