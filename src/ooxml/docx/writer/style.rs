/// Style writer support for DOCX documents.
///
/// Produces `word/styles.xml`: document defaults plus the paragraph styles
/// referenced from the body.
use crate::ooxml::docx::format::{RgbColor, points_to_half_points};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::escape_xml;

/// Kind of style definition (`w:type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleType {
    Paragraph,
    Character,
}

impl StyleType {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
        }
    }
}

/// Run formatting applied to every run unless overridden (`w:docDefaults`).
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDefaults {
    /// Latin font (`w:ascii` / `w:hAnsi`)
    pub font_name: String,
    /// East Asian font (`w:eastAsia`)
    pub east_asia_font: String,
    /// Font size in half-points
    pub font_size: u32,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            east_asia_font: "Calibri".to_string(),
            font_size: 22,
        }
    }
}

impl DocumentDefaults {
    /// Defaults with one font family for every script.
    pub fn new(font_name: &str, size_points: f64) -> Self {
        Self {
            font_name: font_name.to_string(),
            east_asia_font: font_name.to_string(),
            font_size: points_to_half_points(size_points),
        }
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
        let font = escape_xml(&self.font_name);
        write!(
            xml,
            r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:eastAsia="{}" w:cs="{}"/>"#,
            font,
            font,
            escape_xml(&self.east_asia_font),
            font
        )?;
        write!(
            xml,
            r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#,
            self.font_size, self.font_size
        )?;
        xml.push_str(r#"<w:lang w:val="en-US" w:eastAsia="ko-KR"/>"#);
        xml.push_str("</w:rPr></w:rPrDefault>");
        xml.push_str(r#"<w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#);
        xml.push_str("</w:docDefaults>");
        Ok(())
    }
}

/// A mutable style definition for writing.
///
/// # Examples
///
/// ```rust
/// use finops_docgen::ooxml::docx::writer::{MutableStyle, StyleType};
///
/// let mut style = MutableStyle::new("Caption", "Caption", StyleType::Paragraph);
/// style.set_based_on(Some("Normal".to_string()));
/// style.set_font_size(Some(18)); // 9pt (half-points)
/// style.set_bold(true);
/// ```
#[derive(Debug, Clone)]
pub struct MutableStyle {
    /// Style identifier (e.g., "Heading1")
    style_id: String,
    /// UI-visible name (e.g., "heading 1")
    name: String,
    style_type: StyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    based_on: Option<String>,
    /// Style applied to the following paragraph
    next: Option<String>,
    priority: Option<i32>,
    is_quick_style: bool,
    /// Keep with the next paragraph
    keep_next: bool,
    /// Outline level (0-based) shown in the navigation pane
    outline_level: Option<u8>,
    font_size: Option<u32>,
    bold: bool,
    color: Option<RgbColor>,
    /// Space before paragraph in twips
    space_before: Option<u32>,
    /// Space after paragraph in twips
    space_after: Option<u32>,
}

impl MutableStyle {
    /// Create a new style with the given ID, name, and type.
    pub fn new(style_id: impl Into<String>, name: impl Into<String>, style_type: StyleType) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            based_on: None,
            next: None,
            priority: None,
            is_quick_style: false,
            keep_next: false,
            outline_level: None,
            font_size: None,
            bold: false,
            color: None,
            space_before: None,
            space_after: None,
        }
    }

    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Set the base style ID.
    ///
    /// The style inherits formatting from the base style.
    pub fn set_based_on(&mut self, based_on: Option<String>) {
        self.based_on = based_on;
    }

    #[inline]
    pub fn based_on(&self) -> Option<&str> {
        self.based_on.as_deref()
    }

    pub fn set_next(&mut self, next: Option<String>) {
        self.next = next;
    }

    /// Set the UI priority (lower values appear first).
    pub fn set_priority(&mut self, priority: Option<i32>) {
        self.priority = priority;
    }

    pub fn set_quick_style(&mut self, is_quick_style: bool) {
        self.is_quick_style = is_quick_style;
    }

    pub fn set_keep_next(&mut self, keep_next: bool) {
        self.keep_next = keep_next;
    }

    pub fn set_outline_level(&mut self, level: Option<u8>) {
        self.outline_level = level;
    }

    /// Set font size in half-points.
    pub fn set_font_size(&mut self, font_size: Option<u32>) {
        self.font_size = font_size;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_color(&mut self, color: Option<RgbColor>) {
        self.color = color;
    }

    /// Set space before in twips.
    pub fn set_space_before(&mut self, space_before: Option<u32>) {
        self.space_before = space_before;
    }

    /// Set space after in twips.
    pub fn set_space_after(&mut self, space_after: Option<u32>) {
        self.space_after = space_after;
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.to_xml(),
            escape_xml(&self.style_id)
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;

        if let Some(ref based_on) = self.based_on {
            write!(xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))?;
        }
        if let Some(ref next) = self.next {
            write!(xml, r#"<w:next w:val="{}"/>"#, escape_xml(next))?;
        }
        if let Some(priority) = self.priority {
            write!(xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.style_type == StyleType::Paragraph
            && (self.keep_next
                || self.outline_level.is_some()
                || self.space_before.is_some()
                || self.space_after.is_some())
        {
            xml.push_str("<w:pPr>");
            if self.keep_next {
                xml.push_str("<w:keepNext/><w:keepLines/>");
            }
            if self.space_before.is_some() || self.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.space_before {
                    write!(xml, r#" w:before="{}""#, before)?;
                }
                if let Some(after) = self.space_after {
                    write!(xml, r#" w:after="{}""#, after)?;
                }
                xml.push_str("/>");
            }
            if let Some(level) = self.outline_level {
                write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level)?;
            }
            xml.push_str("</w:pPr>");
        }

        if self.bold || self.color.is_some() || self.font_size.is_some() {
            xml.push_str("<w:rPr>");
            if self.bold {
                xml.push_str("<w:b/><w:bCs/>");
            }
            if let Some(color) = self.color {
                write!(xml, r#"<w:color w:val="{}"/>"#, color)?;
            }
            if let Some(size) = self.font_size {
                write!(xml, r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#, size, size)?;
            }
            xml.push_str("</w:rPr>");
        }

        xml.push_str("</w:style>");
        Ok(())
    }

    /// Create the "Normal" paragraph style (base style).
    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal", StyleType::Paragraph);
        style.set_default(true);
        style.set_quick_style(true);
        style
    }

    /// Style ID used for a heading level.
    pub fn heading_style_id(level: u8) -> String {
        format!("Heading{}", level)
    }

    /// Create a "heading N" style for levels 1 to 3.
    pub fn heading(level: u8) -> Self {
        let (size_points, before, color) = match level {
            1 => (14.0, 480, RgbColor(0x36, 0x5F, 0x91)),
            2 => (13.0, 200, RgbColor(0x4F, 0x81, 0xBD)),
            _ => (11.0, 200, RgbColor(0x4F, 0x81, 0xBD)),
        };
        let mut style = Self::new(
            Self::heading_style_id(level),
            format!("heading {}", level),
            StyleType::Paragraph,
        );
        style.set_based_on(Some("Normal".to_string()));
        style.set_next(Some("Normal".to_string()));
        style.set_priority(Some(9));
        style.set_quick_style(true);
        style.set_keep_next(true);
        style.set_outline_level(Some(level.saturating_sub(1)));
        style.set_space_before(Some(before));
        style.set_space_after(Some(0));
        style.set_font_size(Some(points_to_half_points(size_points)));
        style.set_bold(true);
        style.set_color(Some(color));
        style
    }
}

/// Generate a complete styles.xml document.
pub fn generate_styles_xml(defaults: &DocumentDefaults, styles: &[MutableStyle]) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );

    defaults.to_xml(&mut xml)?;
    for style in styles {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_styles() {
        let h1 = MutableStyle::heading(1);
        assert_eq!(h1.style_id(), "Heading1");
        assert_eq!(h1.based_on(), Some("Normal"));

        let mut xml = String::new();
        h1.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<w:outlineLvl w:val="0"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="28"/>"#));
        assert!(xml.contains(r#"<w:color w:val="365F91"/>"#));

        assert_eq!(MutableStyle::heading(3).style_id(), "Heading3");
    }

    #[test]
    fn test_normal_style() {
        let normal = MutableStyle::normal();
        assert!(normal.is_default());
        let mut xml = String::new();
        normal.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1"><w:name w:val="Normal"/><w:qFormat/></w:style>"#
        );
    }

    #[test]
    fn test_generate_styles_xml_with_east_asian_defaults() {
        let defaults = DocumentDefaults::new("맑은 고딕", 10.0);
        let xml = generate_styles_xml(&defaults, &[MutableStyle::normal()]).unwrap();

        assert!(xml.starts_with("<?xml version"));
        assert!(xml.contains(r#"w:ascii="맑은 고딕""#));
        assert!(xml.contains(r#"w:eastAsia="맑은 고딕""#));
        assert!(xml.contains(r#"<w:sz w:val="20"/>"#));
        assert!(xml.ends_with("</w:styles>"));
    }

    #[test]
    fn test_xml_escaping() {
        let style = MutableStyle::new("Test<&>", "Name\"'", StyleType::Character);
        let mut xml = String::new();
        style.to_xml(&mut xml).unwrap();
        assert!(xml.contains("Test&lt;&amp;&gt;"));
        assert!(xml.contains("Name&quot;&apos;"));
    }
}
