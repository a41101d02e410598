use crate::ooxml::docx::format::cm_to_twips;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Section properties: portrait page size and margins.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionProperties {
    /// Page width in twips (twentieth of a point, 1440 = 1 inch)
    pub page_width: u32,
    /// Page height in twips
    pub page_height: u32,
    /// Top margin in twips
    pub margin_top: u32,
    /// Bottom margin in twips
    pub margin_bottom: u32,
    /// Left margin in twips
    pub margin_left: u32,
    /// Right margin in twips
    pub margin_right: u32,
    /// Header distance from top in twips
    pub header_distance: u32,
    /// Footer distance from bottom in twips
    pub footer_distance: u32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        // US Letter size: 8.5" x 11" = 12240 x 15840 twips
        Self {
            page_width: 12240,
            page_height: 15840,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            header_distance: 720,
            footer_distance: 720,
        }
    }
}

impl SectionProperties {
    /// Create A4 page size (210mm x 297mm).
    pub fn a4() -> Self {
        Self::page_size_cm(21.0, 29.7)
    }

    /// Portrait page of the given size in centimetres, default margins.
    pub fn page_size_cm(width: f64, height: f64) -> Self {
        Self {
            page_width: cm_to_twips(width),
            page_height: cm_to_twips(height),
            ..Default::default()
        }
    }

    /// Set margins (all in centimetres).
    pub fn margins_cm(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        self.margin_top = cm_to_twips(top);
        self.margin_bottom = cm_to_twips(bottom);
        self.margin_left = cm_to_twips(left);
        self.margin_right = cm_to_twips(right);
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");
        write!(xml, "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>", self.page_width, self.page_height)?;
        write!(
            xml,
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" \
             w:header=\"{}\" w:footer=\"{}\" w:gutter=\"0\"/>",
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
            self.header_distance,
            self.footer_distance
        )?;
        xml.push_str("<w:cols w:space=\"720\"/>");
        xml.push_str("</w:sectPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_with_margins() {
        let section = SectionProperties::a4().margins_cm(2.54, 2.54, 2.54, 2.54);
        assert_eq!(section.page_width, 11906);
        assert_eq!(section.page_height, 16838);
        assert_eq!(section.margin_left, 1440);

        let mut xml = String::new();
        section.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>"));
        assert!(xml.contains("w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\""));
    }

    #[test]
    fn test_default_is_us_letter() {
        let mut xml = String::new();
        SectionProperties::default().to_xml(&mut xml).unwrap();
        assert!(xml.starts_with("<w:sectPr><w:pgSz w:w=\"12240\" w:h=\"15840\"/>"));
        assert!(xml.ends_with("<w:cols w:space=\"720\"/></w:sectPr>"));
    }
}
