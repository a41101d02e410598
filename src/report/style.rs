//! Declarative text styling for report primitives.

use crate::ooxml::docx::format::points_to_half_points;
use crate::ooxml::docx::writer::{MutableParagraph, MutableRun};
use crate::ooxml::docx::{ParagraphAlignment, RgbColor};

use super::theme;

/// Horizontal alignment of a paragraph or table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

impl From<Alignment> for ParagraphAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => ParagraphAlignment::Left,
            Alignment::Center => ParagraphAlignment::Center,
        }
    }
}

/// Size, weight, alignment and color of a run of text.
///
/// Text is set in the theme font unless `monospace` is set, in which case
/// the Latin slots use the code font and East Asian glyphs fall back to the
/// document default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub alignment: Alignment,
    pub color: Option<RgbColor>,
    pub monospace: bool,
}

impl TextStyle {
    pub const fn new(size: f64) -> Self {
        Self {
            size,
            bold: false,
            alignment: Alignment::Left,
            color: None,
            monospace: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub const fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    pub const fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    /// Apply the paragraph-level part of the style (alignment).
    pub fn apply_paragraph(&self, paragraph: &mut MutableParagraph) {
        if self.alignment != Alignment::Left {
            paragraph.set_alignment(self.alignment.into());
        }
    }

    /// Apply the character-level part of the style to a run.
    pub fn apply_run(&self, run: &mut MutableRun) {
        run.font_size(points_to_half_points(self.size));
        if self.bold {
            run.bold(true);
        }
        if let Some(color) = self.color {
            run.color(color);
        }
        if self.monospace {
            run.font_name(theme::CODE_FONT);
        } else {
            apply_theme_font(run);
        }
    }

    /// Style `paragraph` and every run it already holds.
    pub fn apply(&self, paragraph: &mut MutableParagraph) {
        self.apply_paragraph(paragraph);
        paragraph.runs_mut().for_each(|run| self.apply_run(run));
    }

    /// Add a run holding `text` to `paragraph`, styling both.
    pub fn write(&self, paragraph: &mut MutableParagraph, text: &str) {
        self.apply_paragraph(paragraph);
        self.apply_run(paragraph.add_run_with_text(text));
    }
}

/// Set the theme font in the Latin and East Asian slots of a run.
pub fn apply_theme_font(run: &mut MutableRun) {
    run.font_name(theme::FONT_FAMILY)
        .east_asia_font(theme::FONT_FAMILY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::writer::MutableDocument;

    fn render(style: TextStyle, text: &str) -> String {
        let mut doc = MutableDocument::new();
        style.write(doc.add_paragraph(), text);
        doc.to_xml().unwrap()
    }

    #[test]
    fn test_title_style() {
        let xml = render(theme::TITLE, "FinOps 인프라 코드 산출물");
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("<w:sz w:val=\"56\"/>"));
        assert!(xml.contains("<w:color w:val=\"2E4057\"/>"));
        assert!(xml.contains("w:eastAsia=\"맑은 고딕\""));
    }

    #[test]
    fn test_left_alignment_is_implicit() {
        let xml = render(theme::BODY, "본문");
        assert!(!xml.contains("<w:jc"));
        assert!(!xml.contains("<w:b/>"));
    }

    #[test]
    fn test_monospace_style() {
        let xml = render(theme::CODE_LINE, "  cidr_block = var.vpc_cidr");
        assert!(xml.contains("<w:rFonts w:ascii=\"Consolas\" w:hAnsi=\"Consolas\"/>"));
        assert!(xml.contains("<w:sz w:val=\"15\"/>"));
    }
}
