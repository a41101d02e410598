//! Fixed visual theme of the report.

use super::style::{Alignment, TextStyle};
use crate::ooxml::docx::RgbColor;

/// Font family for all prose, headings and tables (Latin and East Asian slots).
pub const FONT_FAMILY: &str = "맑은 고딕";
/// Monospace font for code block lines.
pub const CODE_FONT: &str = "Consolas";

/// Header fills, titles.
pub const PRIMARY: RgbColor = RgbColor(0x2E, 0x40, 0x57);
pub const SUBTITLE_GRAY: RgbColor = RgbColor(0x66, 0x66, 0x66);
pub const HEADER_TEXT: RgbColor = RgbColor::WHITE;
pub const CODE_FILL: RgbColor = RgbColor(0xF5, 0xF5, 0xF5);
pub const CODE_BORDER: RgbColor = RgbColor(0xCC, 0xCC, 0xCC);
/// Code block border width in eighths of a point.
pub const CODE_BORDER_SIZE: u32 = 4;

/// Body text size in points, also the document default.
pub const BODY_SIZE: f64 = 10.0;
/// Spacing of code lines in points (exact).
pub const CODE_LINE_SPACING: f64 = 11.0;

/// A4 portrait, in centimetres.
pub const PAGE_WIDTH_CM: f64 = 21.0;
pub const PAGE_HEIGHT_CM: f64 = 29.7;
pub const PAGE_MARGIN_CM: f64 = 2.54;

pub const TITLE: TextStyle = TextStyle::new(28.0)
    .bold()
    .align(Alignment::Center)
    .color(PRIMARY);
pub const SUBTITLE: TextStyle = TextStyle::new(16.0)
    .align(Alignment::Center)
    .color(SUBTITLE_GRAY);
pub const TOC_ITEM: TextStyle = TextStyle::new(BODY_SIZE);
pub const BODY: TextStyle = TextStyle::new(BODY_SIZE);
pub const LABEL: TextStyle = TextStyle::new(10.0).bold();
pub const TOTAL: TextStyle = TextStyle::new(11.0).bold();
pub const NOTE: TextStyle = TextStyle::new(9.0);

pub const TABLE_HEADER: TextStyle = TextStyle::new(9.0)
    .bold()
    .align(Alignment::Center)
    .color(HEADER_TEXT);
pub const TABLE_CELL: TextStyle = TextStyle::new(9.0);
pub const INFO_LABEL: TextStyle = TextStyle::new(10.0)
    .bold()
    .align(Alignment::Center)
    .color(HEADER_TEXT);
pub const INFO_VALUE: TextStyle = TextStyle::new(10.0).align(Alignment::Center);

pub const CODE_TITLE: TextStyle = TextStyle::new(9.0).bold().color(PRIMARY);
pub const CODE_LINE: TextStyle = TextStyle::new(7.5).monospace();
