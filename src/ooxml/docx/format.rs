/// Shared formatting types for the DOCX writer.
use std::fmt;

/// Line spacing options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpacing {
    /// Single line spacing
    Single,
    /// Multiple line spacing (e.g., 1.15)
    Multiple(f64),
    /// Exact spacing in points
    Exact(f64),
    /// At least spacing in points
    AtLeast(f64),
}

impl LineSpacing {
    /// `w:line` value and `w:lineRule` for this spacing.
    pub(crate) fn to_xml(self) -> (u32, &'static str) {
        match self {
            Self::Single => (240, "auto"),
            Self::Multiple(factor) => ((factor * 240.0).round() as u32, "auto"),
            Self::Exact(points) => (points_to_twips(points), "exact"),
            Self::AtLeast(points) => (points_to_twips(points), "atLeast"),
        }
    }
}

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

/// Horizontal placement of a table on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAlignment {
    Left,
    Center,
    Right,
}

impl TableAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Border styles for tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBorderStyle {
    None,
    Single,
    Double,
    Dotted,
    Dashed,
}

impl TableBorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
        }
    }
}

/// A 24-bit RGB color, written as six hex digits (`2E4057`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor(0xFF, 0xFF, 0xFF);
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Points to twentieths of a point (twips).
#[inline]
pub fn points_to_twips(points: f64) -> u32 {
    (points * 20.0).round() as u32
}

/// Points to the half-point unit used by `w:sz`.
#[inline]
pub fn points_to_half_points(points: f64) -> u32 {
    (points * 2.0).round() as u32
}

/// Centimetres to twips (1440 per inch).
#[inline]
pub fn cm_to_twips(cm: f64) -> u32 {
    (cm / 2.54 * 1440.0).round() as u32
}
