/// Table types and implementation for DOCX documents.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use crate::ooxml::docx::format::{RgbColor, TableAlignment, TableBorderStyle};

use super::paragraph::MutableParagraph;

/// Border definition for table or cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBorder {
    /// Border style
    pub style: TableBorderStyle,
    /// Border width in eighths of a point (e.g., 8 = 1pt, 24 = 3pt)
    pub size: u32,
    /// Border color
    pub color: RgbColor,
}

/// Table borders (all sides). Sides left as `None` are not written, so the
/// table keeps the borderless look of the default table style.
#[derive(Debug, Clone, Default)]
pub struct TableBorders {
    pub top: Option<TableBorder>,
    pub left: Option<TableBorder>,
    pub bottom: Option<TableBorder>,
    pub right: Option<TableBorder>,
    pub inside_h: Option<TableBorder>,
    pub inside_v: Option<TableBorder>,
}

impl TableBorders {
    /// Whether no side has a border set.
    pub fn is_empty(&self) -> bool {
        [
            self.top,
            self.left,
            self.bottom,
            self.right,
            self.inside_h,
            self.inside_v,
        ]
        .iter()
        .all(Option::is_none)
    }
}

/// Table properties.
#[derive(Debug, Default)]
pub(crate) struct TableProperties {
    pub(crate) borders: TableBorders,
    pub(crate) width_pct: Option<u32>,
    pub(crate) alignment: Option<TableAlignment>,
}

/// Cell properties.
#[derive(Debug, Default, Clone)]
pub struct CellProperties {
    /// Cell background color
    pub background_color: Option<RgbColor>,
}

/// A mutable table.
#[derive(Debug)]
pub struct MutableTable {
    /// Table rows
    pub(crate) rows: Vec<MutableRow>,
    /// Table properties
    pub(crate) properties: TableProperties,
}

impl MutableTable {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        let mut table = Self {
            rows: Vec::with_capacity(rows),
            properties: TableProperties::default(),
        };
        for _ in 0..rows {
            table.add_row(cols);
        }
        table
    }

    /// Add a new row with specified column count.
    pub fn add_row(&mut self, cols: usize) -> &mut MutableRow {
        let index = self.rows.len();
        self.rows.push(MutableRow::new(cols));
        &mut self.rows[index]
    }

    /// Set table width as percentage of the text area (1-100).
    pub fn set_width_percent(&mut self, percent: u32) {
        // pct widths are expressed in fiftieths of a percent
        self.properties.width_pct = Some(percent.min(100) * 50);
    }

    /// Set the horizontal placement of the table.
    pub fn set_alignment(&mut self, alignment: TableAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Set all table borders at once.
    pub fn set_borders(&mut self, border: TableBorder) {
        self.properties.borders = TableBorders {
            top: Some(border),
            left: Some(border),
            bottom: Some(border),
            right: Some(border),
            inside_h: Some(border),
            inside_v: Some(border),
        };
    }

    /// Get a cell by row and column index.
    pub fn cell(&mut self, row: usize, col: usize) -> Option<&mut MutableCell> {
        self.rows.get_mut(row)?.cell(col)
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of grid columns (cells of the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, MutableRow::cell_count)
    }

    /// Get a row by index.
    pub fn row(&mut self, index: usize) -> Option<&mut MutableRow> {
        self.rows.get_mut(index)
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &MutableRow> {
        self.rows.iter()
    }

    fn write_border(xml: &mut String, name: &str, border: Option<&TableBorder>) -> Result<()> {
        let Some(border) = border else {
            return Ok(());
        };
        write!(
            xml,
            "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
            name,
            border.style.as_str(),
            border.size,
            border.color
        )?;
        Ok(())
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tbl>");

        xml.push_str("<w:tblPr>");

        let width = self.properties.width_pct.unwrap_or(5000);
        write!(xml, "<w:tblW w:w=\"{}\" w:type=\"pct\"/>", width)?;

        if let Some(alignment) = self.properties.alignment {
            write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
        }

        let borders = &self.properties.borders;
        if !borders.is_empty() {
            xml.push_str("<w:tblBorders>");
            Self::write_border(xml, "top", borders.top.as_ref())?;
            Self::write_border(xml, "left", borders.left.as_ref())?;
            Self::write_border(xml, "bottom", borders.bottom.as_ref())?;
            Self::write_border(xml, "right", borders.right.as_ref())?;
            Self::write_border(xml, "insideH", borders.inside_h.as_ref())?;
            Self::write_border(xml, "insideV", borders.inside_v.as_ref())?;
            xml.push_str("</w:tblBorders>");
        }
        xml.push_str("</w:tblPr>");

        if let Some(first_row) = self.rows.first() {
            xml.push_str("<w:tblGrid>");
            for _ in 0..first_row.cell_count() {
                xml.push_str("<w:gridCol/>");
            }
            xml.push_str("</w:tblGrid>");
        }

        for row in &self.rows {
            row.to_xml(xml)?;
        }

        xml.push_str("</w:tbl>");

        Ok(())
    }
}

/// A mutable table row.
#[derive(Debug)]
pub struct MutableRow {
    /// Table cells in this row
    pub(crate) cells: Vec<MutableCell>,
}

impl MutableRow {
    pub(crate) fn new(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| MutableCell::new()).collect(),
        }
    }

    /// Get a cell by index.
    pub fn cell(&mut self, index: usize) -> Option<&mut MutableCell> {
        self.cells.get_mut(index)
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tr>");

        for cell in &self.cells {
            cell.to_xml(xml)?;
        }

        xml.push_str("</w:tr>");

        Ok(())
    }
}

/// A mutable table cell.
///
/// A new cell starts with one empty paragraph, since `<w:tc>` must always
/// contain at least one `<w:p>`.
#[derive(Debug)]
pub struct MutableCell {
    /// Paragraphs in this cell
    pub(crate) paragraphs: Vec<MutableParagraph>,
    /// Cell properties
    pub(crate) properties: CellProperties,
}

impl MutableCell {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: vec![MutableParagraph::new()],
            properties: CellProperties::default(),
        }
    }

    /// Add a new paragraph to the cell.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(MutableParagraph::new());
        &mut self.paragraphs[index]
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get a paragraph by index.
    pub fn paragraph(&mut self, index: usize) -> Option<&mut MutableParagraph> {
        self.paragraphs.get_mut(index)
    }

    /// Iterate over the paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &MutableParagraph> {
        self.paragraphs.iter()
    }

    /// Replace the cell content with a single paragraph holding `text`,
    /// returning that paragraph for formatting.
    pub fn set_text(&mut self, text: &str) -> &mut MutableParagraph {
        self.paragraphs.clear();
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Drop the first paragraph if it is empty and another paragraph follows.
    ///
    /// Returns whether a paragraph was removed.
    pub fn remove_leading_empty_paragraph(&mut self) -> bool {
        if self.paragraphs.len() > 1 && self.paragraphs[0].is_empty() {
            self.paragraphs.remove(0);
            true
        } else {
            false
        }
    }

    /// Set cell background color.
    pub fn set_background_color(&mut self, color: RgbColor) {
        self.properties.background_color = Some(color);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tc>");

        if let Some(bg_color) = self.properties.background_color {
            write!(
                xml,
                "<w:tcPr><w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/></w:tcPr>",
                bg_color
            )?;
        }

        if self.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }
        for para in &self.paragraphs {
            para.to_xml(xml)?;
        }

        xml.push_str("</w:tc>");

        Ok(())
    }
}
