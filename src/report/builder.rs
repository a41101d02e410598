//! Styled document primitives.

use super::error::{ReportError, Result};
use super::style::{Alignment, TextStyle, apply_theme_font};
use super::theme;
use crate::ooxml::docx::writer::{
    DocumentDefaults, DocumentProperties, MutableDocument, SectionProperties, TableBorder,
};
use crate::ooxml::docx::{LineSpacing, TableAlignment, TableBorderStyle};
use log::debug;
use std::path::{Path, PathBuf};

/// A table of literal text: one header row plus data rows.
#[derive(Debug, Clone, Copy)]
pub struct TableData<'a> {
    /// Name used in error messages
    pub name: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [&'a [&'a str]],
    /// Per-column alignment of data cells; missing entries are left aligned
    pub alignments: &'a [Alignment],
}

impl TableData<'_> {
    #[inline]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Alignment of data cells in column `col`.
    pub fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    /// Check that every row has exactly one cell per header.
    pub fn validate(&self) -> Result<()> {
        let expected = self.column_count();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, cells)) => Err(ReportError::MalformedTable {
                table: self.name.to_string(),
                row: row + 1,
                expected,
                found: cells.len(),
            }),
            None => Ok(()),
        }
    }
}

/// Appends themed content to an in-memory Word document.
///
/// The document uses A4 pages with 2.54 cm margins and the theme font as its
/// default. Nothing touches the file system until [`ReportBuilder::finish`].
#[derive(Debug)]
pub struct ReportBuilder {
    document: MutableDocument,
}

impl ReportBuilder {
    pub fn new() -> Self {
        let mut document = MutableDocument::new();
        document.set_section(
            SectionProperties::page_size_cm(theme::PAGE_WIDTH_CM, theme::PAGE_HEIGHT_CM)
                .margins_cm(
                    theme::PAGE_MARGIN_CM,
                    theme::PAGE_MARGIN_CM,
                    theme::PAGE_MARGIN_CM,
                    theme::PAGE_MARGIN_CM,
                ),
        );
        document.set_defaults(DocumentDefaults::new(theme::FONT_FAMILY, theme::BODY_SIZE));
        Self { document }
    }

    /// The document built so far.
    pub fn document(&self) -> &MutableDocument {
        &self.document
    }

    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.document.set_properties(properties);
    }

    /// Heading at `level` 1 to 3, set in the theme font.
    pub fn heading(&mut self, text: &str, level: u8) -> Result<()> {
        let heading = self.document.add_heading(text, level)?;
        heading.runs_mut().for_each(apply_theme_font);
        Ok(())
    }

    /// Body text paragraph.
    pub fn paragraph(&mut self, text: &str) {
        self.styled(text, theme::BODY);
    }

    /// Paragraph with a single styled run.
    pub fn styled(&mut self, text: &str, style: TextStyle) {
        style.apply(self.document.add_paragraph_with_text(text));
    }

    /// Empty spacer paragraph.
    pub fn blank(&mut self) {
        self.document.add_paragraph();
    }

    /// Bold caption such as `[RDS 모듈 변수]`.
    pub fn label(&mut self, text: &str) {
        self.styled(text, theme::LABEL);
    }

    /// Centered grid with a filled header row and one row per data tuple.
    ///
    /// The shape is checked before anything is added to the document.
    pub fn data_table(&mut self, data: &TableData<'_>) -> Result<()> {
        data.validate()?;

        let columns = data.column_count();
        let table = self.document.add_table(data.rows.len() + 1, columns);
        table.set_alignment(TableAlignment::Center);

        if let Some(header) = table.row(0) {
            for (col, text) in data.headers.iter().enumerate() {
                if let Some(cell) = header.cell(col) {
                    cell.set_background_color(theme::PRIMARY);
                    theme::TABLE_HEADER.apply(cell.set_text(text));
                }
            }
        }

        for (index, cells) in data.rows.iter().enumerate() {
            let Some(row) = table.row(index + 1) else {
                continue;
            };
            for (col, text) in cells.iter().enumerate() {
                if let Some(cell) = row.cell(col) {
                    let style = theme::TABLE_CELL.align(data.alignment(col));
                    style.apply(cell.set_text(text));
                }
            }
        }

        debug!(
            "table '{}': {} x {}",
            data.name,
            data.rows.len() + 1,
            columns
        );
        Ok(())
    }

    /// Two-column label/value table used on the cover page.
    pub fn info_table(&mut self, rows: &[(&str, &str)]) {
        let table = self.document.add_table(rows.len(), 2);
        table.set_alignment(TableAlignment::Center);

        for (index, (label, value)) in rows.iter().enumerate() {
            if let Some(cell) = table.cell(index, 0) {
                cell.set_background_color(theme::PRIMARY);
                theme::INFO_LABEL.apply(cell.set_text(label));
            }
            if let Some(cell) = table.cell(index, 1) {
                theme::INFO_VALUE.apply(cell.set_text(value));
            }
        }
    }

    /// Shaded, bordered single-cell table holding `code` one line per
    /// paragraph, optionally preceded by a title paragraph.
    ///
    /// Leading and trailing whitespace of `code` is dropped; every other line
    /// is kept verbatim.
    pub fn code_block(&mut self, code: &str, title: Option<&str>) {
        if let Some(title) = title {
            self.styled(title, theme::CODE_TITLE);
        }

        let table = self.document.add_table(1, 1);
        table.set_alignment(TableAlignment::Center);
        table.set_width_percent(100);
        table.set_borders(TableBorder {
            style: TableBorderStyle::Single,
            size: theme::CODE_BORDER_SIZE,
            color: theme::CODE_BORDER,
        });

        let Some(cell) = table.cell(0, 0) else {
            return;
        };
        cell.set_background_color(theme::CODE_FILL);

        let mut lines = 0;
        for line in code.trim().split('\n') {
            let para = cell.add_paragraph();
            para.set_space_before(0.0);
            para.set_space_after(0.0);
            para.set_line_spacing(LineSpacing::Exact(theme::CODE_LINE_SPACING));
            theme::CODE_LINE.write(para, line);
            lines += 1;
        }
        cell.remove_leading_empty_paragraph();

        debug!("code block: {} lines", lines);
    }

    pub fn page_break(&mut self) {
        self.document.add_page_break();
    }

    /// Serialize the document without writing it anywhere.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.document.to_bytes()?)
    }

    /// Write the document to `path`, replacing any existing file, and return
    /// the path written.
    pub fn finish(self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref().to_path_buf();
        self.document
            .save(&path)
            .map_err(|source| ReportError::Persist {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::writer::MutableParagraph;

    const HEADERS: [&str; 4] = ["포트", "프로토콜", "소스", "용도"];

    fn body_xml(builder: &ReportBuilder) -> String {
        builder.document().to_xml().unwrap()
    }

    #[test]
    fn test_data_table_shape() {
        let rows: [&[&str]; 5] = [
            &["22", "TCP", "0.0.0.0/0", "SSH 원격 접속"],
            &["80", "TCP", "0.0.0.0/0", "HTTP 웹 트래픽"],
            &["443", "TCP", "0.0.0.0/0", "HTTPS 웹 트래픽"],
            &["3000", "TCP", "0.0.0.0/0", "Dashboard (React 프론트엔드)"],
            &["8282", "TCP", "0.0.0.0/0", "Gateway (API 게이트웨이)"],
        ];
        let data = TableData {
            name: "sg",
            headers: &HEADERS,
            rows: &rows,
            alignments: &[Alignment::Center, Alignment::Center, Alignment::Center],
        };

        let mut builder = ReportBuilder::new();
        builder.data_table(&data).unwrap();

        let mut doc = builder.document;
        let table = doc.table(0).unwrap();
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.column_count(), 4);
        for row in table.rows() {
            assert_eq!(row.cell_count(), 4);
        }

        let header = table.cell(0, 1).unwrap();
        assert_eq!(header.properties.background_color, Some(theme::PRIMARY));
        let texts: Vec<String> = header.paragraphs().map(MutableParagraph::text).collect();
        assert_eq!(texts, ["프로토콜"]);
        assert_eq!(table.cell(5, 3).unwrap().paragraphs().next().unwrap().text(), "Gateway (API 게이트웨이)");
    }

    #[test]
    fn test_malformed_row_is_rejected_before_writing() {
        let rows: [&[&str]; 2] = [&["22", "TCP", "0.0.0.0/0", "SSH"], &["80", "TCP"]];
        let data = TableData {
            name: "sg",
            headers: &HEADERS,
            rows: &rows,
            alignments: &[],
        };

        let mut builder = ReportBuilder::new();
        match builder.data_table(&data) {
            Err(ReportError::MalformedTable {
                table,
                row,
                expected,
                found,
            }) => {
                assert_eq!(table, "sg");
                assert_eq!(row, 2);
                assert_eq!(expected, 4);
                assert_eq!(found, 2);
            },
            other => panic!("expected MalformedTable, got {:?}", other),
        }
        assert_eq!(builder.document().table_count(), 0);
    }

    #[test]
    fn test_data_cell_alignment() {
        let rows: [&[&str]; 1] = [&["1", "aws_vpc"]];
        let data = TableData {
            name: "t",
            headers: &["No", "리소스 타입"],
            rows: &rows,
            alignments: &[Alignment::Center],
        };
        assert_eq!(data.alignment(0), Alignment::Center);
        assert_eq!(data.alignment(1), Alignment::Left);

        let mut builder = ReportBuilder::new();
        builder.data_table(&data).unwrap();
        let xml = body_xml(&builder);
        // table placement, both header cells and the first data cell
        assert_eq!(xml.matches("<w:jc w:val=\"center\"/>").count(), 4);
    }

    #[test]
    fn test_code_block_lines() {
        let mut builder = ReportBuilder::new();
        builder.code_block("\n\nline 1\n  line 2\n\nline 4\n\n", Some("[title]"));

        assert_eq!(builder.document().paragraph_count(), 1);
        let mut doc = builder.document;
        let cell = doc.table(0).unwrap().cell(0, 0).unwrap();
        let lines: Vec<String> = cell.paragraphs().map(MutableParagraph::text).collect();
        assert_eq!(lines, ["line 1", "  line 2", "", "line 4"]);
    }

    #[test]
    fn test_code_block_xml() {
        let mut builder = ReportBuilder::new();
        builder.code_block("a = 1", None);
        let xml = body_xml(&builder);
        assert!(xml.contains("<w:tblW w:w=\"5000\" w:type=\"pct\"/><w:jc w:val=\"center\"/>"));
        assert!(xml.contains("w:color=\"CCCCCC\""));
        assert!(xml.contains("w:fill=\"F5F5F5\""));
        assert!(xml.contains("w:line=\"220\" w:lineRule=\"exact\""));
        assert_eq!(xml.matches("<w:p>").count(), 1);
    }

    #[test]
    fn test_empty_code_block_keeps_one_paragraph() {
        let mut builder = ReportBuilder::new();
        builder.code_block("   \n ", None);
        let mut doc = builder.document;
        assert_eq!(doc.table(0).unwrap().cell(0, 0).unwrap().paragraph_count(), 1);
    }

    #[test]
    fn test_heading_uses_theme_font() {
        let mut builder = ReportBuilder::new();
        builder.heading("1. 개요", 1).unwrap();
        assert!(builder.heading("deep", 4).is_err());

        let xml = body_xml(&builder);
        assert!(xml.contains("<w:pStyle w:val=\"Heading1\"/>"));
        assert!(xml.contains("w:eastAsia=\"맑은 고딕\""));
    }

    #[test]
    fn test_info_table() {
        let mut builder = ReportBuilder::new();
        builder.info_table(&[("프로젝트명", "FinOps Infrastructure"), ("작성일", "2026-02-23")]);
        let mut doc = builder.document;
        let table = doc.table(0).unwrap();
        assert_eq!(table.row_count(), 2);
        let value = table.cell(0, 1).unwrap();
        assert_eq!(value.paragraphs().next().unwrap().text(), "FinOps Infrastructure");
        assert_eq!(value.properties.background_color, None);
    }

    #[test]
    fn test_only_code_blocks_are_bordered() {
        let mut builder = ReportBuilder::new();
        builder.info_table(&[("프로젝트명", "FinOps Infrastructure")]);
        builder
            .data_table(&TableData {
                name: "t",
                headers: &["No", "리소스 타입"],
                rows: &[&["1", "aws_vpc"]],
                alignments: &[],
            })
            .unwrap();
        let xml = body_xml(&builder);
        assert!(!xml.contains("<w:tblBorders>"));
        assert!(!xml.contains("w:color=\"000000\""));

        builder.code_block("a = 1", None);
        let xml = body_xml(&builder);
        assert_eq!(xml.matches("<w:tblBorders>").count(), 1);
    }

    #[test]
    fn test_cell_text_carries_style() {
        let mut builder = ReportBuilder::new();
        builder.info_table(&[("작성일", "2026-02-23")]);
        let xml = body_xml(&builder);
        // label run: bold white text on the primary fill
        assert!(xml.contains("<w:b/><w:bCs/><w:color w:val=\"FFFFFF\"/><w:sz w:val=\"20\"/>"));
        assert!(xml.contains("w:fill=\"2E4057\""));
        assert_eq!(xml.matches("<w:t xml:space=\"preserve\">작성일</w:t>").count(), 1);
        assert_eq!(xml.matches("<w:p>").count(), 0);
    }

    #[test]
    fn test_finish_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        let mut builder = ReportBuilder::new();
        builder.paragraph("본문");
        builder.page_break();
        let written = builder.finish(&path).unwrap();
        assert_eq!(written, path);
        assert!(path.exists());
    }

    #[test]
    fn test_finish_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.docx");
        let err = ReportBuilder::new().finish(&path).unwrap_err();
        assert!(matches!(err, ReportError::Persist { .. }));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn prop_code_block_keeps_every_line(
                lines in prop::collection::vec("[ a-z0-9={}\\[\\]\"#.-]{0,24}", 1..40),
            ) {
                let code = lines.join("\n");
                let expected: Vec<&str> = code.trim().split('\n').collect();

                let mut builder = ReportBuilder::new();
                builder.code_block(&code, None);
                let mut doc = builder.document;
                let cell = doc.table(0).unwrap().cell(0, 0).unwrap();
                let actual: Vec<String> = cell.paragraphs().map(MutableParagraph::text).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
