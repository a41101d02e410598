//! Shared helpers: fixture setup and a minimal reader for the generated
//! `word/document.xml`.
#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A top-level element of the document body.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Visible text of a paragraph
    Paragraph(String),
    /// A paragraph holding a page break
    PageBreak,
    /// Rows of cells, each cell as its paragraph texts
    Table(Rows),
}

impl Block {
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Paragraph(text) => Some(text),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&Rows> {
        match self {
            Block::Table(rows) => Some(rows),
            _ => None,
        }
    }
}

pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/finops-infra")
}

/// Copy the Terraform fixtures into a scratch directory.
pub fn scratch_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    copy_tree(&fixture_dir(), dir.path());
    dir
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

pub fn read_member(docx: &Path, name: &str) -> String {
    let file = fs::File::open(docx).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut member = archive.by_name(name).unwrap();
    let mut xml = String::new();
    member.read_to_string(&mut xml).unwrap();
    xml
}

fn resolve_entity(name: &[u8]) -> &'static str {
    match name {
        b"amp" => "&",
        b"lt" => "<",
        b"gt" => ">",
        b"quot" => "\"",
        b"apos" => "'",
        other => panic!("unexpected entity {:?}", String::from_utf8_lossy(other)),
    }
}

type Rows = Vec<Vec<Vec<String>>>;

fn finish_paragraph(
    blocks: &mut Vec<Block>,
    table: &mut Option<Rows>,
    paragraph: &mut String,
    page_break: &mut bool,
) {
    let text = std::mem::take(paragraph);
    match table {
        Some(rows) => {
            if let Some(cell) = rows.last_mut().and_then(|row| row.last_mut()) {
                cell.push(text);
            }
        },
        None if *page_break => blocks.push(Block::PageBreak),
        None => blocks.push(Block::Paragraph(text)),
    }
    *page_break = false;
}

/// Flatten the document body into paragraphs, page breaks and tables.
pub fn body_blocks(document_xml: &str) -> Vec<Block> {
    let mut reader = Reader::from_str(document_xml);
    let mut blocks = Vec::new();
    let mut table: Option<Rows> = None;
    let mut paragraph = String::new();
    let mut page_break = false;
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table = Some(Vec::new()),
                b"tr" => {
                    if let Some(rows) = table.as_mut() {
                        rows.push(Vec::new());
                    }
                },
                b"tc" => {
                    if let Some(row) = table.as_mut().and_then(|rows| rows.last_mut()) {
                        row.push(Vec::new());
                    }
                },
                b"t" => in_text = true,
                _ => {},
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => finish_paragraph(&mut blocks, &mut table, &mut paragraph, &mut page_break),
                b"br" => page_break = true,
                _ => {},
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => finish_paragraph(&mut blocks, &mut table, &mut paragraph, &mut page_break),
                b"tbl" => {
                    if let Some(rows) = table.take() {
                        blocks.push(Block::Table(rows));
                    }
                },
                _ => {},
            },
            Event::Text(e) if in_text => {
                paragraph.push_str(std::str::from_utf8(e.as_ref()).unwrap());
            },
            Event::GeneralRef(e) if in_text => {
                paragraph.push_str(resolve_entity(e.as_ref()));
            },
            Event::Eof => break,
            _ => {},
        }
    }
    blocks
}

/// Index of the first paragraph whose text is exactly `text`.
pub fn find_paragraph(blocks: &[Block], text: &str) -> Option<usize> {
    blocks.iter().position(|block| block.text() == Some(text))
}
