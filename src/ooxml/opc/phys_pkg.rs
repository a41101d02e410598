//! Physical (ZIP) layer of an OPC package.
//!
//! Parts are deflated into an in-memory archive; the caller decides where the
//! finished bytes go. Every member carries the same modification time so that
//! identical packages serialize to identical archives.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Physical package writer for creating OPC packages.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
    /// Options applied to every member
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory, stamping every
    /// member with `modified`.
    pub fn new(modified: NaiveDateTime) -> Result<Self> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip_timestamp(modified)?);

        Ok(Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        })
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive
            .start_file(pack_uri.membername(), self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

/// ZIP stores MS-DOS timestamps: years 1980..=2107, two-second resolution.
fn zip_timestamp(modified: NaiveDateTime) -> Result<zip::DateTime> {
    let year = u16::try_from(modified.year())
        .map_err(|_| OpcError::InvalidTimestamp(modified.to_string()))?;

    zip::DateTime::from_date_and_time(
        year,
        modified.month() as u8,
        modified.day() as u8,
        modified.hour() as u8,
        modified.minute() as u8,
        modified.second() as u8,
    )
    .map_err(|_| OpcError::InvalidTimestamp(modified.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Read;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_multiple_parts() {
        let mut writer = PhysPkgWriter::new(timestamp()).unwrap();

        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let document = PackURI::new("/word/document.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&document, b"<document/>").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<document/>");
    }

    #[test]
    fn test_output_is_deterministic() {
        let build = || {
            let mut writer = PhysPkgWriter::new(timestamp()).unwrap();
            let uri = PackURI::new("/word/document.xml").unwrap();
            writer.write(&uri, b"<document/>").unwrap();
            writer.finish().unwrap()
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_rejects_pre_1980_timestamp() {
        let old = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            PhysPkgWriter::new(old),
            Err(OpcError::InvalidTimestamp(_))
        ));
    }
}
