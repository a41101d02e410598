//! Assembles a [`MutableDocument`] into an OPC package.
//!
//! Part layout:
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! word/document.xml  (+ word/_rels/document.xml.rels)
//! word/styles.xml
//! word/settings.xml
//! docProps/core.xml
//! docProps/app.xml
//! ```

use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Part};
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use std::path::Path;

use super::doc::MutableDocument;
use super::style::generate_styles_xml;

const DOCUMENT_PARTNAME: &str = "/word/document.xml";
const STYLES_PARTNAME: &str = "/word/styles.xml";
const SETTINGS_PARTNAME: &str = "/word/settings.xml";
const CORE_PROPERTIES_PARTNAME: &str = "/docProps/core.xml";
const APP_PROPERTIES_PARTNAME: &str = "/docProps/app.xml";

/// Serializes a document into a `.docx` package.
pub struct DocxWriter<'a> {
    document: &'a MutableDocument,
}

impl<'a> DocxWriter<'a> {
    pub fn new(document: &'a MutableDocument) -> Self {
        Self { document }
    }

    /// Timestamp stamped on every ZIP member: the document's modification
    /// time, or the ZIP epoch when none is set.
    fn package_timestamp(&self) -> NaiveDateTime {
        self.document
            .properties()
            .modified
            .unwrap_or_else(zip_epoch)
    }

    /// Build the in-memory OPC package.
    pub fn build_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new(self.package_timestamp());

        let document_uri = PackURI::new(DOCUMENT_PARTNAME)?;
        let styles_uri = PackURI::new(STYLES_PARTNAME)?;
        let settings_uri = PackURI::new(SETTINGS_PARTNAME)?;
        let core_uri = PackURI::new(CORE_PROPERTIES_PARTNAME)?;
        let app_uri = PackURI::new(APP_PROPERTIES_PARTNAME)?;

        let document_xml = self.document.to_xml()?;
        debug!("document.xml: {} bytes", document_xml.len());

        let mut document_part = BlobPart::new(
            document_uri.clone(),
            ct::WML_DOCUMENT_MAIN,
            document_xml.into_bytes(),
        );
        document_part.relate_to(&styles_uri, rt::STYLES);
        document_part.relate_to(&settings_uri, rt::SETTINGS);

        let styles_xml = generate_styles_xml(self.document.defaults(), &self.document.styles())?;

        package.add_part(Box::new(document_part))?;
        package.add_part(Box::new(BlobPart::new(
            styles_uri,
            ct::WML_STYLES,
            styles_xml.into_bytes(),
        )))?;
        package.add_part(Box::new(BlobPart::new(
            settings_uri,
            ct::WML_SETTINGS,
            settings_xml().into_bytes(),
        )))?;
        package.add_part(Box::new(BlobPart::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.document.properties().to_xml()?.into_bytes(),
        )))?;
        package.add_part(Box::new(BlobPart::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            self.document.app_properties().to_xml()?.into_bytes(),
        )))?;

        package.relate_to(&document_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(package)
    }

    /// Serialize the package to ZIP bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = self.build_package()?.to_bytes()?;
        debug!("docx package: {} bytes", bytes.len());
        Ok(bytes)
    }

    /// Serialize and write the package to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.build_package()?.save(path)?;
        Ok(())
    }
}

/// 1980-01-01 00:00:00, the earliest time a ZIP member can carry.
fn zip_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1980, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn settings_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:settings xmlns:w="{}">"#,
            r#"<w:zoom w:percent="100"/>"#,
            r#"<w:defaultTabStop w:val="800"/>"#,
            r#"<w:characterSpacingControl w:val="doNotCompress"/>"#,
            r#"<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat>"#,
            r#"</w:settings>"#
        ),
        namespace::WML_MAIN
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::writer::DocumentProperties;
    use std::io::{Cursor, Read};

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_layout() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("hello");
        let bytes = doc.to_bytes().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "word/document.xml",
                "word/_rels/document.xml.rels",
                "word/styles.xml",
                "word/settings.xml",
                "docProps/core.xml",
                "docProps/app.xml",
            ]
        );

        let doc_rels = read_member(&bytes, "word/_rels/document.xml.rels");
        assert!(doc_rels.contains(r#"Target="styles.xml""#));
        assert!(doc_rels.contains(r#"Target="settings.xml""#));

        let pkg_rels = read_member(&bytes, "_rels/.rels");
        assert!(pkg_rels.contains(r#"Target="word/document.xml""#));
        assert!(pkg_rels.contains(r#"Target="docProps/core.xml""#));

        let content_types = read_member(&bytes, "[Content_Types].xml");
        assert!(content_types.contains(ct::WML_DOCUMENT_MAIN));
        assert!(content_types.contains(ct::OPC_CORE_PROPERTIES));
    }

    #[test]
    fn test_identical_documents_serialize_identically() {
        let at = NaiveDate::from_ymd_opt(2026, 2, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let build = || {
            let mut doc = MutableDocument::new();
            doc.set_properties(DocumentProperties::new().title("t").timestamp(at));
            doc.add_heading("개요", 1).unwrap();
            doc.add_table(2, 2).cell(1, 1).unwrap().set_text("x");
            doc.to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("saved");
        DocxWriter::new(&doc).save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(read_member(&bytes, "word/document.xml").contains("saved"));
    }
}
