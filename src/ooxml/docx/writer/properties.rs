//! Document metadata parts.
//!
//! Core properties are stored in `docProps/core.xml`, extended (application)
//! properties in `docProps/app.xml`.

use crate::ooxml::error::Result;
use chrono::NaiveDateTime;
use std::fmt::Write as FmtWrite;

use super::escape_xml;

const W3CDTF: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Document core properties (metadata).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Document keywords (comma-separated)
    pub keywords: Option<String>,
    /// Document description
    pub description: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Document language (e.g. `ko-KR`)
    pub language: Option<String>,
    /// Creation date, written as UTC
    pub created: Option<NaiveDateTime>,
    /// Last modification date, written as UTC
    pub modified: Option<NaiveDateTime>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Set both the creation and modification timestamps.
    pub fn timestamp(mut self, at: NaiveDateTime) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Serialize to `docProps/core.xml`.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let text_elements = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
            ("dc:description", &self.description),
            ("cp:lastModifiedBy", &self.last_modified_by),
            ("dc:language", &self.language),
        ];
        for (tag, value) in text_elements {
            if let Some(value) = value {
                write!(xml, "<{tag}>{}</{tag}>", escape_xml(value))?;
            }
        }

        for (tag, value) in [("dcterms:created", self.created), ("dcterms:modified", self.modified)] {
            if let Some(at) = value {
                write!(
                    xml,
                    "<{tag} xsi:type=\"dcterms:W3CDTF\">{}</{tag}>",
                    at.format(W3CDTF)
                )?;
            }
        }

        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }
}

/// Extended properties (`docProps/app.xml`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppProperties {
    /// Name of the producing application
    pub application: String,
    /// Producing application version, `XX.YYYY`
    pub app_version: Option<String>,
}

impl Default for AppProperties {
    fn default() -> Self {
        Self {
            application: env!("CARGO_PKG_NAME").to_string(),
            app_version: None,
        }
    }
}

impl AppProperties {
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        write!(xml, "<Application>{}</Application>", escape_xml(&self.application))?;
        xml.push_str("<DocSecurity>0</DocSecurity>");
        xml.push_str("<ScaleCrop>false</ScaleCrop>");
        xml.push_str("<LinksUpToDate>false</LinksUpToDate>");
        xml.push_str("<SharedDoc>false</SharedDoc>");
        xml.push_str("<HyperlinksChanged>false</HyperlinksChanged>");
        if let Some(ref version) = self.app_version {
            write!(xml, "<AppVersion>{}</AppVersion>", escape_xml(version))?;
        }
        xml.push_str("</Properties>");
        Ok(xml)
    }
}
