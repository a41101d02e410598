/// In-memory OPC package assembled by the writers before serialization.
///
/// Parts are kept in the order they were added; together with the fixed
/// modification time this makes serialization reproducible.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use chrono::NaiveDateTime;
use std::path::Path;

pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,
    /// All parts in insertion order
    parts: Vec<Box<dyn Part>>,
    /// Modification time stamped on every ZIP member
    modified: NaiveDateTime,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new(modified: NaiveDateTime) -> Self {
        Self {
            rels: Relationships::new(),
            parts: Vec::new(),
            modified,
        }
    }

    /// Add a part; part names must be unique within the package.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self
            .parts
            .iter()
            .any(|existing| existing.partname() == part.partname())
        {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Relate the package itself to one of its parts, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }

    /// Package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|part| part.as_ref())
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn modified(&self) -> NaiveDateTime {
        self.modified
    }

    /// Serialize the package to a ZIP archive in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Serialize and write the package to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::part::BlobPart;
    use chrono::NaiveDate;

    fn package() -> OpcPackage {
        let modified = NaiveDate::from_ymd_opt(2026, 2, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        OpcPackage::new(modified)
    }

    #[test]
    fn test_add_part_rejects_duplicates() {
        let mut pkg = package();
        let uri = PackURI::new("/word/document.xml").unwrap();

        pkg.add_part(Box::new(BlobPart::new(uri.clone(), "application/xml", vec![])))
            .unwrap();
        let err = pkg
            .add_part(Box::new(BlobPart::new(uri, "application/xml", vec![])))
            .unwrap_err();

        assert!(matches!(err, OpcError::DuplicatePart(_)));
        assert_eq!(pkg.part_count(), 1);
    }

    #[test]
    fn test_package_relationship_target() {
        let mut pkg = package();
        let uri = PackURI::new("/word/document.xml").unwrap();

        assert_eq!(pkg.relate_to(&uri, "officeDocument"), "rId1");
        let rel = pkg.rels().iter().next().unwrap();
        assert_eq!(rel.target_ref(), "word/document.xml");
    }
}
