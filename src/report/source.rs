//! Reads the text files embedded in the report.

use super::error::{ReportError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves relative paths against a base directory and returns file
/// contents as UTF-8 text.
#[derive(Debug, Clone)]
pub struct SourceReader {
    base_dir: PathBuf,
}

impl SourceReader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    #[inline]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Read `relative_path` in full.
    ///
    /// Line endings are normalized to `\n`. Missing files, permission
    /// problems and invalid UTF-8 all surface as [`ReportError::Source`].
    pub fn read(&self, relative_path: &str) -> Result<String> {
        let path = self.base_dir.join(relative_path);
        let text = fs::read_to_string(&path).map_err(|source| ReportError::Source {
            path: path.clone(),
            source,
        })?;
        debug!("read {} ({} bytes)", path.display(), text.len());
        Ok(normalize_newlines(text))
    }
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("modules/vpc")).unwrap();
        fs::write(
            dir.path().join("modules/vpc/main.tf"),
            "resource \"aws_vpc\" \"main\" {\r\n  cidr_block = var.vpc_cidr\r\n}\r\n",
        )
        .unwrap();

        let reader = SourceReader::new(dir.path());
        let text = reader.read("modules/vpc/main.tf").unwrap();
        assert_eq!(
            text,
            "resource \"aws_vpc\" \"main\" {\n  cidr_block = var.vpc_cidr\n}\n"
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let reader = SourceReader::new(dir.path());
        match reader.read("modules/rds/main.tf") {
            Err(ReportError::Source { path, source }) => {
                assert!(path.ends_with("modules/rds/main.tf"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            },
            other => panic!("expected Source error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.tf"), [0xFF, 0xFE, 0x00]).unwrap();
        let reader = SourceReader::new(dir.path());
        assert!(matches!(
            reader.read("bad.tf"),
            Err(ReportError::Source { .. })
        ));
    }
}
