//! Run configuration.

use crate::report::SourceReader;
use crate::report::content::OUTPUT_FILE_NAME;
use std::io;
use std::path::{Path, PathBuf};

/// Directory holding the running executable.
///
/// The binary uses it as the base directory when none is given, so a copy
/// placed next to `modules/` and `environments/` needs no arguments.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        )
    })
}

/// Where the Terraform project lives and what the document is called.
///
/// Sources are read relative to `base_dir` and the document is written into
/// it as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub base_dir: PathBuf,
    pub output_file_name: String,
}

impl ReportConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
        }
    }

    #[inline]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_file_name)
    }

    pub fn source_reader(&self) -> SourceReader {
        SourceReader::new(&self.base_dir)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
