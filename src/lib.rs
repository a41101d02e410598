//! FinOps Docgen - code deliverable report for the FinOps Terraform project
//!
//! Reads the Terraform modules and the dev environment of the FinOps
//! Infrastructure project and renders them, together with a fixed narrative
//! (architecture, module tables, variables, outputs and a resource summary),
//! into a styled Word document.
//!
//! # Modules
//!
//! - [`ooxml`]: a small OOXML writer (OPC packaging and WordprocessingML)
//! - [`report`]: themed report primitives and the document layout
//! - [`config`]: base directory and output file name
//!
//! # Example
//!
//! ```no_run
//! use finops_docgen::config::ReportConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportConfig::new("finops-infra");
//! let path = finops_docgen::generate(&config)?;
//! println!("written to {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod ooxml;
pub mod report;

use config::ReportConfig;
use log::info;
use report::{ReportBuilder, plan};
use std::path::PathBuf;

/// Build the report and write it to [`ReportConfig::output_path`].
///
/// The whole document is assembled in memory first, so a missing or
/// unreadable source file fails the run without touching the output path.
pub fn generate(config: &ReportConfig) -> report::Result<PathBuf> {
    info!("generating report from {}", config.base_dir().display());

    let mut report = ReportBuilder::new();
    plan::assemble(&mut report, &config.source_reader())?;
    let path = report.finish(config.output_path())?;

    info!("report written to {}", path.display());
    Ok(path)
}
