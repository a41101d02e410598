//! Document layout: cover, table of contents and the six chapters.

use super::builder::ReportBuilder;
use super::content::*;
use super::error::Result;
use super::source::SourceReader;
use super::theme;
use log::info;

/// Heading level of chapter titles.
const CHAPTER: u8 = 1;
/// Heading level of sections within a chapter.
const SECTION: u8 = 2;
/// Heading level of the file path above an embedded source.
const FILE: u8 = 3;

/// Lay out the whole report into `report`, reading every embedded file
/// through `sources`.
///
/// Stops at the first unreadable file; the builder then holds a partial
/// document that must not be saved.
pub fn assemble(report: &mut ReportBuilder, sources: &SourceReader) -> Result<()> {
    report.set_properties(document_properties());
    cover(report);
    table_of_contents(report)?;
    overview(report)?;
    modules(report, sources)?;
    environments(report, sources)?;
    variables(report)?;
    outputs(report)?;
    resource_summary(report)?;
    Ok(())
}

fn cover(report: &mut ReportBuilder) {
    for _ in 0..COVER_TOP_PADDING {
        report.blank();
    }
    report.styled(REPORT_TITLE, theme::TITLE);
    report.styled(REPORT_SUBTITLE, theme::SUBTITLE);
    report.blank();
    report.info_table(&COVER_INFO);
    report.page_break();
}

fn table_of_contents(report: &mut ReportBuilder) -> Result<()> {
    report.heading(TOC_HEADING, CHAPTER)?;
    for item in TOC_ITEMS {
        report.styled(item, theme::TOC_ITEM);
    }
    report.page_break();
    Ok(())
}

fn overview(report: &mut ReportBuilder) -> Result<()> {
    info!("writing chapter: {}", OVERVIEW_HEADING);
    report.heading(OVERVIEW_HEADING, CHAPTER)?;

    report.heading(PROJECT_OVERVIEW_HEADING, SECTION)?;
    report.paragraph(PROJECT_OVERVIEW);
    report.blank();
    report.data_table(&PROJECT_TABLE)?;
    report.blank();

    report.heading(ARCHITECTURE_HEADING, SECTION)?;
    report.paragraph(ARCHITECTURE);
    report.code_block(ARCHITECTURE_DIAGRAM, Some(ARCHITECTURE_DIAGRAM_TITLE));
    report.blank();

    report.heading(DIRECTORY_HEADING, SECTION)?;
    report.code_block(DIRECTORY_TREE, None);
    report.page_break();
    Ok(())
}

fn modules(report: &mut ReportBuilder, sources: &SourceReader) -> Result<()> {
    info!("writing chapter: {}", MODULES_HEADING);
    report.heading(MODULES_HEADING, CHAPTER)?;

    report.heading(VPC_HEADING, SECTION)?;
    report.paragraph(VPC_DESCRIPTION);
    report.blank();
    report.data_table(&VPC_RESOURCES)?;
    embed_sources(report, sources, &VPC_SOURCES)?;
    report.page_break();

    report.heading(SECURITY_GROUP_HEADING, SECTION)?;
    report.paragraph(SECURITY_GROUP_DESCRIPTION);
    report.blank();
    report.label(EC2_RULES_LABEL);
    report.data_table(&EC2_RULES)?;
    report.blank();
    report.label(RDS_RULES_LABEL);
    report.data_table(&RDS_RULES)?;
    embed_sources(report, sources, &SECURITY_GROUP_SOURCES)?;
    report.page_break();

    report.heading(EC2_HEADING, SECTION)?;
    report.paragraph(EC2_DESCRIPTION);
    report.blank();
    report.data_table(&EC2_RESOURCES)?;
    report.blank();
    report.label(USER_DATA_LABEL);
    report.data_table(&USER_DATA)?;
    embed_sources(report, sources, &EC2_SOURCES)?;
    report.page_break();

    report.heading(ECR_HEADING, SECTION)?;
    report.paragraph(ECR_DESCRIPTION);
    report.blank();
    report.data_table(&ECR_REPOSITORIES)?;
    report.blank();
    report.label(LIFECYCLE_LABEL);
    for note in LIFECYCLE_NOTES {
        report.paragraph(note);
    }
    embed_sources(report, sources, &ECR_SOURCES)?;
    report.page_break();

    report.heading(RDS_HEADING, SECTION)?;
    report.paragraph(RDS_DESCRIPTION);
    report.blank();
    report.data_table(&RDS_CONFIGURATION)?;
    embed_sources(report, sources, &RDS_SOURCES)?;
    report.page_break();
    Ok(())
}

fn environments(report: &mut ReportBuilder, sources: &SourceReader) -> Result<()> {
    info!("writing chapter: {}", ENVIRONMENTS_HEADING);
    report.heading(ENVIRONMENTS_HEADING, CHAPTER)?;
    report.heading(DEV_HEADING, SECTION)?;
    report.paragraph(DEV_DESCRIPTION);
    report.blank();
    report.data_table(&MODULE_DEPENDENCIES)?;
    embed_sources(report, sources, &DEV_SOURCES)?;
    report.page_break();
    Ok(())
}

fn variables(report: &mut ReportBuilder) -> Result<()> {
    info!("writing chapter: {}", VARIABLES_HEADING);
    report.heading(VARIABLES_HEADING, CHAPTER)?;
    report.paragraph(VARIABLES_INTRO);
    report.blank();

    let last = VARIABLE_TABLES.len() - 1;
    for (i, (caption, table)) in VARIABLE_TABLES.iter().enumerate() {
        report.label(caption);
        report.data_table(table)?;
        if i == last {
            report.page_break();
        } else {
            report.blank();
        }
    }
    Ok(())
}

fn outputs(report: &mut ReportBuilder) -> Result<()> {
    info!("writing chapter: {}", OUTPUTS_HEADING);
    report.heading(OUTPUTS_HEADING, CHAPTER)?;
    report.paragraph(OUTPUTS_INTRO);
    report.blank();
    report.data_table(&OUTPUTS)?;
    report.page_break();
    Ok(())
}

fn resource_summary(report: &mut ReportBuilder) -> Result<()> {
    info!("writing chapter: {}", SUMMARY_HEADING);
    report.heading(SUMMARY_HEADING, CHAPTER)?;
    report.paragraph(SUMMARY_INTRO);
    report.blank();
    report.data_table(&RESOURCE_SUMMARY)?;
    report.blank();
    report.styled(RESOURCE_TOTAL, theme::TOTAL);
    report.blank();
    report.label(COST_NOTES_LABEL);
    for note in COST_NOTES {
        report.styled(&format!("  - {}", note), theme::NOTE);
    }
    Ok(())
}

/// Each file gets a spacer, its path as a level-3 heading and a code block
/// with its contents.
fn embed_sources(report: &mut ReportBuilder, sources: &SourceReader, files: &[&str]) -> Result<()> {
    for file in files {
        let code = sources.read(file)?;
        report.blank();
        report.heading(file, FILE)?;
        report.code_block(&code, None);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportError;
    use std::fs;
    use std::path::Path;

    fn write_sources(root: &Path) {
        for file in source_files() {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("# {}\nlocals {{}}\n", file)).unwrap();
        }
    }

    #[test]
    fn test_assemble_layout() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());

        let mut report = ReportBuilder::new();
        assemble(&mut report, &SourceReader::new(dir.path())).unwrap();

        // cover info, 9 chapter tables, 5 variable tables, outputs, summary,
        // plus 2 diagram blocks and 18 source blocks
        let doc = report.document();
        assert_eq!(doc.table_count(), 1 + 9 + 5 + 1 + 1 + 2 + 18);
        assert_eq!(doc.properties().title.as_deref(), Some(REPORT_TITLE));

        let xml = doc.to_xml().unwrap();
        let mut last = 0;
        for heading in [
            TOC_HEADING,
            OVERVIEW_HEADING,
            MODULES_HEADING,
            ENVIRONMENTS_HEADING,
            VARIABLES_HEADING,
            OUTPUTS_HEADING,
            SUMMARY_HEADING,
        ] {
            let at = xml[last..].find(heading).map(|i| i + last);
            assert!(at.is_some(), "{} missing or out of order", heading);
            last = at.unwrap();
        }
        assert!(xml.contains("<w:t xml:space=\"preserve\">  - EC2 인스턴스: t3.micro (프리티어 적용 가능)</w:t>"));
    }

    #[test]
    fn test_assemble_stops_on_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());
        fs::remove_file(dir.path().join("modules/ec2/outputs.tf")).unwrap();

        let mut report = ReportBuilder::new();
        match assemble(&mut report, &SourceReader::new(dir.path())) {
            Err(ReportError::Source { path, .. }) => {
                assert!(path.ends_with("modules/ec2/outputs.tf"));
            },
            other => panic!("expected Source error, got {:?}", other),
        }
    }
}
