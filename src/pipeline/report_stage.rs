//! Report output stage.

use super::{write_output, OutputTarget};
use crate::config::CompareConfig;
use crate::error::{ErrorContext, Result};
use crate::model::ComparisonTable;
use crate::parsers::LoadedSbom;
use crate::reports::{create_reporter, ReportConfig, ReportMetadata};

/// Build the report configuration for a run.
#[must_use]
pub fn report_config(config: &CompareConfig, left: &LoadedSbom, right: &LoadedSbom) -> ReportConfig {
    ReportConfig {
        title: config.output.title.clone(),
        metadata: ReportMetadata {
            left_sbom_path: Some(config.paths.left.to_string_lossy().to_string()),
            right_sbom_path: Some(config.paths.right.to_string_lossy().to_string()),
            left_format: Some(left.format),
            right_format: Some(right.format),
            left_spec_version: left.spec_version.clone(),
            right_spec_version: right.spec_version.clone(),
        },
    }
}

/// Render the table in the configured format and write it out.
///
/// Returns where the report went.
pub fn output_report(
    config: &CompareConfig,
    table: &ComparisonTable,
    report_config: &ReportConfig,
) -> Result<OutputTarget> {
    let reporter = create_reporter(config.output.format);
    let report = reporter
        .generate(table, report_config)
        .with_context(|| format!("rendering {} report", reporter.format()))?;

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&report, &target, config.behavior.quiet)?;
    Ok(target)
}
