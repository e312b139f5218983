//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ComparisonSummary, ComparisonTable, SourceLabels};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator, pretty printed
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        table: &ComparisonTable,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonComparisonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                title: config.resolved_title(),
                sources: table.labels().clone(),
                left: SbomInfo {
                    file_path: config.metadata.left_sbom_path.clone(),
                    format: config.metadata.left_format.map(|f| f.name().to_string()),
                    spec_version: config.metadata.left_spec_version.clone(),
                },
                right: SbomInfo {
                    file_path: config.metadata.right_sbom_path.clone(),
                    format: config.metadata.right_format.map(|f| f.name().to_string()),
                    spec_version: config.metadata.right_spec_version.clone(),
                },
            },
            summary: table.summary(),
            rows: table
                .iter()
                .map(|row| JsonRow {
                    package: &row.name,
                    left_version: row.left_version.as_deref(),
                    right_version: row.right_version.as_deref(),
                    classification: row.classification,
                    note: table.label_for(row),
                    color: row.color(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonComparisonReport<'a> {
    metadata: JsonReportMetadata,
    summary: ComparisonSummary,
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    title: String,
    sources: SourceLabels,
    left: SbomInfo,
    right: SbomInfo,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct SbomInfo {
    file_path: Option<String>,
    format: Option<String>,
    spec_version: Option<String>,
}

/// Absent versions serialize as `null` rather than a display sentinel.
#[derive(Serialize)]
struct JsonRow<'a> {
    package: &'a str,
    left_version: Option<&'a str>,
    right_version: Option<&'a str>,
    classification: crate::model::Classification,
    note: String,
    color: &'static str,
}
