//! Report type definitions.

use crate::parsers::SbomFormat;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Static HTML table
    #[default]
    Html,
    /// Structured JSON output
    Json,
    /// Brief plain-text summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Where the compared SBOMs came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path to the left (source A) SBOM
    pub left_sbom_path: Option<String>,
    /// Path to the right (source B) SBOM
    pub right_sbom_path: Option<String>,
    /// Format the left SBOM was read as
    pub left_format: Option<SbomFormat>,
    /// Format the right SBOM was read as
    pub right_format: Option<SbomFormat>,
    /// Declared format version of the left SBOM
    pub left_spec_version: Option<String>,
    /// Declared format version of the right SBOM
    pub right_spec_version: Option<String>,
}

impl ReportMetadata {
    /// The shared input format, if both sides agree
    #[must_use]
    pub fn common_format(&self) -> Option<SbomFormat> {
        match (self.left_format, self.right_format) {
            (Some(l), Some(r)) if l == r => Some(l),
            (Some(f), None) | (None, Some(f)) => Some(f),
            _ => None,
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report; derived from the input format when unset
    pub title: Option<String>,
    /// Input provenance
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Resolve the report title.
    ///
    /// `"SPDX SBOM Comparison Report"` or `"CycloneDX SBOM Comparison Report"`
    /// when both inputs share a format, else a generic title.
    #[must_use]
    pub fn resolved_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match self.metadata.common_format() {
            Some(format) => format!("{} SBOM Comparison Report", format.name()),
            None => "SBOM Comparison Report".to_string(),
        }
    }

    /// Resolve the visible page heading.
    ///
    /// Same as [`Self::resolved_title`] except for two CycloneDX inputs,
    /// whose heading drops "SBOM": `"CycloneDX Comparison Report"`.
    #[must_use]
    pub fn resolved_heading(&self) -> String {
        if self.title.is_none() && self.metadata.common_format() == Some(SbomFormat::CycloneDx) {
            return "CycloneDX Comparison Report".to_string();
        }
        self.resolved_title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_title() {
        let mut config = ReportConfig::default();
        assert_eq!(config.resolved_title(), "SBOM Comparison Report");

        config.metadata.left_format = Some(SbomFormat::Spdx);
        config.metadata.right_format = Some(SbomFormat::Spdx);
        assert_eq!(config.resolved_title(), "SPDX SBOM Comparison Report");

        config.metadata.right_format = Some(SbomFormat::CycloneDx);
        assert_eq!(config.resolved_title(), "SBOM Comparison Report");

        config.title = Some("GIMP 2.10".to_string());
        assert_eq!(config.resolved_title(), "GIMP 2.10");
    }

    #[test]
    fn test_resolved_heading() {
        let mut config = ReportConfig::default();
        config.metadata.left_format = Some(SbomFormat::CycloneDx);
        config.metadata.right_format = Some(SbomFormat::CycloneDx);
        assert_eq!(config.resolved_title(), "CycloneDX SBOM Comparison Report");
        assert_eq!(config.resolved_heading(), "CycloneDX Comparison Report");

        config.metadata.right_format = Some(SbomFormat::Spdx);
        assert_eq!(config.resolved_heading(), "SBOM Comparison Report");

        config.metadata.left_format = Some(SbomFormat::Spdx);
        assert_eq!(config.resolved_heading(), "SPDX SBOM Comparison Report");

        config.metadata.left_format = Some(SbomFormat::CycloneDx);
        config.metadata.right_format = Some(SbomFormat::CycloneDx);
        config.title = Some("GIMP 2.10".to_string());
        assert_eq!(config.resolved_heading(), "GIMP 2.10");
    }

    #[test]
    fn test_report_format_display() {
        assert_eq!(ReportFormat::default(), ReportFormat::Html);
        assert_eq!(ReportFormat::Summary.to_string(), "summary");
    }
}
