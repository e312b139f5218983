//! Built-in comparison presets.
//!
//! Each preset fixes the input format and the conventional file names used
//! when comparing Syft and Trivy output for the GIMP SBOMs.

use super::types::{AppConfig, ComparePaths, CompareConfig};
use crate::parsers::SbomFormat;
use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Named comparison presets, one per SBOM format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonPreset {
    /// `syft-spdx-gimp.json` vs `trivy-spdx-gimp.json`
    Spdx,
    /// `syft-cyclonedx-gimp.json` vs `trivy-cyclonedx-gimp.json`
    CycloneDx,
}

impl ComparisonPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Spdx => "spdx",
            Self::CycloneDx => "cyclonedx",
        }
    }

    #[must_use]
    pub const fn format(&self) -> SbomFormat {
        match self {
            Self::Spdx => SbomFormat::Spdx,
            Self::CycloneDx => SbomFormat::CycloneDx,
        }
    }

    #[must_use]
    pub const fn default_left_path(&self) -> &'static str {
        match self {
            Self::Spdx => "syft-spdx-gimp.json",
            Self::CycloneDx => "syft-cyclonedx-gimp.json",
        }
    }

    #[must_use]
    pub const fn default_right_path(&self) -> &'static str {
        match self {
            Self::Spdx => "trivy-spdx-gimp.json",
            Self::CycloneDx => "trivy-cyclonedx-gimp.json",
        }
    }

    #[must_use]
    pub const fn default_output_path(&self) -> &'static str {
        match self {
            Self::Spdx => "SPDX_SBOM_comparison_report_GIMP.html",
            Self::CycloneDx => "CycloneDX_SBOM_comparison_report_GIMP.html",
        }
    }

    /// Build a run configuration for this preset.
    ///
    /// Paths left as `None` fall back to the preset defaults. The input format
    /// is pinned and the report is HTML.
    #[must_use]
    pub fn config(
        &self,
        app: AppConfig,
        left: Option<PathBuf>,
        right: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> CompareConfig {
        let paths = ComparePaths {
            left: left.unwrap_or_else(|| PathBuf::from(self.default_left_path())),
            right: right.unwrap_or_else(|| PathBuf::from(self.default_right_path())),
        };
        let mut config = CompareConfig::from_app(app, paths);
        config.input.format = Some(self.format());
        config.output.format = ReportFormat::Html;
        config.output.file =
            Some(output.unwrap_or_else(|| PathBuf::from(self.default_output_path())));
        config
    }
}

impl std::fmt::Display for ComparisonPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceLabels;

    #[test]
    fn test_spdx_preset_defaults() {
        let config = ComparisonPreset::Spdx.config(AppConfig::default(), None, None, None);
        assert_eq!(config.paths.left, PathBuf::from("syft-spdx-gimp.json"));
        assert_eq!(config.paths.right, PathBuf::from("trivy-spdx-gimp.json"));
        assert_eq!(
            config.output.file,
            Some(PathBuf::from("SPDX_SBOM_comparison_report_GIMP.html"))
        );
        assert_eq!(config.input.format, Some(SbomFormat::Spdx));
        assert_eq!(config.labels, SourceLabels::new("Syft", "Trivy"));
    }

    #[test]
    fn test_cyclonedx_preset_overrides() {
        let config = ComparisonPreset::CycloneDx.config(
            AppConfig::default(),
            Some(PathBuf::from("a.cdx.json")),
            None,
            Some(PathBuf::from("out/report.html")),
        );
        assert_eq!(config.paths.left, PathBuf::from("a.cdx.json"));
        assert_eq!(config.paths.right, PathBuf::from("trivy-cyclonedx-gimp.json"));
        assert_eq!(config.output.file, Some(PathBuf::from("out/report.html")));
        assert_eq!(config.input.format, Some(SbomFormat::CycloneDx));
    }

    #[test]
    fn test_preset_forces_html() {
        let mut app = AppConfig::default();
        app.output.format = ReportFormat::Json;
        let config = ComparisonPreset::Spdx.config(app, None, None, None);
        assert_eq!(config.output.format, ReportFormat::Html);
    }

    #[test]
    fn test_all_presets_write_html() {
        for preset in [ComparisonPreset::Spdx, ComparisonPreset::CycloneDx] {
            assert!(preset.default_output_path().ends_with(".html"), "{preset}");
            assert_ne!(preset.default_left_path(), preset.default_right_path());
        }
    }
}
