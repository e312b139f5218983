//! Configuration types for sbom-compare operations.

use crate::model::SourceLabels;
use crate::parsers::SbomFormat;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Settings that can come from a config file, CLI arguments, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Display names for the two SBOM sources
    pub labels: SourceLabels,
    /// Input handling
    pub input: InputConfig,
    /// Report output
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Input handling configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// Format for both inputs; detected per document when unset
    pub format: Option<SbomFormat>,
}

/// Report output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout if unset)
    pub file: Option<PathBuf>,
    /// Report title; derived from the input format when unset
    pub title: Option<String>,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when any package differs
    pub fail_on_difference: bool,
}

// ============================================================================
// Comparison run configuration
// ============================================================================

/// Paths of the two SBOMs being compared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparePaths {
    /// Source A SBOM
    pub left: PathBuf,
    /// Source B SBOM
    pub right: PathBuf,
}

/// Everything one comparison run needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareConfig {
    pub paths: ComparePaths,
    pub labels: SourceLabels,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

impl CompareConfig {
    /// Build a run configuration from file/CLI settings and input paths.
    #[must_use]
    pub fn from_app(app: AppConfig, paths: ComparePaths) -> Self {
        Self {
            paths,
            labels: app.labels,
            input: app.input,
            output: app.output,
            behavior: app.behavior,
        }
    }

    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::default()
    }
}

/// Builder for [`CompareConfig`]
#[derive(Debug, Default)]
#[must_use]
pub struct CompareConfigBuilder {
    config: CompareConfig,
}

impl CompareConfigBuilder {
    /// Set the left (source A) SBOM path
    pub fn left(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.paths.left = path.into();
        self
    }

    /// Set the right (source B) SBOM path
    pub fn right(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.paths.right = path.into();
        self
    }

    pub fn labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.config.labels = SourceLabels::new(left, right);
        self
    }

    /// Force the input format instead of detecting it
    pub const fn input_format(mut self, format: Option<SbomFormat>) -> Self {
        self.config.input.format = format;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.config.output.title = title;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    pub const fn fail_on_difference(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_difference = fail;
        self
    }

    #[must_use]
    pub fn build(self) -> CompareConfig {
        self.config
    }
}
