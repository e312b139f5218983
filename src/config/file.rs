//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::parsers::SbomFormat;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-compare.yaml",
    ".sbom-compare.yml",
    "sbom-compare.yaml",
    "sbom-compare.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/sbom-compare/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = cwd
        .as_deref()
        .and_then(find_git_root)
        .and_then(|root| find_config_in_dir(&root))
    {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("sbom-compare")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Command-Line Overrides
// ============================================================================

/// Settings given on the command line.
///
/// A `None` (or unset flag) keeps whatever the file says; anything given
/// wins, even when it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub input_format: Option<SbomFormat>,
    pub output_format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub title: Option<String>,
    pub quiet: bool,
    pub fail_on_difference: bool,
}

impl AppConfig {
    /// Apply command-line overrides on top of this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(left) = &overrides.left_label {
            self.labels.left.clone_from(left);
        }
        if let Some(right) = &overrides.right_label {
            self.labels.right.clone_from(right);
        }

        if overrides.input_format.is_some() {
            self.input.format = overrides.input_format;
        }

        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if overrides.title.is_some() {
            self.output.title.clone_from(&overrides.title);
        }

        // Flags can only switch behavior on
        self.behavior.quiet |= overrides.quiet;
        self.behavior.fail_on_difference |= overrides.fail_on_difference;
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Render a config as YAML.
pub fn config_to_yaml(config: &AppConfig) -> Result<String, ConfigFileError> {
    Ok(serde_yaml::to_string(config)?)
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# sbom-compare configuration
# Place this file at .sbom-compare.yaml in your project root
# or ~/.config/sbom-compare/sbom-compare.yaml for global config.
#
# CLI arguments always override file settings.

# Names of the tools that produced each SBOM
labels:
  left: Syft
  right: Trivy

input:
  # Format of both inputs: spdx or cyclonedx (null detects it per file)
  format: null

output:
  # Report format: html, json, summary
  format: html
  # Output file path (omit for stdout)
  # file: SPDX_SBOM_comparison_report_GIMP.html
  # Report title (derived from the input format when omitted)
  # title: GIMP SBOM Comparison

behavior:
  # Suppress non-essential output
  quiet: false
  # Exit with code 1 when any package differs
  fail_on_difference: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
