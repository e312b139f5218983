//! Configuration module for sbom-compare.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Per-format presets with the conventional input/output file names
//! - YAML config file loading and discovery
//! - Command-line overrides on top of file settings
//!
//! # Configuration File
//!
//! Place a `.sbom-compare.yaml` file in your project root or
//! `~/.config/sbom-compare/`:
//!
//! ```yaml
//! labels:
//!   left: Syft
//!   right: Trivy
//! output:
//!   format: html
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ComparisonPreset;
pub use types::{
    AppConfig, BehaviorConfig, CompareConfig, CompareConfigBuilder, ComparePaths, InputConfig,
    OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_to_yaml, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
