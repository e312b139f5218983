//! Configuration validation for sbom-compare.

use super::types::{AppConfig, CompareConfig, OutputConfig};
use crate::model::SourceLabels;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for SourceLabels {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.left.trim().is_empty() {
            errors.push(ConfigError::new("labels.left", "must not be empty"));
        }
        if self.right.trim().is_empty() {
            errors.push(ConfigError::new("labels.right", "must not be empty"));
        }
        if !self.left.trim().is_empty() && self.left == self.right {
            errors.push(ConfigError::new(
                "labels",
                format!(
                    "left and right are both '{}'; missing-package notes would be ambiguous",
                    self.left
                ),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                errors.push(ConfigError::new("output.title", "must not be empty when set"));
            }
        }
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                errors.push(ConfigError::new("output.file", "must not be empty when set"));
            }
        }
        errors
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.labels.validate();
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for CompareConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.labels.validate();
        errors.extend(self.output.validate());
        if self.paths.left.as_os_str().is_empty() {
            errors.push(ConfigError::new("paths.left", "SBOM path is required"));
        }
        if self.paths.right.as_os_str().is_empty() {
            errors.push(ConfigError::new("paths.right", "SBOM path is required"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_app_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_empty_and_duplicate_labels() {
        let errors = SourceLabels::new("", "Trivy").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "labels.left");

        let errors = SourceLabels::new("Syft", "Syft").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "labels");
    }

    #[test]
    fn test_blank_title_rejected() {
        let output = OutputConfig {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!output.is_valid());
    }

    #[test]
    fn test_compare_config_requires_paths() {
        let config = CompareConfig::builder().left("syft.json").build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "paths.right");

        let config = CompareConfig::builder()
            .left(PathBuf::from("a.json"))
            .right(PathBuf::from("b.json"))
            .build();
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("labels.left", "must not be empty");
        assert_eq!(err.to_string(), "labels.left: must not be empty");
    }
}
