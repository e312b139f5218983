//! Pipeline orchestration: load → load → compare → report.
//!
//! [`run_comparison`] is the single entry point used by the CLI. Each stage is
//! also exported so callers can run the pure steps on in-memory data.

mod load;
mod output;
mod report_stage;

pub use load::{load_pair, load_sbom_with_context};
pub use output::{write_output, OutputTarget};
pub use report_stage::{output_report, report_config};

use crate::config::{CompareConfig, Validatable};
use crate::diff::Comparator;
use crate::error::Result;
use crate::model::{ComparisonSummary, ComparisonTable};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success (or differences found without `--fail-on-difference`)
    pub const SUCCESS: i32 = 0;
    /// Differences were found and `--fail-on-difference` was set
    pub const DIFFERENCES_FOUND: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Result of a completed comparison run
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub table: ComparisonTable,
    pub summary: ComparisonSummary,
    /// Where the report was written
    pub target: OutputTarget,
}

impl ComparisonOutcome {
    /// Exit code for this outcome under the given configuration
    #[must_use]
    pub fn exit_code(&self, config: &CompareConfig) -> i32 {
        if config.behavior.fail_on_difference && self.summary.differences() > 0 {
            exit_codes::DIFFERENCES_FOUND
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Run a full comparison.
///
/// Nothing is written unless both SBOMs load; an existing report file is
/// replaced on success.
pub fn run_comparison(config: &CompareConfig) -> Result<ComparisonOutcome> {
    let mut errors = config.validate().into_iter();
    if let Some(first) = errors.next() {
        for other in errors {
            tracing::warn!("Invalid configuration: {other}");
        }
        return Err(first.into());
    }

    let quiet = config.behavior.quiet;
    let (left, right) = load_pair(
        &config.paths.left,
        &config.paths.right,
        config.input.format,
        quiet,
    )?;

    let table = Comparator::with_labels(config.labels.clone()).compare(&left.packages, &right.packages);
    let summary = table.summary();
    if !quiet {
        tracing::info!(
            "Compared {} packages: {} match, {} version mismatches, {} missing in {}, {} missing in {}",
            summary.total,
            summary.matches,
            summary.version_mismatches,
            summary.missing_in_right,
            config.labels.right,
            summary.missing_in_left,
            config.labels.left
        );
    }

    let report_config = report_config(config, &left, &right);
    let target = output_report(config, &table, &report_config)?;

    Ok(ComparisonOutcome {
        table,
        summary,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SbomCompareError;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::DIFFERENCES_FOUND, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }

    #[test]
    fn test_invalid_config_rejected_before_loading() {
        let config = CompareConfig::builder()
            .left("/nonexistent/a.json")
            .right("/nonexistent/b.json")
            .labels("Same", "Same")
            .build();
        match run_comparison(&config) {
            Err(SbomCompareError::Config(msg)) => assert!(msg.starts_with("labels:")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_exit_code() {
        let outcome = ComparisonOutcome {
            table: ComparisonTable::default(),
            summary: ComparisonSummary {
                total: 1,
                missing_in_left: 1,
                ..Default::default()
            },
            target: OutputTarget::Stdout,
        };
        let lenient = CompareConfig::default();
        let strict = CompareConfig::builder().fail_on_difference(true).build();
        assert_eq!(outcome.exit_code(&lenient), exit_codes::SUCCESS);
        assert_eq!(outcome.exit_code(&strict), exit_codes::DIFFERENCES_FOUND);
    }
}
