//! Compare command handler.
//!
//! Implements the `compare`, `spdx` and `cyclonedx` subcommands.

use crate::config::CompareConfig;
use crate::pipeline::{run_comparison, ComparisonOutcome, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::{Context, Result};

/// Run a comparison, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let outcome = run_comparison(&config).with_context(|| {
        format!(
            "failed to compare {} with {}",
            config.paths.left.display(),
            config.paths.right.display()
        )
    })?;

    if let Some(line) = confirmation_line(&config, &outcome) {
        println!("{line}");
    }

    Ok(outcome.exit_code(&config))
}

/// The line printed after a report file is written.
///
/// Nothing is printed when the report itself went to stdout or in quiet mode.
fn confirmation_line(config: &CompareConfig, outcome: &ComparisonOutcome) -> Option<String> {
    if config.behavior.quiet {
        return None;
    }
    match &outcome.target {
        OutputTarget::Stdout => None,
        OutputTarget::File(path) => {
            let kind = match config.output.format {
                ReportFormat::Html => "HTML report",
                ReportFormat::Json => "JSON report",
                ReportFormat::Summary => "Summary",
            };
            Some(format!("✅ {kind} saved as: {}", path.display()))
        }
    }
}
