//! Plain-text summary for terminal output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::ComparisonTable;
use std::fmt::Write;

/// Summary reporter: classification counts plus the differing packages
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReporter;

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        table: &ComparisonTable,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let labels = table.labels();
        let summary = table.summary();

        writeln!(out, "{}", config.resolved_title())?;
        writeln!(out, "  Packages:              {}", summary.total)?;
        writeln!(out, "  Match:                 {}", summary.matches)?;
        writeln!(out, "  Version Mismatch:      {}", summary.version_mismatches)?;
        writeln!(
            out,
            "  Missing in {}: {}",
            labels.right, summary.missing_in_right
        )?;
        writeln!(out, "  Missing in {}: {}", labels.left, summary.missing_in_left)?;

        if summary.differences() > 0 {
            writeln!(out)?;
            for row in table.iter().filter(|r| r.classification.is_difference()) {
                writeln!(
                    out,
                    "  {} {}: {} / {} ({})",
                    row.classification.icon(),
                    row.name,
                    row.left_display(),
                    row.right_display(),
                    table.label_for(row)
                )?;
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
