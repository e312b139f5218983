//! HTML report generator.
//!
//! Package names and versions are written verbatim; SBOM content is treated
//! as trusted input.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::ComparisonTable;
use std::fmt::Write;

/// HTML report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn get_styles() -> &'static str {
        r"    <style>
        body { font-family: Arial, sans-serif; padding: 20px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ccc; padding: 10px; text-align: left; }
        th { background-color: #f2f2f2; }
    </style>"
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(
        &self,
        table: &ComparisonTable,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = config.resolved_title();
        let labels = table.labels();

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html>")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"utf-8\">")?;
        writeln!(html, "    <title>{title}</title>")?;
        writeln!(html, "{}", Self::get_styles())?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "    <h2>{}</h2>", config.resolved_heading())?;
        writeln!(html, "    <table>")?;
        writeln!(html, "        <tr>")?;
        writeln!(html, "            <th>Package</th>")?;
        writeln!(html, "            <th>{} Version</th>", labels.left)?;
        writeln!(html, "            <th>{} Version</th>", labels.right)?;
        writeln!(html, "            <th>Notes</th>")?;
        writeln!(html, "        </tr>")?;

        for row in table {
            writeln!(
                html,
                "        <tr style=\"background-color: {};\">",
                row.color()
            )?;
            writeln!(html, "            <td>{}</td>", row.name)?;
            writeln!(html, "            <td>{}</td>", row.left_display())?;
            writeln!(html, "            <td>{}</td>", row.right_display())?;
            writeln!(
                html,
                "            <td>{} {}</td>",
                row.classification.icon(),
                table.label_for(row)
            )?;
            writeln!(html, "        </tr>")?;
        }

        writeln!(html, "    </table>")?;
        writeln!(html, "</body>")?;
        write!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}
