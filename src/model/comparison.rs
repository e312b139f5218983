//! Comparison rows, classifications and the sorted comparison table.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display text for a version absent from one side.
pub const NOT_FOUND: &str = "Not Found";

/// Display names for the two SBOM sources being compared.
///
/// `left` is source A, `right` is source B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourceLabels {
    /// Name of the tool that produced the left SBOM
    pub left: String,
    /// Name of the tool that produced the right SBOM
    pub right: String,
}

impl SourceLabels {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Labels with the two sides exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self::new(self.right.clone(), self.left.clone())
    }
}

impl Default for SourceLabels {
    fn default() -> Self {
        Self::new("Syft", "Trivy")
    }
}

/// Outcome of comparing one package across both sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Present in both with identical versions
    Match,
    /// Present only in the left source
    MissingInRight,
    /// Present only in the right source
    MissingInLeft,
    /// Present in both with different versions
    VersionMismatch,
}

impl Classification {
    /// Classify a package from the versions found on each side.
    ///
    /// First match wins: equal present versions, then absent on the right,
    /// then absent on the left, otherwise a mismatch. A version that reads
    /// [`NOT_FOUND`] is classified as absent, so two such versions are never
    /// a match.
    #[must_use]
    pub fn classify(left: Option<&str>, right: Option<&str>) -> Self {
        let left = left.filter(|v| *v != NOT_FOUND);
        let right = right.filter(|v| *v != NOT_FOUND);
        match (left, right) {
            (Some(l), Some(r)) if l == r => Self::Match,
            (_, None) => Self::MissingInRight,
            (None, _) => Self::MissingInLeft,
            _ => Self::VersionMismatch,
        }
    }

    /// Human-readable label, naming the source a package is missing from.
    #[must_use]
    pub fn label(&self, labels: &SourceLabels) -> String {
        match self {
            Self::Match => "Match".to_string(),
            Self::MissingInRight => format!("Missing in {}", labels.right),
            Self::MissingInLeft => format!("Missing in {}", labels.left),
            Self::VersionMismatch => "Version Mismatch".to_string(),
        }
    }

    /// Row background color hint.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Match => "#d4edda",
            Self::MissingInRight | Self::MissingInLeft => "#fff3cd",
            Self::VersionMismatch => "#f8d7da",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Match => "✅",
            Self::MissingInRight | Self::MissingInLeft => "⚠️",
            Self::VersionMismatch => "❌",
        }
    }

    /// The classification seen from the other side.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Self::MissingInRight => Self::MissingInLeft,
            Self::MissingInLeft => Self::MissingInRight,
            other => other,
        }
    }

    #[must_use]
    pub const fn is_difference(&self) -> bool {
        !matches!(self, Self::Match)
    }
}

/// One package in the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    pub left_version: Option<String>,
    pub right_version: Option<String>,
    pub classification: Classification,
}

impl ComparisonRow {
    /// Build a row, classifying it from the two versions.
    pub fn new(
        name: impl Into<String>,
        left_version: Option<String>,
        right_version: Option<String>,
    ) -> Self {
        let classification =
            Classification::classify(left_version.as_deref(), right_version.as_deref());
        Self {
            name: name.into(),
            left_version,
            right_version,
            classification,
        }
    }

    /// Left version for display, with [`NOT_FOUND`] standing in for absence.
    #[must_use]
    pub fn left_display(&self) -> &str {
        self.left_version.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Right version for display, with [`NOT_FOUND`] standing in for absence.
    #[must_use]
    pub fn right_display(&self) -> &str {
        self.right_version.as_deref().unwrap_or(NOT_FOUND)
    }

    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.classification.color()
    }
}

/// Per-classification counts over a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total: usize,
    pub matches: usize,
    pub missing_in_left: usize,
    pub missing_in_right: usize,
    pub version_mismatches: usize,
}

impl ComparisonSummary {
    /// Number of rows that are not a match
    #[must_use]
    pub const fn differences(&self) -> usize {
        self.missing_in_left + self.missing_in_right + self.version_mismatches
    }
}

/// Comparison rows sorted ascending by package name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    labels: SourceLabels,
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Build a table, sorting rows by name.
    #[must_use]
    pub fn new(labels: SourceLabels, mut rows: Vec<ComparisonRow>) -> Self {
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Self { labels, rows }
    }

    #[must_use]
    pub const fn labels(&self) -> &SourceLabels {
        &self.labels
    }

    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the row for a package name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComparisonRow> {
        self.rows
            .binary_search_by(|row| row.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.rows[idx])
    }

    /// Label for a row using this table's source names.
    #[must_use]
    pub fn label_for(&self, row: &ComparisonRow) -> String {
        row.classification.label(&self.labels)
    }

    /// Count rows per classification.
    #[must_use]
    pub fn summary(&self) -> ComparisonSummary {
        let mut summary = ComparisonSummary {
            total: self.rows.len(),
            ..Default::default()
        };
        for row in &self.rows {
            match row.classification {
                Classification::Match => summary.matches += 1,
                Classification::MissingInLeft => summary.missing_in_left += 1,
                Classification::MissingInRight => summary.missing_in_right += 1,
                Classification::VersionMismatch => summary.version_mismatches += 1,
            }
        }
        summary
    }

    /// Whether any row is not a match
    #[must_use]
    pub fn has_differences(&self) -> bool {
        self.rows.iter().any(|row| row.classification.is_difference())
    }
}

impl<'a> IntoIterator for &'a ComparisonTable {
    type Item = &'a ComparisonRow;
    type IntoIter = std::slice::Iter<'a, ComparisonRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        assert_eq!(Classification::classify(Some("1.2"), Some("1.2")), Classification::Match);
        assert_eq!(Classification::classify(Some("1.2"), None), Classification::MissingInRight);
        assert_eq!(Classification::classify(None, Some("1.2")), Classification::MissingInLeft);
        assert_eq!(
            Classification::classify(Some("2.0"), Some("3.0")),
            Classification::VersionMismatch
        );
    }

    #[test]
    fn test_classify_both_absent_is_not_a_match() {
        // Unreachable through a key union, but must never read as a match.
        let classification = Classification::classify(None, None);
        assert_ne!(classification, Classification::Match);
        assert_eq!(classification, Classification::MissingInRight);
    }

    #[test]
    fn test_literal_not_found_version_never_matches() {
        assert_ne!(
            Classification::classify(Some(NOT_FOUND), Some(NOT_FOUND)),
            Classification::Match
        );
        assert_eq!(
            Classification::classify(Some(NOT_FOUND), Some(NOT_FOUND)),
            Classification::MissingInRight
        );
        assert_eq!(
            Classification::classify(Some(NOT_FOUND), Some("1.0")),
            Classification::MissingInLeft
        );
        assert_eq!(
            Classification::classify(Some("1.0"), Some(NOT_FOUND)),
            Classification::MissingInRight
        );

        let row = ComparisonRow::new("pkg", Some(NOT_FOUND.into()), Some("1.0".into()));
        assert_eq!(row.classification, Classification::MissingInLeft);
        assert_eq!(row.left_display(), NOT_FOUND);
    }

    #[test]
    fn test_labels_and_colors() {
        let labels = SourceLabels::default();
        assert_eq!(Classification::Match.label(&labels), "Match");
        assert_eq!(Classification::MissingInRight.label(&labels), "Missing in Trivy");
        assert_eq!(Classification::MissingInLeft.label(&labels), "Missing in Syft");
        assert_eq!(Classification::VersionMismatch.label(&labels), "Version Mismatch");

        assert_eq!(Classification::Match.color(), "#d4edda");
        assert_eq!(Classification::MissingInLeft.color(), "#fff3cd");
        assert_eq!(Classification::MissingInRight.color(), "#fff3cd");
        assert_eq!(Classification::VersionMismatch.color(), "#f8d7da");
    }

    #[test]
    fn test_row_display_uses_not_found() {
        let row = ComparisonRow::new("libfoo.so", Some("1.2".into()), None);
        assert_eq!(row.left_display(), "1.2");
        assert_eq!(row.right_display(), "Not Found");
        assert_eq!(row.color(), "#fff3cd");
    }

    #[test]
    fn test_table_sorted_and_summarized() {
        let table = ComparisonTable::new(
            SourceLabels::default(),
            vec![
                ComparisonRow::new("zlib", Some("1.3".into()), Some("1.3".into())),
                ComparisonRow::new("Abc", None, Some("0.1".into())),
                ComparisonRow::new("glib", Some("2.1".into()), Some("2.2".into())),
            ],
        );

        let names: Vec<_> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Abc", "glib", "zlib"]);

        let summary = table.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.missing_in_left, 1);
        assert_eq!(summary.version_mismatches, 1);
        assert_eq!(summary.differences(), 2);
        assert!(table.has_differences());
        assert_eq!(table.get("glib").map(|r| r.classification), Some(Classification::VersionMismatch));
        assert!(table.get("missing").is_none());
    }
}
