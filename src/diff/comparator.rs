//! Merge two package mappings into a classified comparison table.

use crate::model::{ComparisonRow, ComparisonTable, PackageMapping, SourceLabels};
use std::collections::BTreeSet;

/// Compares the packages reported by two SBOM sources.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    labels: SourceLabels,
}

impl Comparator {
    /// Create a comparator with the default source labels
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comparator that names the two sources
    #[must_use]
    pub const fn with_labels(labels: SourceLabels) -> Self {
        Self { labels }
    }

    #[must_use]
    pub const fn labels(&self) -> &SourceLabels {
        &self.labels
    }

    /// Compare `left` (source A) with `right` (source B).
    ///
    /// Produces exactly one row per name in the union of both mappings, in
    /// ascending name order.
    #[must_use]
    pub fn compare(&self, left: &PackageMapping, right: &PackageMapping) -> ComparisonTable {
        let names: BTreeSet<&str> = left.names().chain(right.names()).collect();

        let rows = names
            .into_iter()
            .map(|name| {
                ComparisonRow::new(
                    name,
                    left.get(name).map(str::to_string),
                    right.get(name).map(str::to_string),
                )
            })
            .collect();

        let table = ComparisonTable::new(self.labels.clone(), rows);
        tracing::debug!(
            left = left.len(),
            right = right.len(),
            rows = table.len(),
            "Compared package mappings"
        );
        table
    }
}

/// Compare two mappings with the default source labels.
#[must_use]
pub fn compare_mappings(left: &PackageMapping, right: &PackageMapping) -> ComparisonTable {
    Comparator::new().compare(left, right)
}
