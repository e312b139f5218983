//! Package records and the name → version mapping built by the loader.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder used when a component has no name or no version.
pub const UNKNOWN: &str = "Unknown";

/// Strip any directory prefix from a raw package identifier.
///
/// Only the final path segment is kept, so `/usr/lib/libfoo.so` and
/// `libfoo.so` resolve to the same key. Only `/` separates segments; a
/// backslash is part of the name. The operation is idempotent.
#[must_use]
pub fn clean_package_name(raw: &str) -> &str {
    raw.rsplit('/').next().unwrap_or(raw)
}

/// A single package as read from an SBOM component entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Name with any path prefix removed
    pub name: String,
    /// Version as reported by the source document, if any
    pub version: Option<String>,
}

impl PackageRecord {
    /// Build a record from the raw fields of a component entry.
    ///
    /// A missing name becomes [`UNKNOWN`] before path stripping.
    #[must_use]
    pub fn from_raw(raw_name: Option<&str>, version: Option<String>) -> Self {
        let raw_name = raw_name.unwrap_or(UNKNOWN);
        Self {
            name: clean_package_name(raw_name).to_string(),
            version,
        }
    }

    /// Version text, falling back to [`UNKNOWN`].
    #[must_use]
    pub fn version_or_unknown(&self) -> &str {
        self.version.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Mapping from cleaned package name to version string.
///
/// Keys are unique. Inserting an existing name overwrites its version, so the
/// last occurrence in a component list wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageMapping {
    entries: IndexMap<String, String>,
    /// Number of inserts that replaced an existing name
    #[serde(skip)]
    overwrite_count: usize,
}

impl PackageMapping {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, resolving a missing version to [`UNKNOWN`].
    ///
    /// Returns the previous version when the name was already present.
    pub fn insert(&mut self, record: PackageRecord) -> Option<String> {
        let version = record.version_or_unknown().to_string();
        self.insert_version(record.name, version)
    }

    /// Insert a name/version pair directly.
    pub fn insert_version(
        &mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let previous = self.entries.insert(name.clone(), version.into());
        if let Some(ref old) = previous {
            self.overwrite_count += 1;
            tracing::debug!(package = %name, previous = %old, "Duplicate package name, keeping last version");
        }
        previous
    }

    /// Look up the version recorded for a name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether the mapping holds a name
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Package names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of inserts that overwrote an existing entry
    #[must_use]
    pub const fn overwrite_count(&self) -> usize {
        self.overwrite_count
    }

    /// Log a single summary line if duplicate names were collapsed.
    pub fn log_overwrite_summary(&self) {
        if self.overwrite_count > 0 {
            tracing::info!(
                overwrite_count = self.overwrite_count,
                "{} package entries shared a name with an earlier entry and replaced its version",
                self.overwrite_count
            );
        }
    }
}

impl PartialEq for PackageMapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PackageMapping {}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for PackageMapping {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (name, version) in iter {
            mapping.insert_version(name, version);
        }
        mapping
    }
}

impl FromIterator<PackageRecord> for PackageMapping {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for record in iter {
            mapping.insert(record);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_package_name_strips_prefix() {
        assert_eq!(clean_package_name("/path/to/ScriptFramework.jar"), "ScriptFramework.jar");
        assert_eq!(clean_package_name("libfoo.so"), "libfoo.so");
    }

    #[test]
    fn test_clean_package_name_keeps_backslashes() {
        assert_eq!(
            clean_package_name(r"C:\Program Files\gimp\gimp.exe"),
            r"C:\Program Files\gimp\gimp.exe"
        );
        assert_eq!(clean_package_name(r"/opt/win\lib.dll"), r"win\lib.dll");
    }

    #[test]
    fn test_clean_package_name_trailing_separator() {
        assert_eq!(clean_package_name("/opt/lib/"), "");
        assert_eq!(clean_package_name(""), "");
    }

    #[test]
    fn test_clean_package_name_idempotent() {
        for raw in ["/a/b/c.jar", "c.jar", "a\\b", "/", "x/"] {
            let once = clean_package_name(raw);
            assert_eq!(clean_package_name(once), once);
        }
    }

    #[test]
    fn test_record_defaults() {
        let record = PackageRecord::from_raw(None, None);
        assert_eq!(record.name, "Unknown");
        assert_eq!(record.version_or_unknown(), "Unknown");

        let record = PackageRecord::from_raw(Some("/usr/lib/libz.so.1"), Some("1.3".to_string()));
        assert_eq!(record.name, "libz.so.1");
        assert_eq!(record.version_or_unknown(), "1.3");
    }

    #[test]
    fn test_mapping_last_write_wins() {
        let mut mapping = PackageMapping::new();
        assert_eq!(
            mapping.insert(PackageRecord::from_raw(Some("/usr/lib/libfoo.so"), Some("1.0".into()))),
            None
        );
        let previous =
            mapping.insert(PackageRecord::from_raw(Some("libfoo.so"), Some("2.0".into())));

        assert_eq!(previous.as_deref(), Some("1.0"));
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("libfoo.so"), Some("2.0"));
        assert_eq!(mapping.overwrite_count(), 1);
    }

    #[test]
    fn test_mapping_from_pairs() {
        let mapping: PackageMapping = [("b", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(mapping.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert!(mapping.contains("a"));
        assert!(!mapping.contains("c"));
    }
}
