//! Package loader shared by all SBOM formats.

use super::profile::{LoaderProfile, SbomFormat};
use super::traits::ParseError;
use crate::model::{PackageMapping, PackageRecord};
use serde_json::Value;

/// Builds a [`PackageMapping`] from an SBOM document.
///
/// The loader is format-agnostic; a [`LoaderProfile`] tells it which keys hold
/// the component list, the name and the version.
#[derive(Debug, Clone, Copy)]
pub struct PackageLoader {
    profile: LoaderProfile,
}

impl PackageLoader {
    /// Create a loader for an explicit profile
    #[must_use]
    pub const fn new(profile: LoaderProfile) -> Self {
        Self { profile }
    }

    /// Create a loader for a known format
    #[must_use]
    pub const fn for_format(format: SbomFormat) -> Self {
        Self::new(format.profile())
    }

    #[must_use]
    pub const fn profile(&self) -> &LoaderProfile {
        &self.profile
    }

    /// Load packages from JSON text.
    pub fn load_str(&self, content: &str) -> Result<PackageMapping, ParseError> {
        let doc: Value = serde_json::from_str(content)?;
        self.load_value(&doc)
    }

    /// Load packages from a JSON reader.
    pub fn load_reader<R: std::io::Read>(&self, reader: R) -> Result<PackageMapping, ParseError> {
        let doc: Value = serde_json::from_reader(reader)?;
        self.load_value(&doc)
    }

    /// Load packages from an already parsed document.
    ///
    /// A missing or `null` component list yields an empty mapping. Entries
    /// that are not objects are skipped.
    pub fn load_value(&self, doc: &Value) -> Result<PackageMapping, ParseError> {
        let obj = doc.as_object().ok_or_else(|| {
            ParseError::InvalidStructure("top-level JSON value is not an object".to_string())
        })?;

        let entries = match obj.get(self.profile.components_key) {
            None | Some(Value::Null) => return Ok(PackageMapping::new()),
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(ParseError::InvalidStructure(format!(
                    "'{}' is not an array",
                    self.profile.components_key
                )))
            }
        };

        let mut mapping = PackageMapping::new();
        for (idx, entry) in entries.iter().enumerate() {
            match self.record_from_entry(entry) {
                Some(record) => {
                    mapping.insert(record);
                }
                None => tracing::warn!(
                    index = idx,
                    "Skipping {} entry that is not an object",
                    self.profile.components_key
                ),
            }
        }
        Ok(mapping)
    }

    fn record_from_entry(&self, entry: &Value) -> Option<PackageRecord> {
        let fields = entry.as_object()?;
        let name = fields.get(self.profile.name_key).and_then(scalar_text);
        let version = fields.get(self.profile.version_key).and_then(scalar_text);
        Some(PackageRecord::from_raw(name.as_deref(), version))
    }
}

/// Text of a scalar JSON value; `null`, arrays and objects count as missing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
