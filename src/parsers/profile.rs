//! Per-format field names read by the loader.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field names that locate packages inside an SBOM document.
///
/// The SPDX and CycloneDX loaders differ only in these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderProfile {
    /// Top-level array holding the component entries
    pub components_key: &'static str,
    /// Name field inside each entry
    pub name_key: &'static str,
    /// Version field inside each entry
    pub version_key: &'static str,
}

/// SPDX 2.x JSON: `packages[].name` / `packages[].versionInfo`
pub const SPDX_PROFILE: LoaderProfile = LoaderProfile {
    components_key: "packages",
    name_key: "name",
    version_key: "versionInfo",
};

/// CycloneDX JSON: `components[].name` / `components[].version`
pub const CYCLONEDX_PROFILE: LoaderProfile = LoaderProfile {
    components_key: "components",
    name_key: "name",
    version_key: "version",
};

/// Supported SBOM serialization formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SbomFormat {
    Spdx,
    #[value(name = "cyclonedx", alias = "cdx")]
    #[serde(alias = "cdx")]
    CycloneDx,
}

impl SbomFormat {
    /// Human-readable format name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Spdx => "SPDX",
            Self::CycloneDx => "CycloneDX",
        }
    }

    /// Loader field names for this format
    #[must_use]
    pub const fn profile(&self) -> LoaderProfile {
        match self {
            Self::Spdx => SPDX_PROFILE,
            Self::CycloneDx => CYCLONEDX_PROFILE,
        }
    }
}

impl std::fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
