//! SBOM loading.
//!
//! SPDX and CycloneDX JSON documents are reduced to a [`PackageMapping`] by a
//! single [`PackageLoader`], parametrized with the format's [`LoaderProfile`].
//!
//! ## Usage
//!
//! ```
//! use sbom_compare::parsers::{load_sbom_str, SbomFormat};
//!
//! let content = r#"{"spdxVersion": "SPDX-2.3",
//!     "packages": [{"name": "/usr/lib/libfoo.so", "versionInfo": "1.2"}]}"#;
//! let loaded = load_sbom_str(content, None).unwrap();
//! assert_eq!(loaded.format, SbomFormat::Spdx);
//! assert_eq!(loaded.packages.get("libfoo.so"), Some("1.2"));
//! ```

mod detection;
mod loader;
mod profile;
mod traits;

pub use detection::{detect_format, DetectionResult};
pub use loader::PackageLoader;
pub use profile::{LoaderProfile, SbomFormat, CYCLONEDX_PROFILE, SPDX_PROFILE};
pub use traits::{FormatConfidence, ParseError};

use crate::model::PackageMapping;
use serde_json::Value;
use std::path::Path;

/// Packages loaded from one SBOM together with the format used to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSbom {
    pub format: SbomFormat,
    /// Declared format version (`2.3`, `1.5`, ...) when the document carries one
    pub spec_version: Option<String>,
    pub packages: PackageMapping,
}

/// Load an already parsed document.
///
/// With `format` unset the format is detected from the document.
pub fn load_sbom_value(doc: &Value, format: Option<SbomFormat>) -> Result<LoadedSbom, ParseError> {
    let detection = detect_format(doc);
    let format = match format {
        Some(format) => format,
        None => detection.format().ok_or_else(|| {
            ParseError::UnknownFormat(
                "no SPDX (spdxVersion/packages) or CycloneDX (bomFormat/components) markers \
                 found; set the input format explicitly"
                    .to_string(),
            )
        })?,
    };
    let spec_version = detection.version.filter(|_| detection.format == Some(format));
    let packages = PackageLoader::for_format(format).load_value(doc)?;
    Ok(LoadedSbom {
        format,
        spec_version,
        packages,
    })
}

/// Load SBOM JSON text.
pub fn load_sbom_str(content: &str, format: Option<SbomFormat>) -> Result<LoadedSbom, ParseError> {
    let doc: Value = serde_json::from_str(content)?;
    load_sbom_value(&doc, format)
}

/// Read an SBOM file as JSON without interpreting it.
///
/// The file handle is released before returning.
pub fn read_sbom_document(path: &Path) -> Result<Value, ParseError> {
    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

/// Read and load an SBOM file.
pub fn load_sbom(path: &Path, format: Option<SbomFormat>) -> Result<LoadedSbom, ParseError> {
    let doc = read_sbom_document(path)?;
    load_sbom_value(&doc, format)
}
