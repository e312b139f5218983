//! Format detection from a parsed JSON document.
//!
//! Document markers (`spdxVersion`, `bomFormat`) give high confidence. A bare
//! component list key only gives low confidence.

use super::profile::SbomFormat;
use super::traits::FormatConfidence;
use serde_json::Value;

/// Result of format detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Detected format, if any
    pub format: Option<SbomFormat>,
    /// Confidence level of the detection
    pub confidence: FormatConfidence,
    /// Declared spec version, e.g. `2.3` or `1.5`
    pub version: Option<String>,
}

impl DetectionResult {
    fn unknown() -> Self {
        Self {
            format: None,
            confidence: FormatConfidence::NONE,
            version: None,
        }
    }

    fn detected(format: SbomFormat, confidence: FormatConfidence, version: Option<String>) -> Self {
        Self {
            format: Some(format),
            confidence,
            version,
        }
    }

    /// The detected format when confidence is sufficient
    #[must_use]
    pub fn format(&self) -> Option<SbomFormat> {
        self.format.filter(|_| self.confidence.can_load())
    }
}

/// Detect the SBOM format of a parsed JSON document.
#[must_use]
pub fn detect_format(doc: &Value) -> DetectionResult {
    let Some(obj) = doc.as_object() else {
        return DetectionResult::unknown();
    };

    if let Some(spdx_version) = obj.get("spdxVersion").and_then(Value::as_str) {
        let version = spdx_version.strip_prefix("SPDX-").unwrap_or(spdx_version);
        return DetectionResult::detected(
            SbomFormat::Spdx,
            FormatConfidence::HIGH,
            Some(version.to_string()),
        );
    }
    if obj.contains_key("SPDXID") {
        return DetectionResult::detected(SbomFormat::Spdx, FormatConfidence::HIGH, None);
    }

    if obj.get("bomFormat").and_then(Value::as_str) == Some("CycloneDX") {
        let version = obj
            .get("specVersion")
            .and_then(Value::as_str)
            .map(str::to_string);
        return DetectionResult::detected(SbomFormat::CycloneDx, FormatConfidence::HIGH, version);
    }

    let has_array = |key: &str| obj.get(key).is_some_and(Value::is_array);
    match (has_array("packages"), has_array("components")) {
        (true, false) => DetectionResult::detected(SbomFormat::Spdx, FormatConfidence::LOW, None),
        (false, true) => {
            DetectionResult::detected(SbomFormat::CycloneDx, FormatConfidence::LOW, None)
        }
        _ => DetectionResult::unknown(),
    }
}
