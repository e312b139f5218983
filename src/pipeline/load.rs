//! SBOM loading stage.

use crate::error::{ErrorContext, Result};
use crate::parsers::{detect_format, load_sbom_value, read_sbom_document, LoadedSbom, SbomFormat};
use serde_json::Value;
use std::path::Path;

/// Load one SBOM file, adding the path to any error.
pub fn load_sbom_with_context(
    path: &Path,
    format: Option<SbomFormat>,
    quiet: bool,
) -> Result<LoadedSbom> {
    let doc = read_with_context(path, quiet)?;
    load_document(path, &doc, format, quiet)
}

/// Load both sides of a comparison.
///
/// Without an explicit format each side is detected on its own. When only
/// one side can be detected, its format is used for both. Fails before
/// anything is rendered if either document cannot be loaded.
pub fn load_pair(
    left: &Path,
    right: &Path,
    format: Option<SbomFormat>,
    quiet: bool,
) -> Result<(LoadedSbom, LoadedSbom)> {
    let left_doc = read_with_context(left, quiet)?;
    let right_doc = read_with_context(right, quiet)?;

    let (left_format, right_format) = match format {
        Some(format) => (Some(format), Some(format)),
        None => resolve_formats(
            left,
            detect_format(&left_doc).format(),
            right,
            detect_format(&right_doc).format(),
        ),
    };

    let left = load_document(left, &left_doc, left_format, quiet)?;
    let right = load_document(right, &right_doc, right_format, quiet)?;

    if left.format != right.format {
        tracing::warn!(
            "Comparing a {} SBOM with a {} SBOM",
            left.format,
            right.format
        );
    }

    Ok((left, right))
}

/// Borrow the detected format of one side for an undetectable other side.
fn resolve_formats(
    left: &Path,
    left_format: Option<SbomFormat>,
    right: &Path,
    right_format: Option<SbomFormat>,
) -> (Option<SbomFormat>, Option<SbomFormat>) {
    match (left_format, right_format) {
        (Some(format), None) => {
            tracing::warn!(
                "Could not detect the format of {}; reading it as {} like {}",
                right.display(),
                format,
                left.display()
            );
            (Some(format), Some(format))
        }
        (None, Some(format)) => {
            tracing::warn!(
                "Could not detect the format of {}; reading it as {} like {}",
                left.display(),
                format,
                right.display()
            );
            (Some(format), Some(format))
        }
        formats => formats,
    }
}

fn read_with_context(path: &Path, quiet: bool) -> Result<Value> {
    if !quiet {
        tracing::info!("Loading SBOM: {}", path.display());
    }
    read_sbom_document(path).with_context(|| format!("reading {}", path.display()))
}

fn load_document(
    path: &Path,
    doc: &Value,
    format: Option<SbomFormat>,
    quiet: bool,
) -> Result<LoadedSbom> {
    let loaded =
        load_sbom_value(doc, format).with_context(|| format!("reading {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Loaded {} packages from {} ({}{})",
            loaded.packages.len(),
            path.display(),
            loaded.format,
            loaded
                .spec_version
                .as_deref()
                .map(|v| format!(" {v}"))
                .unwrap_or_default()
        );
    }
    loaded.packages.log_overwrite_summary();

    Ok(loaded)
}
