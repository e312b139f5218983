//! Data model for SBOM comparison.
//!
//! Each SBOM is reduced to a [`PackageMapping`] (cleaned package name →
//! version). Two mappings are merged into a [`ComparisonTable`] of
//! [`ComparisonRow`]s, each carrying a [`Classification`].
//!
//! Absence is represented as `None` throughout; the display text
//! [`NOT_FOUND`] only appears when a row is rendered.

mod comparison;
mod package;

pub use comparison::*;
pub use package::*;
