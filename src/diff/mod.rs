//! Cross-source package comparison.
//!
//! The [`Comparator`] takes the union of package names from two
//! [`PackageMapping`](crate::model::PackageMapping)s and classifies each one
//! as a match, a version mismatch, or missing from one side.

mod comparator;

pub use comparator::{compare_mappings, Comparator};
