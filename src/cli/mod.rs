//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.

mod compare;

pub use compare::run_compare;

// Re-export config types used by handlers
pub use crate::config::{ComparisonPreset, CompareConfig};
