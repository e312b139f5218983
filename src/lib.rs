//! **Package-level comparison of two Software Bills of Materials.**
//!
//! `sbom-compare` reads two SBOMs of the same software (typically produced by
//! different tools such as Syft and Trivy), reduces each to a mapping from
//! package name to version, and reports which packages match, which differ in
//! version, and which are present on only one side.
//!
//! SPDX 2.x JSON and CycloneDX JSON are supported. Reports are rendered as a
//! color-coded static HTML table, JSON, or a plain-text summary.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: loads a document into a [`PackageMapping`]. Package names
//!   are cleaned of path prefixes and duplicate names keep the last version.
//! - **[`diff`]**: the [`Comparator`] classifies every package in the union of
//!   both mappings.
//! - **[`reports`]**: renders a [`ComparisonTable`] via a [`ReportGenerator`].
//! - **[`pipeline`]**: [`run_comparison`] chains load → compare → render → write.
//! - **[`config`]**: file and CLI configuration, presets and validation.
//!
//! ## Comparing two SBOMs in memory
//!
//! ```
//! use sbom_compare::{load_sbom_str, Classification, Comparator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let syft = load_sbom_str(
//!         r#"{"spdxVersion": "SPDX-2.3", "packages": [
//!             {"name": "glib", "versionInfo": "2.78.0"},
//!             {"name": "zlib", "versionInfo": "1.3"}]}"#,
//!         None,
//!     )?;
//!     let trivy = load_sbom_str(
//!         r#"{"spdxVersion": "SPDX-2.3", "packages": [
//!             {"name": "glib", "versionInfo": "2.78.1"}]}"#,
//!         None,
//!     )?;
//!
//!     let table = Comparator::new().compare(&syft.packages, &trivy.packages);
//!     assert_eq!(table.len(), 2);
//!     assert_eq!(
//!         table.get("glib").map(|row| row.classification),
//!         Some(Classification::VersionMismatch)
//!     );
//!     assert_eq!(
//!         table.get("zlib").map(|row| row.classification),
//!         Some(Classification::MissingInRight)
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Writing an HTML report
//!
//! ```no_run
//! use sbom_compare::{run_comparison, CompareConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CompareConfig::builder()
//!         .left("syft-spdx-gimp.json")
//!         .right("trivy-spdx-gimp.json")
//!         .output_file(Some("SPDX_SBOM_comparison_report_GIMP.html".into()))
//!         .build();
//!
//!     let outcome = run_comparison(&config)?;
//!     println!("{} packages differ", outcome.summary.differences());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, BehaviorConfig, InputConfig, OutputConfig};
pub use config::{CompareConfig, CompareConfigBuilder, ComparePaths, ComparisonPreset};
pub use config::{ConfigError, Validatable};
pub use diff::{compare_mappings, Comparator};
pub use error::{ErrorContext, Result, SbomCompareError};
pub use model::{
    clean_package_name, Classification, ComparisonRow, ComparisonSummary, ComparisonTable,
    PackageMapping, PackageRecord, SourceLabels,
};
pub use parsers::{load_sbom, load_sbom_str, LoadedSbom, PackageLoader, ParseError, SbomFormat};
pub use pipeline::{run_comparison, ComparisonOutcome};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
