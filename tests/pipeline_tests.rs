//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → compare → report → write pipeline,
//! error handling paths, and the CLI command handler with real fixture files.

use sbom_compare::cli::run_compare;
use sbom_compare::config::{AppConfig, CompareConfig, ComparisonPreset};
use sbom_compare::pipeline::{
    exit_codes, load_pair, load_sbom_with_context, run_comparison, OutputTarget,
};
use sbom_compare::reports::ReportFormat;
use sbom_compare::{ParseError, SbomCompareError, SbomFormat};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn spdx_config(output: &Path) -> CompareConfig {
    CompareConfig::builder()
        .left(fixture_path("spdx/syft.spdx.json"))
        .right(fixture_path("spdx/trivy.spdx.json"))
        .output_file(Some(output.to_path_buf()))
        .quiet(true)
        .build()
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn load_spdx_fixture() {
        let loaded = load_sbom_with_context(&fixture_path("spdx/syft.spdx.json"), None, true)
            .expect("load should succeed");

        assert_eq!(loaded.format, SbomFormat::Spdx);
        assert_eq!(loaded.packages.len(), 7);
        assert_eq!(loaded.packages.get("babl"), Some("0.1.106"));
        assert_eq!(loaded.packages.overwrite_count(), 1);
    }

    #[test]
    fn load_cyclonedx_fixture() {
        let loaded = load_sbom_with_context(&fixture_path("cyclonedx/trivy.cdx.json"), None, true)
            .expect("load should succeed");

        assert_eq!(loaded.format, SbomFormat::CycloneDx);
        assert_eq!(loaded.packages.len(), 5);
        assert_eq!(loaded.packages.get("sqlite"), Some("3.44.0"));
    }

    #[test]
    fn load_with_wrong_forced_format_finds_nothing() {
        let loaded = load_sbom_with_context(
            &fixture_path("spdx/syft.spdx.json"),
            Some(SbomFormat::CycloneDx),
            true,
        )
        .expect("load should succeed");
        assert!(loaded.packages.is_empty());
    }

    #[test]
    fn load_malformed_json_fails() {
        let err = load_sbom_with_context(&fixture_path("malformed.json"), None, true).unwrap_err();
        match err {
            SbomCompareError::Parse { context, source } => {
                assert!(context.contains("malformed.json"));
                assert!(matches!(source, ParseError::JsonError(_)));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_pair_allows_mixed_formats() {
        let (left, right) = load_pair(
            &fixture_path("spdx/syft.spdx.json"),
            &fixture_path("cyclonedx/trivy.cdx.json"),
            None,
            true,
        )
        .expect("mixed formats still load");
        assert_eq!(left.format, SbomFormat::Spdx);
        assert_eq!(right.format, SbomFormat::CycloneDx);
    }
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

mod full_pipeline {
    use super::*;

    #[test]
    fn spdx_html_report_written() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.html");

        let outcome = run_comparison(&spdx_config(&output)).expect("comparison should succeed");
        assert_eq!(outcome.target, OutputTarget::File(output.clone()));
        assert_eq!(outcome.summary.total, 8);

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>SPDX SBOM Comparison Report</title>"));
        assert!(html.contains("<th>Syft Version</th>"));
        assert!(html.contains("<th>Trivy Version</th>"));
        assert_eq!(html.matches("<tr style=").count(), 8);
    }

    #[test]
    fn cyclonedx_report_title() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.html");
        let config = CompareConfig::builder()
            .left(fixture_path("cyclonedx/syft.cdx.json"))
            .right(fixture_path("cyclonedx/trivy.cdx.json"))
            .output_file(Some(output.clone()))
            .quiet(true)
            .build();

        run_comparison(&config).expect("comparison should succeed");
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>CycloneDX SBOM Comparison Report</title>"));
        assert!(html.contains("<h2>CycloneDX Comparison Report</h2>"));
    }

    #[test]
    fn existing_report_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.html");
        std::fs::write(&output, "stale report ".repeat(10_000)).unwrap();

        run_comparison(&spdx_config(&output)).expect("comparison should succeed");
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(!html.contains("stale report"));
    }

    #[test]
    fn json_report_written() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.json");
        let config = CompareConfig {
            output: sbom_compare::OutputConfig {
                format: ReportFormat::Json,
                file: Some(output.clone()),
                title: None,
            },
            ..spdx_config(&output)
        };

        run_comparison(&config).expect("comparison should succeed");
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["summary"]["total"], 8);
        assert_eq!(json["rows"].as_array().map(Vec::len), Some(8));
        assert_eq!(json["metadata"]["left"]["format"], "SPDX");
        assert_eq!(json["metadata"]["left"]["spec_version"], "2.3");
        assert_eq!(json["metadata"]["right"]["spec_version"], "2.3");
    }

    #[test]
    fn missing_left_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.html");
        let config = CompareConfig::builder()
            .left(dir.path().join("absent.json"))
            .right(fixture_path("spdx/trivy.spdx.json"))
            .output_file(Some(output.clone()))
            .quiet(true)
            .build();

        let err = run_comparison(&config).unwrap_err();
        assert!(matches!(err, SbomCompareError::Parse { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-dir").join("report.html");

        let err = run_comparison(&spdx_config(&output)).unwrap_err();
        assert!(matches!(err, SbomCompareError::Io { .. }));
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handler {
    use super::*;

    #[test]
    fn preset_with_fixture_paths() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("SPDX_SBOM_comparison_report_GIMP.html");
        let mut config = ComparisonPreset::Spdx.config(
            AppConfig::default(),
            Some(fixture_path("spdx/syft.spdx.json")),
            Some(fixture_path("spdx/trivy.spdx.json")),
            Some(output.clone()),
        );
        config.behavior.quiet = true;

        let code = run_compare(config).expect("preset run should succeed");
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(output.exists());
    }

    #[test]
    fn fail_on_difference_sets_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.html");
        let mut config = spdx_config(&output);
        config.behavior.fail_on_difference = true;

        let code = run_compare(config).expect("comparison should succeed");
        assert_eq!(code, exit_codes::DIFFERENCES_FOUND);
    }

    #[test]
    fn identical_inputs_pass_fail_on_difference() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.txt");
        let config = CompareConfig::builder()
            .left(fixture_path("spdx/trivy.spdx.json"))
            .right(fixture_path("spdx/trivy.spdx.json"))
            .output_format(ReportFormat::Summary)
            .output_file(Some(output))
            .fail_on_difference(true)
            .quiet(true)
            .build();

        let code = run_compare(config).expect("comparison should succeed");
        assert_eq!(code, exit_codes::SUCCESS);
    }
}
