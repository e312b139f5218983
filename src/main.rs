//! sbom-compare: package-level SBOM comparison tool
//!
//! Compares the packages listed in two SPDX or `CycloneDX` SBOMs and writes a
//! color-coded report.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_compare::{
    cli,
    config::{AppConfig, CompareConfig, ComparePaths, ComparisonPreset, ConfigOverrides},
    parsers::SbomFormat,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM Formats:",
        "\n  SPDX:      2.x (JSON)",
        "\n  CycloneDX: 1.x (JSON)",
        "\n\nOutput Formats:",
        "\n  html, json, summary"
    )
}

#[derive(Parser)]
#[command(name = "sbom-compare")]
#[command(version, long_version = build_long_version())]
#[command(about = "Compare package lists of two SBOMs", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Comparison completed (or differences found without --fail-on-difference)
    1  Differences found with --fail-on-difference
    2  Error occurred

EXAMPLES:
    # Compare the Syft and Trivy SPDX SBOMs in the current directory
    sbom-compare spdx

    # Same for CycloneDX, writing the report elsewhere
    sbom-compare cyclonedx -O reports/gimp.html

    # Compare any two SBOMs, JSON to stdout
    sbom-compare compare grype.cdx.json trivy.cdx.json -o json --left-label Grype

    # CI check
    sbom-compare compare a.spdx.json b.spdx.json -o summary --fail-on-difference")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by the format presets
#[derive(Parser)]
struct PresetArgs {
    /// Source A SBOM (defaults to the Syft GIMP SBOM)
    #[arg(long)]
    left: Option<PathBuf>,

    /// Source B SBOM (defaults to the Trivy GIMP SBOM)
    #[arg(long)]
    right: Option<PathBuf>,

    /// HTML report path
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Source A SBOM
    left: PathBuf,

    /// Source B SBOM
    right: PathBuf,

    /// Input format for both SBOMs (detected per file if omitted)
    #[arg(short, long)]
    format: Option<SbomFormat>,

    /// Report format [default: html]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Name shown for source A
    #[arg(long)]
    left_label: Option<String>,

    /// Name shown for source B
    #[arg(long)]
    right_label: Option<String>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Exit with code 1 if any package differs
    #[arg(long)]
    fail_on_difference: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the Syft and Trivy SPDX SBOMs
    Spdx(PresetArgs),

    /// Compare the Syft and Trivy CycloneDX SBOMs
    Cyclonedx(PresetArgs),

    /// Compare any two SBOMs
    Compare(CompareArgs),

    /// Show or generate configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print a commented example config file
    Example,
    /// Print the JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Spdx(args) => run_preset(
            ComparisonPreset::Spdx,
            args,
            cli.config.as_deref(),
            cli.quiet,
        ),
        Commands::Cyclonedx(args) => run_preset(
            ComparisonPreset::CycloneDx,
            args,
            cli.config.as_deref(),
            cli.quiet,
        ),

        Commands::Compare(args) => {
            let overrides = ConfigOverrides {
                left_label: args.left_label,
                right_label: args.right_label,
                input_format: args.format,
                output_format: args.output,
                output_file: args.output_file,
                title: args.title,
                quiet: cli.quiet,
                fail_on_difference: args.fail_on_difference,
            };

            let app = load_app_config(cli.config.as_deref(), &overrides);
            let config = CompareConfig::from_app(
                app,
                ComparePaths {
                    left: args.left,
                    right: args.right,
                },
            );
            cli::run_compare(config)
        }

        Commands::Config { action } => {
            run_config_action(action, cli.config.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-compare", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_preset(
    preset: ComparisonPreset,
    args: PresetArgs,
    config_path: Option<&Path>,
    quiet: bool,
) -> Result<i32> {
    let overrides = ConfigOverrides {
        quiet,
        ..Default::default()
    };
    let app = load_app_config(config_path, &overrides);

    tracing::debug!("Running {preset} preset");
    let config = preset.config(app, args.left, args.right, args.output_file);
    cli::run_compare(config)
}

fn load_app_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> AppConfig {
    let (app, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    app
}

fn run_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = sbom_compare::config::load_or_default(config_path);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = sbom_compare::config::config_to_yaml(&config)
                .context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Example => {
            print!("{}", sbom_compare::config::generate_example_config());
        }
        ConfigAction::Schema { output } => {
            let schema = sbom_compare::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
        }
    }
    Ok(())
}
