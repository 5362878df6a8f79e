//! CLI definitions and entry point

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{debug, info};

use reqcov::adapters::TreeParentProvider;
use reqcov::adapters::file;
use reqcov::config::CoverageConfig;
use reqcov::core::models::{Release, TestOutcomes};
use reqcov::core::services::{CoverageContext, RequirementsOutcomes};
use reqcov::output::{CoverageSummary, OutputMode};

/// reqcov - Requirements test coverage reports
#[derive(Parser, Debug)]
#[command(
    name = "reqcov",
    version,
    about = "Requirements test coverage reports",
    long_about = "Aggregate test outcomes over a hierarchy of requirements.\n\n\
                  Reports which requirements are complete, failing or untested,\n\
                  and estimates the tests still missing."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize coverage of a requirement tree by a set of test outcomes
    Summary {
        /// Requirements file (.toml or .json)
        #[arg(short, long)]
        requirements: PathBuf,

        /// Test outcomes file (.json)
        #[arg(short, long)]
        outcomes: PathBuf,

        /// Only report requirements of this type (e.g., "feature")
        #[arg(short = 't', long = "type")]
        requirement_type: Option<String>,

        /// Only count tests of this release (e.g., "1.2")
        #[arg(long)]
        release: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Summary {
            requirements,
            outcomes,
            requirement_type,
            release,
        }) => summary(
            &requirements,
            &outcomes,
            requirement_type.as_deref(),
            release.map(Release::new),
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": reqcov::VERSION
                    })
                );
            } else {
                println!("reqcov v{}", reqcov::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": reqcov::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("reqcov v{}", reqcov::VERSION);
                println!("\nRun 'reqcov --help' for usage");
            }
            Ok(())
        },
    }
}

fn summary(
    requirements_file: &Path,
    outcomes_file: &Path,
    requirement_type: Option<&str>,
    release: Option<Release>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = CoverageConfig::load()?;
    debug!("using {config:?}");

    let requirements = file::load_requirements(requirements_file)?;
    let outcomes = file::load_outcomes(outcomes_file)?;
    info!("{} requirement(s), {} test outcome(s)", requirements.len(), outcomes.len());

    let context = CoverageContext::new(config.to_settings())
        .with_release_tagger(Arc::new(config.release_tagger()))
        .with_parent_provider(Arc::new(TreeParentProvider::new(&requirements)));

    let mut report =
        RequirementsOutcomes::new(&requirements, TestOutcomes::of(outcomes), Arc::new(context))
            .without_unrelated_requirements();
    if let Some(requirement_type) = requirement_type {
        report = report.of_type(requirement_type);
    }
    if let Some(release) = &release {
        report = report.released_requirements_for(release);
    }

    CoverageSummary::of(&report, release.as_ref()).render(mode);
    Ok(())
}
