//! invcdf - Inverse-Transform Sampling CLI
//!
//! Command-line harness around `sampler_core`.
//!
//! # Commands
//!
//! - `invcdf table <file>` - Invert a tabulated CDF and print `u g(u)`
//! - `invcdf prior <kind> -a <a> -b <b>` - Tabulate an analytic prior
//! - `invcdf sample --prior <kind> -n <count>` - Draw seeded samples
//! - `invcdf check` - Verify the boundary and monotonicity contract
//!
//! Logs go to stderr; results go to stdout.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sampler_core::sampling::CdfSource;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::CliConfig;
use output::OutputFormat;

/// Inverse-transform sampling from tabulated and analytic CDFs
#[derive(Parser)]
#[command(name = "invcdf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "invcdf.toml")]
    config: PathBuf,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Invert a tabulated CDF file and print g(u) on a uniform grid
    Table {
        /// Path to a text file of `x cdf(x)` pairs
        path: PathBuf,

        /// Number of u-steps between 0 and 1
        #[arg(short, long)]
        steps: Option<usize>,

        /// Reject tables with uneven x spacing
        #[arg(long)]
        strict: bool,
    },

    /// Tabulate an analytic prior and print g(u) on a uniform grid
    Prior {
        /// Prior kind (Flat, Gaussian, Log, SolidAngle)
        kind: String,

        /// First parameter (min or mean)
        #[arg(short, allow_negative_numbers = true)]
        a: Option<f64>,

        /// Second parameter (max or standard deviation)
        #[arg(short, allow_negative_numbers = true)]
        b: Option<f64>,

        /// Number of u-steps between 0 and 1
        #[arg(short, long)]
        steps: Option<usize>,
    },

    /// Draw random samples through an inverse CDF
    Sample {
        /// Tabulated CDF file to sample from
        #[arg(short, long, conflicts_with = "prior", required_unless_present = "prior")]
        table: Option<PathBuf>,

        /// Analytic prior kind to sample from
        #[arg(short, long)]
        prior: Option<String>,

        /// First prior parameter
        #[arg(short, allow_negative_numbers = true)]
        a: Option<f64>,

        /// Second prior parameter
        #[arg(short, allow_negative_numbers = true)]
        b: Option<f64>,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check every analytic prior against the query contract
    Check,
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let config = CliConfig::load_or_default(path)?.with_env_override()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(format) = cli.format {
        config.format = format;
    }

    init_tracing(if cli.verbose { "debug" } else { config.log_level.as_str() });

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Table {
            path,
            steps,
            strict,
        } => {
            let mut loader = config.loader_config();
            loader.strict_spacing |= strict;
            commands::table::run(
                &path,
                steps.unwrap_or(config.steps),
                config.format,
                &loader,
            )
        }
        Commands::Prior { kind, a, b, steps } => commands::prior::run(
            &kind,
            a,
            b,
            steps.unwrap_or(config.steps),
            config.format,
        ),
        Commands::Sample {
            table,
            prior,
            a,
            b,
            count,
            seed,
        } => {
            let source = match (table, prior) {
                (Some(path), _) => CdfSource::Table(path),
                (None, Some(kind)) => CdfSource::analytic(&kind, a, b)?,
                (None, None) => {
                    return Err(CliError::InvalidArgument(
                        "Either --table or --prior is required".to_string(),
                    ))
                }
            };
            commands::sample::run(
                &source,
                count,
                seed.unwrap_or(config.seed),
                config.format,
                &config.loader_config(),
            )
        }
        Commands::Check => commands::check::run(),
    }
}
