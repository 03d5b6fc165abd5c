//! lcg - Command Line Sampling for the Combined LCG
//!
//! # Commands
//!
//! - `lcg sample --count <n>` - Print values in (0, 1)
//! - `lcg stats --count <n>` - Summarise a run of values
//! - `lcg check` - Show the resolved generator configuration
//!
//! Configuration is read from `--config <file>` (or `lcg.toml` when present)
//! and overridden by `LCG_*` environment variables and command-line flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Combined LCG sampling CLI
#[derive(Parser)]
#[command(name = "lcg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./lcg.toml when it exists)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print values from the generator
    Sample {
        /// Number of values
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Fixed seed as S1,S2
        #[arg(short, long)]
        seed: Option<String>,

        /// Output format (plain, json)
        #[arg(short, long, default_value = "plain")]
        format: String,
    },

    /// Summarise a run of values
    Stats {
        /// Number of values
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,

        /// Fixed seed as S1,S2
        #[arg(short, long)]
        seed: Option<String>,
    },

    /// Show the resolved configuration
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config_path = cli.config.as_deref();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sample {
            count,
            seed,
            format,
        } => {
            let config = commands::resolve_config(config_path, seed.as_deref())?;
            commands::sample::run(&config, count, &format, &mut out)
        }
        Commands::Stats { count, seed } => {
            let config = commands::resolve_config(config_path, seed.as_deref())?;
            commands::stats::run(&config, count, &mut out)
        }
        Commands::Check => {
            let config = commands::resolve_config(config_path, None)?;
            commands::check::run(&config, &mut out)
        }
    }
}
