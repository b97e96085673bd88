//! Leasebook CLI - Rent Schedules and Lease Books from the Command Line
//!
//! This is the operational entry point for the leasebook libraries.
//!
//! # Commands
//!
//! - `leasebook schedule --start <date> --rent <amount>` - Build a rent schedule from terms
//! - `leasebook schedule --lease <file>` - Build a rent schedule from a saved lease
//! - `leasebook book --file <snapshot>` - Print schedules and payments for a saved book
//! - `leasebook check` - Show the effective configuration
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration and logging around
//! `lease_models` and owns all file I/O and terminal output.

use anyhow::Context;
use clap::{Parser, Subcommand};
use lease_models::repository::RecordId;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::schedule::ScheduleOptions;
use config::{CliConfig, OutputFormat};

/// Leasebook rent schedule CLI
#[derive(Parser)]
#[command(name = "leasebook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "leasebook.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a rent schedule from lease terms
    Schedule {
        /// Saved lease file (JSON); replaces the term flags
        #[arg(short, long)]
        lease: Option<PathBuf>,

        /// Lease start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Last day of the base term (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        /// Monthly rent in the first year (e.g. 2000 or 2,000.00)
        #[arg(short, long)]
        rent: Option<String>,

        /// Annual increase: "5%" or a flat amount such as "150"
        #[arg(short, long)]
        increase: Option<String>,

        /// Option years appended after the base term
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        option_years: i32,

        /// Option-year increase; defaults to the annual increase
        #[arg(long)]
        option_increase: Option<String>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print schedules and payments for a saved lease book
    Book {
        /// Path to the book snapshot (JSON)
        #[arg(long)]
        file: PathBuf,

        /// Only report this lease
        #[arg(long)]
        lease_id: Option<RecordId>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    // RUST_LOG wins; otherwise the configured level, raised by --verbose
    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Schedule {
            lease,
            start,
            end,
            rent,
            increase,
            option_years,
            option_increase,
            format,
        } => {
            let options = ScheduleOptions {
                lease,
                start,
                end,
                rent,
                increase,
                option_years,
                option_increase,
            };
            commands::schedule::run(
                &options,
                format.unwrap_or(config.format),
                &config.currency_symbol,
            )?
        }
        Commands::Book {
            file,
            lease_id,
            format,
        } => commands::book::run(
            &file,
            lease_id,
            format.unwrap_or(config.format),
            &config.currency_symbol,
        )?,
        Commands::Check => commands::check::run(&cli.config, &config)?,
    }

    Ok(())
}
