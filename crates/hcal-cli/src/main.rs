//! # hcal CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers on a single-threaded Tokio runtime.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hcal_cli::browse::{run_browse, BrowseArgs};
use hcal_cli::countries::{run_countries, CountriesArgs};
use hcal_cli::month::{run_month, MonthArgs};
use hcal_cli::show::{run_show, ShowArgs};
use hcal_cli::App;
use hcal_client::HcalConfig;

/// Public holiday calendar for the terminal.
///
/// Looks up a country's public holidays for the displayed year and overlays
/// them on a month calendar.
#[derive(Parser, Debug)]
#[command(name = "hcal", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file. Environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the countries holidays can be shown for.
    Countries(CountriesArgs),

    /// Print a month with its holidays.
    Month(MonthArgs),

    /// Show holiday detail for one date.
    Show(ShowArgs),

    /// Browse the calendar interactively.
    Browse(BrowseArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hcal {} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = HcalConfig::load(cli.config.as_deref()).context("invalid configuration")?;
    let app = App::new(config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        match &cli.command {
            Commands::Countries(args) => run_countries(args, &app).await,
            Commands::Month(args) => run_month(args, &app).await,
            Commands::Show(args) => run_show(args, &app).await,
            Commands::Browse(args) => run_browse(args, &app).await,
        }
    })
}
