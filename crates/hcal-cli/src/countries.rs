//! # Countries Subcommand
//!
//! Prints the finalized country directory: de-duplicated, default country
//! included, sorted by name.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use hcal_core::CountryEntry;
use hcal_state::{CountryDirectory, DirectoryState};

use crate::App;

/// Arguments for `hcal countries`.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the countries subcommand.
pub async fn run_countries(args: &CountriesArgs, app: &App) -> Result<u8> {
    let mut directory = CountryDirectory::new(app.default_country.clone());
    match directory.load(app.client.directory()).await {
        DirectoryState::Ready(countries) => {
            let stdout = std::io::stdout();
            write_countries(&mut stdout.lock(), countries, args.json)?;
            Ok(0)
        }
        DirectoryState::Error(message) => {
            eprintln!("{message}");
            Ok(1)
        }
        DirectoryState::Loading => Ok(1),
    }
}

pub(crate) fn write_countries<W: Write>(
    out: &mut W,
    countries: &[CountryEntry],
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, countries)?;
        writeln!(out)?;
        return Ok(());
    }
    for entry in countries {
        writeln!(out, "{}  {}", entry.country_code, entry.name)?;
    }
    Ok(())
}
