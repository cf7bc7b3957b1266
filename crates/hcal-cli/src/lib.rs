//! # hcal-cli: Terminal Front-End for hcal
//!
//! Provides the `hcal` command-line interface over the directory and
//! holidays services.
//!
//! ## Subcommands
//!
//! - `hcal countries`: List selectable countries.
//! - `hcal month`: Print one month with holidays overlaid.
//! - `hcal show`: Show the detail panel for a holiday date.
//! - `hcal browse`: Interactive session reading commands from stdin.
//!
//! ```bash
//! HCAL_API_KEY=... hcal month --country US --month 2024-07
//! HCAL_API_KEY=... hcal show --date 2024-01-26
//! ```

pub mod browse;
pub mod countries;
pub mod month;
pub mod show;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use hcal_client::{HcalClient, HcalConfig};
use hcal_core::{parse_date, parse_month, CountryCode};

/// Resolved configuration plus the client built from it.
#[derive(Debug)]
pub struct App {
    pub default_country: CountryCode,
    pub client: HcalClient,
}

impl App {
    pub fn new(config: HcalConfig) -> Result<Self> {
        let default_country = config.default_country.clone();
        let client = HcalClient::new(config).context("failed to build HTTP client")?;
        Ok(Self {
            default_country,
            client,
        })
    }

    /// The `--country` flag, or the configured default.
    pub fn country(&self, flag: Option<&str>) -> Result<CountryCode> {
        match flag {
            Some(raw) => CountryCode::new(raw).with_context(|| format!("--country {raw}")),
            None => Ok(self.default_country.clone()),
        }
    }
}

pub(crate) fn month_arg(raw: &str) -> Result<NaiveDate> {
    parse_month(raw).with_context(|| format!("--month {raw}"))
}

pub(crate) fn date_arg(raw: &str) -> Result<NaiveDate> {
    parse_date(raw).with_context(|| format!("--date {raw}"))
}
