//! # Show Subcommand
//!
//! Selects a single date and prints its detail panel.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use hcal_client::HolidaySource;
use hcal_render::DetailPanel;
use hcal_state::{CalendarSession, ViewState};

use crate::month::open_session;
use crate::{date_arg, App};

/// Arguments for `hcal show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Date to inspect, as YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// Two-letter country code. Defaults to the configured country.
    #[arg(long)]
    pub country: Option<String>,
}

/// Execute the show subcommand.
pub async fn run_show(args: &ShowArgs, app: &App) -> Result<u8> {
    let date = date_arg(&args.date)?;
    let country = app.country(args.country.as_deref())?;

    let mut session = open_session(app.client.holidays().clone(), country, date);
    session.refresh().await;

    let stdout = std::io::stdout();
    write_selection(&mut stdout.lock(), &mut session, date)
}

pub(crate) fn write_selection<S: HolidaySource, W: Write>(
    out: &mut W,
    session: &mut CalendarSession<S>,
    date: NaiveDate,
) -> Result<u8> {
    if let ViewState::Error { message } = session.state() {
        writeln!(out, "{message}")?;
        return Ok(1);
    }
    if let ViewState::Ready {
        notice: Some(notice),
        ..
    } = session.state()
    {
        writeln!(out, "{notice}")?;
    }

    match session.select_day(date) {
        Some(holiday) => write!(out, "{}", DetailPanel::new(holiday))?,
        None => writeln!(out, "No holiday on {date}")?,
    }
    Ok(0)
}
