//! # Browse Subcommand
//!
//! Interactive calendar session. Reads one command per line from stdin and
//! reprints the view after every change. Holidays are cached per
//! `(country, year)` for the life of the session, so moving back to a year
//! already seen costs no request.
//!
//! ## Commands
//!
//! - `next` / `prev`: Move one month.
//! - `goto YYYY-MM`: Jump to a month.
//! - `country CC`: Switch country.
//! - `select YYYY-MM-DD`: Show the detail panel for a date.
//! - `close`: Close the detail panel.
//! - `list`: List holidays in the displayed month.
//! - `help`, `quit`

use std::io::Write;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use hcal_client::HolidaySource;
use hcal_core::{parse_date, parse_month, Clock, CountryCode, SystemClock};
use hcal_render::DetailPanel;
use hcal_state::{CalendarSession, CountryDirectory, DirectoryState, ViewState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::month::{holidays_in_month, write_view};
use crate::App;

const PROMPT: &str = "hcal> ";

const HELP: &str = "\
commands:
  next | prev           move one month
  goto YYYY-MM          jump to a month
  country CC            switch country
  select YYYY-MM-DD     show holiday detail
  close                 close holiday detail
  list                  list holidays this month
  help                  show this help
  quit                  exit";

/// Arguments for `hcal browse`.
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Starting country. Defaults to the configured country.
    #[arg(long)]
    pub country: Option<String>,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Goto(NaiveDate),
    Country(CountryCode),
    Select(NaiveDate),
    Close,
    List,
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            bail!("too many arguments to '{verb}'");
        }

        let cmd = match (verb.as_str(), arg) {
            ("next" | "n", None) => Self::Next,
            ("prev" | "p", None) => Self::Prev,
            ("goto", Some(raw)) => Self::Goto(parse_month(raw)?),
            ("country", Some(raw)) => Self::Country(CountryCode::new(raw)?),
            ("select", Some(raw)) => Self::Select(parse_date(raw)?),
            ("close", None) => Self::Close,
            ("list", None) => Self::List,
            ("help" | "?", None) => Self::Help,
            ("quit" | "exit" | "q", None) => Self::Quit,
            ("goto" | "country" | "select", None) => bail!("'{verb}' needs an argument"),
            (_, Some(_)) if is_known(&verb) => bail!("'{verb}' takes no argument"),
            _ => bail!("unknown command '{verb}' (try 'help')"),
        };
        Ok(cmd)
    }
}

fn is_known(verb: &str) -> bool {
    matches!(
        verb,
        "next" | "n" | "prev" | "p" | "close" | "list" | "help" | "?" | "quit" | "exit" | "q"
    )
}

/// Execute the browse subcommand.
pub async fn run_browse(args: &BrowseArgs, app: &App) -> Result<u8> {
    let country = app.country(args.country.as_deref())?;

    // Without a country list there is nothing to browse.
    let mut directory = CountryDirectory::new(app.default_country.clone());
    if let DirectoryState::Error(message) = directory.load(app.client.directory()).await {
        eprintln!("{message}");
        return Ok(1);
    }

    let clock = SystemClock;
    let mut session = CalendarSession::new(app.client.holidays().clone(), country, &clock);
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    drive(&mut session, &directory, input, &mut out, &clock).await?;
    Ok(0)
}

/// Run commands from `input` against `session` until EOF or `quit`.
///
/// `country CC` is checked against `directory` once it is ready.
pub async fn drive<S, R, W>(
    session: &mut CalendarSession<S>,
    directory: &CountryDirectory,
    input: R,
    out: &mut W,
    clock: &dyn Clock,
) -> Result<()>
where
    S: HolidaySource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    session.refresh().await;
    write_view(out, session.view(), clock.today())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read command")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cmd = match BrowseCommand::parse(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        tracing::debug!(?cmd, "browse command");

        match cmd {
            BrowseCommand::Next => {
                session.next_month().await;
                write_view(out, session.view(), clock.today())?;
            }
            BrowseCommand::Prev => {
                session.prev_month().await;
                write_view(out, session.view(), clock.today())?;
            }
            BrowseCommand::Goto(month) => {
                session.goto_month(month).await;
                write_view(out, session.view(), clock.today())?;
            }
            BrowseCommand::Country(code) => {
                if let Some(known) = directory.countries() {
                    if !known.iter().any(|c| c.country_code == code) {
                        writeln!(out, "Unknown country: {code}")?;
                        continue;
                    }
                }
                session.set_country(code).await;
                write_view(out, session.view(), clock.today())?;
            }
            BrowseCommand::Select(date) => match session.select_day(date) {
                Some(holiday) => write!(out, "{}", DetailPanel::new(holiday))?,
                None => writeln!(out, "No holiday on {date}")?,
            },
            BrowseCommand::Close => {
                session.close_detail();
                writeln!(out, "Detail closed.")?;
            }
            BrowseCommand::List => write_list(out, session)?,
            BrowseCommand::Help => writeln!(out, "{HELP}")?,
            BrowseCommand::Quit => break,
        }
    }
    Ok(())
}

fn write_list<S: HolidaySource, W: Write>(out: &mut W, session: &CalendarSession<S>) -> Result<()> {
    match session.state() {
        ViewState::Loading => writeln!(out, "Loading...")?,
        ViewState::Error { message } => writeln!(out, "{message}")?,
        ViewState::Ready { .. } => {
            let mut any = false;
            for holiday in holidays_in_month(session.view()) {
                writeln!(out, "{}  {}", holiday.date, holiday.name)?;
                any = true;
            }
            if !any {
                writeln!(out, "No holidays this month.")?;
            }
        }
    }
    Ok(())
}
