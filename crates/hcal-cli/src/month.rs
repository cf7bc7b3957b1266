//! # Month Subcommand
//!
//! Fetches the holidays for one `(country, year)` and prints the requested
//! month as a text calendar, or as JSON with per-day tile decorations.

use std::io::Write;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::Args;
use hcal_client::HolidaySource;
use hcal_core::{first_of_month, Clock, CountryCode, HolidayRecord, SystemClock};
use hcal_render::{decorate_tile, month_grid, render_month, TileDecoration};
use hcal_state::{CalendarSession, CalendarView, HolidayCache, ViewState};
use serde_json::json;

use crate::{month_arg, App};

/// Arguments for `hcal month`.
#[derive(Args, Debug)]
pub struct MonthArgs {
    /// Two-letter country code. Defaults to the configured country.
    #[arg(long)]
    pub country: Option<String>,

    /// Month to show, as YYYY-MM. Defaults to the current month.
    #[arg(long)]
    pub month: Option<String>,

    /// Emit JSON instead of a text calendar.
    #[arg(long)]
    pub json: bool,
}

/// Execute the month subcommand.
pub async fn run_month(args: &MonthArgs, app: &App) -> Result<u8> {
    let clock = SystemClock;
    let country = app.country(args.country.as_deref())?;
    let month = match &args.month {
        Some(raw) => month_arg(raw)?,
        None => first_of_month(clock.today()),
    };

    let mut session = open_session(app.client.holidays().clone(), country, month);
    session.refresh().await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&mut out, session.view(), clock.today())?;
    } else {
        write_view(&mut out, session.view(), clock.today())?;
    }
    Ok(exit_code(session.state()))
}

pub(crate) fn open_session<S: HolidaySource>(
    source: S,
    country: CountryCode,
    month: NaiveDate,
) -> CalendarSession<S> {
    CalendarSession::from_parts(
        HolidayCache::new(source),
        CalendarView::at_month(country, month),
    )
}

pub(crate) fn exit_code(state: &ViewState) -> u8 {
    match state {
        ViewState::Ready { .. } => 0,
        ViewState::Loading | ViewState::Error { .. } => 1,
    }
}

/// Holidays of the view's scope that fall in its displayed month.
pub(crate) fn holidays_in_month(view: &CalendarView) -> impl Iterator<Item = &HolidayRecord> {
    let month = view.current_month();
    view.holidays()
        .iter()
        .filter(move |h| h.date.year() == month.year() && h.date.month() == month.month())
}

/// Text rendering of whatever state the view is in.
pub(crate) fn write_view<W: Write>(out: &mut W, view: &CalendarView, today: NaiveDate) -> Result<()> {
    writeln!(out, "Country: {}", view.country())?;
    match view.state() {
        ViewState::Loading => writeln!(out, "Loading...")?,
        ViewState::Error { message } => writeln!(out, "{message}")?,
        ViewState::Ready { holidays, notice } => {
            write!(out, "{}", render_month(view.current_month(), holidays, today))?;
            if let Some(notice) = notice {
                writeln!(out, "{notice}")?;
            }
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, view: &CalendarView, today: NaiveDate) -> Result<()> {
    let tiles: Vec<TileDecoration> = month_grid(view.current_month())
        .days()
        .filter(|day| day.in_month)
        .map(|day| decorate_tile(day.date, view.holidays(), today))
        .collect();

    let (status, message) = match view.state() {
        ViewState::Loading => ("loading", None),
        ViewState::Error { message } => ("error", Some(message.clone())),
        ViewState::Ready { notice, .. } => ("ready", notice.clone()),
    };

    let doc = json!({
        "scope": view.scope().to_string(),
        "month": view.current_month().format("%Y-%m").to_string(),
        "status": status,
        "message": message,
        "holidays": holidays_in_month(view).collect::<Vec<_>>(),
        "tiles": tiles,
    });
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcal_client::ApiError;
    use hcal_core::ScopeKey;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    struct Stub(Option<Vec<(NaiveDate, &'static str)>>);

    impl HolidaySource for Stub {
        async fn fetch_holidays(&self, scope: &ScopeKey) -> Result<Vec<HolidayRecord>, ApiError> {
            match &self.0 {
                None => Err(ApiError::Status {
                    endpoint: "GET /holidays".into(),
                    status: 500,
                    body: String::new(),
                }),
                Some(rows) => Ok(rows
                    .iter()
                    .map(|(date, name)| HolidayRecord {
                        date: *date,
                        local_name: name.to_string(),
                        name: name.to_string(),
                        country_code: scope.country.clone(),
                        fixed: true,
                        global: true,
                        counties: None,
                        launch_year: None,
                        types: vec!["National holiday".into()],
                    })
                    .collect()),
            }
        }
    }

    fn india() -> CountryCode {
        CountryCode::new("IN").unwrap()
    }

    #[tokio::test]
    async fn text_view_for_ready_month() {
        let mut session = open_session(
            Stub(Some(vec![(d(2024, 1, 26), "Republic Day"), (d(2024, 8, 15), "Independence Day")])),
            india(),
            d(2024, 1, 1),
        );
        session.refresh().await;

        let mut out = Vec::new();
        write_view(&mut out, session.view(), d(2024, 1, 2)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Country: IN\n"));
        assert!(text.contains("January 2024"));
        assert!(text.contains("26*"));
        assert!(text.contains("[02]"));
        assert_eq!(exit_code(session.state()), 0);
    }

    #[tokio::test]
    async fn json_lists_only_the_displayed_month() {
        let mut session = open_session(
            Stub(Some(vec![(d(2024, 1, 26), "Republic Day"), (d(2024, 8, 15), "Independence Day")])),
            india(),
            d(2024, 1, 1),
        );
        session.refresh().await;

        let mut out = Vec::new();
        write_json(&mut out, session.view(), d(2024, 1, 2)).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(doc["scope"], "IN_2024");
        assert_eq!(doc["month"], "2024-01");
        assert_eq!(doc["status"], "ready");
        assert_eq!(doc["holidays"].as_array().unwrap().len(), 1);
        assert_eq!(doc["holidays"][0]["localName"], "Republic Day");
        assert_eq!(doc["tiles"].as_array().unwrap().len(), 31);
        assert_eq!(doc["tiles"][25]["style"]["holiday"], true);
        assert_eq!(doc["tiles"][1]["style"]["today"], true);
    }

    #[tokio::test]
    async fn failed_fetch_prints_message_and_fails() {
        let mut session = open_session(Stub(None), india(), d(2024, 1, 1));
        session.refresh().await;

        let mut out = Vec::new();
        write_view(&mut out, session.view(), d(2024, 1, 2)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Failed to load holidays. Please try again later."));
        assert!(!text.contains("January 2024"));
        assert_eq!(exit_code(session.state()), 1);
    }

    #[tokio::test]
    async fn empty_scope_still_renders_grid_with_notice() {
        let mut session = open_session(Stub(Some(vec![])), india(), d(2024, 1, 1));
        session.refresh().await;

        let mut out = Vec::new();
        write_view(&mut out, session.view(), d(2024, 1, 2)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("January 2024"));
        assert!(text.trim_end().ends_with("No holiday data available for IN"));
        assert_eq!(exit_code(session.state()), 0);
    }
}
