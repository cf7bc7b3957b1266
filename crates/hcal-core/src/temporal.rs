//! # Temporal Helpers
//!
//! The [`Clock`] trait is the only source of "today" in the workspace.
//! Month arithmetic works on the first day of a month so a displayed month
//! is a single `NaiveDate`.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::ValidationError;

/// Source of the current local date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

/// Move `month` by `delta` months, returning the first day of the result.
///
/// Returns `None` only when the result falls outside chrono's date range.
pub fn shift_month(month: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let start = first_of_month(month);
    let step = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        start.checked_add_months(step)
    } else {
        start.checked_sub_months(step)
    }
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|_| ValidationError::Month(raw.to_string()))
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::Date(raw.to_string()))
}
