//! Month grid layout.
//!
//! Weeks run Monday to Sunday. The first and last week are padded with days
//! from the neighbouring months, flagged `in_month = false`.

use chrono::{Datelike, Duration, Months, NaiveDate};
use hcal_core::first_of_month;
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;

/// Weekday column headers, Monday first.
pub const WEEKDAY_HEADERS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDay {
    pub date: NaiveDate,
    pub in_month: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    /// Each week holds exactly seven days.
    pub weeks: Vec<Vec<GridDay>>,
}

impl MonthGrid {
    pub fn days(&self) -> impl Iterator<Item = &GridDay> {
        self.weeks.iter().flatten()
    }
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Lay out the month containing `month`.
pub fn month_grid(month: NaiveDate) -> MonthGrid {
    let first = first_of_month(month);
    let last = last_of_month(first);

    let lead = i64::from(first.weekday().num_days_from_monday());
    let trail = 6 - i64::from(last.weekday().num_days_from_monday());
    let start = first - Duration::days(lead);
    let end = last + Duration::days(trail);

    let days: Vec<GridDay> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| GridDay {
            date,
            in_month: date.month() == first.month() && date.year() == first.year(),
        })
        .collect();

    MonthGrid {
        month: first,
        weeks: days.chunks(DAYS_PER_WEEK).map(<[GridDay]>::to_vec).collect(),
    }
}
