//! # Calendar View State Machine
//!
//! Tracks which month is displayed, for which country, what the holiday
//! fetch for that scope produced, and which holiday (if any) is selected.
//!
//! ## States
//!
//! ```text
//!            begin_load                 complete(Ok / Empty)
//!  Loading ◀──────────── any ──┐   Loading ─────────────────▶ Ready
//!     │                        │
//!     │ complete(Fetch error)  │ set_country / goto_month across a year
//!     ▼                        │
//!   Error ─────────────────────┘
//! ```
//!
//! `Empty` results land in `Ready` with no holidays and a notice, so the
//! grid still renders. Only a failed fetch replaces the grid with an error.
//!
//! ## Stale responses
//!
//! Every scope change bumps a generation counter. [`CalendarView::begin_load`]
//! stamps the request with the current scope and generation; a
//! [`CalendarView::complete`] whose ticket no longer matches is discarded.

use chrono::{Datelike, NaiveDate};
use hcal_core::{first_of_month, shift_month, Clock, CountryCode, HolidayRecord, ScopeKey};

use crate::cache::Holidays;
use crate::error::LookupError;

/// What the calendar area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error { message: String },
    Ready {
        holidays: Holidays,
        /// Informational message, e.g. when the scope has no holidays.
        notice: Option<String>,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Identifies one load request so its completion can be checked for staleness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub scope: ScopeKey,
    generation: u64,
}

/// Calendar view state for one country selector and one month grid.
#[derive(Debug)]
pub struct CalendarView {
    country: CountryCode,
    current_month: NaiveDate,
    state: ViewState,
    selected: Option<HolidayRecord>,
    generation: u64,
}

impl CalendarView {
    /// Start in `Loading` on the month containing the clock's today.
    pub fn new(country: CountryCode, clock: &dyn Clock) -> Self {
        Self::at_month(country, clock.today())
    }

    /// Start in `Loading` on the month containing `month`.
    pub fn at_month(country: CountryCode, month: NaiveDate) -> Self {
        Self {
            country,
            current_month: first_of_month(month),
            state: ViewState::Loading,
            selected: None,
            generation: 0,
        }
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn year(&self) -> i32 {
        self.current_month.year()
    }

    /// The scope the view currently needs holidays for.
    pub fn scope(&self) -> ScopeKey {
        ScopeKey::new(self.country.clone(), self.year())
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Holidays for the current scope; empty unless `Ready`.
    pub fn holidays(&self) -> &[HolidayRecord] {
        match &self.state {
            ViewState::Ready { holidays, .. } => &holidays[..],
            _ => &[],
        }
    }

    pub fn selected_holiday(&self) -> Option<&HolidayRecord> {
        self.selected.as_ref()
    }

    /// Enter `Loading` and stamp a request for the current scope.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = ViewState::Loading;
        LoadTicket {
            scope: self.scope(),
            generation: self.generation,
        }
    }

    /// Whether a completion for `ticket` would still be applied.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && ticket.scope == self.scope()
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false`, leaving state untouched, when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: &LoadTicket,
        outcome: Result<Holidays, LookupError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(scope = %ticket.scope, "discarding stale holiday response");
            return false;
        }

        self.state = match outcome {
            Ok(holidays) => ViewState::Ready {
                holidays,
                notice: None,
            },
            Err(e) if e.is_empty_result() => ViewState::Ready {
                holidays: Holidays::from(Vec::new()),
                notice: Some(e.user_message()),
            },
            Err(e) => ViewState::Error {
                message: e.user_message(),
            },
        };
        true
    }

    /// Switch country. Returns `true` when a load is due: the scope changed,
    /// or the same country was picked again after a failed load.
    pub fn set_country(&mut self, country: CountryCode) -> bool {
        if country == self.country {
            if !self.is_failed() {
                return false;
            }
            tracing::info!(country = %country, "retrying after failed load");
        } else {
            tracing::info!(from = %self.country, to = %country, "country changed");
            self.country = country;
        }
        self.invalidate();
        true
    }

    /// Show the month containing `month`. Returns `true` when a load is due:
    /// the year changed, or the last load for this scope failed.
    pub fn goto_month(&mut self, month: NaiveDate) -> bool {
        let month = first_of_month(month);
        let reload = month.year() != self.year() || self.is_failed();
        self.current_month = month;
        if reload {
            self.invalidate();
        }
        reload
    }

    /// Advance one month. Returns `true` when a load is due.
    pub fn next_month(&mut self) -> bool {
        self.step_month(1)
    }

    /// Go back one month. Returns `true` when a load is due.
    pub fn prev_month(&mut self) -> bool {
        self.step_month(-1)
    }

    fn step_month(&mut self, delta: i32) -> bool {
        match shift_month(self.current_month, delta) {
            Some(month) => self.goto_month(month),
            None => false,
        }
    }

    /// Select the holiday on `date`, or clear the selection if there is none.
    ///
    /// With duplicate dates the first record in upstream order wins.
    pub fn select_day(&mut self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.selected = self.holidays().iter().find(|h| h.date == date).cloned();
        self.selected.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    fn is_failed(&self) -> bool {
        matches!(self.state, ViewState::Error { .. })
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.state = ViewState::Loading;
        self.selected = None;
    }
}
