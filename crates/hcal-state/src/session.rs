//! # Calendar Session
//!
//! Owns a [`HolidayCache`] and a [`CalendarView`] and resolves the view's
//! scope through the cache whenever the scope changes. A cache hit is
//! applied synchronously, so the view never shows `Loading` for a scope it
//! has already seen.

use chrono::NaiveDate;
use hcal_client::HolidaySource;
use hcal_core::{Clock, CountryCode, HolidayRecord};

use crate::cache::HolidayCache;
use crate::calendar::{CalendarView, ViewState};

#[derive(Debug)]
pub struct CalendarSession<S> {
    cache: HolidayCache<S>,
    view: CalendarView,
}

impl<S: HolidaySource> CalendarSession<S> {
    /// New session in `Loading` for `country` on the clock's current month.
    pub fn new(source: S, country: CountryCode, clock: &dyn Clock) -> Self {
        Self::from_parts(HolidayCache::new(source), CalendarView::new(country, clock))
    }

    pub fn from_parts(cache: HolidayCache<S>, view: CalendarView) -> Self {
        Self { cache, view }
    }

    pub fn view(&self) -> &CalendarView {
        &self.view
    }

    pub fn cache(&self) -> &HolidayCache<S> {
        &self.cache
    }

    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    /// Resolve the current scope, from cache when possible.
    pub async fn refresh(&mut self) -> &ViewState {
        let ticket = self.view.begin_load();

        if let Some(hit) = self.cache.peek(&ticket.scope) {
            self.view.complete(&ticket, Ok(hit));
            return self.view.state();
        }

        let outcome = self.cache.get_holidays(&ticket.scope).await;
        self.view.complete(&ticket, outcome);
        self.view.state()
    }

    pub async fn set_country(&mut self, country: CountryCode) -> &ViewState {
        if self.view.set_country(country) {
            self.refresh().await
        } else {
            self.view.state()
        }
    }

    pub async fn goto_month(&mut self, month: NaiveDate) -> &ViewState {
        if self.view.goto_month(month) {
            self.refresh().await
        } else {
            self.view.state()
        }
    }

    pub async fn next_month(&mut self) -> &ViewState {
        if self.view.next_month() {
            self.refresh().await
        } else {
            self.view.state()
        }
    }

    pub async fn prev_month(&mut self) -> &ViewState {
        if self.view.prev_month() {
            self.refresh().await
        } else {
            self.view.state()
        }
    }

    pub fn select_day(&mut self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.view.select_day(date)
    }

    pub fn close_detail(&mut self) {
        self.view.close_detail();
    }
}
