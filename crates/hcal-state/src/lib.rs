//! # hcal-state: Holiday Cache and View State
//!
//! Everything between the HTTP clients and the renderer.
//!
//! ## Components
//!
//! - **Directory** (`directory.rs`): de-duplicates, completes, and sorts the
//!   upstream country list; tracks `Loading` / `Error` / `Ready`.
//!
//! - **Cache** (`cache.rs`): memoizes holiday lists per `(country, year)`
//!   over any [`HolidaySource`](hcal_client::HolidaySource), with
//!   de-duplication of concurrent fetches for the same scope.
//!
//! - **Calendar** (`calendar.rs`): the view state machine. Holds the country,
//!   displayed month, fetch state, and selected holiday. Every scope change
//!   bumps a generation so late responses for an old scope are dropped.
//!
//! - **Session** (`session.rs`): wires a cache to a view and drives the
//!   load cycle on each navigation.
//!
//! ## Design
//!
//! State is explicit: there is no hidden "loading" flag next to a possibly
//! stale list. A view is exactly one of `Loading`, `Error`, or `Ready`, and
//! the holidays it exposes are always the ones for its current scope.

pub mod cache;
pub mod calendar;
pub mod directory;
pub mod error;
pub mod session;

pub use cache::{HolidayCache, Holidays};
pub use calendar::{CalendarView, LoadTicket, ViewState};
pub use directory::{
    collation_key, compare_entries, finalize_countries, list_countries, CountryDirectory,
    DirectoryState,
};
pub use error::{DirectoryError, LookupError, DIRECTORY_FETCH_FAILED, HOLIDAY_FETCH_FAILED};
pub use session::CalendarSession;
