//! # hcal-core: Foundational Types for hcal
//!
//! Every other crate in the workspace depends on `hcal-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `CountryCode` is validated at
//!    construction. No bare strings for country codes past the client edge.
//!
//! 2. **Explicit cache scope.** `ScopeKey` pairs a country with a year and is
//!    the only key the holiday cache accepts.
//!
//! 3. **Injectable time.** Anything that needs "today" takes a [`Clock`],
//!    so view state is deterministic under test.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hcal-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod holiday;
pub mod identity;
pub mod temporal;

pub use error::ValidationError;
pub use holiday::{CountryEntry, HolidayRecord};
pub use identity::{CountryCode, ScopeKey};
pub use temporal::{
    first_of_month, parse_date, parse_month, shift_month, Clock, FixedClock, SystemClock,
};
