//! Lookup and directory errors, with the messages shown to the user.

use hcal_client::ApiError;
use hcal_core::ScopeKey;
use thiserror::Error;

/// Shown in place of the calendar grid when a holiday fetch fails.
pub const HOLIDAY_FETCH_FAILED: &str = "Failed to load holidays. Please try again later.";

/// Shown in place of the country selector when the directory fetch fails.
pub const DIRECTORY_FETCH_FAILED: &str = "Failed to load countries. Please try again later.";

/// Outcome of a holiday lookup that produced no records.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport, status, or decode failure. Not cached.
    #[error("holiday fetch for {scope} failed: {source}")]
    Fetch {
        scope: ScopeKey,
        #[source]
        source: ApiError,
    },

    /// Request succeeded but carried no holidays. Not cached.
    #[error("no holiday data available for {scope}")]
    Empty { scope: ScopeKey },
}

impl LookupError {
    pub fn scope(&self) -> &ScopeKey {
        match self {
            Self::Fetch { scope, .. } | Self::Empty { scope } => scope,
        }
    }

    /// Whether this is the informational "no data" outcome rather than a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Text for the user-visible error or notice field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch { .. } => HOLIDAY_FETCH_FAILED.to_string(),
            Self::Empty { scope } => format!("No holiday data available for {}", scope.country),
        }
    }
}

/// Country directory retrieval failed.
#[derive(Error, Debug)]
#[error("country directory fetch failed: {source}")]
pub struct DirectoryError {
    #[from]
    pub source: ApiError,
}

impl DirectoryError {
    pub fn user_message(&self) -> &'static str {
        DIRECTORY_FETCH_FAILED
    }
}
