//! # Error Types
//!
//! Validation failures for the domain newtypes. Transport and cache errors
//! live in the crates that produce them.

use thiserror::Error;

/// Rejected input for a domain primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country code is not two ASCII letters.
    #[error("invalid country code {0:?}: expected two ASCII letters")]
    CountryCode(String),

    /// Month string is not `YYYY-MM`.
    #[error("invalid month {0:?}: expected YYYY-MM")]
    Month(String),

    /// Date string is not `YYYY-MM-DD`.
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    Date(String),
}
