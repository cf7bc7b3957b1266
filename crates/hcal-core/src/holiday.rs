//! # Holiday and Country Records
//!
//! The normalized shapes every upstream payload is mapped into. Pure data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::CountryCode;

/// A single public holiday, normalized from the upstream holidays service.
///
/// `date` serializes as `YYYY-MM-DD` and is the key matched against
/// calendar cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub local_name: String,
    pub name: String,
    pub country_code: CountryCode,
    /// Falls on the same date every year.
    pub fixed: bool,
    /// Observed nationwide.
    pub global: bool,
    /// Sub-national region identifiers. `None` means nationwide or unknown.
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    /// Year the holiday was first observed, if known.
    #[serde(default)]
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl HolidayRecord {
    /// Region list, treating `Some(vec![])` like `None`.
    pub fn regions(&self) -> Option<&[String]> {
        self.counties.as_deref().filter(|c| !c.is_empty())
    }
}

/// An entry in the country directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub country_code: CountryCode,
    pub name: String,
}

impl CountryEntry {
    pub fn new(country_code: CountryCode, name: impl Into<String>) -> Self {
        Self {
            country_code,
            name: name.into(),
        }
    }
}
