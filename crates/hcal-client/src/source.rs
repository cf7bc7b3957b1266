//! Seams between the HTTP clients and the state layer.
//!
//! `hcal-state` is generic over these traits, so the holiday cache and the
//! calendar session run against in-memory fakes in tests.

use std::future::Future;

use hcal_core::{CountryEntry, HolidayRecord, ScopeKey};

use crate::directory::DirectoryClient;
use crate::error::ApiError;
use crate::holidays::HolidayClient;

/// Anything that can list the supported countries.
pub trait CountrySource: Send + Sync {
    fn list_countries(&self) -> impl Future<Output = Result<Vec<CountryEntry>, ApiError>> + Send;
}

/// Anything that can produce the holidays for one country-year.
pub trait HolidaySource: Send + Sync {
    fn fetch_holidays(
        &self,
        scope: &ScopeKey,
    ) -> impl Future<Output = Result<Vec<HolidayRecord>, ApiError>> + Send;
}

impl CountrySource for DirectoryClient {
    async fn list_countries(&self) -> Result<Vec<CountryEntry>, ApiError> {
        self.available_countries().await
    }
}

impl HolidaySource for HolidayClient {
    async fn fetch_holidays(&self, scope: &ScopeKey) -> Result<Vec<HolidayRecord>, ApiError> {
        self.holidays(scope).await
    }
}
