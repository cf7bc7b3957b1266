//! Typed client for the country directory service.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/AvailableCountries` | List supported countries |
//!
//! The client returns entries in upstream order with invalid codes dropped.
//! Default-country insertion, de-duplication and sorting happen in
//! `hcal-state`, which owns the directory's load state.

use hcal_core::{CountryCode, CountryEntry};
use serde::Deserialize;

use crate::error::ApiError;
use crate::transport::send_for_body;

/// Country as returned by the directory service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamCountry {
    pub country_code: String,
    pub name: String,
}

/// Convert upstream rows into validated entries, skipping bad codes.
pub fn to_entries(rows: Vec<UpstreamCountry>) -> Vec<CountryEntry> {
    rows.into_iter()
        .filter_map(|row| match CountryCode::new(&row.country_code) {
            Ok(code) => Some(CountryEntry::new(code, row.name)),
            Err(e) => {
                tracing::warn!(raw = %row.country_code, "skipping directory entry: {e}");
                None
            }
        })
        .collect()
}

/// Client for the country directory service.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: url::Url,
    max_retries: u32,
}

impl DirectoryClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, max_retries: u32) -> Self {
        Self {
            http,
            base_url,
            max_retries,
        }
    }

    /// Fetch the supported countries.
    ///
    /// Calls `GET {base_url}/AvailableCountries`.
    pub async fn available_countries(&self) -> Result<Vec<CountryEntry>, ApiError> {
        let endpoint = "GET /AvailableCountries";
        let url = format!(
            "{}/AvailableCountries",
            self.base_url.as_str().trim_end_matches('/')
        );

        let body = send_for_body(self.max_retries, endpoint, || self.http.get(&url)).await?;
        let rows: Vec<UpstreamCountry> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode {
                endpoint: endpoint.into(),
                source: e,
            })?;

        tracing::debug!(count = rows.len(), "directory returned countries");
        Ok(to_entries(rows))
    }
}
