//! Typed client for the public holidays service.
//!
//! | Method | Path | Query | Operation |
//! |--------|------|-------|-----------|
//! | GET    | `/holidays` | `api_key`, `country`, `year` | Holidays for one country-year |
//!
//! ## Envelope
//!
//! ```json
//! {"meta": {"code": 200},
//!  "response": {"holidays": [
//!     {"name": "Republic Day",
//!      "date": {"iso": "2024-01-26T00:00:00"},
//!      "type": ["National holiday"],
//!      "states": "All"}]}}
//! ```
//!
//! Unknown countries come back as `"response": []`. A missing or non-array
//! `holidays` field is reported as an empty list, not an error; the cache
//! layer turns an empty list into its "no data" outcome.

use chrono::NaiveDate;
use hcal_core::{CountryCode, HolidayRecord, ScopeKey};
use serde::{Deserialize, Deserializer};
use zeroize::Zeroizing;

use crate::error::ApiError;
use crate::transport::send_for_body;

// -- Upstream schema ----------------------------------------------------------

/// Response envelope. Fields other than `meta` and `response` are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    response: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct Meta {
    code: u16,
    #[serde(default)]
    error_detail: Option<String>,
}

/// One holiday as returned by the holidays service.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamHoliday {
    pub name: String,
    pub date: UpstreamDate,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub states: Option<UpstreamStates>,
}

/// Holiday date. Only the calendar-date portion of `iso` is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamDate {
    #[serde(deserialize_with = "iso_date_prefix")]
    pub iso: NaiveDate,
}

/// Either the literal `"All"` or a list of sub-national regions.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UpstreamStates {
    Scope(String),
    Regions(Vec<UpstreamRegion>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamRegion {
    #[serde(default)]
    pub iso: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

fn iso_date_prefix<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date_part = raw.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| serde::de::Error::custom(format!("invalid holiday date {raw:?}: {e}")))
}

// -- Normalization ------------------------------------------------------------

/// Map one upstream holiday into a [`HolidayRecord`] for `country`.
///
/// Only the first upstream type tag is kept. Region lists become
/// `counties`; `"All"` or no `states` field means nationwide.
pub fn normalize(item: UpstreamHoliday, country: &CountryCode) -> HolidayRecord {
    let counties = match item.states {
        Some(UpstreamStates::Regions(regions)) => {
            let ids: Vec<String> = regions
                .into_iter()
                .filter_map(|r| r.iso.or(r.name))
                .collect();
            (!ids.is_empty()).then_some(ids)
        }
        Some(UpstreamStates::Scope(_)) | None => None,
    };

    HolidayRecord {
        date: item.date.iso,
        local_name: item.name.clone(),
        name: item.name,
        country_code: country.clone(),
        fixed: true,
        global: counties.is_none(),
        counties,
        launch_year: None,
        types: item.types.into_iter().take(1).collect(),
    }
}

/// Decode a response body into normalized records for `scope`.
pub fn decode_holidays(
    endpoint: &str,
    body: &str,
    scope: &ScopeKey,
) -> Result<Vec<HolidayRecord>, ApiError> {
    let decode_err = |e: serde_json::Error| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source: e,
    };

    let envelope: Envelope = serde_json::from_str(body).map_err(decode_err)?;

    if let Some(meta) = &envelope.meta {
        if !(200..300).contains(&meta.code) {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: meta.code,
                body: meta.error_detail.clone().unwrap_or_default(),
            });
        }
    }

    let items = match envelope.response.get("holidays") {
        Some(serde_json::Value::Array(items)) => items.clone(),
        _ => {
            tracing::debug!(%scope, "response envelope carried no holidays array");
            return Ok(Vec::new());
        }
    };

    let upstream: Vec<UpstreamHoliday> =
        serde_json::from_value(serde_json::Value::Array(items)).map_err(decode_err)?;

    Ok(upstream
        .into_iter()
        .map(|item| normalize(item, &scope.country))
        .collect())
}

// -- Client -------------------------------------------------------------------

/// Client for the public holidays service.
///
/// `Debug` omits the API key.
#[derive(Clone)]
pub struct HolidayClient {
    http: reqwest::Client,
    base_url: url::Url,
    api_key: Zeroizing<String>,
    max_retries: u32,
}

impl std::fmt::Debug for HolidayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl HolidayClient {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: url::Url,
        api_key: Zeroizing<String>,
        max_retries: u32,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            max_retries,
        }
    }

    /// Fetch and normalize the holidays for one country-year.
    ///
    /// Calls `GET {base_url}/holidays?api_key=..&country=..&year=..`.
    pub async fn holidays(&self, scope: &ScopeKey) -> Result<Vec<HolidayRecord>, ApiError> {
        let endpoint = format!("GET /holidays {scope}");
        let url = format!("{}/holidays", self.base_url.as_str().trim_end_matches('/'));
        let year = scope.year.to_string();
        let query = [
            ("api_key", self.api_key.as_str()),
            ("country", scope.country.as_str()),
            ("year", year.as_str()),
        ];

        let body = send_for_body(self.max_retries, &endpoint, || {
            self.http.get(&url).query(&query)
        })
        .await?;

        let records = decode_holidays(&endpoint, &body, scope)?;
        tracing::debug!(%scope, count = records.len(), "holidays decoded");
        Ok(records)
    }
}
