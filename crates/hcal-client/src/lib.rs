//! # hcal-client: Typed Client for the Directory and Holidays Services
//!
//! Provides typed access to the two upstream REST services hcal reads from:
//! - **Country directory** via `GET {directory_url}/AvailableCountries`
//! - **Public holidays** via `GET {holidays_url}/holidays?api_key&country&year`
//!
//! ## Architecture
//!
//! This crate is the only place that speaks HTTP. The state layer sees it
//! through the [`CountrySource`] and [`HolidaySource`] traits, so caches and
//! view state can be exercised without a network.

pub mod config;
pub mod directory;
pub mod error;
pub mod holidays;
pub(crate) mod retry;
pub mod source;
pub(crate) mod transport;

pub use config::{ConfigError, ConfigFile, HcalConfig};
pub use directory::DirectoryClient;
pub use error::ApiError;
pub use holidays::HolidayClient;
pub use source::{CountrySource, HolidaySource};

use std::time::Duration;

const USER_AGENT: &str = concat!("hcal/", env!("CARGO_PKG_VERSION"));

/// Top-level client. Holds one sub-client per upstream service.
#[derive(Debug, Clone)]
pub struct HcalClient {
    directory: DirectoryClient,
    holidays: HolidayClient,
}

impl HcalClient {
    /// Create a client from configuration.
    pub fn new(config: HcalConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        tracing::debug!(?config, "building upstream client");

        Ok(Self {
            directory: DirectoryClient::new(
                http.clone(),
                config.directory_url,
                config.max_retries,
            ),
            holidays: HolidayClient::new(
                http,
                config.holidays_url,
                config.api_key,
                config.max_retries,
            ),
        })
    }

    /// Access the country directory client.
    pub fn directory(&self) -> &DirectoryClient {
        &self.directory
    }

    /// Access the holidays client.
    pub fn holidays(&self) -> &HolidayClient {
        &self.holidays
    }
}
