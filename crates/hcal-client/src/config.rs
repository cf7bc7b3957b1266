//! Client configuration.
//!
//! Resolved once at startup. Precedence is environment, then the optional
//! YAML file, then built-in defaults. The holidays API key has no default:
//! its absence is a startup error.

use std::path::{Path, PathBuf};

use hcal_core::{CountryCode, ValidationError};
use serde::Deserialize;
use url::Url;
use zeroize::Zeroizing;

pub const DEFAULT_HOLIDAYS_URL: &str = "https://calendarific.com/api/v2";
pub const DEFAULT_DIRECTORY_URL: &str = "https://date.nager.at/api/v3";
pub const DEFAULT_COUNTRY: &str = "IN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the directory and holidays services.
///
/// Custom `Debug` implementation redacts the `api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct HcalConfig {
    /// Base URL of the holidays service.
    pub holidays_url: Url,
    /// Base URL of the country directory service.
    pub directory_url: Url,
    /// Holidays service API key, sent as the `api_key` query parameter.
    pub api_key: Zeroizing<String>,
    /// Country that is always present in the directory and selected first.
    pub default_country: CountryCode,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Extra attempts after a transport failure. Zero disables retry.
    pub max_retries: u32,
}

impl std::fmt::Debug for HcalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HcalConfig")
            .field("holidays_url", &self.holidays_url)
            .field("directory_url", &self.directory_url)
            .field("api_key", &"[REDACTED]")
            .field("default_country", &self.default_country)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// On-disk configuration. Every key is optional.
///
/// ```yaml
/// api_key: "..."
/// default_country: IN
/// timeout_secs: 10
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub holidays_url: Option<String>,
    pub directory_url: Option<String>,
    pub default_country: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl HcalConfig {
    /// Load configuration from environment variables only.
    ///
    /// Variables:
    /// - `HCAL_API_KEY` (required)
    /// - `HCAL_HOLIDAYS_URL` (default: `https://calendarific.com/api/v2`)
    /// - `HCAL_DIRECTORY_URL` (default: `https://date.nager.at/api/v3`)
    /// - `HCAL_DEFAULT_COUNTRY` (default: `IN`)
    /// - `HCAL_TIMEOUT_SECS` (default: 30)
    /// - `HCAL_MAX_RETRIES` (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(ConfigFile::default(), |var| std::env::var(var).ok())
    }

    /// Load the optional YAML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => ConfigFile::load(p)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, |var| std::env::var(var).ok())
    }

    /// Merge `file` with values produced by `env`.
    pub fn resolve(
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = env("HCAL_API_KEY")
            .or(file.api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let url_var = |var: &str, from_file: Option<String>, default: &str| {
            let raw = env(var)
                .or(from_file)
                .unwrap_or_else(|| default.to_string());
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
        };

        let default_country = env("HCAL_DEFAULT_COUNTRY")
            .or(file.default_country)
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        Ok(Self {
            holidays_url: url_var("HCAL_HOLIDAYS_URL", file.holidays_url, DEFAULT_HOLIDAYS_URL)?,
            directory_url: url_var(
                "HCAL_DIRECTORY_URL",
                file.directory_url,
                DEFAULT_DIRECTORY_URL,
            )?,
            api_key: Zeroizing::new(api_key),
            default_country: CountryCode::new(&default_country)?,
            timeout_secs: env_number(&env, "HCAL_TIMEOUT_SECS")?
                .or(file.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            max_retries: env_number(&env, "HCAL_MAX_RETRIES")?
                .or(file.max_retries)
                .unwrap_or(0),
        })
    }

    /// Configuration pointing both services at one local mock server.
    pub fn local_mock(uri: &str, api_key: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(uri)
            .map_err(|e| ConfigError::InvalidUrl("local_mock".to_string(), e.to_string()))?;
        Ok(Self {
            holidays_url: url.clone(),
            directory_url: url,
            api_key: Zeroizing::new(api_key.to_string()),
            default_country: CountryCode::new(DEFAULT_COUNTRY)?,
            timeout_secs: 5,
            max_retries: 0,
        })
    }
}

fn env_number<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    var: &str,
) -> Result<Option<T>, ConfigError> {
    match env(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HCAL_API_KEY is required (environment or config file)")]
    MissingApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
    #[error("invalid default country: {0}")]
    InvalidCountry(#[from] ValidationError),
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn resolve_applies_defaults() {
        let cfg = HcalConfig::resolve(ConfigFile::default(), env_of(&[("HCAL_API_KEY", "k")]))
            .unwrap();
        assert_eq!(cfg.api_key.as_str(), "k");
        assert_eq!(cfg.holidays_url.as_str(), "https://calendarific.com/api/v2");
        assert_eq!(cfg.directory_url.as_str(), "https://date.nager.at/api/v3");
        assert_eq!(cfg.default_country.as_str(), "IN");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_retries, 0);
    }

    #[test]
    fn missing_api_key_is_a_startup_error() {
        let err = HcalConfig::resolve(ConfigFile::default(), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let err = HcalConfig::resolve(ConfigFile::default(), env_of(&[("HCAL_API_KEY", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn env_overrides_file() {
        let file = ConfigFile {
            api_key: Some("from-file".into()),
            default_country: Some("us".into()),
            timeout_secs: Some(12),
            ..Default::default()
        };
        let cfg = HcalConfig::resolve(
            file,
            env_of(&[("HCAL_DEFAULT_COUNTRY", "de"), ("HCAL_MAX_RETRIES", "2")]),
        )
        .unwrap();
        assert_eq!(cfg.api_key.as_str(), "from-file");
        assert_eq!(cfg.default_country.as_str(), "DE");
        assert_eq!(cfg.timeout_secs, 12);
        assert_eq!(cfg.max_retries, 2);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = HcalConfig::resolve(
            ConfigFile::default(),
            env_of(&[("HCAL_API_KEY", "k"), ("HCAL_HOLIDAYS_URL", "not a url")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(ref var, _) if var == "HCAL_HOLIDAYS_URL"));

        let err = HcalConfig::resolve(
            ConfigFile::default(),
            env_of(&[("HCAL_API_KEY", "k"), ("HCAL_TIMEOUT_SECS", "soon")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber(..)));

        let err = HcalConfig::resolve(
            ConfigFile::default(),
            env_of(&[("HCAL_API_KEY", "k"), ("HCAL_DEFAULT_COUNTRY", "India")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCountry(_)));
    }

    #[test]
    fn config_file_parses_yaml_and_rejects_unknown_keys() {
        let file: ConfigFile =
            serde_yaml::from_str("api_key: abc\ndefault_country: GB\ntimeout_secs: 3\n").unwrap();
        assert_eq!(file.api_key.as_deref(), Some("abc"));
        assert_eq!(file.timeout_secs, Some(3));
        assert!(serde_yaml::from_str::<ConfigFile>("apikey: abc\n").is_err());
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = HcalConfig::local_mock("http://127.0.0.1:9000", "super-secret").unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
