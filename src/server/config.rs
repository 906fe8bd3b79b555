//! Environment configuration.
//!
//! Every component receives its settings from a [`Config`] built once at startup, there
//! are no process-wide database paths or API keys.

use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub static DEFAULT_FRONTEND_DIR: &str = "frontend";
pub static DEFAULT_MDA_LANDING_URL: &str = "https://www.mdais.org/blood-donation";
pub static DEFAULT_MDA_API_URL: &str = "https://www.mdais.org/umbraco/api/invoker/execute";
pub static DEFAULT_PLACES_API_URL: &str =
    "https://maps.googleapis.com/maps/api/place/textsearch/json";
pub static DEFAULT_USER_AGENT: &str = concat!("donation-map/", env!("CARGO_PKG_VERSION"));

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_GEOCODE_MIN_DELAY_MS: u64 = 100;
const DEFAULT_GEOCODE_MAX_ATTEMPTS: u32 = 3;

pub struct Config {
    pub donations_db_path: PathBuf,
    pub geocache_db_path: PathBuf,
    /// Only the pipeline needs a key, the server never geocodes.
    pub google_api_key: Option<String>,
    pub bind_address: String,
    pub frontend_dir: PathBuf,
    pub mda_landing_url: String,
    pub mda_api_url: String,
    pub places_api_url: String,
    pub mda_fetch_limit: Option<usize>,
    pub http_timeout: Duration,
    pub geocode_min_delay: Duration,
    pub geocode_max_attempts: u32,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            donations_db_path: PathBuf::from(required("DONATIONS_DB_PATH")?),
            geocache_db_path: PathBuf::from(required("GEOCACHE_DB_PATH")?),
            google_api_key: optional("GOOGLE_API_KEY"),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            frontend_dir: PathBuf::from(
                optional("FRONTEND_DIR").unwrap_or_else(|| DEFAULT_FRONTEND_DIR.to_string()),
            ),
            mda_landing_url: optional("MDA_LANDING_URL")
                .unwrap_or_else(|| DEFAULT_MDA_LANDING_URL.to_string()),
            mda_api_url: optional("MDA_API_URL").unwrap_or_else(|| DEFAULT_MDA_API_URL.to_string()),
            places_api_url: optional("PLACES_API_URL")
                .unwrap_or_else(|| DEFAULT_PLACES_API_URL.to_string()),
            mda_fetch_limit: parsed("MDA_FETCH_LIMIT")?,
            http_timeout: Duration::from_secs(
                parsed("HTTP_TIMEOUT_SECS")?.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
            geocode_min_delay: Duration::from_millis(
                parsed("GEOCODE_MIN_DELAY_MS")?.unwrap_or(DEFAULT_GEOCODE_MIN_DELAY_MS),
            ),
            geocode_max_attempts: parsed("GEOCODE_MAX_ATTEMPTS")?
                .unwrap_or(DEFAULT_GEOCODE_MAX_ATTEMPTS)
                .max(1),
            user_agent: optional("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }

    /// Returns the Google API key or a [`ConfigError::MissingEnvVar`] if it was not set.
    pub fn require_google_api_key(&self) -> Result<&str, ConfigError> {
        self.google_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GOOGLE_API_KEY".to_string()))
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(var)
        .map(|value| {
            value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
