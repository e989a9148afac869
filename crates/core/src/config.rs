use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Key under which the whole alert collection is stored.
pub const DEFAULT_STORAGE_KEY: &str = "priceAlerts";

/// Base URL of the flights API used for live price checks.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// HTTP request timeout for price providers, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the alert core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Store key holding the serialized alert collection
    pub storage_key: String,

    /// Base URL for `FlightApiProvider` (no trailing slash needed)
    pub api_base_url: String,

    /// Per-request timeout for HTTP providers
    pub request_timeout_secs: u64,

    /// Directory for `FileStore`; `None` means the embedding app decides
    pub data_dir: Option<PathBuf>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            data_dir: None,
        }
    }
}

impl AlertConfig {
    /// Build a config from the environment, loading `.env` first if present.
    ///
    /// Recognised variables:
    /// - `FLIGHT_ALERTS_STORAGE_KEY`
    /// - `FLIGHT_ALERTS_API_BASE_URL`
    /// - `FLIGHT_ALERTS_REQUEST_TIMEOUT_SECS`
    /// - `FLIGHT_ALERTS_DATA_DIR`
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let storage_key = env::var("FLIGHT_ALERTS_STORAGE_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.storage_key);

        let api_base_url = env::var("FLIGHT_ALERTS_API_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_secs = env::var("FLIGHT_ALERTS_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(defaults.request_timeout_secs);

        let data_dir = env::var("FLIGHT_ALERTS_DATA_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            storage_key,
            api_base_url,
            request_timeout_secs,
            data_dir,
        }
    }
}
