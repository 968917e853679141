//! Runtime configuration for the fetcher.
//!
//! Values come from the environment once at startup and are then handed to
//! [`crate::Client::new`] explicitly.

use std::time::Duration;

pub const ENV_API_KEY: &str = "TE_API_KEY";
pub const ENV_BASE_URL: &str = "TE_BASE_URL";
pub const ENV_INDICATOR: &str = "TE_INDICATOR";

pub const DEFAULT_BASE_URL: &str = "https://api.tradingeconomics.com";
pub const DEFAULT_INDICATOR: &str = "gdp";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Static credential sent as the `c` query parameter.
    pub api_key: String,
    pub base_url: String,
    /// Indicator path segment, `gdp` unless overridden.
    pub indicator: String,
    /// Total request timeout.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            indicator: DEFAULT_INDICATOR.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Read `TE_API_KEY`, `TE_BASE_URL` and `TE_INDICATOR`.
    ///
    /// A missing key is not fatal: the remote service will reject the request
    /// and that rejection is reported as a fetch error.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = non_empty(ENV_API_KEY).unwrap_or_else(|| {
            log::warn!("{ENV_API_KEY} is not set; requests will be rejected by the API");
            String::new()
        });
        let mut cfg = Self::with_api_key(api_key);
        if let Some(url) = non_empty(ENV_BASE_URL) {
            cfg.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ind) = non_empty(ENV_INDICATOR) {
            cfg.indicator = ind;
        }
        cfg
    }
}
