//! Synchronous client for the **Trading Economics historical indicator endpoint**.
//!
//! This module focuses on `historical/country/{countries}/indicator/{indicator}` and
//! returns the flat list of observations as `models::RawRecord` rows, unvalidated.
//!
//! ### Notes
//! - Country names go into the path exactly as given (no case normalization);
//!   only percent-encoding is applied, so `New Zealand` becomes `New%20Zealand`.
//! - The credential travels as the `c` query parameter and is redacted in logs.
//! - There is no retry and no caching: one call, one request.
//!
//! Typical usage:
//! ```no_run
//! # use gdp_compare::{Client, Config};
//! let client = Client::new(Config::from_env())?;
//! let records = client.fetch(&["Mexico".into(), "Sweden".into()])?;
//! let rows = gdp_compare::reshape::reshape(&records);
//! # Ok::<(), anyhow::Error>(())
//! ```
use crate::config::Config;
use crate::error::FetchError;
use crate::models::RawRecord;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;

/// Anything that can produce raw observations for a set of countries.
///
/// The dashboard controller only talks to this trait, so it can be driven by a
/// canned source in tests.
pub trait HistoricalSource {
    fn fetch(&self, countries: &[String]) -> Result<Vec<RawRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: HttpClient,
}

// Allow -, _, . unescaped in names; everything else (spaces included) is encoded.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, SAFE).to_string()
}

fn enc_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().map(enc).collect::<Vec<_>>().join(",")
}

/// Decode a response body into raw records.
pub fn parse_records(body: &str) -> Result<Vec<RawRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

impl Client {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(config.timeout) // total request timeout
            .redirect(Policy::limited(5))
            .user_agent(concat!("gdp_compare/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full request URL for the given countries, credential included.
    pub fn historical_url(&self, countries: &[String]) -> String {
        format!(
            "{}/historical/country/{}/indicator/{}?c={}",
            self.config.base_url,
            enc_join(countries.iter().map(|s| s.as_str())),
            enc(&self.config.indicator),
            enc(&self.config.api_key),
        )
    }

    /// Same URL with the credential masked, for logs and error messages.
    pub fn redacted_url(&self, countries: &[String]) -> String {
        let url = self.historical_url(countries);
        match url.split_once("?c=") {
            Some((head, _)) => format!("{head}?c=***"),
            None => url,
        }
    }

    /// Fetch historical observations for `countries`.
    ///
    /// ### Errors
    /// - `NoCountries` for an empty list
    /// - `Transport` on network failure (DNS, connect, timeout, …)
    /// - `Status` on a non-2xx answer (a bad or missing credential lands here)
    /// - `Decode` when the body is not a JSON array of records
    pub fn fetch(&self, countries: &[String]) -> Result<Vec<RawRecord>, FetchError> {
        if countries.is_empty() {
            return Err(FetchError::NoCountries);
        }
        let url = self.historical_url(countries);
        let shown = self.redacted_url(countries);
        log::debug!("GET {shown}");

        let result = self.get_records(&url, &shown);
        match &result {
            Ok(records) => log::debug!("GET {shown}: {} records", records.len()),
            Err(e) => log::error!("Error fetching data from {shown}: {e}"),
        }
        result
    }

    fn get_records(&self, url: &str, shown: &str) -> Result<Vec<RawRecord>, FetchError> {
        let resp = self.http.get(url).send().map_err(|source| FetchError::Transport {
            url: shown.to_string(),
            source,
        })?;
        let status = resp.status();
        let body = resp.text().map_err(|source| FetchError::Transport {
            url: shown.to_string(),
            source,
        })?;
        if !status.is_success() {
            return Err(FetchError::Status {
                url: shown.to_string(),
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }
        parse_records(&body)
    }
}

impl HistoricalSource for Client {
    fn fetch(&self, countries: &[String]) -> Result<Vec<RawRecord>, FetchError> {
        Client::fetch(self, countries)
    }
}
