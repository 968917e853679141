//! Error types surfaced by the library.

use thiserror::Error;

/// Failures of a historical fetch: transport, HTTP status, or body decoding.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("at least one country required")]
    NoCountries,

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Rejected changes to the selected country pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select two different countries.")]
    Duplicate { country: String },

    #[error("expected exactly two countries, got {0}")]
    WrongCount(usize),
}
