//! gdp_compare
//!
//! A small Rust library for comparing the historical GDP of two countries using
//! the Trading Economics historical indicator API. Pairs with the `gdpc` CLI and
//! the `gdpc-gui` desktop dashboard.
//!
//! ### Features
//! - Fetch the raw (date, country, value) observations for a pair of countries
//! - Reshape them into one row per date with one value per country
//! - Guard the selected pair against choosing the same country twice
//! - Render a two-line chart to SVG/PNG, export CSV/JSON, print summaries
//!
//! ### Example
//! ```no_run
//! use gdp_compare::{Client, Config, CountryPair};
//!
//! let client = Client::new(Config::from_env())?;
//! let pair = CountryPair::new("Mexico", "Sweden")?;
//! let records = client.fetch(pair.as_slice())?;
//! let rows = gdp_compare::reshape::reshape(&records);
//! gdp_compare::storage::save_csv(&rows, &pair, "gdp.csv")?;
//! gdp_compare::viz::plot_rows(&rows, &pair, "gdp.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod reshape;
pub mod selection;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::{Client, HistoricalSource};
pub use config::Config;
pub use dashboard::{Dashboard, LoadOutcome, LoadTicket};
pub use error::{FetchError, SelectionError};
pub use models::{RawRecord, SeriesRow, Slot};
pub use selection::CountryPair;
