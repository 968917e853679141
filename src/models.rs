use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Countries offered by the dashboard selectors (names exactly as the API expects them).
pub const COUNTRIES: [&str; 4] = ["Mexico", "Thailand", "Sweden", "New Zealand"];

/// Pair shown on startup.
pub const DEFAULT_PAIR: (&str, &str) = ("Mexico", "Sweden");

/// Raw observation as delivered by the historical endpoint.
///
/// Keys are PascalCase on the wire. Fields we do not model (`HistoricalDataSymbol`,
/// `LastUpdate`, …) are ignored on decode. A `null` or absent `Value` decodes to
/// `None` and leaves a gap for that country and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub date_time: String,
    pub country: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub frequency: String,
}

impl RawRecord {
    pub fn new(date_time: &str, country: &str, value: f64) -> Self {
        Self {
            date_time: date_time.to_string(),
            country: country.to_string(),
            value: Some(value),
            category: "GDP".to_string(),
            frequency: String::new(),
        }
    }
}

/// One row of the wide table: a date plus one value per country observed on it.
///
/// Serializes flat, e.g. `{"dateTime":"2020-01-01","Mexico":1.0,"Sweden":2.0}`.
/// A country without an observation on this date is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl SeriesRow {
    pub fn new(date_time: impl Into<String>) -> Self {
        Self {
            date_time: date_time.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, country: &str) -> Option<f64> {
        self.values.get(country).copied()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}

/// Turn wide rows back into long records, row by row in row order.
///
/// Reshaping the result yields the same rows again.
pub fn flatten(rows: &[SeriesRow]) -> Vec<RawRecord> {
    rows.iter()
        .flat_map(|row| {
            row.values
                .iter()
                .map(move |(country, v)| RawRecord::new(&row.date_time, country, *v))
        })
        .collect()
}

/// Which of the two comparison slots a selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}
