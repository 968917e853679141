use crate::models::SeriesRow;
use crate::selection::CountryPair;
use serde::{Deserialize, Serialize};

/// Summary statistics for one country across the rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub country: String,
    pub count: usize,
    /// Rows with no value for this country.
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Value of the last row (in row order) that has one.
    pub latest: Option<f64>,
}

/// Compute one summary per country of `pair`, in slot order.
pub fn summarize(rows: &[SeriesRow], pair: &CountryPair) -> Vec<Summary> {
    pair.as_slice()
        .iter()
        .map(|country| summarize_country(rows, country))
        .collect()
}

fn summarize_country(rows: &[SeriesRow], country: &str) -> Summary {
    let in_order: Vec<f64> = rows.iter().filter_map(|r| r.get(country)).collect();
    let latest = in_order.last().copied();
    let missing = rows.len() - in_order.len();

    let mut vals = in_order;
    vals.sort_by(|a, b| a.total_cmp(b));
    let count = vals.len();
    let min = vals.first().cloned();
    let max = vals.last().cloned();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    Summary {
        country: country.to_string(),
        count,
        missing,
        min,
        max,
        mean,
        median,
        latest,
    }
}
