//! Long-to-wide reshaping of raw observations.

use crate::models::{RawRecord, SeriesRow};
use ahash::AHashMap;

/// Group records by `DateTime` into one row per distinct date.
///
/// Rows come out in the order their date was first seen (not sorted). Within a
/// row the last record for a given country wins; a last record without a value
/// leaves the country absent from that row. Dates compare by exact string
/// equality.
pub fn reshape(records: &[RawRecord]) -> Vec<SeriesRow> {
    let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(records.len());
    let mut rows: Vec<SeriesRow> = Vec::new();

    for r in records {
        let pos = *index.entry(r.date_time.as_str()).or_insert_with(|| {
            rows.push(SeriesRow::new(r.date_time.as_str()));
            rows.len() - 1
        });
        match r.value {
            Some(v) => {
                rows[pos].values.insert(r.country.clone(), v);
            }
            None => {
                rows[pos].values.remove(&r.country);
            }
        }
    }
    rows
}
