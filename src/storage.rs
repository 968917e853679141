use crate::models::SeriesRow;
use crate::selection::CountryPair;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn sanitize_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save the wide table as CSV: `dateTime,<first>,<second>`.
///
/// A country without a value on a date gets an empty cell, never `0`.
pub fn save_csv<P: AsRef<Path>>(rows: &[SeriesRow], pair: &CountryPair, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    let mut header = vec!["dateTime".to_string()];
    header.extend(pair.as_slice().iter().map(|c| sanitize_cell(c)));
    wtr.write_record(&header)?;
    for r in rows {
        let mut record = vec![sanitize_cell(&r.date_time)];
        record.extend(
            pair.as_slice()
                .iter()
                .map(|c| r.get(c).map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save rows as a pretty JSON array of flat objects.
pub fn save_json<P: AsRef<Path>>(rows: &[SeriesRow], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
