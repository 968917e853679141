//! Label formatting shared by the static renderer, the GUI and the CLI.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

/// Render an API date as a short US date (`MM/DD/YYYY`).
///
/// Accepts `2020-12-31T00:00:00`, `2020-12-31` and RFC 3339 timestamps.
/// Anything else is logged and returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%m/%d/%Y").to_string(),
        None => {
            log::warn!("Error formatting date: {raw:?}");
            raw.to_string()
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Locale-aware number with up to two decimals: `1,234.57` / `1.234,57`.
pub fn format_value(v: f64, locale_tag: &str) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    let rounded = (v.abs() * 100.0).round() / 100.0;
    let int = rounded.trunc() as i64;
    let frac = ((rounded - rounded.trunc()) * 100.0).round() as i64;
    let sign = if v < 0.0 && rounded != 0.0 { "-" } else { "" };
    let whole = int.to_formatted_string(locale);
    if frac == 0 {
        format!("{sign}{whole}")
    } else {
        let frac = format!("{frac:02}");
        format!("{sign}{whole}{dec_sep}{}", frac.trim_end_matches('0'))
    }
}
