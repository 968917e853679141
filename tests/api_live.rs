//! Live API tests. Run with: `TE_API_KEY=... cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use gdp_compare::reshape::reshape;
use gdp_compare::{Client, Config};

#[test]
fn fetch_default_pair() {
    let client = Client::new(Config::from_env()).unwrap();
    let records = client
        .fetch(&["Mexico".into(), "Sweden".into()])
        .unwrap();
    assert!(!records.is_empty());
    assert!(records
        .iter()
        .all(|r| r.country == "Mexico" || r.country == "Sweden"));

    let rows = reshape(&records);
    assert!(!rows.is_empty());
    assert!(rows.len() <= records.len());
}

#[test]
fn fetch_name_with_space() {
    let client = Client::new(Config::from_env()).unwrap();
    let records = client
        .fetch(&["New Zealand".into(), "Thailand".into()])
        .unwrap();
    assert!(records.iter().any(|r| r.country == "New Zealand"));
}
