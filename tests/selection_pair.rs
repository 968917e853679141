use gdp_compare::models::{COUNTRIES, Slot};
use gdp_compare::{CountryPair, SelectionError};

#[test]
fn default_pair_is_mexico_sweden() {
    let pair = CountryPair::default();
    assert_eq!(pair.first(), "Mexico");
    assert_eq!(pair.second(), "Sweden");
    assert!(COUNTRIES.contains(&pair.first()));
    assert!(COUNTRIES.contains(&pair.second()));
}

#[test]
fn duplicate_selection_is_rejected_without_change() {
    let mut pair = CountryPair::default();
    let err = pair.select(Slot::First, "Sweden").unwrap_err();
    assert!(matches!(err, SelectionError::Duplicate { .. }));
    assert_eq!(err.to_string(), "Please select two different countries.");
    assert_eq!(pair, CountryPair::default());
}

#[test]
fn selecting_a_new_country_updates_only_that_slot() {
    let mut pair = CountryPair::default();
    assert!(pair.select(Slot::Second, "New Zealand").unwrap());
    assert_eq!(pair.first(), "Mexico");
    assert_eq!(pair.second(), "New Zealand");
}

#[test]
fn reselecting_the_current_value_is_a_no_op() {
    let mut pair = CountryPair::default();
    assert!(!pair.select(Slot::First, "Mexico").unwrap());
}

#[test]
fn selectable_excludes_other_slot() {
    let pair = CountryPair::default();
    assert!(!pair.is_selectable(Slot::First, "Sweden"));
    assert!(pair.is_selectable(Slot::First, "Thailand"));
    assert!(pair.is_selectable(Slot::First, "Mexico"));
}

#[test]
fn construct_and_parse() {
    assert!(CountryPair::new("Mexico", "Mexico").is_err());
    let p = CountryPair::parse("Thailand; New Zealand").unwrap();
    assert_eq!(p.as_slice(), ["Thailand".to_string(), "New Zealand".to_string()]);
    assert_eq!(p.to_string(), "Thailand,New Zealand");
    assert_eq!(
        CountryPair::parse("Mexico").unwrap_err(),
        SelectionError::WrongCount(1)
    );
    assert_eq!(
        CountryPair::parse("Mexico,Sweden,Thailand").unwrap_err(),
        SelectionError::WrongCount(3)
    );
    assert!(CountryPair::parse("Sweden,Sweden").is_err());
}
