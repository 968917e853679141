use gdp_compare::models::{RawRecord, flatten};
use gdp_compare::reshape::reshape;

fn rec(date: &str, country: &str, value: f64) -> RawRecord {
    RawRecord::new(date, country, value)
}

#[test]
fn two_dates_two_countries() {
    let input = vec![
        rec("2020-01-01", "Mexico", 1.0),
        rec("2020-01-01", "Sweden", 2.0),
        rec("2020-02-01", "Mexico", 1.5),
    ];
    let rows = reshape(&input);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date_time, "2020-01-01");
    assert_eq!(rows[0].get("Mexico"), Some(1.0));
    assert_eq!(rows[0].get("Sweden"), Some(2.0));
    assert_eq!(rows[1].date_time, "2020-02-01");
    assert_eq!(rows[1].get("Mexico"), Some(1.5));
    // Absent, not zero.
    assert_eq!(rows[1].get("Sweden"), None);
    assert_eq!(rows[1].values.len(), 1);
}

#[test]
fn rows_follow_first_appearance_not_sort_order() {
    let input = vec![
        rec("2021-12-31", "Sweden", 3.0),
        rec("2019-12-31", "Sweden", 1.0),
        rec("2020-12-31", "Mexico", 2.0),
        rec("2019-12-31", "Mexico", 4.0),
    ];
    let dates: Vec<String> = reshape(&input).into_iter().map(|r| r.date_time).collect();
    assert_eq!(dates, vec!["2021-12-31", "2019-12-31", "2020-12-31"]);
}

#[test]
fn last_record_wins_per_date_and_country() {
    let input = vec![
        rec("2020-01-01", "Mexico", 1.0),
        rec("2020-01-01", "Sweden", 2.0),
        rec("2020-01-01", "Mexico", 7.0),
    ];
    let rows = reshape(&input);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("Mexico"), Some(7.0));
    assert_eq!(rows[0].get("Sweden"), Some(2.0));
}

#[test]
fn dates_compare_as_exact_strings() {
    let input = vec![
        rec("2020-01-01", "Mexico", 1.0),
        rec("2020-01-01T00:00:00", "Sweden", 2.0),
    ];
    assert_eq!(reshape(&input).len(), 2);
}

#[test]
fn every_field_comes_from_a_record_of_that_date() {
    let input = vec![
        rec("a", "Mexico", 1.0),
        rec("b", "Sweden", 2.0),
        rec("a", "Thailand", 3.0),
        rec("b", "Mexico", 4.0),
        rec("a", "Mexico", 5.0),
    ];
    for row in reshape(&input) {
        for country in row.countries() {
            let last = input
                .iter()
                .filter(|r| r.date_time == row.date_time && r.country == country)
                .last()
                .and_then(|r| r.value);
            assert_eq!(row.get(country), last);
        }
    }
}

#[test]
fn empty_input() {
    assert!(reshape(&[]).is_empty());
}

#[test]
fn reshape_after_flatten_is_stable() {
    let input = vec![
        rec("2020-01-01", "Mexico", 1.0),
        rec("2020-01-01", "Sweden", 2.0),
        rec("2020-02-01", "Mexico", 1.5),
    ];
    let rows = reshape(&input);
    assert_eq!(reshape(&flatten(&rows)), rows);
}
