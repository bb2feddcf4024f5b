//! Tests for the core data model in covstat-common.
//!
//! This test suite covers:
//! - Ordering of records and heat records
//! - Array-shaped JSON serialization
//! - Weekday derivation under the Monday = 0 convention

use chrono::{Datelike, Duration, NaiveDate};
use covstat_common::types::*;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_records_sort_chronologically() {
    let mut records = vec![
        Record::new(date(2020, 10, 12), vec![3, 104]),
        Record::new(date(2020, 10, 11), vec![5, 12]),
        Record::new(date(2020, 9, 30), vec![1, 1]),
    ];
    records.sort();

    let dates: Vec<String> = records.iter().map(Record::iso_date).collect();
    assert_eq!(dates, vec!["2020-09-30", "2020-10-11", "2020-10-12"]);
}

#[test]
fn test_same_date_ties_break_on_values() {
    let mut records = vec![
        Record::new(date(2020, 10, 11), vec![5, 12]),
        Record::new(date(2020, 10, 11), vec![2, 40]),
    ];
    records.sort();
    assert_eq!(records[0].values, vec![2, 40]);
}

#[test]
fn test_record_sequence_serializes_as_array_of_arrays() {
    let records = vec![
        Record::new(date(2020, 10, 11), vec![5, 12]),
        Record::new(date(2020, 10, 12), vec![3, 104]),
    ];
    let json = serde_json::to_string(&records).unwrap();
    assert_eq!(json, r#"[["2020-10-11",5,12],["2020-10-12",3,104]]"#);
}

#[test]
fn test_heat_record_serializes_weekday_first() {
    let record = HeatRecord::new(date(2020, 10, 11), vec![5, 12]);
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"[6,"2020-10-11",5,12]"#);
}

#[test]
fn test_weekday_names_line_up_with_index() {
    let monday = date(2020, 10, 12);
    for offset in 0..7 {
        let day = monday + Duration::days(offset);
        let name = WEEKDAY_NAMES[usize::from(weekday_index(day))];
        assert_eq!(&day.format("%A").to_string(), name);
    }
}

proptest! {
    #[test]
    fn test_property_weekday_index_in_range(days in 0i64..40_000) {
        let day = date(1970, 1, 1) + Duration::days(days);
        let index = weekday_index(day);
        prop_assert!(index <= 6);
        prop_assert_eq!(u32::from(index), day.weekday().num_days_from_monday());
    }

    #[test]
    fn test_property_iso_date_round_trips(days in 0i64..40_000) {
        let day = date(1970, 1, 1) + Duration::days(days);
        let record = Record::new(day, vec![]);
        let parsed = NaiveDate::parse_from_str(&record.iso_date(), "%Y-%m-%d").unwrap();
        prop_assert_eq!(parsed, day);
    }
}
