use chrono::NaiveDate;

mod common;
use common::open_stores;

use punchcal::core::day::compute_day;
use punchcal::models::{DayField, Waiver};

const Y: i32 = 2026;
const M: u32 = 9;

#[test]
fn test_full_day_derives_both_totals() {
    let (mut records, waivers) = open_stores("day_full");
    records.set(Y, M, 1, DayField::DayBegin, "09:00").unwrap();
    records.set(Y, M, 1, DayField::LunchBegin, "12:00").unwrap();
    records.set(Y, M, 1, DayField::LunchEnd, "13:00").unwrap();
    records.set(Y, M, 1, DayField::DayEnd, "18:00").unwrap();

    let totals = compute_day(&mut records, &waivers, Y, M, 1).unwrap();
    assert_eq!(totals.lunch_total.as_deref(), Some("01:00"));
    assert_eq!(totals.day_total.as_deref(), Some("08:00"));
    assert!(!totals.has_error);

    // Derived fields were written through
    assert_eq!(records.get(Y, M, 1, DayField::LunchTotal), Some("01:00"));
    assert_eq!(records.get(Y, M, 1, DayField::DayTotal), Some("08:00"));
}

#[test]
fn test_day_without_lunch_keeps_gross_total() {
    let (mut records, waivers) = open_stores("day_no_lunch");
    records.set(Y, M, 2, DayField::DayBegin, "08:30").unwrap();
    records.set(Y, M, 2, DayField::DayEnd, "16:00").unwrap();

    let totals = compute_day(&mut records, &waivers, Y, M, 2).unwrap();
    assert_eq!(totals.lunch_total, None);
    assert_eq!(totals.day_total.as_deref(), Some("07:30"));
    assert!(!totals.has_error);
    assert_eq!(records.get(Y, M, 2, DayField::LunchTotal), None);
}

#[test]
fn test_lunch_outside_day_span_is_not_deducted() {
    let (mut records, waivers) = open_stores("day_lunch_outside");
    records.set(Y, M, 3, DayField::DayBegin, "09:00").unwrap();
    records.set(Y, M, 3, DayField::LunchBegin, "08:00").unwrap();
    records.set(Y, M, 3, DayField::LunchEnd, "08:30").unwrap();
    records.set(Y, M, 3, DayField::DayEnd, "18:00").unwrap();

    let totals = compute_day(&mut records, &waivers, Y, M, 3).unwrap();
    // The lunch pair is internally consistent, so its total derives,
    // but it does not reduce the day total.
    assert_eq!(totals.lunch_total.as_deref(), Some("00:30"));
    assert_eq!(totals.day_total.as_deref(), Some("09:00"));
    // lunch-begin precedes day-begin: ordering violation
    assert!(totals.has_error);
}

#[test]
fn test_equal_adjacent_entries_flag_an_error() {
    let (mut records, waivers) = open_stores("day_equal");
    records.set(Y, M, 4, DayField::LunchBegin, "12:00").unwrap();
    records.set(Y, M, 4, DayField::LunchEnd, "12:00").unwrap();

    let totals = compute_day(&mut records, &waivers, Y, M, 4).unwrap();
    assert_eq!(totals.lunch_total, None);
    assert!(totals.has_error);
}

#[test]
fn test_partial_day_leaves_totals_absent() {
    let (mut records, waivers) = open_stores("day_partial");
    records.set(Y, M, 7, DayField::DayBegin, "09:00").unwrap();

    let totals = compute_day(&mut records, &waivers, Y, M, 7).unwrap();
    assert_eq!(totals.lunch_total, None);
    assert_eq!(totals.day_total, None);
    assert!(!totals.has_error);
}

#[test]
fn test_end_before_begin_removes_stale_total() {
    let (mut records, waivers) = open_stores("day_stale");
    records.set(Y, M, 8, DayField::DayBegin, "09:00").unwrap();
    records.set(Y, M, 8, DayField::DayEnd, "18:00").unwrap();
    compute_day(&mut records, &waivers, Y, M, 8).unwrap();
    assert_eq!(records.get(Y, M, 8, DayField::DayTotal), Some("09:00"));

    // Moving the end before the begin invalidates the derivation; the
    // stored total must be deleted, not left stale.
    records.set(Y, M, 8, DayField::DayEnd, "08:00").unwrap();
    let totals = compute_day(&mut records, &waivers, Y, M, 8).unwrap();
    assert_eq!(totals.day_total, None);
    assert_eq!(records.get(Y, M, 8, DayField::DayTotal), None);
    assert!(totals.has_error);
}

#[test]
fn test_waiver_overrides_computed_total() {
    let (mut records, mut waivers) = open_stores("day_waiver");
    records.set(Y, M, 9, DayField::DayBegin, "09:00").unwrap();
    records.set(Y, M, 9, DayField::DayEnd, "18:00").unwrap();
    waivers
        .set(
            NaiveDate::from_ymd_opt(Y, M, 9).unwrap(),
            Waiver {
                hours: "04:00".to_string(),
                reason: "Doctor appointment".to_string(),
            },
        )
        .unwrap();

    let totals = compute_day(&mut records, &waivers, Y, M, 9).unwrap();
    assert_eq!(totals.day_total.as_deref(), Some("04:00"));
    assert!(!totals.has_error);
}
