//! Month aggregation: total worked, working-day count, balance against
//! the hours-per-day target, and the leave-by projection for today.
//!
//! Everything here is computed defensively: absent or invalid inputs
//! degrade to blank or neutral values, never to a failure.

use chrono::{Datelike, NaiveDate};

use crate::config::{Preferences, show_day};
use crate::core::store::{DayRecordStore, WaiverStore};
use crate::core::time_math::{
    multiply_time, subtract_time, sum_time, to_minutes, validate_time,
};
use crate::models::DayField;
use crate::utils::date::month_length;

/// Value shown past 23:59: a leave-by that is not reachable today.
pub const UNREACHABLE: &str = "--:--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthStats {
    pub month_total: String,
    pub working_days: u32,
    pub balance: String,
    /// Day the balance row is anchored to (0 when the month has no
    /// qualifying day yet).
    pub balance_row_day: u32,
}

/// Summary surfaced for today: still working (with the projected
/// leave-by, when derivable) or finished (with the day balance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySummary {
    Working { leave_by: Option<String> },
    Finished { day_balance: String },
}

/// The effective total of a day: waiver hours when waived, otherwise
/// the stored derived total.
pub fn day_total_for(
    records: &DayRecordStore,
    waivers: &WaiverStore,
    year: i32,
    month: u32,
    day: u32,
) -> Option<String> {
    if let Some(waiver) = waivers.get(year, month, day) {
        return Some(waiver.hours.clone());
    }
    records
        .get(year, month, day, DayField::DayTotal)
        .map(str::to_string)
}

pub fn month_stats(
    records: &DayRecordStore,
    waivers: &WaiverStore,
    prefs: &Preferences,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> MonthStats {
    let length = month_length(year, month);
    let mut month_total = "00:00".to_string();
    let mut working_days = 0u32;
    let mut reached_today = false;

    for day in 1..=length {
        if !show_day(year, month, day, prefs) {
            continue;
        }
        reached_today |= is_today(today, year, month, day);
        // Today is still being lived; it and everything after it stay
        // out of the running month stats.
        if reached_today {
            continue;
        }
        if let Some(total) = day_total_for(records, waivers, year, month, day) {
            month_total = sum_time(&month_total, &total);
        }
        working_days += 1;
    }

    MonthStats {
        month_total,
        working_days,
        balance: balance(records, waivers, prefs, year, month, today),
        balance_row_day: balance_row_position(prefs, year, month, today),
    }
}

/// Signed difference between hours worked and the target, over the days
/// of the month that have a recorded total. A day with no entries yet
/// does not count against the target.
pub fn balance(
    records: &DayRecordStore,
    waivers: &WaiverStore,
    prefs: &Preferences,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> String {
    let length = month_length(year, month);
    let mut worked = "00:00".to_string();
    let mut days_to_compute = 0i64;
    let mut past_today = false;

    for day in 1..=length {
        if !show_day(year, month, day, prefs) {
            continue;
        }
        let today_now = is_today(today, year, month, day);
        if today_now && !prefs.count_today {
            break;
        }
        if past_today && prefs.count_today {
            break;
        }
        if let Some(total) = day_total_for(records, waivers, year, month, day) {
            worked = sum_time(&worked, &total);
            days_to_compute += 1;
        }
        past_today = today_now;
    }

    let target = multiply_time(&prefs.hours_per_day, -days_to_compute);
    sum_time(&target, &worked)
}

/// Row the month aggregates are anchored to: the last working day
/// strictly before today when viewing the current month, otherwise the
/// last day of the displayed month.
pub fn balance_row_position(prefs: &Preferences, year: i32, month: u32, today: NaiveDate) -> u32 {
    if year != today.year() || month != today.month() {
        return month_length(year, month);
    }
    let mut position = 0;
    for day in 1..today.day() {
        if show_day(year, month, day, prefs) {
            position = day;
        }
    }
    position
}

/// Projected end of today's work: morning start plus the daily target
/// plus any lunch taken. `None` when the start is not entered yet;
/// [`UNREACHABLE`] when the projection passes 23:59.
pub fn leave_by(
    records: &DayRecordStore,
    prefs: &Preferences,
    today: NaiveDate,
) -> Option<String> {
    let (year, month, day) = (today.year(), today.month(), today.day());
    let day_begin = records.get(year, month, day, DayField::DayBegin)?;
    if !validate_time(day_begin) {
        return None;
    }
    let mut leave = sum_time(day_begin, &prefs.hours_per_day);
    if let Some(lunch) = records.get(year, month, day, DayField::LunchTotal) {
        leave = sum_time(&leave, lunch);
    }
    if to_minutes(&leave).unwrap_or(i64::MAX) <= 23 * 60 + 59 {
        Some(leave)
    } else {
        Some(UNREACHABLE.to_string())
    }
}

/// Today's summary, or `None` when no summary applies (today is outside
/// the displayed month, not a working day, or waived).
pub fn day_summary(
    records: &DayRecordStore,
    waivers: &WaiverStore,
    prefs: &Preferences,
    view_year: i32,
    view_month: u32,
    today: NaiveDate,
) -> Option<DaySummary> {
    if view_year != today.year() || view_month != today.month() {
        return None;
    }
    let (year, month, day) = (today.year(), today.month(), today.day());
    if !show_day(year, month, day, prefs) || waivers.get(year, month, day).is_some() {
        return None;
    }

    let entries = records.entries_for(year, month, day);
    if entries.is_complete()
        && let Some(total) = records.get(year, month, day, DayField::DayTotal)
    {
        return Some(DaySummary::Finished {
            day_balance: subtract_time(&prefs.hours_per_day, total),
        });
    }
    Some(DaySummary::Working {
        leave_by: leave_by(records, prefs, today),
    })
}

fn is_today(today: NaiveDate, year: i32, month: u32, day: u32) -> bool {
    today.year() == year && today.month() == month && today.day() == day
}
