//! Per-day derivation: lunch total, day total and the ordering-error flag.
//!
//! Every recompute writes the derived `lunch-total`/`day-total` fields
//! through to the store, or removes them when they no longer derive.
//! A waived day short-circuits: the waiver hours stand in for the day
//! total, nothing is recomputed and error checking is skipped.

use crate::core::store::{DayRecordStore, WaiverStore};
use crate::core::time_math::{subtract_time, validate_time};
use crate::errors::AppResult;
use crate::models::{DayEntries, DayField, DayTotals};

pub fn compute_day(
    records: &mut DayRecordStore,
    waivers: &WaiverStore,
    year: i32,
    month: u32,
    day: u32,
) -> AppResult<DayTotals> {
    if let Some(waiver) = waivers.get(year, month, day) {
        return Ok(DayTotals {
            lunch_total: records
                .get(year, month, day, DayField::LunchTotal)
                .map(str::to_string),
            day_total: Some(waiver.hours.clone()),
            has_error: false,
        });
    }

    let entries = records.entries_for(year, month, day);

    let lunch_total = lunch_total(&entries);
    match &lunch_total {
        Some(value) => records.set(year, month, day, DayField::LunchTotal, value)?,
        None => records.remove(year, month, day, DayField::LunchTotal)?,
    }

    let day_total = day_total(&entries, lunch_total.as_deref());
    match &day_total {
        Some(value) => records.set(year, month, day, DayField::DayTotal, value)?,
        None => records.remove(year, month, day, DayField::DayTotal)?,
    }

    Ok(DayTotals {
        lunch_total,
        day_total,
        has_error: has_input_error(&entries),
    })
}

/// Lunch duration, derivable only when both lunch stamps are valid and
/// the end comes after the begin.
fn lunch_total(entries: &DayEntries) -> Option<String> {
    let begin = entries.lunch_begin.as_deref()?;
    let end = entries.lunch_end.as_deref()?;
    if validate_time(begin) && validate_time(end) && end > begin {
        Some(subtract_time(begin, end))
    } else {
        None
    }
}

/// Worked hours of the day; the lunch break is deducted only when it
/// sits strictly inside the day span.
fn day_total(entries: &DayEntries, lunch_total: Option<&str>) -> Option<String> {
    let begin = entries.day_begin.as_deref()?;
    let end = entries.day_end.as_deref()?;
    if !(validate_time(begin) && validate_time(end) && end > begin) {
        return None;
    }
    let mut total = subtract_time(begin, end);
    if let (Some(lunch), Some(lunch_begin), Some(lunch_end)) = (
        lunch_total,
        entries.lunch_begin.as_deref(),
        entries.lunch_end.as_deref(),
    ) && lunch_begin > begin
        && end > lunch_end
    {
        total = subtract_time(lunch, &total);
    }
    Some(total)
}

/// An error means that an entry earlier in the day is at or past one
/// that comes after it. Invalid or absent entries are skipped, not
/// treated as violations.
pub fn has_input_error(entries: &DayEntries) -> bool {
    let valid: Vec<&str> = entries
        .in_order()
        .into_iter()
        .flatten()
        .filter(|v| validate_time(v))
        .collect();
    valid.windows(2).any(|pair| pair[0] >= pair[1])
}
