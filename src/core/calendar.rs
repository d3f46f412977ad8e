//! Calendar controller: displayed-month state, navigation, the punch
//! operation and the field-edit callback.
//!
//! The controller owns the stores and the view state and hands computed
//! month snapshots to whatever renders them. Outbound effects (the
//! punch-availability signal, the request to open a waiver editor) go
//! through the [`CalendarEvents`] sink injected at construction.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::config::{Preferences, show_day};
use crate::core::day;
use crate::core::month::{self, DaySummary, MonthStats};
use crate::core::store::{DayRecordStore, WaiverStore};
use crate::core::time_math::{hour_min_to_hour_formatted, validate_time};
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntries, DayField, DayTotals, RAW_FIELDS};
use crate::utils::date::{month_label, month_length, weekday_abbr};

/// Outbound event sink for state changes the UI shell cares about.
pub trait CalendarEvents {
    /// Punch availability for today changed (tray-icon style signal).
    fn punch_availability(&mut self, _available: bool) {}
    /// The user asked to edit the waiver for a date.
    fn open_waiver_editor(&mut self, _date: NaiveDate) {}
}

/// Sink that ignores every event.
pub struct NullEvents;

impl CalendarEvents for NullEvents {}

/// One rendered calendar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub day: u32,
    pub weekday: String,
    pub is_today: bool,
    pub kind: DayRowKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayRowKind {
    NonWorking,
    Waived {
        reason: String,
        day_total: String,
    },
    Entry {
        entries: DayEntries,
        lunch_total: Option<String>,
        day_total: Option<String>,
        has_error: bool,
    },
}

/// Snapshot of everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub rows: Vec<DayRow>,
    pub stats: MonthStats,
    pub summary: Option<DaySummary>,
}

pub struct Calendar {
    records: DayRecordStore,
    waivers: WaiverStore,
    prefs: Preferences,
    today: NaiveDate,
    year: i32,
    month: u32,
    events: Box<dyn CalendarEvents>,
    last_punch_available: Option<bool>,
}

impl Calendar {
    /// Starts displaying the month containing `today`.
    pub fn new(
        records: DayRecordStore,
        waivers: WaiverStore,
        prefs: Preferences,
        today: NaiveDate,
        events: Box<dyn CalendarEvents>,
    ) -> Self {
        Self {
            records,
            waivers,
            prefs,
            today,
            year: today.year(),
            month: today.month(),
            events,
            last_punch_available: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    pub fn go_to_today(&mut self) {
        self.year = self.today.year();
        self.month = self.today.month();
    }

    /// Jump straight to an arbitrary month.
    pub fn set_view(&mut self, year: i32, month: u32) {
        self.year = year;
        self.month = month.clamp(1, 12);
    }

    /// Stamp `now` into the earliest empty raw field of today.
    ///
    /// Returns the field that was filled, or `None` when the punch is a
    /// no-op: the displayed month is not the current one, today is not
    /// a working day, or all four fields already hold a value.
    pub fn punch(&mut self, now: NaiveDateTime) -> AppResult<Option<DayField>> {
        let date = now.date();
        if self.year != date.year()
            || self.month != date.month()
            || !show_day(date.year(), date.month(), date.day(), &self.prefs)
        {
            return Ok(None);
        }

        let entries = self
            .records
            .entries_for(date.year(), date.month(), date.day());
        let slots = entries.in_order();
        let Some(field) = RAW_FIELDS
            .iter()
            .zip(slots.iter())
            .find(|(_, value)| value.is_none())
            .map(|(field, _)| *field)
        else {
            return Ok(None);
        };

        let value = hour_min_to_hour_formatted(now.hour(), now.minute());
        self.update_field(date.year(), date.month(), date.day(), field, &value)?;
        Ok(Some(field))
    }

    /// Field-edit callback: a valid value overwrites, an invalid value
    /// over a previously valid one clears the field. The day is then
    /// rederived and written through.
    pub fn update_field(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        field: DayField,
        value: &str,
    ) -> AppResult<DayTotals> {
        if field.is_derived() {
            return Err(AppError::InvalidField(format!(
                "{field} is derived and cannot be edited"
            )));
        }

        let had_valid = self
            .records
            .get(year, month, day, field)
            .is_some_and(validate_time);
        if validate_time(value) {
            self.records.set(year, month, day, field, value)?;
        } else if had_valid {
            self.records.remove(year, month, day, field)?;
        }

        let totals = day::compute_day(&mut self.records, &self.waivers, year, month, day)?;
        self.notify_punch_availability();
        Ok(totals)
    }

    /// Remove one raw field outright.
    pub fn clear_field(&mut self, year: i32, month: u32, day: u32, field: DayField) -> AppResult<DayTotals> {
        self.update_field(year, month, day, field, "")
    }

    /// Build the full snapshot for the displayed month.
    pub fn month_view(&mut self) -> MonthView {
        let mut rows = Vec::new();
        for day in 1..=month_length(self.year, self.month) {
            let shown = show_day(self.year, self.month, day, &self.prefs);
            if !shown && self.prefs.hide_non_working_days {
                continue;
            }
            let is_today = self.today.year() == self.year
                && self.today.month() == self.month
                && self.today.day() == day;
            let kind = if !shown {
                DayRowKind::NonWorking
            } else if let Some(waiver) = self.waivers.get(self.year, self.month, day) {
                DayRowKind::Waived {
                    reason: waiver.reason.clone(),
                    day_total: waiver.hours.clone(),
                }
            } else {
                let entries = self.records.entries_for(self.year, self.month, day);
                DayRowKind::Entry {
                    has_error: day::has_input_error(&entries),
                    lunch_total: self
                        .records
                        .get(self.year, self.month, day, DayField::LunchTotal)
                        .map(str::to_string),
                    day_total: self
                        .records
                        .get(self.year, self.month, day, DayField::DayTotal)
                        .map(str::to_string),
                    entries,
                }
            };
            rows.push(DayRow {
                day,
                weekday: weekday_abbr(self.year, self.month, day),
                is_today,
                kind,
            });
        }

        let stats = month::month_stats(
            &self.records,
            &self.waivers,
            &self.prefs,
            self.year,
            self.month,
            self.today,
        );
        let summary = month::day_summary(
            &self.records,
            &self.waivers,
            &self.prefs,
            self.year,
            self.month,
            self.today,
        );
        self.notify_punch_availability();

        MonthView {
            year: self.year,
            month: self.month,
            title: month_label(self.year, self.month),
            rows,
            stats,
            summary,
        }
    }

    /// Forward a waiver-edit request to the UI shell.
    pub fn request_waiver_edit(&mut self, date: NaiveDate) {
        self.events.open_waiver_editor(date);
    }

    /// Punch is available while today is a working day with at least
    /// one empty raw field. The sink is signalled only on changes.
    fn notify_punch_availability(&mut self) {
        let (year, month, day) = (self.today.year(), self.today.month(), self.today.day());
        let available = show_day(year, month, day, &self.prefs)
            && !self.records.entries_for(year, month, day).is_complete();
        if self.last_punch_available != Some(available) {
            self.last_punch_available = Some(available);
            self.events.punch_availability(available);
        }
    }
}
