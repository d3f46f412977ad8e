//! Write-through stores for day records and waived workdays.
//!
//! Each store fronts one persistent key→value table with an in-memory
//! cache populated by a single full iteration at load time. Reads hit
//! the cache; every mutation updates the cache and the table in the same
//! call, so the two are never out of sync.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::{self, KvTable};
use crate::errors::AppResult;
use crate::models::{DayEntries, DayField, DayKey, Waiver, waiver_key};

pub struct DayRecordStore {
    conn: Connection,
    cache: HashMap<DayKey, String>,
}

impl DayRecordStore {
    pub fn load(path: &Path) -> AppResult<Self> {
        let conn = db::open(path)?;
        let mut cache = HashMap::new();
        for (key, value) in db::entries(&conn, KvTable::DayRecords)? {
            // Rows with unparseable keys are skipped rather than fatal.
            if let Some(parsed) = DayKey::parse(&key) {
                cache.insert(parsed, value);
            }
        }
        Ok(Self { conn, cache })
    }

    pub fn get(&self, year: i32, month: u32, day: u32, field: DayField) -> Option<&str> {
        self.cache
            .get(&DayKey::new(year, month, day, field))
            .map(String::as_str)
    }

    pub fn set(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        field: DayField,
        value: &str,
    ) -> AppResult<()> {
        let key = DayKey::new(year, month, day, field);
        self.cache.insert(key, value.to_string());
        db::set(
            &self.conn,
            KvTable::DayRecords,
            &key.storage_key(),
            value,
        )
    }

    pub fn remove(&mut self, year: i32, month: u32, day: u32, field: DayField) -> AppResult<()> {
        let key = DayKey::new(year, month, day, field);
        self.cache.remove(&key);
        db::delete(&self.conn, KvTable::DayRecords, &key.storage_key())
    }

    /// The four raw timestamps of one date.
    pub fn entries_for(&self, year: i32, month: u32, day: u32) -> DayEntries {
        DayEntries {
            day_begin: self
                .get(year, month, day, DayField::DayBegin)
                .map(str::to_string),
            lunch_begin: self
                .get(year, month, day, DayField::LunchBegin)
                .map(str::to_string),
            lunch_end: self
                .get(year, month, day, DayField::LunchEnd)
                .map(str::to_string),
            day_end: self
                .get(year, month, day, DayField::DayEnd)
                .map(str::to_string),
        }
    }
}

pub struct WaiverStore {
    conn: Connection,
    cache: HashMap<NaiveDate, Waiver>,
}

impl WaiverStore {
    pub fn load(path: &Path) -> AppResult<Self> {
        let conn = db::open(path)?;
        let mut cache = HashMap::new();
        for (key, value) in db::entries(&conn, KvTable::WaivedWorkdays)? {
            let date = match NaiveDate::parse_from_str(&key, "%Y-%m-%d") {
                Ok(d) => d,
                Err(_) => continue,
            };
            let waiver: Waiver = match serde_json::from_str(&value) {
                Ok(w) => w,
                Err(_) => continue,
            };
            cache.insert(date, waiver);
        }
        Ok(Self { conn, cache })
    }

    pub fn get(&self, year: i32, month: u32, day: u32) -> Option<&Waiver> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        self.cache.get(&date)
    }

    /// Mutations come from the waiver-editing flow, not from the engines.
    pub fn set(&mut self, date: NaiveDate, waiver: Waiver) -> AppResult<()> {
        let value = serde_json::to_string(&waiver)
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
        db::set(&self.conn, KvTable::WaivedWorkdays, &waiver_key(date), &value)?;
        self.cache.insert(date, waiver);
        Ok(())
    }

    pub fn remove(&mut self, date: NaiveDate) -> AppResult<()> {
        self.cache.remove(&date);
        db::delete(&self.conn, KvTable::WaivedWorkdays, &waiver_key(date))
    }

    /// All waivers ordered by date.
    pub fn iter_sorted(&self) -> Vec<(NaiveDate, &Waiver)> {
        let mut out: Vec<_> = self.cache.iter().map(|(d, w)| (*d, w)).collect();
        out.sort_by_key(|(d, _)| *d);
        out
    }
}
