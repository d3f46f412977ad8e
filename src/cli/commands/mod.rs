pub mod clear;
pub mod config;
pub mod init;
pub mod punch;
pub mod set;
pub mod show;
pub mod waiver;

use std::path::Path;

use chrono::NaiveDate;

use crate::config::Config;
use crate::core::calendar::{Calendar, NullEvents};
use crate::core::store::{DayRecordStore, WaiverStore};
use crate::errors::AppResult;

/// Open both stores and build a calendar anchored at `today`.
pub fn open_calendar(cfg: &Config, today: NaiveDate) -> AppResult<Calendar> {
    let path = Path::new(&cfg.database);
    let records = DayRecordStore::load(path)?;
    let waivers = WaiverStore::load(path)?;
    Ok(Calendar::new(
        records,
        waivers,
        cfg.preferences.clone(),
        today,
        Box::new(NullEvents),
    ))
}
