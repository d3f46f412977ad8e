#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use punchcal::config::Preferences;
use punchcal::core::store::{DayRecordStore, WaiverStore};

pub fn pcal() -> Command {
    cargo_bin_cmd!("punchcal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create an isolated HOME so CLI runs never touch the real config
pub fn isolated_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcal_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Open both stores over a fresh test database
pub fn open_stores(name: &str) -> (DayRecordStore, WaiverStore) {
    let db_path = setup_test_db(name);
    let path = Path::new(&db_path);
    let records = DayRecordStore::load(path).expect("open day record store");
    let waivers = WaiverStore::load(path).expect("open waiver store");
    (records, waivers)
}

/// Default preferences: 08:00 per day, Monday-Friday
pub fn prefs() -> Preferences {
    Preferences::default()
}
