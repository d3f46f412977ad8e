use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// User preferences consumed read-only by the engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: String,
    #[serde(default)]
    pub hide_non_working_days: bool,
    #[serde(default)]
    pub count_today: bool,
    #[serde(default)]
    pub working_days: WorkingDays,
}

/// Which weekdays count as working days. Defaults to Monday-Friday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDays {
    #[serde(default = "yes")]
    pub monday: bool,
    #[serde(default = "yes")]
    pub tuesday: bool,
    #[serde(default = "yes")]
    pub wednesday: bool,
    #[serde(default = "yes")]
    pub thursday: bool,
    #[serde(default = "yes")]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub sunday: bool,
}

fn yes() -> bool {
    true
}

fn default_hours_per_day() -> String {
    "08:00".to_string()
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
            sunday: false,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            hide_non_working_days: false,
            count_today: false,
            working_days: WorkingDays::default(),
        }
    }
}

impl WorkingDays {
    pub fn contains(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// True iff the date exists and falls on a working weekday.
pub fn show_day(year: i32, month: u32, day: u32, prefs: &Preferences) -> bool {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => prefs.working_days.contains(d.weekday()),
        None => false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("punchcal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".punchcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchcal.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchcal.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration file and the store database.
    pub fn init_all(custom_db: Option<String>) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            preferences: Preferences::default(),
        };
        config.save()?;

        crate::db::open(&db_path)?;

        Ok(config)
    }

    /// Apply a `key=value` override to the preferences section.
    pub fn set_preference(&mut self, assignment: &str) -> AppResult<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| AppError::Config(format!("expected key=value, got '{assignment}'")))?;

        let prefs = &mut self.preferences;
        match key {
            "hours-per-day" => {
                if !crate::core::time_math::validate_time(value) {
                    return Err(AppError::InvalidTime(value.to_string()));
                }
                prefs.hours_per_day = value.to_string();
            }
            "hide-non-working-days" => prefs.hide_non_working_days = parse_bool(value)?,
            "count-today" => prefs.count_today = parse_bool(value)?,
            "monday" => prefs.working_days.monday = parse_bool(value)?,
            "tuesday" => prefs.working_days.tuesday = parse_bool(value)?,
            "wednesday" => prefs.working_days.wednesday = parse_bool(value)?,
            "thursday" => prefs.working_days.thursday = parse_bool(value)?,
            "friday" => prefs.working_days.friday = parse_bool(value)?,
            "saturday" => prefs.working_days.saturday = parse_bool(value)?,
            "sunday" => prefs.working_days.sunday = parse_bool(value)?,
            other => return Err(AppError::Config(format!("unknown preference '{other}'"))),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> AppResult<bool> {
    match value {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(AppError::Config(format!("expected bool, got '{other}'"))),
    }
}
