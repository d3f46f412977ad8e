use chrono::NaiveDateTime;

use crate::cli::commands::open_calendar;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET};

/// Handle the `punch` subcommand
pub fn handle(cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let mut calendar = open_calendar(cfg, now.date())?;
    match calendar.punch(now)? {
        Some(field) => {
            println!("Punched {} at {}", field, now.format("%H:%M"));
        }
        None => {
            println!("{GREY}Nothing to punch: today is not a working day or all fields are filled{RESET}");
        }
    }
    Ok(())
}
