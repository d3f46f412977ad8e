use chrono::{Datelike, NaiveDate};

use crate::cli::commands::open_calendar;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date::parse_date;

/// Handle the `clear` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Clear { date, field } = cmd {
        let date = parse_date(date)?;
        let field = field.parse()?;

        let mut calendar = open_calendar(cfg, today)?;
        let totals = calendar.clear_field(date.year(), date.month(), date.day(), field)?;
        println!("Cleared {field} for {date}");
        super::set::report(&totals);
    }
    Ok(())
}
