use chrono::{Datelike, NaiveDate};

use crate::cli::commands::open_calendar;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DayTotals;
use crate::utils::colors::{RED, RESET, color_for_balance, paint};
use crate::utils::date::parse_date;

/// Handle the `set` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Set { date, field, time } = cmd {
        let date = parse_date(date)?;
        let field = field.parse()?;

        let mut calendar = open_calendar(cfg, today)?;
        let totals =
            calendar.update_field(date.year(), date.month(), date.day(), field, time)?;

        calendar.set_view(date.year(), date.month());
        let view = calendar.month_view();

        report(&totals);
        println!(
            "Month balance: {}",
            paint(color_for_balance(&view.stats.balance), &view.stats.balance)
        );
    }
    Ok(())
}

pub fn report(totals: &DayTotals) {
    println!(
        "lunch-total: {}   day-total: {}",
        totals.lunch_total.as_deref().unwrap_or("--:--"),
        totals.day_total.as_deref().unwrap_or("--:--"),
    );
    if totals.has_error {
        println!("{RED}Warning: entries for this day are out of order{RESET}");
    }
}
