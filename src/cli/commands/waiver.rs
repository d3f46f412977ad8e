use std::path::Path;

use crate::cli::parser::{Commands, WaiverAction};
use crate::config::Config;
use crate::core::store::WaiverStore;
use crate::core::time_math::validate_time;
use crate::errors::{AppError, AppResult};
use crate::models::Waiver;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};

/// Handle the `waiver` subcommand: the external waiver-editing flow.
/// The calendar core only ever reads the waiver store; all mutations
/// come through here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Waiver { action } = cmd else {
        return Ok(());
    };
    let mut store = WaiverStore::load(Path::new(&cfg.database))?;

    match action {
        WaiverAction::Add {
            date,
            hours,
            reason,
        } => {
            let date = parse_date(date)?;
            if !validate_time(hours) {
                return Err(AppError::InvalidTime(hours.clone()));
            }
            store.set(
                date,
                Waiver {
                    hours: hours.clone(),
                    reason: reason.clone(),
                },
            )?;
            println!("Waived {date}: {hours} ({reason})");
        }
        WaiverAction::Del { date } => {
            let date = parse_date(date)?;
            store.remove(date)?;
            println!("Removed waiver for {date}");
        }
        WaiverAction::List => {
            let mut table = Table::new(vec![
                Column::new("Date", 10),
                Column::new("Hours", 6),
                Column::new("Reason", 30),
            ]);
            for (date, waiver) in store.iter_sorted() {
                table.add_row(vec![
                    date.to_string(),
                    waiver.hours.clone(),
                    waiver.reason.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
