use chrono::NaiveDate;

use crate::cli::commands::open_calendar;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{DayRow, DayRowKind, MonthView};
use crate::core::month::{DaySummary, MonthStats};
use crate::errors::AppResult;
use crate::utils::colors::{BOLD, CYAN, GREY, RED, RESET, color_for_balance, color_for_optional_field, paint};
use crate::utils::date::parse_month;
use crate::utils::table::{Column, Table};

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Show { period } = cmd {
        let mut calendar = open_calendar(cfg, today)?;
        if let Some(p) = period {
            let (year, month) = parse_month(p)?;
            calendar.set_view(year, month);
        }
        let view = calendar.month_view();
        print!("{}", render_month(&view));
    }
    Ok(())
}

/// Render a month snapshot as a terminal table.
pub fn render_month(view: &MonthView) -> String {
    let mut table = Table::new(vec![
        Column::new("Day", 9),
        Column::new("Day Start", 9),
        Column::new("Lunch Start", 11),
        Column::new("Lunch Total", 11),
        Column::new("Lunch End", 9),
        Column::new("Day End", 9),
        Column::new("Day Total", 9),
    ]);

    let mut balance_printed = false;
    for row in &view.rows {
        add_day_row(&mut table, row);
        if row.is_today && let Some(summary) = &view.summary {
            table.add_span(render_summary(summary));
        }
        if row.day == view.stats.balance_row_day {
            table.add_span(render_balance(&view.stats));
            balance_printed = true;
        }
    }
    // The anchor day can be hidden by preferences; keep the aggregates
    // visible anyway.
    if !balance_printed {
        table.add_span(render_balance(&view.stats));
    }

    format!("{BOLD}{}{RESET}\n\n{}", view.title, table.render())
}

fn day_label(row: &DayRow) -> String {
    let marker = if row.is_today { "*" } else { " " };
    format!("{} {:>2} {}", row.weekday, row.day, marker)
}

fn add_day_row(table: &mut Table, row: &DayRow) {
    let label = day_label(row);
    match &row.kind {
        DayRowKind::NonWorking => {
            table.add_span(paint(GREY, &format!("{label}  non-working day")));
        }
        DayRowKind::Waived { reason, day_total } => {
            table.add_span(paint(
                CYAN,
                &format!("{label}  Waived day: {reason}  [{day_total}]"),
            ));
        }
        DayRowKind::Entry {
            entries,
            lunch_total,
            day_total,
            has_error,
        } => {
            let values = [
                entries.day_begin.as_deref(),
                entries.lunch_begin.as_deref(),
                lunch_total.as_deref(),
                entries.lunch_end.as_deref(),
                entries.day_end.as_deref(),
                day_total.as_deref(),
            ];
            let mut cells = vec![if *has_error {
                paint(RED, &label)
            } else {
                label
            }];
            for value in values {
                cells.push(cell(value, *has_error));
            }
            table.add_row(cells);
        }
    }
}

fn cell(value: Option<&str>, has_error: bool) -> String {
    let text = value.unwrap_or("");
    if has_error {
        paint(RED, text)
    } else {
        paint(color_for_optional_field(value), text)
    }
}

fn render_balance(stats: &MonthStats) -> String {
    format!(
        "{GREY}On {}{RESET}  Working days: {}  Month Sum: {}  Month Balance: {}",
        stats.balance_row_day,
        stats.working_days,
        stats.month_total,
        paint(color_for_balance(&stats.balance), &stats.balance),
    )
}

fn render_summary(summary: &DaySummary) -> String {
    match summary {
        DaySummary::Working { leave_by } => format!(
            "Based on the time you arrived today, you should leave by {}",
            leave_by.as_deref().unwrap_or(""),
        ),
        DaySummary::Finished { day_balance } => format!(
            "All done for today. Balance of the day: {}",
            paint(color_for_balance(day_balance), day_balance),
        ),
    }
}
