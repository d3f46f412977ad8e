use clap::{Parser, Subcommand};

/// Command-line interface definition for punchcal
#[derive(Parser)]
#[command(
    name = "punchcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal time-tracking calendar: punch work and lunch times, track your monthly balance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD, useful for tests)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the store database
    Init,

    /// View or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            help = "Set a preference (hours-per-day, count-today, hide-non-working-days, monday..sunday)"
        )]
        set: Vec<String>,
    },

    /// Render the calendar for a month
    Show {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Stamp the current time into the next empty field of today
    Punch,

    /// Set one raw time field of a date
    Set {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Field to set (day-begin, lunch-begin, lunch-end, day-end)
        field: String,

        /// Time value (HH:MM)
        time: String,
    },

    /// Clear one raw time field of a date
    Clear {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Field to clear (day-begin, lunch-begin, lunch-end, day-end)
        field: String,
    },

    /// Manage waived workdays
    Waiver {
        #[command(subcommand)]
        action: WaiverAction,
    },
}

#[derive(Subcommand)]
pub enum WaiverAction {
    /// Add or replace the waiver for a date
    Add {
        /// Date to waive (YYYY-MM-DD)
        date: String,

        /// Hours credited for the day (HH:MM)
        #[arg(long)]
        hours: String,

        /// Justification for the waiver
        #[arg(long)]
        reason: String,
    },

    /// Remove the waiver for a date
    Del {
        /// Date to restore (YYYY-MM-DD)
        date: String,
    },

    /// List all waived workdays
    List,
}
