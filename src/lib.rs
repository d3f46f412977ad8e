//! punchcal library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! calendar/store engine modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let today = now.date();
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, today),
        Commands::Punch => cli::commands::punch::handle(cfg, now),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg, today),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg, today),
        Commands::Waiver { .. } => cli::commands::waiver::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // "Today" is recomputed on every invocation; the hidden --today
    // flag pins it for tests.
    let now = match &cli.today {
        Some(s) => utils::date::parse_date(s)?.and_time(utils::date::now().time()),
        None => utils::date::now(),
    };

    dispatch(&cli, &cfg, now)
}
