use std::path::Path;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` subcommand.
///
/// With an explicit `--db` the config file is left alone and only the
/// store schema is created at that path; otherwise both the config file
/// and the default database are set up.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(db) = &cli.db {
        crate::db::open(Path::new(db))?;
        println!("Store database initialized at {db}");
        return Ok(());
    }

    let cfg = Config::init_all(None)?;
    println!(
        "Configuration written to {}",
        Config::config_file().display()
    );
    println!("Store database initialized at {}", cfg.database);
    Ok(())
}
