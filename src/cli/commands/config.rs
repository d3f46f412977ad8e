use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand.
///
/// Works against the on-disk configuration, not the runtime one: the
/// global `--db` override is ephemeral and must never be saved back.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config { print_config, set } = cmd {
        let mut cfg = Config::load()?;

        if !set.is_empty() {
            for assignment in set {
                cfg.set_preference(assignment)?;
            }
            cfg.save()?;
            println!("Configuration updated");
        }

        if *print_config {
            let yaml = serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigLoad)?;
            println!("Current configuration ({}):\n", Config::config_file().display());
            println!("{yaml}");
        }
    }
    Ok(())
}
