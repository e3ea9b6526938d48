use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::resolve_data_dir;

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(&cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => warning(format!("Cannot render configuration: {e}")),
            }
        }

        // ---- CHECK ----
        if *check {
            let data_dir = resolve_data_dir(cfg);
            if data_dir.is_dir() {
                success(format!("Data dir exists: {}", data_dir.display()));
            } else {
                warning(format!("Data dir missing: {}", data_dir.display()));
            }

            if cfg.registration_days <= 0 {
                warning(format!(
                    "registration_days is {}, every user will be filtered out",
                    cfg.registration_days
                ));
            } else {
                success(format!("Registration window: {} days", cfg.registration_days));
            }
        }
    }
    Ok(())
}
