use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the dataset directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing callview…");

    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("📄 Config file : {}", path.display());
    println!("🗂️  Data dir   : {}", &cfg.data_dir);
    println!("🎉 callview initialization completed!");
    Ok(())
}
