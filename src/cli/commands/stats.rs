use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader::DataLoader;
use crate::core::report;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats = cmd {
        let mut loader = DataLoader::from_config(cfg);
        loader.load_all(true)?;
        report::print_stats(&loader);
    }
    Ok(())
}
