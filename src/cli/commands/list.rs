use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader::DataLoader;
use crate::core::report;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let mut loader = DataLoader::from_config(cfg);
        loader.load_all(true)?;
        report::print_user_table(&loader, *limit);
    }
    Ok(())
}
