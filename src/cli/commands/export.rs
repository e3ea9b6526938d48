use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader::DataLoader;
use crate::errors::AppResult;
use crate::export::{ExportLogic, SampleLimits};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        users,
        sessions,
        messages,
        force,
    } = cmd
    {
        let mut loader = DataLoader::from_config(cfg);
        loader.load_all(true)?;

        let limits = SampleLimits {
            users: *users,
            sessions: *sessions,
            messages: *messages,
        };
        ExportLogic::export(&loader, format, file, limits, *force)?;
    }
    Ok(())
}
