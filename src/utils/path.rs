//! Path utilities: expand ~, resolve the configured data directory.

use std::path::PathBuf;

use crate::config::Config;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    PathBuf::from(path).is_absolute()
}

/// The dataset directory named by the configuration, tilde-expanded.
pub fn resolve_data_dir(cfg: &Config) -> PathBuf {
    expand_tilde(&cfg.data_dir)
}
