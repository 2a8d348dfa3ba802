// Author: Dustin Pilgrim
// License: MIT

use eyre::{Result, WrapErr};
use rune_cfg::RuneConfig;
use std::path::PathBuf;

use super::FileConfig;

/// Reads `lapwatch.*` keys; snake_case and kebab-case are both accepted.
pub fn parse_file_config(config: &RuneConfig) -> Result<FileConfig> {
    let lang = config
        .get::<String>("lapwatch.lang")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let history_file = config
        .get::<String>("lapwatch.history_file")
        .or_else(|_| config.get::<String>("lapwatch.history-file"))
        .ok()
        .map(|s| expand_home(s.trim()));

    let history_limit = config
        .get::<u64>("lapwatch.history_limit")
        .or_else(|_| config.get::<u64>("lapwatch.history-limit"))
        .ok()
        .map(|n| usize::try_from(n).wrap_err("history_limit out of range"))
        .transpose()?;

    let refresh_ms = config
        .get::<u64>("lapwatch.refresh_ms")
        .or_else(|_| config.get::<u64>("lapwatch.refresh-ms"))
        .ok();

    if history_limit == Some(0) {
        return Err(eyre::eyre!("history_limit must be at least 1"));
    }
    if refresh_ms == Some(0) {
        return Err(eyre::eyre!("refresh_ms must be at least 1"));
    }

    Ok(FileConfig {
        lang,
        history_file,
        history_limit,
        refresh_ms,
    })
}

pub fn load_file_config(path: &PathBuf) -> Result<FileConfig> {
    let config = RuneConfig::from_file(path)
        .map_err(|e| eyre::eyre!("failed to load config from {}: {}", path.display(), e))?;

    parse_file_config(&config).wrap_err_with(|| format!("invalid config {}", path.display()))
}

fn expand_home(s: &str) -> PathBuf {
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(s)
}
