// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

const APP_DIR: &str = "lapwatch";

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(APP_DIR)
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("lapwatch.rune")
}

/// User catalogs that override the bundled ones.
pub fn locales_dir() -> PathBuf {
    config_dir().join("locales")
}

pub fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(APP_DIR)
        .join("history.txt")
}

pub fn default_log_path() -> PathBuf {
    crate::log::log_path()
}
