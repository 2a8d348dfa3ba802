// Author: Dustin Pilgrim
// License: MIT

pub mod parser;

use eyre::Result;
use std::path::PathBuf;

use crate::cli::Args;

pub const DEFAULT_LANG: &str = "en";

/// Values read from the rune config file. Anything unset falls back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub lang: Option<String>,
    pub history_file: Option<PathBuf>,
    pub history_limit: Option<usize>,
    pub refresh_ms: Option<u64>,
}

/// Effective settings: CLI flag > config file > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub lang: String,
    pub history_path: PathBuf,
    pub history_limit: usize,
    pub refresh_ms: u64,
    pub locales_dir: PathBuf,
}

impl Settings {
    pub fn resolve(file: FileConfig, args: &Args) -> Self {
        Self {
            lang: args
                .lang
                .clone()
                .or(file.lang)
                .unwrap_or_else(|| DEFAULT_LANG.to_string()),
            history_path: args
                .history
                .clone()
                .or(file.history_file)
                .unwrap_or_else(crate::app::platform::default_history_path),
            history_limit: file
                .history_limit
                .unwrap_or(crate::services::history::DEFAULT_LIMIT),
            refresh_ms: file
                .refresh_ms
                .unwrap_or(crate::services::ticker::DEFAULT_REFRESH_MS),
            locales_dir: crate::app::platform::locales_dir(),
        }
    }
}

/// Loads settings. An explicit `--config` must exist; the default path is optional.
pub fn load(args: &Args) -> Result<Settings> {
    let file = match args.config.as_ref() {
        Some(path) => parser::load_file_config(path)?,
        None => {
            let path = crate::app::platform::default_config_path();
            if path.exists() {
                parser::load_file_config(&path)?
            } else {
                FileConfig::default()
            }
        }
    };

    crate::ldebug!("config", "file config: {file:?}");
    Ok(Settings::resolve(file, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lapwatch"]);
        let s = Settings::resolve(FileConfig::default(), &args);
        assert_eq!(s.lang, "en");
        assert_eq!(s.history_limit, 5);
        assert_eq!(s.refresh_ms, 100);
        assert!(s.history_path.ends_with("lapwatch/history.txt"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let args = Args::parse_from(["lapwatch"]);
        let file = FileConfig {
            lang: Some("fr".into()),
            history_file: Some(PathBuf::from("/srv/h.txt")),
            history_limit: Some(10),
            refresh_ms: Some(250),
        };
        let s = Settings::resolve(file, &args);
        assert_eq!(s.lang, "fr");
        assert_eq!(s.history_path, PathBuf::from("/srv/h.txt"));
        assert_eq!(s.history_limit, 10);
        assert_eq!(s.refresh_ms, 250);
    }

    #[test]
    fn test_cli_overrides_file() {
        let args = Args::parse_from(["lapwatch", "--lang=es", "--history", "/x/h.txt"]);
        let file = FileConfig {
            lang: Some("fr".into()),
            history_file: Some(PathBuf::from("/srv/h.txt")),
            ..FileConfig::default()
        };
        let s = Settings::resolve(file, &args);
        assert_eq!(s.lang, "es");
        assert_eq!(s.history_path, PathBuf::from("/x/h.txt"));
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.rune");
        let args = Args::parse_from(["lapwatch", "--config", missing.to_str().unwrap()]);
        assert!(load(&args).is_err());
    }
}
