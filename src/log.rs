// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Arguments;
use std::fs::{OpenOptions, create_dir_all, metadata, remove_file};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use chrono::Local;
use once_cell::sync::Lazy;

/// Maximum log file size in bytes before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn  = 2,
    Info  = 3,
    Debug = 4,
}

impl LogLevel {
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warn  => "\x1b[33m",
            LogLevel::Info  => "\x1b[36m",
            LogLevel::Debug => "\x1b[90m",
        }
    }

    fn short(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warn  => "WRN",
            LogLevel::Info  => "INF",
            LogLevel::Debug => "DBG",
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct Config {
    pub level: LogLevel,
    /// `None` until `init`; nothing is written before that.
    pub path: Option<PathBuf>,
    /// Mirror log lines to stderr.
    pub console: bool,
    pub use_colors: bool,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Info,
        path: None,
        console: false,
        use_colors: std::io::stderr().is_terminal(),
    })
});

static SESSION_SEPARATOR: Once = Once::new();

/// Turns on file logging at `path`; `verbose` adds debug level and stderr output.
pub fn init(path: PathBuf, verbose: bool) {
    if let Some(parent) = path.parent() {
        let _ = create_dir_all(parent);
    }

    let Ok(mut config) = GLOBAL_CONFIG.lock() else {
        return;
    };
    config.level = if verbose { LogLevel::Debug } else { LogLevel::Info };
    config.console = verbose;
    config.path = Some(path);
}

/// Core logging function
pub fn log_message(level: LogLevel, prefix: &str, args: Arguments) {
    let Ok(config) = GLOBAL_CONFIG.lock() else {
        return;
    };

    if level > config.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_line = format!("[{}][{}][{}] {}", timestamp, level.short(), prefix, args);

    if let Some(path) = config.path.as_deref() {
        if let Err(e) = write_line_to_log(path, &file_line) {
            eprintln!("Failed to write log: {}", e);
        }
    }

    if config.console {
        // stderr may be in raw mode; return the carriage explicitly
        if config.use_colors {
            eprint!(
                "{}●{} [{}][{}] {}\r\n",
                level.color(),
                RESET_COLOR,
                timestamp,
                prefix,
                args
            );
        } else {
            eprint!("{}\r\n", file_line);
        }
    }
}

/// Flexible macro to allow formatted logging
#[macro_export]
macro_rules! llog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! linfo {
    ($prefix:expr, $($arg:tt)*) => { $crate::llog!($crate::log::LogLevel::Info, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! lwarn {
    ($prefix:expr, $($arg:tt)*) => { $crate::llog!($crate::log::LogLevel::Warn, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! lerror {
    ($prefix:expr, $($arg:tt)*) => { $crate::llog!($crate::log::LogLevel::Error, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! ldebug {
    ($prefix:expr, $($arg:tt)*) => { $crate::llog!($crate::log::LogLevel::Debug, $prefix, $($arg)*) };
}

/// Default log file path
pub fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("lapwatch")
        .join("lapwatch.log")
}

/// Rotate log if bigger than MAX_LOG_SIZE
fn rotate_log_if_needed(path: &Path) {
    if let Ok(meta) = metadata(path) {
        if meta.len() >= MAX_LOG_SIZE {
            let _ = remove_file(path);
        }
    }
}

/// Blank line between runs, once per process
fn ensure_session_newline_once(path: &Path) {
    SESSION_SEPARATOR.call_once(|| {
        if let Ok(meta) = metadata(path) {
            if meta.len() > 0 {
                if let Ok(mut file) = OpenOptions::new().append(true).open(path) {
                    let _ = writeln!(file);
                }
            }
        }
    });
}

fn write_line_to_log(path: &Path, line: &str) -> std::io::Result<()> {
    rotate_log_if_needed(path);
    ensure_session_newline_once(path);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    writeln!(file, "{}", line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_removes_oversized_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.log");
        std::fs::write(&path, vec![b'x'; MAX_LOG_SIZE as usize]).unwrap();

        rotate_log_if_needed(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_write_line_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.log");

        write_line_to_log(&path, "one").unwrap();
        write_line_to_log(&path, "two").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("one\ntwo\n"));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug > LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Warn);
    }
}
