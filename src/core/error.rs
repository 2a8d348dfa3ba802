// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A session transition was requested from the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// `start` while already running or stopped.
    AlreadyStarted,

    /// `lap` or `stop` while idle or stopped.
    NotRunning,
}

/// Failure touching the history log.
///
/// Reported to the user and logged; never fatal.
#[derive(Debug)]
pub enum HistoryError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
    Delete { path: PathBuf, source: io::Error },
}

impl HistoryError {
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            HistoryError::Read { source, .. }
            | HistoryError::Write { source, .. }
            | HistoryError::Delete { source, .. } => source.kind(),
        }
    }
}

// ---------------- Display ----------------

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::AlreadyStarted =>
                write!(f, "session already started"),
            StateError::NotRunning =>
                write!(f, "session is not running"),
        }
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Read { path, source } =>
                write!(f, "read {}: {source}", path.display()),
            HistoryError::Write { path, source } =>
                write!(f, "write {}: {source}", path.display()),
            HistoryError::Delete { path, source } =>
                write!(f, "delete {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for StateError {}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Read { source, .. }
            | HistoryError::Write { source, .. }
            | HistoryError::Delete { source, .. } => Some(source),
        }
    }
}
