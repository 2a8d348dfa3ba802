// Author: Dustin Pilgrim
// License: MIT

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::core::error::HistoryError;

pub const DEFAULT_LIMIT: usize = 5;

/// Lines of the history log, newest first, plus the page size they were read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPage {
    entries: Vec<String>,
    limit: usize,
}

impl HistoryPage {
    /// The first `limit` entries.
    pub fn recent(&self) -> &[String] {
        let end = self.limit.min(self.entries.len());
        &self.entries[..end]
    }

    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn has_more(&self) -> bool {
        self.entries.len() > self.limit
    }
}

/// Newest-first, line-per-session text log.
///
/// Single writer: one process, read fully before every rewrite.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Prepends `entry` as a new first line. A missing log counts as empty.
    pub async fn append(&self, entry: &str) -> Result<(), HistoryError> {
        let existing = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(self.write_err(e)),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| self.write_err(e))?;
        }

        // existing bytes are kept as-is, even if they are not valid UTF-8
        let mut data = Vec::with_capacity(entry.len() + 1 + existing.len());
        data.extend_from_slice(entry.as_bytes());
        data.push(b'\n');
        data.extend_from_slice(&existing);

        let tmp = self.tmp_path();
        fs::write(&tmp, data).await.map_err(|e| self.write_err(e))?;

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.write_err(e));
        }

        Ok(())
    }

    /// Reads the whole log. A missing log is an error here, unlike `append`.
    pub async fn read_recent(&self, limit: usize) -> Result<HistoryPage, HistoryError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| HistoryError::Read {
                path: self.path.clone(),
                source: e,
            })?;

        let data = String::from_utf8_lossy(&bytes);
        let entries = data.trim_end().lines().map(str::to_string).collect();

        Ok(HistoryPage { entries, limit })
    }

    pub async fn delete(&self) -> Result<(), HistoryError> {
        fs::remove_file(&self.path)
            .await
            .map_err(|e| HistoryError::Delete {
                path: self.path.clone(),
                source: e,
            })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn write_err(&self, source: io::Error) -> HistoryError {
        HistoryError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
