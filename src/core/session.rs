// Author: Dustin Pilgrim
// License: MIT

use crate::catalog::Catalog;
use crate::core::error::StateError;
use crate::core::format::format_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Stopped,
}

/// A recorded lap: 1-based index and time since start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    pub index: usize,
    pub elapsed_ms: u64,
}

/// Frozen result of a stopped session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReport {
    pub task: String,
    pub total_ms: u64,
    pub laps: Vec<Lap>,
}

impl StopReport {
    /// The single-line history entry for this session.
    pub fn history_line(&self, catalog: &Catalog) -> String {
        let task = single_line(&self.task);
        let mut line = format!(
            "{} {}, {}: {}",
            catalog.task,
            task,
            catalog.total_time,
            format_duration(self.total_ms)
        );

        if !self.laps.is_empty() {
            let laps = self
                .laps
                .iter()
                .map(|lap| {
                    format!(
                        "{} {}: {}",
                        catalog.laps,
                        lap.index,
                        format_duration(lap.elapsed_ms)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(&format!(", {}: {}", catalog.laps, laps));
        }

        line
    }
}

/// Timer lifecycle for one task: Idle -> Running -> Stopped.
///
/// Time is passed in by the caller. Lap and total durations are always
/// `now_ms - start`, never accumulated from display samples.
#[derive(Debug, Clone)]
pub struct Session {
    task: String,
    status: Status,
    start_ms: u64,
    laps: Vec<Lap>,
}

impl Session {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            status: Status::Idle,
            start_ms: 0,
            laps: Vec::new(),
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn start(&mut self, now_ms: u64) -> Result<(), StateError> {
        if self.status != Status::Idle {
            return Err(StateError::AlreadyStarted);
        }
        self.start_ms = now_ms;
        self.status = Status::Running;
        Ok(())
    }

    /// Elapsed time while running; `None` otherwise.
    pub fn elapsed_ms(&self, now_ms: u64) -> Option<u64> {
        match self.status {
            Status::Running => Some(now_ms.saturating_sub(self.start_ms)),
            _ => None,
        }
    }

    pub fn lap(&mut self, now_ms: u64) -> Result<Lap, StateError> {
        let elapsed_ms = self.elapsed_ms(now_ms).ok_or(StateError::NotRunning)?;
        let lap = Lap {
            index: self.laps.len() + 1,
            elapsed_ms,
        };
        self.laps.push(lap);
        Ok(lap)
    }

    pub fn stop(&mut self, now_ms: u64) -> Result<StopReport, StateError> {
        let total_ms = self.elapsed_ms(now_ms).ok_or(StateError::NotRunning)?;
        self.status = Status::Stopped;

        Ok(StopReport {
            task: self.task.clone(),
            total_ms,
            laps: self.laps.clone(),
        })
    }
}

fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}
