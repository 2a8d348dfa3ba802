// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use colored::Colorize;

use crate::catalog::Catalog;
use crate::core::events::Edit;
use crate::core::format::format_duration;
use crate::core::session::{Lap, StopReport};

const SEPARATOR: &str = "===================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    ShowAllHistory,
    DeleteHistory,
}

/// What the core wants shown. Rendering is up to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Instructions { task: String },
    /// Periodic refresh; `pending` is the half-typed input line.
    Elapsed { ms: u64, pending: String },
    Lap(Lap),
    UnknownCommand(String),
    Stopped(StopReport),
    HistoryWriteFailed(String),
    HistoryReadFailed(String),
    History(Vec<String>),
    Prompt(PromptKind),
    Echo(Edit),
    HistoryDeleted,
    DeleteFailed(String),
    Cancelled,
}

pub trait Presenter {
    fn render(&mut self, event: UiEvent);
}

/// Colored stdout rendering.
pub struct TerminalPresenter {
    catalog: Arc<Catalog>,
    /// Raw mode needs explicit carriage returns.
    raw: bool,
    /// The cursor sits on an unterminated elapsed/prompt line.
    dirty: bool,
}

impl TerminalPresenter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        if !io::stdout().is_terminal() {
            colored::control::set_override(false);
        }
        Self {
            catalog,
            raw: false,
            dirty: false,
        }
    }

    pub fn set_raw(&mut self, raw: bool) {
        self.raw = raw;
    }

    fn eol(&self) -> &'static str {
        if self.raw { "\r\n" } else { "\n" }
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        self.break_line();
        let eol = self.eol();
        let mut out = io::stdout().lock();
        let _ = write!(out, "{text}{eol}");
        let _ = out.flush();
    }

    fn err_line(&mut self, text: impl std::fmt::Display) {
        self.break_line();
        let eol = self.eol();
        let _ = write!(io::stderr().lock(), "{text}{eol}");
    }

    fn inline(&mut self, text: impl std::fmt::Display) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "{text}");
        let _ = out.flush();
        self.dirty = true;
    }

    fn break_line(&mut self) {
        if self.dirty {
            self.dirty = false;
            let eol = self.eol();
            let _ = write!(io::stdout().lock(), "{eol}");
        }
    }

    fn history(&mut self, entries: &[String]) {
        let title = format!("\n{}", self.catalog.history).magenta();
        self.line(title);
        for entry in entries {
            self.line(entry);
        }
        self.line(SEPARATOR.magenta());
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, event: UiEvent) {
        let cat = Arc::clone(&self.catalog);

        match event {
            UiEvent::Instructions { task } => {
                self.line(cat.timer_started.yellow());
                self.line(format!("{} {}", cat.tracking_task.bold(), task.yellow()));
                self.line(cat.available_commands.cyan());
                self.line(format!("  {}", cat.type_lap).cyan());
                self.line(format!("  {}", cat.type_stop).cyan());
                self.line(format!("  {}", cat.press_ctrl_c).cyan());
                self.line(cat.history_end.yellow());
            }
            UiEvent::Elapsed { ms, pending } => {
                self.inline(format!(
                    "\r{} {}  {}",
                    cat.elapsed_time.blue(),
                    format_duration(ms),
                    pending
                ));
            }
            UiEvent::Lap(lap) => {
                self.line(
                    format!("  {} {}: {}", cat.laps, lap.index, format_duration(lap.elapsed_ms))
                        .green(),
                );
            }
            UiEvent::UnknownCommand(cmd) => {
                self.line(format!("  {}", format!("{} {}", cat.unknown_command, cmd).red()));
            }
            UiEvent::Stopped(report) => {
                self.line("");
                self.line(report.history_line(&cat).bold());
            }
            UiEvent::HistoryWriteFailed(e) => {
                self.err_line(format!("{} {e}", cat.error_writing_history.red()));
            }
            UiEvent::HistoryReadFailed(e) => {
                self.err_line(format!("{} {e}", cat.error_reading_history.red()));
            }
            UiEvent::History(entries) => self.history(&entries),
            UiEvent::Prompt(kind) => {
                self.break_line();
                let text = match kind {
                    PromptKind::ShowAllHistory => cat.show_all_history.yellow(),
                    PromptKind::DeleteHistory => cat.delete_history.normal(),
                };
                self.inline(text);
            }
            UiEvent::Echo(edit) => match edit {
                Edit::Inserted(c) => self.inline(c),
                Edit::Erased => self.inline("\u{8} \u{8}"),
                Edit::Submitted => self.break_line(),
                Edit::Nothing => {}
            },
            UiEvent::HistoryDeleted => self.line(cat.history_deleted.green()),
            UiEvent::DeleteFailed(e) => {
                self.err_line(format!("{} {e}", cat.error_deleting_history.red()));
            }
            UiEvent::Cancelled => self.line(&cat.operation_cancelled),
        }
    }
}

#[cfg(test)]
pub use recording::RecordingPresenter;
