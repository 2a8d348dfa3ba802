// Author: Dustin Pilgrim
// License: MIT

pub mod clean;
pub mod prompt;
mod run;


use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::catalog::Catalog;
use crate::core::{
    events::{Command, Edit, Input, LineEditor, StopTrigger, parse_line},
    latch::Latch,
    session::{Session, StopReport},
    utils::Clock,
};
use crate::services::history::HistoryStore;
use crate::ui::{Presenter, UiEvent};

pub struct Dispatcher<C: Clock, P: Presenter> {
    session: Session,
    catalog: Arc<Catalog>,
    history: HistoryStore,
    history_limit: usize,
    refresh_ms: u64,

    clock: C,
    presenter: P,

    editor: LineEditor,
    stop_latch: Latch,
    /// stdin is gone; nothing can answer a prompt.
    input_closed: bool,
    ticker: Option<JoinHandle<()>>,
}

impl<C: Clock, P: Presenter> Dispatcher<C, P> {
    pub fn new(
        task: String,
        catalog: Arc<Catalog>,
        history: HistoryStore,
        clock: C,
        presenter: P,
    ) -> Self {
        Self {
            session: Session::new(task),
            catalog,
            history,
            history_limit: crate::services::history::DEFAULT_LIMIT,
            refresh_ms: crate::services::ticker::DEFAULT_REFRESH_MS,
            clock,
            presenter,
            editor: LineEditor::new(),
            stop_latch: Latch::new(),
            input_closed: false,
            ticker: None,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_refresh_ms(mut self, refresh_ms: u64) -> Self {
        self.refresh_ms = refresh_ms;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Idle -> Running, then the instructions. Display refresh is started by `run`.
    pub fn start(&mut self) {
        let now = self.clock.now_ms();
        if let Err(e) = self.session.start(now) {
            crate::lwarn!("session", "start ignored: {e}");
            return;
        }
        crate::linfo!("session", "started task {:?}", self.session.task());

        self.presenter.render(UiEvent::Instructions {
            task: self.session.task().to_string(),
        });
    }

    /// One step of the event loop. Returns the report when this input stopped the session.
    pub fn handle(&mut self, input: Input) -> Option<StopReport> {
        let cmd = match input {
            Input::Tick => {
                self.refresh();
                return None;
            }
            Input::Line(line) => parse_line(&line)?,
            Input::Key(key) => {
                let (edit, cmd) = self.editor.feed(key);
                if edit != Edit::Nothing {
                    self.presenter.render(UiEvent::Echo(edit));
                }
                cmd?
            }
            Input::Interrupt => Command::Stop(StopTrigger::Interrupt),
            Input::Closed => {
                self.input_closed = true;
                Command::Stop(StopTrigger::EndOfInput)
            }
        };

        self.dispatch(cmd)
    }

    fn dispatch(&mut self, cmd: Command) -> Option<StopReport> {
        match cmd {
            Command::Lap => {
                self.lap();
                None
            }
            Command::Stop(trigger) => self.stop(trigger),
            Command::Unknown(line) => {
                crate::ldebug!("input", "unknown command {line:?}");
                self.presenter.render(UiEvent::UnknownCommand(line));
                None
            }
        }
    }

    fn refresh(&mut self) {
        if let Some(ms) = self.session.elapsed_ms(self.clock.now_ms()) {
            self.presenter.render(UiEvent::Elapsed {
                ms,
                pending: self.editor.buffer().to_string(),
            });
        }
    }

    fn lap(&mut self) {
        match self.session.lap(self.clock.now_ms()) {
            Ok(lap) => {
                crate::ldebug!("session", "lap {} at {} ms", lap.index, lap.elapsed_ms);
                self.presenter.render(UiEvent::Lap(lap));
            }
            Err(e) => crate::ldebug!("session", "lap ignored: {e}"),
        }
    }

    /// The only stop path. Every trigger funnels through the latch.
    pub fn stop(&mut self, trigger: StopTrigger) -> Option<StopReport> {
        if !self.stop_latch.trip() {
            crate::ldebug!("session", "stop via {trigger:?} ignored (already stopped)");
            return None;
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }

        let report = match self.session.stop(self.clock.now_ms()) {
            Ok(r) => r,
            Err(e) => {
                crate::lwarn!("session", "stop via {trigger:?} failed: {e}");
                return None;
            }
        };

        crate::linfo!(
            "session",
            "stopped via {trigger:?} after {} ms with {} laps",
            report.total_ms,
            report.laps.len()
        );

        self.editor.clear();
        self.presenter.render(UiEvent::Stopped(report.clone()));
        Some(report)
    }
}
