// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc::{Receiver, Sender};

use crate::core::{events::Input, session::StopReport, utils::Clock};
use crate::ui::{Presenter, PromptKind, UiEvent};

use super::{Dispatcher, prompt};

impl<C: Clock, P: Presenter> Dispatcher<C, P> {
    /// Runs a whole session: start, consume input until stopped, then record
    /// and show history. Returns once any history prompt has been answered.
    ///
    /// `tx` feeds the display ticker into the same queue as user input.
    pub async fn run(&mut self, tx: Sender<Input>, mut rx: Receiver<Input>) -> Option<StopReport> {
        self.start();
        self.ticker = Some(crate::services::ticker::spawn_ticker(tx, self.refresh_ms));

        let report = loop {
            let input = rx.recv().await.unwrap_or(Input::Closed);

            if let Some(report) = self.handle(input) {
                break Some(report);
            }
            if self.stop_latch.is_tripped() {
                break None;
            }
        };

        if let Some(report) = &report {
            self.finish(report, &mut rx).await;
        }

        report
    }

    /// Prepends the report to history, then shows recent history.
    pub async fn finish(&mut self, report: &StopReport, rx: &mut Receiver<Input>) {
        let entry = report.history_line(&self.catalog);

        if let Err(e) = self.history.append(&entry).await {
            crate::lerror!("history", "append failed ({:?}): {e}", e.io_kind());
            self.presenter.render(UiEvent::HistoryWriteFailed(e.to_string()));
            return;
        }
        crate::ldebug!("history", "appended to {}", self.history.path().display());

        self.show_history(rx).await;
    }

    pub async fn show_history(&mut self, rx: &mut Receiver<Input>) {
        let page = match self.history.read_recent(self.history_limit).await {
            Ok(page) => page,
            Err(e) => {
                crate::lerror!("history", "read failed ({:?}): {e}", e.io_kind());
                self.presenter.render(UiEvent::HistoryReadFailed(e.to_string()));
                return;
            }
        };

        self.presenter.render(UiEvent::History(page.recent().to_vec()));

        if !page.has_more() || self.input_closed {
            return;
        }

        let answer = prompt::ask(rx, &mut self.presenter, PromptKind::ShowAllHistory).await;
        if answer.is_some_and(|a| self.catalog.is_yes(&a)) {
            self.presenter.render(UiEvent::History(page.all().to_vec()));
        }
    }
}
