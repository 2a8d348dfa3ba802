// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc::Receiver;

use crate::catalog::Catalog;
use crate::core::events::Input;
use crate::services::history::HistoryStore;
use crate::ui::{Presenter, PromptKind, UiEvent};

use super::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Deleted,
    Cancelled,
    Failed,
}

/// Deletes the history log after an affirmative answer.
pub async fn clear_history<P: Presenter>(
    store: &HistoryStore,
    catalog: &Catalog,
    rx: &mut Receiver<Input>,
    presenter: &mut P,
) -> ClearOutcome {
    let answer = prompt::ask(rx, presenter, PromptKind::DeleteHistory).await;

    if !answer.is_some_and(|a| catalog.is_yes(&a)) {
        crate::linfo!("history", "clear cancelled");
        presenter.render(UiEvent::Cancelled);
        return ClearOutcome::Cancelled;
    }

    match store.delete().await {
        Ok(()) => {
            crate::linfo!("history", "deleted {}", store.path().display());
            presenter.render(UiEvent::HistoryDeleted);
            ClearOutcome::Deleted
        }
        Err(e) => {
            crate::lerror!("history", "delete failed: {e}");
            presenter.render(UiEvent::DeleteFailed(e.to_string()));
            ClearOutcome::Failed
        }
    }
}
