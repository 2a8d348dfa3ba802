// Author: Dustin Pilgrim
// License: MIT

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::core::events::Input;
use crate::dispatcher::clean::clear_history;
use crate::services::history::HistoryStore;
use crate::ui::TerminalPresenter;

use super::AnyError;

pub async fn run(settings: &Settings, catalog: Arc<Catalog>) -> Result<(), AnyError> {
    let (tx, mut rx) = mpsc::channel::<Input>(16);

    let raw_guard = crate::services::input::spawn_input(tx);

    let mut presenter = TerminalPresenter::new(Arc::clone(&catalog));
    presenter.set_raw(raw_guard.is_some());

    let store = HistoryStore::new(settings.history_path.clone());
    let outcome = clear_history(&store, &catalog, &mut rx, &mut presenter).await;

    drop(raw_guard);
    // a failed delete was already reported; still a clean exit
    crate::ldebug!("lapwatch", "clean finished: {outcome:?}");
    Ok(())
}
