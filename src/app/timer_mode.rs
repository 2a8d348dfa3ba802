// Author: Dustin Pilgrim
// License: MIT

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::core::{events::Input, utils::SystemClock};
use crate::dispatcher::Dispatcher;
use crate::services::history::HistoryStore;
use crate::ui::TerminalPresenter;

use super::AnyError;

pub async fn run(settings: &Settings, task: String, catalog: Arc<Catalog>) -> Result<(), AnyError> {
    let (tx, rx) = mpsc::channel::<Input>(256);

    let raw_guard = crate::services::input::spawn_input(tx.clone());

    let mut presenter = TerminalPresenter::new(Arc::clone(&catalog));
    presenter.set_raw(raw_guard.is_some());

    let mut dispatcher = Dispatcher::new(
        task,
        catalog,
        HistoryStore::new(settings.history_path.clone()),
        SystemClock::new(),
        presenter,
    )
    .with_history_limit(settings.history_limit)
    .with_refresh_ms(settings.refresh_ms);

    dispatcher.run(tx, rx).await;

    drop(raw_guard);
    crate::linfo!("lapwatch", "session finished ({:?})", dispatcher.session().status());
    Ok(())
}
