// Author: Dustin Pilgrim
// License: MIT

use crate::core::events::Input;

use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};

pub const DEFAULT_REFRESH_MS: u64 = 100;

/// Sends `Input::Tick` every `period_ms` until aborted or the queue is gone.
pub async fn run_ticker(tx: Sender<Input>, period_ms: u64) {
    crate::ldebug!("ticker", "started ({period_ms} ms)");

    let mut ticks = interval(Duration::from_millis(period_ms.max(1)));
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // first tick completes immediately
    ticks.tick().await;

    loop {
        ticks.tick().await;

        if tx.send(Input::Tick).await.is_err() {
            crate::ldebug!("ticker", "stopping (receiver dropped)");
            break;
        }
    }
}

pub fn spawn_ticker(tx: Sender<Input>, period_ms: u64) -> JoinHandle<()> {
    tokio::spawn(run_ticker(tx, period_ms))
}
