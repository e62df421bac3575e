//! Animation clock.
//!
//! Rows advance on their own schedules, so a single task ticks the shared
//! state at a fixed frame interval and each row decides which of its steps
//! are due.

use crate::state::State;
use log::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Specify the clock interval in milliseconds.
///
pub const FRAME_INTERVAL_IN_MS: u64 = 15;

/// Start ticking `state` until `shutdown` changes or its sender is dropped.
///
pub fn start(state: Arc<Mutex<State>>, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("Starting animation clock...");
        let mut interval = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_IN_MS));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    state.lock().await.tick(Instant::now());
                }
                _ = shutdown.changed() => break,
            }
        }
        debug!("Animation clock stopped.");
    })
}
