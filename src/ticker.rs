//! Cancellable periodic background task.
//!
//! Replaces ad-hoc `loop { ... sleep }` constructs with a small handle
//! whose task is aborted when the handle is dropped, tying the cycle's
//! lifetime to its owner.

use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A periodic background task that runs until aborted or dropped.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a task invoking `tick` every `period`. The first tick fires
    /// immediately. A failed tick is logged and does not stop the cycle.
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if let Err(e) = tick().await {
                    warn!("tick failed: {e:#}");
                }
            }
        });

        Self { handle }
    }

    /// Whether the underlying task has stopped (aborted or panicked).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the cycle immediately.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
