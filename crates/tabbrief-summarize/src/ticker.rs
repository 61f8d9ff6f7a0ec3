//! Elapsed-time feedback while a model call is outstanding.

use std::sync::Arc;
use std::time::Duration;

use tabbrief_protocols::StatusSink;

/// Publishes `Thinking (Ns)...` once per second until dropped.
///
/// Purely cosmetic feedback with one hard obligation: the tick must stop
/// exactly once per request, on every terminal path. Dropping the guard
/// aborts the task, so stopping is tied to scope rather than to each exit
/// branch remembering to call something.
pub struct ElapsedTicker {
    handle: tokio::task::JoinHandle<()>,
}

impl ElapsedTicker {
    /// Start ticking against `sink`. The counter starts at zero.
    pub fn start(sink: Arc<dyn StatusSink>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // First tick completes immediately; the counter begins after it.
            interval.tick().await;
            let mut seconds: u64 = 0;
            loop {
                interval.tick().await;
                seconds += 1;
                sink.publish(&format!("Thinking ({seconds}s)..."));
            }
        });
        Self { handle }
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
#[path = "ticker_tests.rs"]
mod tests;
