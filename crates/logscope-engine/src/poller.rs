use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::source::LogSource;
use crate::store::LogStore;

/// Snapshot of the poller's scheduling state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollingState {
    pub enabled: bool,
    pub interval: Option<Duration>,
}

/// Cancellable repeating timer that keeps the store current.
///
/// Two states, idle and running. `start` while running and `stop` while
/// idle are no-ops, so at most one timer loop exists per poller.
pub struct Poller {
    /// Cancellation token observed by the running loop
    cancel: CancellationToken,

    /// Handle of the running loop, if any
    task: Option<JoinHandle<()>>,

    /// Interval of the running loop, if any
    interval: Option<Duration>,
}

impl Poller {
    /// Create an idle poller
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
            task: None,
            interval: None,
        }
    }

    /// Start the repeating fetch loop; no-op when already running.
    ///
    /// The first automatic fetch fires one interval after start unless
    /// `immediate_first` is set.
    pub fn start(
        &mut self,
        interval: Duration,
        source: Arc<dyn LogSource>,
        store: LogStore,
        immediate_first: bool,
    ) {
        if self.is_running() {
            return;
        }

        debug!(?interval, "starting auto refresh");
        let cancel = self.cancel.clone();
        self.interval = Some(interval);
        self.task = Some(tokio::spawn(async move {
            if immediate_first {
                tick(source.as_ref(), &store, &cancel).await;
            }

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,

                    _ = tokio::time::sleep(interval) => {
                        tick(source.as_ref(), &store, &cancel).await;
                    }
                }
            }
        }));
    }

    /// Stop scheduling further fetches; no-op when idle.
    ///
    /// A fetch already in flight is allowed to finish, but its result is
    /// discarded once the loop observes the cancelled token.
    pub fn stop(&mut self) {
        if self.task.is_none() {
            return;
        }

        debug!("stopping auto refresh");
        self.cancel.cancel();
        self.task = None;
        self.interval = None;
        // Fresh token so the poller can be started again later
        self.cancel = CancellationToken::new();
    }

    /// Check if the timer loop is live
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Get the current scheduling state
    pub fn state(&self) -> PollingState {
        PollingState {
            enabled: self.is_running(),
            interval: self.interval,
        }
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One timer-driven fetch: replace the store on success, log and skip on
/// failure, drop the result entirely if the poller was stopped meanwhile.
async fn tick(source: &dyn LogSource, store: &LogStore, cancel: &CancellationToken) {
    match source.fetch_all().await {
        Ok(records) => {
            if cancel.is_cancelled() {
                debug!("auto refresh stopped mid-fetch, discarding snapshot");
                return;
            }
            store.replace(records);
        }
        Err(e) => {
            warn!(error = %e, "auto refresh tick failed, keeping previous snapshot");
        }
    }
}
