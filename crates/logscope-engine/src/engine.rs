use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use logscope_client::{ClientConfig, LogApiClient, Result};
use logscope_types::LevelFilter;

use crate::export;
use crate::poller::{Poller, PollingState};
use crate::source::LogSource;
use crate::store::LogStore;
use crate::view::{self, LevelCounts, LogView};

/// Engine-level tuning knobs
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Prefix for suggested export filenames
    pub export_prefix: String,

    /// Fire the first automatic fetch at start instead of one interval later
    pub immediate_first_poll: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            export_prefix: "logs".to_string(),
            immediate_first_poll: false,
        }
    }
}

/// Facade coordinating fetching, storage, filtering, polling, and export.
///
/// The engine is the only component that mutates the store; everything a
/// consumer sees is a derived view of the latest snapshot.
pub struct Engine {
    source: Arc<dyn LogSource>,
    store: LogStore,
    filter: LevelFilter,
    poller: Poller,
    config: EngineConfig,
}

impl Engine {
    /// Engine over the HTTP log source with default tuning
    pub fn new(client: ClientConfig) -> Result<Self> {
        Self::with_config(client, EngineConfig::default())
    }

    /// Engine over the HTTP log source
    pub fn with_config(client: ClientConfig, config: EngineConfig) -> Result<Self> {
        let source = LogApiClient::new(client)?;
        Ok(Self::from_source(Arc::new(source), config))
    }

    /// Engine over any log source implementation
    pub fn from_source(source: Arc<dyn LogSource>, config: EngineConfig) -> Self {
        Self {
            source,
            store: LogStore::new(),
            filter: LevelFilter::default(),
            poller: Poller::new(),
            config,
        }
    }

    /// Fetch a fresh snapshot now and replace the store with it.
    ///
    /// On failure the store keeps its previous contents and the error is
    /// returned for the caller to display.
    pub async fn refresh(&self) -> Result<LogView> {
        let records = self.source.fetch_all().await?;
        self.store.replace(records);
        Ok(self.view())
    }

    /// Select the active severity filter and recompute the view.
    ///
    /// Never touches the network; the view is derived from the records
    /// already held.
    pub fn set_filter(&mut self, filter: LevelFilter) -> LogView {
        self.filter = filter;
        self.view()
    }

    /// Start timer-driven refreshing; no-op when already running
    pub fn start_auto_refresh(&mut self, interval: Duration) {
        self.poller.start(
            interval,
            Arc::clone(&self.source),
            self.store.clone(),
            self.config.immediate_first_poll,
        );
    }

    /// Stop timer-driven refreshing; no-op when idle
    pub fn stop_auto_refresh(&mut self) {
        self.poller.stop();
    }

    /// Serialize the currently filtered view as flat text
    pub fn export_text(&self) -> String {
        export::to_text(&self.view().records)
    }

    /// Suggested filename for the next export
    pub fn export_filename(&self) -> String {
        export::suggested_filename(&self.config.export_prefix)
    }

    /// Write the current export into `dir`, returning the created path
    pub fn export_to_file(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(self.export_filename());
        std::fs::write(&path, self.export_text())?;
        Ok(path)
    }

    /// Clear the remote log, then the local store.
    ///
    /// Irreversible. Callers must obtain explicit confirmation before
    /// invoking this; the engine does not re-ask. The local store is
    /// cleared only after the remote clear succeeds, so a failure leaves
    /// local data intact.
    pub async fn clear(&self) -> Result<()> {
        self.source.clear_remote().await?;
        self.store.clear();
        Ok(())
    }

    /// Current derived view: filtered records plus counts over the full store
    pub fn view(&self) -> LogView {
        let records = self.store.all();
        LogView {
            counts: view::counts_by_level(&records),
            records: view::apply_filter(&records, self.filter),
        }
    }

    /// Per-severity counts over the full store
    pub fn counts(&self) -> LevelCounts {
        view::counts_by_level(&self.store.all())
    }

    /// The active severity filter
    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    /// Scheduling state of the auto-refresh timer
    pub fn polling_state(&self) -> PollingState {
        self.poller.state()
    }

    /// Handle to the underlying store
    pub fn store(&self) -> &LogStore {
        &self.store
    }
}
