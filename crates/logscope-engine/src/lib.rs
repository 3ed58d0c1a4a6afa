//! Log tailing engine for logscope
//!
//! This crate provides the snapshot store, severity filtering, polling,
//! and export logic behind the live-tail view.

mod engine;
mod export;
mod poller;
mod source;
mod store;
mod view;

pub use engine::{Engine, EngineConfig};
pub use export::{suggested_filename, to_text};
pub use poller::{Poller, PollingState};
pub use source::LogSource;
pub use store::LogStore;
pub use view::{apply_filter, counts_by_level, LevelCounts, LogView};

// Re-export types used in our public API
pub use logscope_client::{ClientConfig, FetchError, LogApiClient, Result};
pub use logscope_types::{LevelFilter, LogLevel, LogRecord};
