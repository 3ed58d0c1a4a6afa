//! logscope: a live-tail engine for a remote operational log
//!
//! The engine keeps an in-memory snapshot of a remote event log current via
//! polling, classifies and filters records by severity, maintains live
//! per-severity counts, and exports the filtered view as flat text.
//! Rendering, credential lifecycle, and log persistence belong to the
//! embedding application.
//!
//! # Architecture
//!
//! ```text
//! LogApiClient ──► LogStore ──► filtered view + counts ──► consumer
//!       ▲             │
//!       └── Poller ───┘
//! ```
//!
//! The [`Engine`] facade owns all shared state and is the only component
//! that mutates the store; consumers read derived [`LogView`]s.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use logscope::{ClientConfig, Engine, LevelFilter};
//!
//! # async fn run() -> logscope::Result<()> {
//! let mut engine = Engine::new(
//!     ClientConfig::new("https://panel.example.net/api").with_bearer_token("admin-token"),
//! )?;
//!
//! let view = engine.refresh().await?;
//! println!("{} errors of {} records", view.counts.error, view.counts.total());
//!
//! engine.set_filter(LevelFilter::Error);
//! engine.start_auto_refresh(Duration::from_secs(30));
//! # Ok(())
//! # }
//! ```

pub use logscope_client::{ClientConfig, DEFAULT_TIMEOUT, FetchError, LogApiClient, Result};
pub use logscope_engine::{
    apply_filter, counts_by_level, Engine, EngineConfig, LevelCounts, LogSource, LogStore, LogView,
    Poller, PollingState, suggested_filename, to_text,
};
pub use logscope_types::{LevelFilter, LogLevel, LogRecord};
