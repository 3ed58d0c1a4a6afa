//! Remote log source client for logscope
//!
//! This crate provides HTTP access to the operational log API: snapshot
//! retrieval and destructive remote clearing, with a typed failure taxonomy.

mod client;
mod error;

pub use client::{ClientConfig, DEFAULT_TIMEOUT, LogApiClient};
pub use error::{FetchError, Result};

// Re-export types that are used in our public API
pub use logscope_types::LogRecord;
