//! Shared types for logscope
//!
//! This crate contains data structures used across multiple logscope crates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Severity Taxonomy
// ============================================================================

/// Classified severity of a log record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Debug,
    /// Anything outside the closed severity set
    Unknown,
}

impl LogLevel {
    /// Parse a raw severity tag (case-insensitive, exact names only)
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "info" => Self::Info,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "debug" => Self::Debug,
            _ => Self::Unknown,
        }
    }

    /// Canonical uppercase display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity filter selection
///
/// Exactly one filter is active at a time. Records with an unrecognized
/// severity match only `All`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Info,
    Warning,
    Error,
    Debug,
}

impl LevelFilter {
    /// Whether a record with the given classified severity passes this filter
    pub fn matches(&self, level: LogLevel) -> bool {
        match self {
            Self::All => true,
            Self::Info => level == LogLevel::Info,
            Self::Warning => level == LogLevel::Warning,
            Self::Error => level == LogLevel::Error,
            Self::Debug => level == LogLevel::Debug,
        }
    }

    /// Get display label for this filter
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Debug => "Debug",
        }
    }

    /// Cycle to the next filter
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Info,
            Self::Info => Self::Warning,
            Self::Warning => Self::Error,
            Self::Error => Self::Debug,
            Self::Debug => Self::All,
        }
    }

    /// Cycle to the previous filter
    pub fn prev(&self) -> Self {
        match self {
            Self::All => Self::Debug,
            Self::Info => Self::All,
            Self::Warning => Self::Info,
            Self::Error => Self::Warning,
            Self::Debug => Self::Error,
        }
    }
}

// ============================================================================
// Log Records
// ============================================================================

/// A single log record as returned by the remote source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Externally formatted timestamp, treated as display-opaque
    pub timestamp: String,

    /// Raw severity tag as received, preserved verbatim even when unrecognized
    pub level: String,

    /// Free-form message text
    pub message: String,

    /// Optional subsystem tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Optional structured payload, semantically opaque to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl LogRecord {
    /// Create a new record with the required fields
    pub fn new(timestamp: String, level: String, message: String) -> Self {
        Self {
            timestamp,
            level,
            message,
            category: None,
            details: None,
        }
    }

    /// Classified severity of this record
    pub fn severity(&self) -> LogLevel {
        LogLevel::from_str(&self.level)
    }

    /// Display label for the severity: canonical uppercase when recognized,
    /// the raw tag as-is otherwise
    pub fn severity_label(&self) -> &str {
        match self.severity() {
            LogLevel::Unknown => &self.level,
            known => known.as_str(),
        }
    }
}
