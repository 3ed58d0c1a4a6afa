use std::sync::Arc;

use parking_lot::RwLock;

use logscope_types::LogRecord;

/// Thread-safe holding area for the current log snapshot.
///
/// The store always holds exactly the records of the most recent successful
/// fetch, in source order. It is only ever mutated by whole-value replace or
/// clear, so readers never observe a partially written sequence.
#[derive(Clone, Default)]
pub struct LogStore {
    records: Arc<RwLock<Vec<LogRecord>>>,
}

impl LogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the held sequence for a fresh snapshot
    pub fn replace(&self, records: Vec<LogRecord>) {
        *self.records.write() = records;
    }

    /// Empty the store
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Get all records (cloned snapshot)
    pub fn all(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    /// Total record count
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
