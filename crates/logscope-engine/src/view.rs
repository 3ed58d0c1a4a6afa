use logscope_types::{LevelFilter, LogLevel, LogRecord};

/// Record counts per classified severity.
///
/// The four canonical buckets are always present; records with an
/// unrecognized severity tag are tallied separately and never folded into
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub debug: usize,
    pub unknown: usize,
}

impl LevelCounts {
    pub fn total(&self) -> usize {
        self.info + self.warning + self.error + self.debug + self.unknown
    }
}

/// Tally records per severity by scanning the full sequence
pub fn counts_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::default();

    for record in records {
        match record.severity() {
            LogLevel::Info => counts.info += 1,
            LogLevel::Warning => counts.warning += 1,
            LogLevel::Error => counts.error += 1,
            LogLevel::Debug => counts.debug += 1,
            LogLevel::Unknown => counts.unknown += 1,
        }
    }

    counts
}

/// Select the records passing the filter, preserving order.
///
/// `All` reproduces the input unchanged, unrecognized severities included;
/// any other filter keeps exact severity matches only.
pub fn apply_filter(records: &[LogRecord], filter: LevelFilter) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r.severity()))
        .cloned()
        .collect()
}

/// Derived view handed to consumers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogView {
    /// Records passing the active filter, in store order
    pub records: Vec<LogRecord>,

    /// Counts over the full store, not just the filtered records
    pub counts: LevelCounts,
}
