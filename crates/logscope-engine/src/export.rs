use logscope_types::LogRecord;

/// Serialize records as flat text, one line per record in the given order.
///
/// Line format is `[timestamp] [LEVEL] [category] message`, with the
/// category segment omitted entirely when the record has none. `details`
/// are never included.
pub fn to_text(records: &[LogRecord]) -> String {
    records.iter().map(format_line).collect()
}

/// Suggested filename for an export, embedding the generation time
pub fn suggested_filename(prefix: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.log", prefix, timestamp)
}

fn format_line(record: &LogRecord) -> String {
    match &record.category {
        Some(category) => format!(
            "[{}] [{}] [{}] {}\n",
            record.timestamp,
            record.severity_label(),
            category,
            record.message
        ),
        None => format!(
            "[{}] [{}] {}\n",
            record.timestamp,
            record.severity_label(),
            record.message
        ),
    }
}
