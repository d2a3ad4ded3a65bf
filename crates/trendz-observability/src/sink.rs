//! Log sinks.

use std::sync::Mutex;

use crate::logging::{LogEntry, LogFormat, LogLevel};

/// Destination for structured log entries.
pub trait LogSink: Send + Sync {
    /// Write one entry.
    fn write(&self, entry: &LogEntry, format: LogFormat);
}

/// Writes rendered entries to stderr (Spin captures this).
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, entry: &LogEntry, format: LogFormat) {
        eprintln!("{}", entry.render(format));
    }
}

/// Keeps entries in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries written so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Entries whose message equals `message`.
    pub fn find(&self, message: &str) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.message == message)
            .collect()
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry, _format: LogFormat) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}

/// Forwards entries to `tracing` as events on the `trendz` target.
///
/// The structured fields travel as one JSON-encoded `fields` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, entry: &LogEntry, _format: LogFormat) {
        let fields = serde_json::to_string(&entry.fields).unwrap_or_default();
        let request_id = entry.request_id.as_str();
        let message = entry.message.as_str();
        match entry.level {
            LogLevel::Trace => {
                tracing::trace!(target: "trendz", request_id, fields = %fields, "{}", message)
            }
            LogLevel::Debug => {
                tracing::debug!(target: "trendz", request_id, fields = %fields, "{}", message)
            }
            LogLevel::Info => {
                tracing::info!(target: "trendz", request_id, fields = %fields, "{}", message)
            }
            LogLevel::Warn => {
                tracing::warn!(target: "trendz", request_id, fields = %fields, "{}", message)
            }
            LogLevel::Error => {
                tracing::error!(target: "trendz", request_id, fields = %fields, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            level: LogLevel::Info,
            message: message.to_string(),
            request_id: "req".to_string(),
            workload: None,
            route: None,
            fields: BTreeMap::new(),
            elapsed_us: None,
        }
    }

    #[test]
    fn test_memory_sink_find() {
        let sink = MemorySink::new();
        sink.write(&entry("a"), LogFormat::Json);
        sink.write(&entry("b"), LogFormat::Json);
        sink.write(&entry("a"), LogFormat::Human);

        assert_eq!(sink.entries().len(), 3);
        assert_eq!(sink.find("a").len(), 2);
        assert!(sink.find("c").is_empty());
    }

    #[test]
    fn test_tracing_sink_without_subscriber_is_silent() {
        TracingSink.write(&entry("no subscriber installed"), LogFormat::Json);
    }
}
