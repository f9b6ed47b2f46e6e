//! Engine Event Log.
//!
//! Each engine keeps a short, human-readable history of what happened to it
//! (program loads, executed micro-steps, cache accesses, rejected requests).
//! Every entry is also forwarded to `tracing` so the same events reach any
//! installed subscriber.

use std::fmt;

use serde::Serialize;

/// Severity of an [`EventLog`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Normal progress.
    Info,
    /// Recovered oddity (unknown opcode, memory cell outside the array).
    Warn,
    /// Rejected request.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// A single log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Severity.
    pub level: LogLevel,
    /// Rendered message.
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            LogLevel::Info => f.write_str(&self.message),
            level => write!(f, "[{level}] {}", self.message),
        }
    }
}

/// Ordered event history owned by one engine instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a log holding a single informational marker.
    pub fn with_marker(message: impl Into<String>) -> Self {
        let mut log = Self::new();
        log.info(message);
        log
    }

    /// Discards every entry and starts over from a single marker.
    pub fn restart(&mut self, message: impl Into<String>) {
        self.entries.clear();
        self.info(message);
    }

    /// Appends an informational entry.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "archsim::log", "{message}");
        self.entries.push(LogEntry {
            level: LogLevel::Info,
            message,
        });
    }

    /// Appends a warning entry.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(target: "archsim::log", "{message}");
        self.entries.push(LogEntry {
            level: LogLevel::Warn,
            message,
        });
    }

    /// Appends an error entry.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(target: "archsim::log", "{message}");
        self.entries.push(LogEntry {
            level: LogLevel::Error,
            message,
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
