//! # Event Log Tests

use archsim_core::common::{EventLog, LogLevel};

#[test]
fn entries_keep_insertion_order() {
    let mut log = EventLog::new();
    log.info("first");
    log.warn("second");
    log.error("third");

    let levels: Vec<LogLevel> = log.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![LogLevel::Info, LogLevel::Warn, LogLevel::Error]);
    assert_eq!(log.last().map(|e| e.message.as_str()), Some("third"));
}

#[test]
fn restart_discards_history() {
    let mut log = EventLog::with_marker("start");
    log.warn("something odd");
    log.restart("again");
    assert_eq!(log.len(), 1);
    assert_eq!(log.entries()[0].to_string(), "again");
}

#[test]
fn serializes_as_a_plain_list() {
    let mut log = EventLog::new();
    log.warn("careful");
    let json = serde_json::to_value(&log).unwrap_or_default();
    assert_eq!(
        json,
        serde_json::json!([{ "level": "warn", "message": "careful" }])
    );
}
