//! Unit tests for the logging system
//!
//! Tests that touch the global logger are serialized: the logger is shared
//! process-wide state.

use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use serial_test::serial;

use crate::log::{DefaultLogger, Log, LogEntry, LogSeverity, Logger};

/// Logger that stores entries for inspection
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Log::set_logger(Box::new(CaptureLogger {
        entries: entries.clone(),
    }));
    entries
}

// ============================================================================
// SEVERITY
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

// ============================================================================
// GLOBAL LOGGER
// ============================================================================

#[test]
#[serial]
fn test_log_reaches_installed_logger() {
    let entries = install_capture();

    Log::log(LogSeverity::Info, "nebula::test", "hello".to_string());

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Info);
        assert_eq!(entries[0].source, "nebula::test");
        assert_eq!(entries[0].message, "hello");
        assert_eq!(entries[0].file, None);
        assert_eq!(entries[0].line, None);
    }

    Log::reset_logger();
}

#[test]
#[serial]
fn test_detailed_log_captures_call_site() {
    let entries = install_capture();

    Log::log_detailed(
        LogSeverity::Error,
        "nebula::test",
        "boom".to_string(),
        file!(),
        line!(),
    );

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file, Some(file!()));
        assert!(entries[0].line.is_some());
    }

    Log::reset_logger();
}

#[test]
#[serial]
fn test_macros_format_and_dispatch() {
    let entries = install_capture();

    crate::engine_debug!("nebula::test", "created {} buffers", 3);
    crate::engine_error!("nebula::test", "failed: {}", "oops");

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].severity, LogSeverity::Debug);
        assert_eq!(entries[0].message, "created 3 buffers");
        assert_eq!(entries[1].severity, LogSeverity::Error);
        assert_eq!(entries[1].message, "failed: oops");
        // Only the error macro captures file:line
        assert_eq!(entries[0].file, None);
        assert!(entries[1].file.is_some());
    }

    Log::reset_logger();
}

// ============================================================================
// DEFAULT LOGGER
// ============================================================================

#[test]
fn test_default_logger_accepts_both_entry_shapes() {
    // Smoke test: formatting must not panic with or without file:line
    let logger = DefaultLogger;

    logger.log(&LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nebula::test".to_string(),
        message: "plain entry".to_string(),
        file: None,
        line: None,
    });

    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nebula::test".to_string(),
        message: "detailed entry".to_string(),
        file: Some(file!()),
        line: Some(line!()),
    });
}
