//! Structured JSON logger for aeromatch
//!
//! - One log line = one event
//! - `event` first, `severity` second, caller fields sorted by key
//! - Events below the logger's threshold are dropped
//! - Synchronous, no buffering

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues, rejected input
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured logger that writes one JSON object per line.
///
/// Errors go to stderr, everything else to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    threshold: Severity,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::Warn)
    }
}

impl Logger {
    /// Creates a logger that emits events at or above `threshold`.
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Returns the minimum severity this logger emits.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Whether an event of `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    /// Logs an event with the given severity and fields.
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !self.enabled(severity) {
            return;
        }
        if severity >= Severity::Error {
            self.write_to(severity, event, fields, &mut io::stderr());
        } else {
            self.write_to(severity, event, fields, &mut io::stdout());
        }
    }

    fn write_to<W: Write>(
        &self,
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = render(severity, event, fields);
        // Logging must never fail the caller.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Log at TRACE level
    pub fn trace(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    pub fn info(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// Renders a single newline-terminated JSON log line.
pub(crate) fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":");
    push_json_string(&mut output, event);
    output.push_str(",\"severity\":");
    push_json_string(&mut output, severity.as_str());

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted {
        output.push(',');
        push_json_string(&mut output, key);
        output.push(':');
        push_json_string(&mut output, value);
    }

    output.push_str("}\n");
    output
}

fn push_json_string(output: &mut String, s: &str) {
    output.push_str(&Value::String(s.to_owned()).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_threshold_filters_lower_severities() {
        let logger = Logger::new(Severity::Warn);
        assert!(!logger.enabled(Severity::Trace));
        assert!(!logger.enabled(Severity::Info));
        assert!(logger.enabled(Severity::Warn));
        assert!(logger.enabled(Severity::Error));
    }

    #[test]
    fn test_default_threshold_is_warn() {
        assert_eq!(Logger::default().threshold(), Severity::Warn);
    }

    #[test]
    fn test_render_is_valid_json() {
        let line = render(Severity::Info, "TEST_EVENT", &[("path", "a.b")]);
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "TEST_EVENT");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["path"], "a.b");
    }

    #[test]
    fn test_render_sorts_fields() {
        let a = render(Severity::Info, "T", &[("zebra", "1"), ("apple", "2")]);
        let b = render(Severity::Info, "T", &[("apple", "2"), ("zebra", "1")]);
        assert_eq!(a, b);
        assert!(a.find("apple").unwrap() < a.find("zebra").unwrap());
        assert!(a.find("\"event\"").unwrap() < a.find("\"severity\"").unwrap());
    }

    #[test]
    fn test_render_escapes_and_is_one_line() {
        let line = render(Severity::Warn, "T", &[("reason", "bad \"path\"\nhere")]);
        assert_eq!(line.matches('\n').count(), 1);

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["reason"], "bad \"path\"\nhere");
    }

    #[test]
    fn test_severity_serde_uppercase() {
        let json = serde_json::to_string(&Severity::Trace).unwrap();
        assert_eq!(json, "\"TRACE\"");
        let parsed: Severity = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(parsed, Severity::Error);
    }
}
