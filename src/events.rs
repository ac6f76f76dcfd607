//! Structured event logging for the dispatcher.
//!
//! Events consist of a short kind (e.g. `CommandDispatchFailed`) and an
//! ordered list of key/value pairs. The [`EventLog`] trait is handed to the
//! dispatcher explicitly so the sink can be swapped out in tests.

use std::cell::RefCell;

/// Severity of a structured event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Failure-class event.
    Error,
}

/// A sink for structured dispatcher events.
pub trait EventLog {
    /// Record an event with the given severity, kind and key/value pairs.
    fn record(&self, severity: Severity, kind: &str, pairs: &[(&str, &str)]);

    /// Record an informational event.
    fn info(&self, kind: &str, pairs: &[(&str, &str)]) {
        self.record(Severity::Info, kind, pairs);
    }

    /// Record a failure-class event.
    fn error(&self, kind: &str, pairs: &[(&str, &str)]) {
        self.record(Severity::Error, kind, pairs);
    }
}

/// Render key/value pairs as `key="value"` separated by spaces.
pub fn format_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={:?}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Event log that forwards every event to `tracing`.
///
/// The global subscriber is installed by [`crate::logging::init`]; events
/// recorded before that are dropped by `tracing` itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLog;

impl EventLog for TracingEventLog {
    fn record(&self, severity: Severity, kind: &str, pairs: &[(&str, &str)]) {
        let details = format_pairs(pairs);
        match severity {
            Severity::Info => tracing::info!(target: "senex::events", event = kind, %details),
            Severity::Error => tracing::error!(target: "senex::events", event = kind, %details),
        }
    }
}

/// A recorded event, as kept by [`MemoryEventLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub severity: Severity,
    pub kind: String,
    pub pairs: Vec<(String, String)>,
}

impl RecordedEvent {
    /// Look up the value recorded for `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Event log that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryEventLog {
    events: RefCell<Vec<RecordedEvent>>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, oldest first.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Events recorded with the given severity.
    pub fn with_severity(&self, severity: Severity) -> Vec<RecordedEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.severity == severity)
            .cloned()
            .collect()
    }
}

impl EventLog for MemoryEventLog {
    fn record(&self, severity: Severity, kind: &str, pairs: &[(&str, &str)]) {
        self.events.borrow_mut().push(RecordedEvent {
            severity,
            kind: kind.to_string(),
            pairs: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }
}
