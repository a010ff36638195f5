//! Debug diagnostics channel.
//!
//! The locator and the auditor never write to a console. Everything they
//! want to say at a verbose tier goes through a [`DiagnosticsSink`], which
//! the caller picks: [`TracingSink`] in the binary, [`RecordingSink`] in
//! tests, [`NullSink`] when nobody is listening.

use std::cell::RefCell;

/// Receiver for debug events.
pub trait DiagnosticsSink {
    /// Record a single debug event.
    fn record(&self, event: &str);
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, event: &str) {
        tracing::debug!("{}", event);
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record(&self, _event: &str) {}
}

/// Keeps events in memory for later assertion.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Check if any recorded event contains `needle`.
    pub fn has_event(&self, needle: &str) -> bool {
        self.events.borrow().iter().any(|e| e.contains(needle))
    }
}

impl DiagnosticsSink for RecordingSink {
    fn record(&self, event: &str) {
        self.events.borrow_mut().push(event.to_string());
    }
}
