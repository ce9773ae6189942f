// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! [`EventSink`] implementations.
//!
//! * [`TracingSink`] - forwards every event to `tracing`, used by the binary
//! * [`RecordingSink`] - keeps every event in memory so tests can assert on them

use crate::observability::StructuredLog;
use crate::traits::EventSink;
use std::cell::RefCell;
use tracing::Level;

/// Forwards events to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &dyn StructuredLog) {
        event.log();
    }
}

/// One captured event.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub level: Level,
    pub event: &'static str,
    pub message: String,
}

/// Captures events in emission order.
///
/// Single-threaded like the processor it observes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<RecordedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Event names in emission order.
    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(|e| e.event).collect()
    }

    /// Number of captured events named `event`.
    pub fn count(&self, event: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.event == event)
            .count()
    }

    /// Number of captured events at `level`.
    pub fn count_at(&self, level: Level) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &dyn StructuredLog) {
        self.events.borrow_mut().push(RecordedEvent {
            level: event.level(),
            event: event.event(),
            message: event.to_string(),
        });
    }
}
