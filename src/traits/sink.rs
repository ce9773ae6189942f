// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::StructuredLog;

/// Destination for the leveled events a processor emits.
///
/// The processor never logs through a global; it is handed a sink at
/// construction and emits every event through it. Only the level and the
/// event name are stable, the rendered text is not.
pub trait EventSink {
    fn emit(&self, event: &dyn StructuredLog);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, event: &dyn StructuredLog) {
        (**self).emit(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&self, event: &dyn StructuredLog) {
        (**self).emit(event)
    }
}
