// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::Value;

/// One unit of input data.
///
/// An open JSON object whose keys keep their insertion order and whose
/// numbers keep their exact source text, so a record written back out
/// looks the way it was read.
pub type Record = serde_json::Map<String, Value>;

/// Output produced from a record that carries an `id`.
///
/// Serializes as `{"id": .., "processed": true, "original": {..}}` in that
/// key order. Built only by [`transform`](crate::engine::transform) and
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedRecord {
    id: Value,
    processed: bool,
    original: Record,
}

impl ProcessedRecord {
    pub(crate) fn new(id: Value, original: Record) -> Self {
        Self {
            id,
            processed: true,
            original,
        }
    }

    pub fn id(&self) -> &Value {
        &self.id
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// The source record, unchanged.
    pub fn original(&self) -> &Record {
        &self.original
    }
}
