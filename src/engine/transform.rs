// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::record::{ProcessedRecord, Record};

/// Key a record must carry to be transformed
pub const ID_KEY: &str = "id";

/// Map one record to its processed form.
///
/// Returns `None` when the record has no `id` key; such records are
/// filtered out of the output. A present-but-null `id` still counts.
///
/// ```
/// use record_pipeline::engine::{transform, Record};
/// use serde_json::json;
///
/// let record: Record = serde_json::from_value(json!({"id": 1, "foo": "bar"})).unwrap();
/// let processed = transform(&record).unwrap();
/// assert_eq!(processed.id(), &json!(1));
/// assert_eq!(processed.original(), &record);
///
/// let anonymous: Record = serde_json::from_value(json!({"foo": "bar"})).unwrap();
/// assert!(transform(&anonymous).is_none());
/// ```
pub fn transform(record: &Record) -> Option<ProcessedRecord> {
    let id = record.get(ID_KEY)?;
    Some(ProcessedRecord::new(id.clone(), record.clone()))
}
