// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Every diagnostic and operational event the pipeline emits is a message
//! struct with a `Display` implementation and a [`StructuredLog`] implementation.
//! This keeps message text out of the pipeline code and gives each event a
//! stable name and level that tests can assert on.
//!
//! # Architecture
//!
//! * `messages::processor` - Processor lifecycle: initialize, load, save
//! * `messages::engine` - Whole-run events: start, load failure, completion
//! * `messages::validation` - Configuration rejection
//! * `sinks` - [`EventSink`](crate::traits::EventSink) implementations
//!
//! # Usage
//!
//! ```rust
//! use record_pipeline::observability::messages::processor::RecordsLoaded;
//! use record_pipeline::observability::sinks::RecordingSink;
//! use record_pipeline::traits::EventSink;
//! use std::path::Path;
//!
//! let sink = RecordingSink::new();
//! sink.emit(&RecordsLoaded {
//!     path: Path::new("data/input.json"),
//!     count: 3,
//! });
//!
//! assert_eq!(sink.count("records_loaded"), 1);
//! ```

pub mod messages;
pub mod sinks;

pub use messages::StructuredLog;
