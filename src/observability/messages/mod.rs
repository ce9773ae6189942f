// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `engine` - Whole-run events
//! * `processor` - Processor lifecycle events
//! * `validation` - Configuration validation errors
//!
//! # Usage Pattern
//!
//! ```rust
//! use record_pipeline::observability::messages::{processor::ProcessorInitialized, StructuredLog};
//!
//! let msg = ProcessorInitialized {
//!     name: "default",
//!     version: "1.0.0",
//! };
//!
//! assert_eq!(msg.event(), "processor_initialized");
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::{Level, Span};

pub mod engine;
pub mod processor;
pub mod validation;

/// A log message that knows its own level, name and structured fields.
pub trait StructuredLog: Display {
    /// Level the message is logged at.
    fn level(&self) -> Level;

    /// Stable snake_case name of the triggering event.
    fn event(&self) -> &'static str;

    /// Emit the message through `tracing` with its fields attached.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
