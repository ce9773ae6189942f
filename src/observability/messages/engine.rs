// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for whole-run events.
//!
//! This module contains message types for logging events related to:
//! * Run start (input and output paths)
//! * A run ending because its input could not be loaded
//! * Run completion

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::{Level, Span};

/// Run started for a configuration.
///
/// # Log Level
/// `debug!` - Detailed progress
///
/// # Example
/// ```
/// use record_pipeline::observability::messages::engine::RunStarted;
/// use std::path::Path;
///
/// let msg = RunStarted {
///     name: "default",
///     input: Path::new("data/input.json"),
///     output: Path::new("data/output.json"),
/// };
///
/// let span = msg.span_for_run();
/// let _guard = span.enter();
/// ```
pub struct RunStarted<'a> {
    pub name: &'a str,
    pub input: &'a Path,
    pub output: &'a Path,
}

impl RunStarted<'_> {
    /// Span that wraps every event of the run.
    pub fn span_for_run(&self) -> Span {
        self.span("pipeline_run")
    }
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting run '{}': {} -> {}",
            self.name,
            self.input.display(),
            self.output.display()
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn level(&self) -> Level {
        Level::DEBUG
    }

    fn event(&self) -> &'static str {
        "run_started"
    }

    fn log(&self) {
        tracing::debug!(
            name = self.name,
            input = %self.input.display(),
            output = %self.output.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run",
            span_name = name,
            name = self.name,
            input = %self.input.display(),
            output = %self.output.display(),
        )
    }
}

/// Run abandoned because the input could not be loaded.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct LoadFailed<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for LoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to load data from {}: {}",
            self.path.display(),
            self.error
        )
    }
}

impl StructuredLog for LoadFailed<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn event(&self) -> &'static str {
        "load_failed"
    }

    fn log(&self) {
        tracing::error!(
            path = %self.path.display(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "run",
            span_name = name,
            path = %self.path.display(),
            error = %self.error,
        )
    }
}

/// Run finished.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunCompleted<'a> {
    pub name: &'a str,
    pub loaded: usize,
    pub produced: usize,
    pub saved: bool,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing complete for '{}': loaded={}, produced={}, saved={}, duration={:?}",
            self.name, self.loaded, self.produced, self.saved, self.duration
        )
    }
}

impl StructuredLog for RunCompleted<'_> {
    fn level(&self) -> Level {
        Level::INFO
    }

    fn event(&self) -> &'static str {
        "run_completed"
    }

    fn log(&self) {
        tracing::info!(
            name = self.name,
            loaded = self.loaded,
            produced = self.produced,
            saved = self.saved,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run",
            span_name = name,
            name = self.name,
            loaded = self.loaded,
            produced = self.produced,
            saved = self.saved,
        )
    }
}
