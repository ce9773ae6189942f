// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Processor initialization
//! * Loading input records (success, missing file, malformed input)
//! * Saving processed records (success, write failure)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::{Level, Span};

/// Processor initialized with a configuration.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use record_pipeline::observability::messages::processor::ProcessorInitialized;
///
/// let msg = ProcessorInitialized {
///     name: "default",
///     version: "1.0.0",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorInitialized<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

impl Display for ProcessorInitialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Initializing {} (version {})", self.name, self.version)
    }
}

impl StructuredLog for ProcessorInitialized<'_> {
    fn level(&self) -> Level {
        Level::INFO
    }

    fn event(&self) -> &'static str {
        "processor_initialized"
    }

    fn log(&self) {
        tracing::info!(name = self.name, version = self.version, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor",
            span_name = name,
            name = self.name,
            version = self.version,
        )
    }
}

/// Records loaded from an input file.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordsLoaded<'a> {
    pub path: &'a Path,
    pub count: usize,
}

impl Display for RecordsLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} records from {}",
            self.count,
            self.path.display()
        )
    }
}

impl StructuredLog for RecordsLoaded<'_> {
    fn level(&self) -> Level {
        Level::INFO
    }

    fn event(&self) -> &'static str {
        "records_loaded"
    }

    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            count = self.count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "load",
            span_name = name,
            path = %self.path.display(),
            count = self.count,
        )
    }
}

/// Input file does not exist.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use record_pipeline::observability::messages::processor::InputFileNotFound;
/// use std::path::Path;
///
/// let msg = InputFileNotFound {
///     path: Path::new("data/missing.json"),
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct InputFileNotFound<'a> {
    pub path: &'a Path,
}

impl Display for InputFileNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "File not found: {}", self.path.display())
    }
}

impl StructuredLog for InputFileNotFound<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn event(&self) -> &'static str {
        "input_not_found"
    }

    fn log(&self) {
        tracing::error!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("load", span_name = name, path = %self.path.display())
    }
}

/// Input file is not a JSON array of records.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct MalformedInputRejected<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for MalformedInputRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid JSON in {}: {}", self.path.display(), self.error)
    }
}

impl StructuredLog for MalformedInputRejected<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn event(&self) -> &'static str {
        "malformed_input"
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
            "load",
            span_name = name,
            path = %self.path.display(),
            error = %self.error,
        )
    }
}

/// Processed records written to the output file.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ResultsSaved<'a> {
    pub path: &'a Path,
    pub count: usize,
}

impl Display for ResultsSaved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Saved {} results to {}", self.count, self.path.display())
    }
}

impl StructuredLog for ResultsSaved<'_> {
    fn level(&self) -> Level {
        Level::INFO
    }

    fn event(&self) -> &'static str {
        "results_saved"
    }

    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            count = self.count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "save",
            span_name = name,
            path = %self.path.display(),
            count = self.count,
        )
    }
}

/// Writing the output file failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use record_pipeline::observability::messages::processor::ResultsSaveFailed;
/// use std::path::Path;
///
/// let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
/// let msg = ResultsSaveFailed {
///     path: Path::new("/readonly/output.json"),
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ResultsSaveFailed<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for ResultsSaveFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to save {}: {}", self.path.display(), self.error)
    }
}

impl StructuredLog for ResultsSaveFailed<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn event(&self) -> &'static str {
        "write_failure"
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
            "save",
            span_name = name,
            path = %self.path.display(),
            error = %self.error,
        )
    }
}
