// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors returned by [`Processor`](crate::engine::Processor) operations.
//!
//! Every operation reports through this one type. [`ProcessorError::is_recoverable`]
//! separates the conditions a caller can report and move past (`NotFound`,
//! `MalformedInput`, `WriteFailure`) from the ones that should end the run
//! (`NotInitialized`, `Io`).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    /// `load` was called before `initialize`.
    #[error("Processor not initialized")]
    NotInitialized,

    /// The input path does not resolve to an existing file.
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The input is not valid JSON or is not an array of objects.
    #[error("Invalid JSON in '{}': {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the output failed for any reason.
    #[error("Failed to save results to '{}': {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure while reading input.
    #[error("I/O error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessorError {
    /// `true` for conditions the processor has already logged and survived.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ProcessorError::NotFound { .. }
                | ProcessorError::MalformedInput { .. }
                | ProcessorError::WriteFailure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_recoverable_kinds() {
        let not_found = ProcessorError::NotFound {
            path: PathBuf::from("in.json"),
        };
        let write_failure = ProcessorError::WriteFailure {
            path: PathBuf::from("out.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let malformed = ProcessorError::MalformedInput {
            path: PathBuf::from("in.json"),
            source: serde_json::from_str::<serde_json::Value>("nope").unwrap_err(),
        };

        assert!(not_found.is_recoverable());
        assert!(write_failure.is_recoverable());
        assert!(malformed.is_recoverable());
    }

    #[test]
    fn test_fatal_kinds() {
        let io_err = ProcessorError::Io {
            path: PathBuf::from("in.json"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };

        assert!(!ProcessorError::NotInitialized.is_recoverable());
        assert!(!io_err.is_recoverable());
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ProcessorError::NotFound {
            path: PathBuf::from("data/input.json"),
        };
        assert_eq!(err.to_string(), "File not found: data/input.json");
    }
}
