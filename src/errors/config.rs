// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single violated configuration constraint
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `name` was empty
    EmptyName,
    /// `max_retries` was below zero
    NegativeMaxRetries {
        /// The rejected value
        value: i64,
    },
    /// `timeout` was zero, negative or NaN
    NonPositiveTimeout {
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Configuration name must not be empty"),
            ValidationError::NegativeMaxRetries { value } => {
                write!(f, "max_retries must be >= 0, got {}", value)
            }
            ValidationError::NonPositiveTimeout { value } => {
                write!(f, "timeout must be > 0 seconds, got {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid YAML configuration.
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration parsed but violates one or more constraints.
    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
