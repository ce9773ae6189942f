// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation errors.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::{Level, Span};

/// Configuration rejected before a processor was built.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use record_pipeline::errors::ValidationError;
/// use record_pipeline::observability::messages::validation::InvalidConfiguration;
///
/// let errors = vec![ValidationError::EmptyName];
/// let msg = InvalidConfiguration {
///     name: "",
///     errors: &errors,
/// };
///
/// assert!(msg.to_string().contains("name must not be empty"));
/// ```
pub struct InvalidConfiguration<'a> {
    pub name: &'a str,
    pub errors: &'a [ValidationError],
}

impl InvalidConfiguration<'_> {
    fn joined(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Display for InvalidConfiguration<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invalid configuration '{}': {}",
            self.name,
            self.joined()
        )
    }
}

impl StructuredLog for InvalidConfiguration<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn event(&self) -> &'static str {
        "invalid_configuration"
    }

    fn log(&self) {
        tracing::error!(
            name = self.name,
            error_count = self.errors.len(),
            errors = %self.joined(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation",
            span_name = name,
            name = self.name,
            error_count = self.errors.len(),
        )
    }
}
