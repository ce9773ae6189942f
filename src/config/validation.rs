// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! A configuration is valid when all three constraints hold:
//!
//! 1. **Name**: `name` is not empty
//! 2. **Retries**: `max_retries` is zero or greater
//! 3. **Timeout**: `timeout` is strictly greater than zero
//!
//! [`validate`] accumulates every violation so an operator can fix a config
//! file in one pass. [`is_valid`] is the boolean view of the same rules.
//!
//! # Examples
//!
//! ```rust
//! use record_pipeline::config::{validate, create_default_config};
//! use record_pipeline::errors::ValidationError;
//!
//! let mut config = create_default_config();
//! config.name = String::new();
//! config.timeout = -1.0;
//!
//! match validate(&config) {
//!     Ok(()) => unreachable!(),
//!     Err(errors) => {
//!         assert_eq!(errors[0], ValidationError::EmptyName);
//!         assert_eq!(errors.len(), 2);
//!     }
//! }
//! ```

use crate::config::Config;
use crate::errors::ValidationError;

/// Checks every constraint on `config` and returns all violations found.
///
/// Violations are reported in field order: name, retries, timeout.
/// This is a total function; a `NaN` timeout is not `> 0` and is rejected.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.name.is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    if config.max_retries < 0 {
        errors.push(ValidationError::NegativeMaxRetries {
            value: config.max_retries,
        });
    }

    if config.timeout.is_nan() || config.timeout <= 0.0 {
        errors.push(ValidationError::NonPositiveTimeout {
            value: config.timeout,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns `true` when `config` may be used to construct a processor.
pub fn is_valid(config: &Config) -> bool {
    validate(config).is_ok()
}
