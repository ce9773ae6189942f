// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_MAX_RETRIES, DEFAULT_NAME, DEFAULT_TIMEOUT_SECONDS, DEFAULT_VERSION,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Run parameters for a single pipeline job.
///
/// A `Config` is built once, validated once, and then handed to a
/// [`Processor`](crate::engine::Processor) which owns it for the rest of the run.
/// It is typically either the built-in [`create_default_config`] or loaded
/// from a YAML file with [`load_config`].
///
/// # Fields
/// * `name` - Job name, must not be empty
/// * `version` - Free-form version text
/// * `debug` - Debug flag (defaults to `false`)
/// * `max_retries` - Retry budget, must not be negative (defaults to 5)
/// * `timeout` - Timeout in seconds, must be positive (defaults to 30.0)
///
/// `debug`, `max_retries` and `timeout` are carried for the operator's
/// benefit; the pipeline itself never reads them.
///
/// # Example
/// ```yaml
/// name: nightly-export
/// version: "2.1.0"
/// debug: false
/// max_retries: 3
/// timeout: 12.5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_max_retries")]
    pub max_retries: i64,
    #[serde(default = "default_timeout")]
    pub timeout: f64,
}

fn default_max_retries() -> i64 {
    DEFAULT_MAX_RETRIES
}

fn default_timeout() -> f64 {
    DEFAULT_TIMEOUT_SECONDS
}

/// Build the configuration used when none is supplied externally.
///
/// ```
/// use record_pipeline::config::{create_default_config, is_valid};
///
/// let config = create_default_config();
/// assert_eq!(config.name, "default");
/// assert!(config.debug);
/// assert!(is_valid(&config));
/// ```
pub fn create_default_config() -> Config {
    Config {
        name: DEFAULT_NAME.to_string(),
        version: DEFAULT_VERSION.to_string(),
        debug: true,
        max_retries: DEFAULT_MAX_RETRIES,
        timeout: DEFAULT_TIMEOUT_SECONDS,
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a config from a YAML file
///
/// Every violated constraint is reported, not just the first one.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
