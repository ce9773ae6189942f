// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Name used by the built-in configuration
pub const DEFAULT_NAME: &str = "default";
/// Version used by the built-in configuration
pub const DEFAULT_VERSION: &str = "1.0.0";
/// Retry count applied when a config file omits `max_retries`
pub const DEFAULT_MAX_RETRIES: i64 = 5;
/// Timeout in seconds applied when a config file omits `timeout`
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 30.0;

/// Input path used by the CLI when none is given
pub const DEFAULT_INPUT_PATH: &str = "data/input.json";
/// Output path used by the CLI when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "data/output.json";
