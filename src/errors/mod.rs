// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod processor;

pub use config::{ConfigError, ValidationError};
pub use execution::RunError;
pub use processor::ProcessorError;
