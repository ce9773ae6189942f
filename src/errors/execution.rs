// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{ConfigError, ProcessorError};
use thiserror::Error;

/// Reasons a full pipeline run ends without producing output.
///
/// A save failure is not one of them: [`run`](crate::engine::run) logs it and
/// reports it through [`RunSummary::saved`](crate::engine::RunSummary).
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration was rejected before a processor was built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The input could not be loaded.
    #[error("Failed to load data: {0}")]
    Load(#[source] ProcessorError),
}
