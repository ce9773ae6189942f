// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod processor;
pub mod record;
pub mod runner;
pub mod transform;
#[cfg(test)]
mod integration_tests;

pub use processor::{Processor, Stage};
pub use record::{ProcessedRecord, Record};
pub use runner::{run, RunSummary};
pub use transform::{transform, ID_KEY};
