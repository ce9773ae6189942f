// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // run parameters + validation
pub mod engine;        // processor, transform, run orchestration
pub mod errors;        // error handling
pub mod observability; // structured log messages + sinks
pub mod traits;        // seams for injected collaborators
