// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{validate, Config};
use crate::engine::Processor;
use crate::errors::{ConfigError, RunError};
use crate::observability::messages::engine::{LoadFailed, RunCompleted, RunStarted};
use crate::observability::messages::validation::InvalidConfiguration;
use crate::traits::EventSink;
use std::path::Path;
use std::time::Instant;

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read from the input file.
    pub loaded: usize,
    /// Processed records produced from them.
    pub produced: usize,
    /// Whether the output file was written.
    pub saved: bool,
}

/// Drive one full job: validate, initialize, load, process, save.
///
/// An invalid configuration or a failed load ends the run with an error.
/// A failed save is logged by the processor and reported as
/// `saved: false`; the run still completes.
pub fn run<S: EventSink>(
    config: Config,
    input: &Path,
    output: &Path,
    sink: S,
) -> Result<RunSummary, RunError> {
    let start_time = Instant::now();

    let started = RunStarted {
        name: &config.name,
        input,
        output,
    };
    let span = started.span_for_run();
    let _guard = span.enter();
    sink.emit(&started);

    if let Err(errors) = validate(&config) {
        sink.emit(&InvalidConfiguration {
            name: &config.name,
            errors: &errors,
        });
        return Err(ConfigError::Invalid(errors).into());
    }

    // Already validated above; construction cannot fail here
    let mut processor = Processor::with_sink(config, sink)?;
    processor.initialize();

    let loaded = match processor.load(input) {
        Ok(count) => count,
        Err(err) => {
            processor.sink().emit(&LoadFailed {
                path: input,
                error: &err,
            });
            return Err(RunError::Load(err));
        }
    };

    let results = processor.process();
    let saved = processor.save(&results, output).is_ok();

    processor.sink().emit(&RunCompleted {
        name: &processor.config().name,
        loaded,
        produced: results.len(),
        saved,
        duration: start_time.elapsed(),
    });

    Ok(RunSummary {
        loaded,
        produced: results.len(),
        saved,
    })
}
