// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The stateful load → process → save orchestrator.
//!
//! A [`Processor`] owns a validated [`Config`], the records from the most
//! recent load, and an [`EventSink`] that receives every lifecycle event.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──initialize()──▶ Initialized ──load()──▶ Loaded ──┐
//!                                                   ▲             │
//!                                                   └──load()─────┘
//! ```
//!
//! `process()` and `save()` may be called any number of times; there is no
//! closed state, so one processor can run several load/process/save cycles.
//!
//! # Examples
//!
//! ```rust
//! use record_pipeline::config::create_default_config;
//! use record_pipeline::engine::Processor;
//! use record_pipeline::errors::ProcessorError;
//! use record_pipeline::observability::sinks::RecordingSink;
//!
//! let sink = RecordingSink::new();
//! let mut processor = Processor::with_sink(create_default_config(), &sink).unwrap();
//!
//! // Loading before initialize() is a caller bug
//! assert!(matches!(
//!     processor.load("data/input.json"),
//!     Err(ProcessorError::NotInitialized)
//! ));
//!
//! processor.initialize();
//! assert!(processor.process().is_empty());
//! assert_eq!(sink.count("processor_initialized"), 1);
//! ```

use crate::config::{validate, Config};
use crate::engine::record::{ProcessedRecord, Record};
use crate::engine::transform::transform;
use crate::errors::{ConfigError, ProcessorError};
use crate::observability::messages::processor::{
    InputFileNotFound, MalformedInputRejected, ProcessorInitialized, RecordsLoaded,
    ResultsSaveFailed, ResultsSaved,
};
use crate::observability::sinks::TracingSink;
use crate::traits::EventSink;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Where a processor is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Uninitialized,
    Initialized,
    /// At least one load has succeeded.
    Loaded,
}

pub struct Processor<S: EventSink = TracingSink> {
    config: Config,
    records: Vec<Record>,
    initialized: bool,
    loaded: bool,
    sink: S,
}

impl Processor<TracingSink> {
    /// Build a processor that logs through `tracing`.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_sink(config, TracingSink)
    }
}

impl<S: EventSink> Processor<S> {
    /// Build a processor that emits events to `sink`.
    ///
    /// Refuses a configuration that fails [`validate`].
    pub fn with_sink(config: Config, sink: S) -> Result<Self, ConfigError> {
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(Self {
            config,
            records: Vec::new(),
            initialized: false,
            loaded: false,
            sink,
        })
    }

    /// Mark the processor ready. Calling it again only re-asserts the flag.
    pub fn initialize(&mut self) {
        self.sink.emit(&ProcessorInitialized {
            name: &self.config.name,
            version: &self.config.version,
        });
        self.initialized = true;
    }

    /// Replace the held records with the JSON array stored at `path`.
    ///
    /// Returns the number of records loaded. A missing file or malformed
    /// contents are logged and returned as recoverable errors; the
    /// previously held records are kept in that case. Any other read
    /// failure is returned as [`ProcessorError::Io`] without logging.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ProcessorError> {
        if !self.initialized {
            return Err(ProcessorError::NotInitialized);
        }

        let path = path.as_ref();
        let records = match read_records(path) {
            Ok(records) => records,
            Err(err) => {
                self.report_load_error(&err);
                return Err(err);
            }
        };

        let count = records.len();
        self.records = records;
        self.loaded = true;
        self.sink.emit(&RecordsLoaded { path, count });
        Ok(count)
    }

    /// Transform every held record, keeping input order and dropping
    /// records without an `id`.
    pub fn process(&self) -> Vec<ProcessedRecord> {
        if self.records.is_empty() {
            return Vec::new();
        }

        self.records.iter().filter_map(transform).collect()
    }

    /// Write `results` to `path` as a 2-space indented JSON array,
    /// replacing whatever was there.
    ///
    /// Every write failure is logged and returned as
    /// [`ProcessorError::WriteFailure`].
    pub fn save<P: AsRef<Path>>(
        &self,
        results: &[ProcessedRecord],
        path: P,
    ) -> Result<usize, ProcessorError> {
        let path = path.as_ref();
        match write_results(results, path) {
            Ok(()) => {
                self.sink.emit(&ResultsSaved {
                    path,
                    count: results.len(),
                });
                Ok(results.len())
            }
            Err(source) => {
                self.sink.emit(&ResultsSaveFailed {
                    path,
                    error: &source,
                });
                Err(ProcessorError::WriteFailure {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn stage(&self) -> Stage {
        match (self.initialized, self.loaded) {
            (false, _) => Stage::Uninitialized,
            (true, false) => Stage::Initialized,
            (true, true) => Stage::Loaded,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn report_load_error(&self, err: &ProcessorError) {
        match err {
            ProcessorError::NotFound { path } => {
                self.sink.emit(&InputFileNotFound {
                    path: path.as_path(),
                });
            }
            ProcessorError::MalformedInput { path, source } => {
                self.sink.emit(&MalformedInputRejected {
                    path: path.as_path(),
                    error: source,
                });
            }
            _ => {}
        }
    }
}

fn read_records(path: &Path) -> Result<Vec<Record>, ProcessorError> {
    let mut file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ProcessorError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ProcessorError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| ProcessorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| ProcessorError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_results(results: &[ProcessedRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()
}
