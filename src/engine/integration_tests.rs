// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;
use tracing::Level;

use crate::config::create_default_config;
use crate::engine::{run, transform, Processor, Record, RunSummary};
use crate::errors::{ConfigError, ProcessorError, RunError, ValidationError};
use crate::observability::sinks::RecordingSink;

/// End-to-end tests driving the processor against real files
#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn initialized(sink: &RecordingSink) -> Processor<&RecordingSink> {
        let mut processor = Processor::with_sink(create_default_config(), sink).unwrap();
        processor.initialize();
        processor
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_mixed_input_keeps_only_records_with_id() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "input.json", r#"[{"id": 1}, {"foo": "bar"}, {"id": 2}]"#);
        let sink = RecordingSink::new();
        let mut processor = initialized(&sink);

        let loaded = processor.load(&input).unwrap();
        assert_eq!(loaded, 3);
        let load_event = sink
            .events()
            .into_iter()
            .find(|e| e.event == "records_loaded")
            .unwrap();
        assert_eq!(load_event.level, Level::INFO);
        assert!(load_event.message.contains('3'));

        let results = processor.process();
        let ids: Vec<&Value> = results.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![&json!(1), &json!(2)]);
        assert!(results.iter().all(|r| r.is_processed()));
    }

    #[test]
    fn test_missing_input_leaves_records_untouched() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "input.json", r#"[{"id": "kept"}]"#);
        let sink = RecordingSink::new();
        let mut processor = initialized(&sink);
        processor.load(&input).unwrap();
        let before = processor.records().to_vec();

        let result = processor.load(dir.path().join("does-not-exist.json"));

        assert!(matches!(result, Err(ProcessorError::NotFound { .. })));
        assert_eq!(processor.records(), before.as_slice());
        let last = sink.events().pop().unwrap();
        assert_eq!(last.level, Level::ERROR);
        assert_eq!(last.event, "input_not_found");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "input.json", "not valid json");
        let sink = RecordingSink::new();
        let mut processor = initialized(&sink);

        let result = processor.load(&input);

        match result {
            Err(err @ ProcessorError::MalformedInput { .. }) => assert!(err.is_recoverable()),
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
        assert_eq!(sink.count("malformed_input"), 1);
        assert!(processor.records().is_empty());
    }

    #[test]
    fn test_save_writes_two_space_indented_array() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("output.json");
        let sink = RecordingSink::new();
        let processor = initialized(&sink);
        let source: Record = serde_json::from_value(json!({"id": 1})).unwrap();
        let results = vec![transform(&source).unwrap()];

        let saved = processor.save(&results, &output).unwrap();

        assert_eq!(saved, 1);
        let expected = "[\n  {\n    \"id\": 1,\n    \"processed\": true,\n    \"original\": {\n      \"id\": 1\n    }\n  }\n]";
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
        assert_eq!(
            read_json(&output),
            json!([{"id": 1, "processed": true, "original": {"id": 1}}])
        );
        assert_eq!(sink.count("results_saved"), 1);
    }

    #[test]
    fn test_process_with_no_records_is_empty() {
        let sink = RecordingSink::new();
        let processor = initialized(&sink);

        assert!(processor.process().is_empty());
        assert_eq!(sink.count_at(Level::ERROR), 0);
    }

    #[test]
    fn test_every_record_with_id_round_trips() {
        let dir = TempDir::new().unwrap();
        let input_value = json!([
            {"id": 10, "name": "a"},
            {"id": "x", "tags": ["t1", "t2"]},
            {"name": "first", "id": null, "extra": {"deep": true}}
        ]);
        let input = write_file(&dir, "input.json", &input_value.to_string());
        let sink = RecordingSink::new();
        let mut processor = initialized(&sink);
        processor.load(&input).unwrap();

        let results = processor.process();

        assert_eq!(results.len(), 3);
        for (result, original) in results.iter().zip(input_value.as_array().unwrap()) {
            assert!(result.is_processed());
            assert_eq!(&Value::Object(result.original().clone()), original);
            assert_eq!(result.id(), &original["id"]);
        }
    }

    #[test]
    fn test_original_key_order_survives_save() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "input.json", r#"[{"zeta": 1, "id": 5, "alpha": 2}]"#);
        let output = dir.path().join("output.json");
        let sink = RecordingSink::new();
        let mut processor = initialized(&sink);
        processor.load(&input).unwrap();

        processor.save(&processor.process(), &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let zeta = text.find("\"zeta\"").unwrap();
        let alpha = text.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
        assert!(text.find("\"processed\"").unwrap() < text.find("\"original\"").unwrap());
    }

    #[test]
    fn test_integers_beyond_64_bits_survive_unchanged() {
        let dir = TempDir::new().unwrap();
        let input = write_file(
            &dir,
            "input.json",
            r#"[{"id": 123456789012345678901234567890, "n": 18446744073709551616, "f": 0.10}]"#,
        );
        let output = dir.path().join("output.json");
        let sink = RecordingSink::new();
        let mut processor = initialized(&sink);
        processor.load(&input).unwrap();

        let results = processor.process();
        assert_eq!(results[0].id().to_string(), "123456789012345678901234567890");
        processor.save(&results, &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("\"id\": 123456789012345678901234567890,"));
        assert!(text.contains("\"n\": 18446744073709551616"));
        assert!(text.contains("\"f\": 0.10"));
        assert!(!text.contains("e+"));
    }

    #[test]
    fn test_processor_can_run_several_cycles() {
        let dir = TempDir::new().unwrap();
        let first = write_file(&dir, "first.json", r#"[{"id": 1}]"#);
        let second = write_file(&dir, "second.json", r#"[{"id": 2}, {"id": 3}]"#);
        let output = dir.path().join("output.json");
        let sink = RecordingSink::new();
        let mut processor = initialized(&sink);

        processor.load(&first).unwrap();
        processor.save(&processor.process(), &output).unwrap();
        processor.load(&second).unwrap();
        processor.save(&processor.process(), &output).unwrap();

        assert_eq!(read_json(&output).as_array().unwrap().len(), 2);
        assert_eq!(sink.count("results_saved"), 2);
    }

    #[test]
    fn test_run_full_pipeline() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "input.json", r#"[{"id": 1}, {"foo": "bar"}, {"id": 2}]"#);
        let output = dir.path().join("output.json");
        let sink = RecordingSink::new();

        let summary = run(create_default_config(), &input, &output, &sink).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                loaded: 3,
                produced: 2,
                saved: true
            }
        );
        assert_eq!(read_json(&output).as_array().unwrap().len(), 2);
        assert_eq!(
            sink.event_names(),
            vec![
                "run_started",
                "processor_initialized",
                "records_loaded",
                "results_saved",
                "run_completed"
            ]
        );
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "input.json", r#"[{"id": 1}]"#);
        let output = dir.path().join("output.json");
        let sink = RecordingSink::new();
        let mut config = create_default_config();
        config.name = String::new();

        let result = run(config, &input, &output, &sink);

        match result {
            Err(RunError::Config(ConfigError::Invalid(errors))) => {
                assert_eq!(errors, vec![ValidationError::EmptyName]);
            }
            other => panic!("Expected invalid configuration, got {:?}", other),
        }
        assert_eq!(sink.count("invalid_configuration"), 1);
        assert_eq!(sink.count("processor_initialized"), 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_run_stops_when_load_fails() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("output.json");
        let sink = RecordingSink::new();

        let result = run(
            create_default_config(),
            &dir.path().join("missing.json"),
            &output,
            &sink,
        );

        assert!(matches!(
            result,
            Err(RunError::Load(ProcessorError::NotFound { .. }))
        ));
        assert_eq!(sink.count("input_not_found"), 1);
        assert_eq!(sink.count("load_failed"), 1);
        assert_eq!(sink.count("run_completed"), 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_run_completes_when_save_fails() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "input.json", r#"[{"id": 1}]"#);
        let output = dir.path().join("missing_dir").join("output.json");
        let sink = RecordingSink::new();

        let summary = run(create_default_config(), &input, &output, &sink).unwrap();

        assert!(!summary.saved);
        assert_eq!(summary.produced, 1);
        assert_eq!(sink.count("write_failure"), 1);
        assert_eq!(sink.count("run_completed"), 1);
    }
}
