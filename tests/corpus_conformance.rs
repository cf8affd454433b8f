//! Corpus-based conformance tests.
//!
//! Runs every vector in `tests/vectors/parse_corpus.json` and checks both
//! successful parses (against values read independently with `serde_json`)
//! and failures (by error code and, where given, context string).

use jvalue::conformance::{CorpusError, CorpusRunner, Expected, TestResult};
use jvalue::json::parse_with_limits;
use std::path::Path;

/// Path to the corpus file relative to the crate root.
const CORPUS_PATH: &str = "tests/vectors/parse_corpus.json";

fn load_corpus() -> CorpusRunner {
    let corpus_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH);
    CorpusRunner::load(&corpus_path).expect("Failed to load corpus")
}

/// Load and run the full corpus.
#[test]
fn test_full_corpus() {
    let runner = load_corpus();
    println!("Loaded corpus with {} vectors", runner.vector_count());

    let results = runner.run_all();

    println!("\n=== Corpus Conformance Results ===");
    println!("{}", results.summary());

    if !results.failures().is_empty() {
        println!("\nFailures:");
        for (id, result) in results.failures() {
            if let TestResult::Fail { expected, actual } = result {
                println!("  {} - expected: {}, actual: {}", id, expected, actual);
            }
        }
    }

    assert!(results.all_passed(), "{}", results.summary());
    assert_eq!(results.total(), runner.vector_count());
}

/// Every accepted input prints to text that parses back to an equal value.
#[test]
fn test_printed_values_reparse() {
    let runner = load_corpus();
    let mut checked = 0;

    for vector in runner.vectors() {
        if !matches!(vector.expected, Expected::Ok(_)) {
            continue;
        }
        let limits = vector.limits.unwrap_or_default();
        let value = parse_with_limits(vector.input.as_bytes(), limits)
            .unwrap_or_else(|e| panic!("{}: {}", vector.id, e));
        let printed = value.to_string();
        let reparsed = parse_with_limits(printed.as_bytes(), limits)
            .unwrap_or_else(|e| panic!("{}: {} on {}", vector.id, e, printed));
        assert_eq!(reparsed, value, "{}: {}", vector.id, printed);
        assert_eq!(reparsed.to_string(), printed, "{}", vector.id);
        checked += 1;
    }

    assert!(checked > 0);
}

#[test]
fn test_corpus_manifest() {
    let runner = load_corpus();
    assert_eq!(runner.manifest().format_version, "1");
    assert!(runner.vector_count() > 0);
}

#[test]
fn test_missing_corpus_file() {
    let err = CorpusRunner::load(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, CorpusError::Io(_)));
}

#[test]
fn test_unknown_limit_field_rejected() {
    let corpus = r#"{
        "manifest": {"format_version": "1"},
        "vectors": [{"id": "x", "input": "1", "limits": {"depth": 3}, "expected": {"ok": 1}}]
    }"#;
    let err = CorpusRunner::from_json(corpus).unwrap_err();
    assert!(matches!(err, CorpusError::Format(_)));
}
