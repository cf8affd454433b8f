//! Corpus-based conformance testing.
//!
//! A corpus is a JSON file of test vectors. Each vector names an input
//! document, optional limits, and the expected outcome: either the value the
//! document must parse to, or the error code (and optionally the context
//! string) it must fail with.
//!
//! ```json
//! {
//!   "manifest": {"format_version": "1", "description": "..."},
//!   "vectors": [
//!     {"id": "dup_key", "input": "{\"a\":1,\"a\":2}", "expected": {"ok": {"a": 2}}},
//!     {"id": "open_object", "input": "{", "expected": {"err": {"code": 100}}}
//!   ]
//! }
//! ```
//!
//! Expected values are read with `serde_json`, so the parser under test is
//! never its own oracle.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::json::{parse_with_limits, JsonValue, Limits};

/// Errors raised while loading a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
    /// The corpus file is not a valid corpus document.
    #[error("malformed corpus: {0}")]
    Format(#[from] serde_json::Error),
}

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// JSON document to parse.
    pub input: String,
    /// Limits to parse with; lenient when absent, partial objects allowed.
    #[serde(default)]
    pub limits: Option<Limits>,
    /// Exact compact output expected on success (checks entry order too).
    #[serde(default)]
    pub output: Option<String>,
    /// Expected result (success or error).
    pub expected: Expected,
}

/// Expected outcome of a vector.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expected {
    /// The input parses to this value.
    Ok(serde_json::Value),
    /// The input fails with this error.
    Err(ExpectedError),
}

/// Expected failure of a vector.
#[derive(Debug, Deserialize)]
pub struct ExpectedError {
    /// Numeric error code.
    pub code: u32,
    /// Context string of an `UnexpectedToken` error.
    #[serde(default)]
    pub context: Option<String>,
}

impl ExpectedError {
    fn matches(&self, err: &ParseError) -> bool {
        err.code() == self.code
            && self
                .context
                .as_deref()
                .map_or(true, |context| err.context() == Some(context))
    }
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the parser.
        actual: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        if result.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Returns true if no vector failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "Total: {}, Passed: {}, Failed: {}",
            self.total(),
            self.passed,
            self.failed
        )
    }

    /// Failing vectors with their details.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details.iter().filter(|(_, r)| r.is_fail()).collect()
    }
}

/// Runs the vectors of a loaded corpus.
#[derive(Debug)]
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load a corpus from a file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a corpus from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CorpusError> {
        let corpus: Corpus = serde_json::from_str(text)?;
        Ok(Self { corpus })
    }

    /// Corpus metadata.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// The vectors, in file order.
    pub fn vectors(&self) -> &[TestVector] {
        &self.corpus.vectors
    }

    /// Number of vectors in the corpus.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run every vector.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();
        for vector in &self.corpus.vectors {
            let result = Self::run_vector(vector);
            match &result {
                TestResult::Pass => debug!(id = %vector.id, "vector passed"),
                TestResult::Fail { expected, actual } => {
                    warn!(id = %vector.id, %expected, %actual, "vector failed");
                }
            }
            results.record(&vector.id, result);
        }
        results
    }

    /// Run a single vector.
    pub fn run_vector(vector: &TestVector) -> TestResult {
        let limits = vector.limits.unwrap_or_default();
        let actual = parse_with_limits(vector.input.as_bytes(), limits);

        let passed = match (&vector.expected, &actual) {
            (Expected::Ok(expected), Ok(value)) => {
                JsonValue::from(expected) == *value
                    && vector
                        .output
                        .as_deref()
                        .map_or(true, |output| value.to_string() == output)
            }
            (Expected::Err(expected), Err(err)) => expected.matches(err),
            _ => false,
        };

        if passed {
            TestResult::Pass
        } else {
            TestResult::Fail {
                expected: describe_expected(vector),
                actual: describe_actual(&actual),
            }
        }
    }
}

fn describe_expected(vector: &TestVector) -> String {
    match &vector.expected {
        Expected::Ok(value) => match &vector.output {
            Some(output) => output.clone(),
            None => JsonValue::from(value).to_string(),
        },
        Expected::Err(err) => match &err.context {
            Some(context) => format!("error {} ({context})", err.code),
            None => format!("error {}", err.code),
        },
    }
}

fn describe_actual(actual: &Result<JsonValue, ParseError>) -> String {
    match actual {
        Ok(value) => value.to_string(),
        Err(err) => format!("error {} ({err})", err.code()),
    }
}
