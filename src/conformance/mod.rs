//! Conformance testing against a corpus of parse vectors.

pub mod corpus;

pub use corpus::{
    Corpus, CorpusError, CorpusManifest, CorpusResults, CorpusRunner, Expected, ExpectedError,
    TestResult, TestVector,
};
