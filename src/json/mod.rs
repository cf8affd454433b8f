//! JSON parsing and the JSON value model.
//!
//! # Architecture
//!
//! The JSON subsystem is organized into focused modules:
//!
//! - [`types`] - Immutable JSON value types
//! - [`limits`] - DoS protection limits
//! - [`token`] - Token kinds, positions and the [`TokenSource`] capability
//! - [`lexer`] - Text tokenizer implementing [`TokenSource`]
//! - [`builder`] - Value construction strategy
//! - [`parser`] - Recursive descent parser over any token source
//! - [`writer`] - Compact JSON printing
//!
//! # Example
//!
//! ```
//! use jvalue::json::{parse_str, JsonValue};
//!
//! let value = parse_str(r#"{"b": [1, 2.5], "a": 1, "a": 2}"#).unwrap();
//!
//! // Duplicate keys: the last occurrence wins
//! assert_eq!(value.get("a"), Some(&JsonValue::Number(2.0)));
//!
//! // Objects keep insertion order when printed
//! assert_eq!(value.to_string(), r#"{"b":[1,2.5],"a":2}"#);
//! ```

pub mod builder;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod token;
pub mod types;
pub mod writer;

// Re-export commonly used items
pub use builder::{TreeBuilder, ValueBuilder};
pub use lexer::Lexer;
pub use limits::Limits;
pub use parser::{parse, parse_str, parse_value, parse_value_with, parse_with_limits, Parser};
pub use token::{Position, TokenBuffer, TokenKind, TokenSource};
pub use types::{JsonValue, Map};
pub use writer::to_json_string;
