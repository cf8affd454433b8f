//! jvalue - a token-driven JSON parser and immutable JSON value model.
//!
//! # Architecture
//!
//! - [`json`] - value model, token sources, lexer, parser and writer
//! - [`error`] - parse errors with stable numeric codes
//! - [`conformance`] - corpus runner for JSON parse vectors
//!
//! The parser is generic over where tokens come from ([`json::TokenSource`])
//! and over what it builds ([`json::ValueBuilder`]). The default pairing,
//! text [`json::Lexer`] into [`json::JsonValue`], is exposed through
//! [`json::parse`].
//!
//! ```
//! use jvalue::json::{parse, JsonValue};
//!
//! let value = parse(b"[1, 2, 3]").unwrap();
//! assert_eq!(value.get_index(2), Some(&JsonValue::Number(3.0)));
//! ```

// Library code propagates errors; it must not unwrap, expect or panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{LexicalErrorKind, ParseError, ParseResult};
pub use json::{parse, parse_str, parse_value, JsonValue, Limits, Map, TokenKind, TokenSource};
