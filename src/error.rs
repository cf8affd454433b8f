//! Error handling for the JSON engine.
//!
//! Every failure maps to a stable numeric code and name so that callers (and
//! the CLI) can report the same error the same way across releases.
//!
//! | Code | Error |
//! |------|-------|
//! | 100  | [`ParseError::UnexpectedToken`] |
//! | 101  | [`ParseError::Lexical`] |
//! | 102  | [`ParseError::TrailingContent`] |
//! | 103  | [`ParseError::InvalidNumber`] |
//! | 104  | [`ParseError::NumberOutOfRange`] |
//! | 110  | [`ParseError::InputTooLarge`] |
//! | 111  | [`ParseError::DepthExceeded`] |
//! | 112  | [`ParseError::StringTooLong`] |
//! | 113  | [`ParseError::TooManyFields`] |
//! | 114  | [`ParseError::ArrayTooLong`] |

use thiserror::Error;

use crate::json::token::{Position, TokenKind};

/// Malformed-text conditions reported by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexicalErrorKind {
    /// A character that cannot start a token at this point.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// Input ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// Backslash followed by an unknown escape or malformed `\u` digits.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A `\u` escape encoding half of a surrogate pair.
    #[error("unpaired surrogate in unicode escape")]
    UnpairedSurrogate,
    /// Raw control character inside a string.
    #[error("control character U+{0:04X} in string")]
    ControlCharacter(u32),
    /// Number literal violating the JSON grammar (leading zeros, bare `-`, ...).
    #[error("invalid number literal")]
    InvalidNumber,
    /// Misspelled `true`, `false` or `null`.
    #[error("invalid literal")]
    InvalidLiteral,
    /// Object key expected but something else found.
    #[error("expected field name")]
    ExpectedFieldName,
    /// Field name not followed by `:`.
    #[error("expected ':' after field name")]
    ExpectedColon,
    /// Container element not followed by `,` or the closing bracket.
    #[error("expected ',' or closing bracket")]
    ExpectedCommaOrClose,
    /// `,` directly before a closing bracket.
    #[error("trailing comma")]
    TrailingComma,
    /// Input bytes are not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// Non-ASCII code point while ASCII-only mode is on.
    #[error("non-ASCII character U+{0:04X}")]
    NonAscii(u32),
}

/// Errors produced while turning a token stream into a value.
///
/// A parse never recovers locally: the first error aborts the whole call and
/// no partial value is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The current token cannot appear where a value (or key) was expected.
    #[error("JSON parser - {context} at {position}")]
    UnexpectedToken {
        /// Offending token kind.
        token: TokenKind,
        /// Human-readable description, e.g. `unexpected end of array`.
        context: String,
        /// Where the token starts.
        position: Position,
    },

    /// The token source rejected the underlying text.
    #[error("{kind} at {position}")]
    Lexical {
        /// What was wrong with the text.
        kind: LexicalErrorKind,
        /// Where the problem was detected.
        position: Position,
    },

    /// Content follows the root value.
    #[error("trailing content after JSON value at {position}")]
    TrailingContent {
        /// Start of the extra content.
        position: Position,
    },

    /// Number token whose text is not a JSON number.
    #[error("invalid number {text:?} at {position}")]
    InvalidNumber {
        /// Token text.
        text: String,
        /// Start of the token.
        position: Position,
    },

    /// Number literal whose magnitude does not fit a finite `f64`.
    #[error("number {text} out of range at {position}")]
    NumberOutOfRange {
        /// Token text.
        text: String,
        /// Start of the token.
        position: Position,
    },

    /// Input larger than [`Limits::max_input_size`](crate::json::Limits).
    #[error("input size {size} exceeds limit {limit}")]
    InputTooLarge {
        /// Input size in bytes.
        size: u64,
        /// Configured limit.
        limit: u64,
    },

    /// Arrays/objects nested deeper than the configured limit.
    #[error("nesting depth {depth} exceeds limit {limit} at {position}")]
    DepthExceeded {
        /// Depth that was reached.
        depth: u64,
        /// Configured limit.
        limit: u64,
        /// Start of the container that crossed the limit.
        position: Position,
    },

    /// Decoded string longer than the configured limit.
    #[error("string length {length} exceeds limit {limit} at {position}")]
    StringTooLong {
        /// Decoded length in bytes when the limit was crossed.
        length: u64,
        /// Configured limit.
        limit: u64,
        /// Start of the string token.
        position: Position,
    },

    /// Object with more fields than the configured limit.
    #[error("object field count {count} exceeds limit {limit} at {position}")]
    TooManyFields {
        /// Field count when the limit was crossed.
        count: u64,
        /// Configured limit.
        limit: u64,
        /// Start of the offending field name.
        position: Position,
    },

    /// Array with more elements than the configured limit.
    #[error("array length {length} exceeds limit {limit} at {position}")]
    ArrayTooLong {
        /// Element count when the limit was crossed.
        length: u64,
        /// Configured limit.
        limit: u64,
        /// Start of the offending element.
        position: Position,
    },
}

impl ParseError {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { .. } => 100,
            ParseError::Lexical { .. } => 101,
            ParseError::TrailingContent { .. } => 102,
            ParseError::InvalidNumber { .. } => 103,
            ParseError::NumberOutOfRange { .. } => 104,
            ParseError::InputTooLarge { .. } => 110,
            ParseError::DepthExceeded { .. } => 111,
            ParseError::StringTooLong { .. } => 112,
            ParseError::TooManyFields { .. } => 113,
            ParseError::ArrayTooLong { .. } => 114,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::Lexical { .. } => "Lexical",
            ParseError::TrailingContent { .. } => "TrailingContent",
            ParseError::InvalidNumber { .. } => "InvalidNumber",
            ParseError::NumberOutOfRange { .. } => "NumberOutOfRange",
            ParseError::InputTooLarge { .. } => "InputTooLarge",
            ParseError::DepthExceeded { .. } => "DepthExceeded",
            ParseError::StringTooLong { .. } => "StringTooLong",
            ParseError::TooManyFields { .. } => "TooManyFields",
            ParseError::ArrayTooLong { .. } => "ArrayTooLong",
        }
    }

    /// Position the error refers to, if it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::Lexical { position, .. }
            | ParseError::TrailingContent { position }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::NumberOutOfRange { position, .. }
            | ParseError::DepthExceeded { position, .. }
            | ParseError::StringTooLong { position, .. }
            | ParseError::TooManyFields { position, .. }
            | ParseError::ArrayTooLong { position, .. } => Some(*position),
            ParseError::InputTooLarge { .. } => None,
        }
    }

    /// Context string of an [`UnexpectedToken`](ParseError::UnexpectedToken) error.
    pub fn context(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedToken { context, .. } => Some(context),
            _ => None,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize, column: usize) -> Position {
        Position {
            offset: column - 1,
            line,
            column,
        }
    }

    #[test]
    fn test_codes_and_names() {
        let err = ParseError::DepthExceeded {
            depth: 33,
            limit: 32,
            position: at(1, 33),
        };
        assert_eq!(err.code(), 111);
        assert_eq!(err.name(), "DepthExceeded");

        let err = ParseError::InputTooLarge { size: 11, limit: 10 };
        assert_eq!(err.code(), 110);
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_unexpected_token_message() {
        let err = ParseError::UnexpectedToken {
            token: TokenKind::FieldName,
            context: "unexpected field name".to_string(),
            position: at(2, 5),
        };
        assert_eq!(
            err.to_string(),
            "JSON parser - unexpected field name at line 2, column 5"
        );
        assert_eq!(err.context(), Some("unexpected field name"));
    }

    #[test]
    fn test_lexical_message() {
        let err = ParseError::Lexical {
            kind: LexicalErrorKind::ControlCharacter(0x0A),
            position: at(1, 3),
        };
        assert_eq!(
            err.to_string(),
            "control character U+000A in string at line 1, column 3"
        );
        assert_eq!(err.context(), None);
    }
}
