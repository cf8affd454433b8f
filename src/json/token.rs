//! Token model shared by every token source.
//!
//! Tokens are semantic rather than purely lexical: object keys arrive as
//! [`TokenKind::FieldName`] instead of a string followed by a colon, and
//! separators never surface. A [`TokenSource`] is a cursor over such tokens.

use std::fmt;

use crate::error::ParseResult;

/// Kinds of token a [`TokenSource`] can be positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// Object key; the text is the unescaped key.
    FieldName,
    /// String value; the text is the unescaped string.
    String,
    /// Number without fraction or exponent.
    IntegerNumber,
    /// Number with a fraction and/or exponent.
    FloatNumber,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Opaque value with no textual form (never produced from JSON text).
    EmbeddedObject,
    /// The source cannot supply a token right now.
    NotAvailable,
    /// The source is exhausted.
    EndOfInput,
}

impl TokenKind {
    /// Stable upper-case name used in messages and CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::ArrayStart => "START_ARRAY",
            TokenKind::ArrayEnd => "END_ARRAY",
            TokenKind::ObjectStart => "START_OBJECT",
            TokenKind::ObjectEnd => "END_OBJECT",
            TokenKind::FieldName => "FIELD_NAME",
            TokenKind::String => "VALUE_STRING",
            TokenKind::IntegerNumber => "VALUE_NUMBER_INT",
            TokenKind::FloatNumber => "VALUE_NUMBER_FLOAT",
            TokenKind::True => "VALUE_TRUE",
            TokenKind::False => "VALUE_FALSE",
            TokenKind::Null => "VALUE_NULL",
            TokenKind::EmbeddedObject => "VALUE_EMBEDDED_OBJECT",
            TokenKind::NotAvailable => "NOT_AVAILABLE",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }

    /// Fixed spelling of punctuation and literal tokens.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::ArrayStart => Some("["),
            TokenKind::ArrayEnd => Some("]"),
            TokenKind::ObjectStart => Some("{"),
            TokenKind::ObjectEnd => Some("}"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            _ => None,
        }
    }

    /// Returns true for the two number kinds.
    pub const fn is_number(self) -> bool {
        matches!(self, TokenKind::IntegerNumber | TokenKind::FloatNumber)
    }

    /// Returns true for tokens that carry source text (strings, keys, numbers).
    pub const fn has_text(self) -> bool {
        matches!(
            self,
            TokenKind::FieldName
                | TokenKind::String
                | TokenKind::IntegerNumber
                | TokenKind::FloatNumber
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a token in its source.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with columns
/// counted in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column within the line.
    pub column: usize,
}

impl Position {
    /// Position of the first byte of an input.
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A cursor over semantic JSON tokens.
///
/// A fresh source is positioned before its first token
/// (`current_token() == None`); each [`advance`](TokenSource::advance) moves to
/// the next token and returns its kind. Once exhausted, a source keeps
/// reporting [`TokenKind::EndOfInput`].
pub trait TokenSource {
    /// Kind of the current token, or `None` before the first advance.
    fn current_token(&self) -> Option<TokenKind>;

    /// Move to the next token.
    ///
    /// Fails if the underlying input is malformed.
    fn advance(&mut self) -> ParseResult<TokenKind>;

    /// Text of the current token.
    ///
    /// `None` for tokens that cannot be rendered as text, such as
    /// [`TokenKind::EmbeddedObject`] or end of input.
    fn current_text(&self) -> Option<&str>;

    /// Where the current token starts.
    fn position(&self) -> Position;
}

/// In-memory token source that replays a recorded token sequence.
///
/// Useful for feeding the parser token kinds a text lexer never produces,
/// and for re-parsing a captured stream without re-lexing.
///
/// Positions are synthetic: `offset` is the token index and every token sits
/// on line 1 at column `index + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<(TokenKind, Option<String>)>,
    // Index of the current token; `tokens.len()` once exhausted.
    cursor: Option<usize>,
}

impl TokenBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token without text.
    pub fn push(&mut self, kind: TokenKind) -> &mut Self {
        self.tokens.push((kind, None));
        self
    }

    /// Append a token carrying text.
    pub fn push_text(&mut self, kind: TokenKind, text: impl Into<String>) -> &mut Self {
        self.tokens.push((kind, Some(text.into())));
        self
    }

    /// Record every remaining token of `source` until end of input.
    ///
    /// The source's text is copied for tokens that have any; the
    /// end-of-input token itself is not stored.
    pub fn capture<S: TokenSource + ?Sized>(source: &mut S) -> ParseResult<Self> {
        let mut buffer = Self::new();
        loop {
            let kind = source.advance()?;
            if kind == TokenKind::EndOfInput {
                return Ok(buffer);
            }
            let text = if kind.has_text() {
                source.current_text().map(str::to_owned)
            } else {
                None
            };
            buffer.tokens.push((kind, text));
        }
    }

    /// Number of recorded tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are recorded.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Recorded token kinds in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|(kind, _)| *kind)
    }

    /// Move back before the first token.
    pub fn rewind(&mut self) {
        self.cursor = None;
    }
}

impl FromIterator<(TokenKind, Option<String>)> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = (TokenKind, Option<String>)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
            cursor: None,
        }
    }
}

impl TokenSource for TokenBuffer {
    fn current_token(&self) -> Option<TokenKind> {
        let index = self.cursor?;
        Some(
            self.tokens
                .get(index)
                .map_or(TokenKind::EndOfInput, |(kind, _)| *kind),
        )
    }

    fn advance(&mut self) -> ParseResult<TokenKind> {
        let next = match self.cursor {
            None => 0,
            Some(index) => (index + 1).min(self.tokens.len()),
        };
        self.cursor = Some(next);
        Ok(self
            .tokens
            .get(next)
            .map_or(TokenKind::EndOfInput, |(kind, _)| *kind))
    }

    fn current_text(&self) -> Option<&str> {
        let (kind, text) = self.tokens.get(self.cursor?)?;
        match text {
            Some(text) => Some(text),
            None => kind.lexeme(),
        }
    }

    fn position(&self) -> Position {
        let index = self.cursor.unwrap_or(0);
        Position {
            offset: index,
            line: 1,
            column: index + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::ArrayStart.to_string(), "START_ARRAY");
        assert_eq!(TokenKind::IntegerNumber.to_string(), "VALUE_NUMBER_INT");
        assert_eq!(TokenKind::EmbeddedObject.to_string(), "VALUE_EMBEDDED_OBJECT");
    }

    #[test]
    fn test_buffer_replay() {
        let mut buffer = TokenBuffer::new();
        buffer
            .push(TokenKind::ArrayStart)
            .push_text(TokenKind::IntegerNumber, "7")
            .push(TokenKind::ArrayEnd);

        assert_eq!(buffer.current_token(), None);
        assert_eq!(buffer.advance().unwrap(), TokenKind::ArrayStart);
        assert_eq!(buffer.current_text(), Some("["));
        assert_eq!(buffer.advance().unwrap(), TokenKind::IntegerNumber);
        assert_eq!(buffer.current_text(), Some("7"));
        assert_eq!(buffer.position().column, 2);
        assert_eq!(buffer.advance().unwrap(), TokenKind::ArrayEnd);
        assert_eq!(buffer.advance().unwrap(), TokenKind::EndOfInput);
        assert_eq!(buffer.advance().unwrap(), TokenKind::EndOfInput);
        assert_eq!(buffer.current_token(), Some(TokenKind::EndOfInput));
        assert_eq!(buffer.current_text(), None);
    }

    #[test]
    fn test_buffer_rewind() {
        let mut buffer: TokenBuffer = [(TokenKind::True, None)].into_iter().collect();
        assert_eq!(buffer.advance().unwrap(), TokenKind::True);
        assert_eq!(buffer.advance().unwrap(), TokenKind::EndOfInput);
        buffer.rewind();
        assert_eq!(buffer.current_token(), None);
        assert_eq!(buffer.advance().unwrap(), TokenKind::True);
    }

    #[test]
    fn test_embedded_object_has_no_text() {
        let mut buffer = TokenBuffer::new();
        buffer.push(TokenKind::EmbeddedObject);
        buffer.advance().unwrap();
        assert_eq!(buffer.current_text(), None);
    }
}
