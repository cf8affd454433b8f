//! Recursive descent parser over a token source.
//!
//! The parser pulls tokens from a [`TokenSource`] and dispatches on the
//! current token:
//!
//! | Token | Action |
//! |-------|--------|
//! | `START_ARRAY` | parse elements until `END_ARRAY`, then `builder.array` |
//! | `START_OBJECT` | parse `FIELD_NAME` + value pairs until `END_OBJECT`, then `builder.object` |
//! | `VALUE_STRING` | `builder.string` |
//! | `VALUE_NUMBER_INT`, `VALUE_NUMBER_FLOAT` | widen to `f64`, then `builder.number` |
//! | `VALUE_TRUE`, `VALUE_FALSE`, `VALUE_NULL` | `builder.boolean` / `builder.null` |
//! | anything else | [`ParseError::UnexpectedToken`] |
//!
//! Each nested container is one level of recursion; the depth is capped by
//! [`Limits::max_nesting_depth`], and never more than
//! [`MAX_SUPPORTED_DEPTH`](super::limits::MAX_SUPPORTED_DEPTH), so hostile
//! input fails with [`ParseError::DepthExceeded`] instead of exhausting the
//! stack.
//!
//! All numbers become `f64`. Integers beyond ±2^53 are rounded to the nearest
//! representable value; literals too large for a finite `f64` are rejected.

use tracing::{debug, trace};

use super::builder::{TreeBuilder, ValueBuilder};
use super::lexer::{is_valid_number, Lexer};
use super::limits::Limits;
use super::token::{TokenKind, TokenSource};
use super::types::JsonValue;
use crate::error::{ParseError, ParseResult};

/// JSON parser over a borrowed token source.
pub struct Parser<'s, S: ?Sized, B> {
    source: &'s mut S,
    builder: B,
    limits: Limits,
    depth: u64,
}

impl<'s, S, B> Parser<'s, S, B>
where
    S: TokenSource + ?Sized,
    B: ValueBuilder,
{
    /// Create a parser reading from `source` and building with `builder`.
    pub fn new(source: &'s mut S, builder: B, limits: Limits) -> Self {
        Self {
            source,
            builder,
            limits,
            depth: 0,
        }
    }

    /// Parse one complete value.
    ///
    /// Starts at the source's current token, advancing once first if the
    /// source has not produced any token yet. On success the source is left
    /// on the value's last token (the scalar itself or the closing bracket).
    pub fn parse_value(&mut self) -> ParseResult<B::Value> {
        // A failed parse leaves `depth` wherever the error surfaced
        self.depth = 0;
        let kind = match self.source.current_token() {
            Some(kind) => kind,
            None => self.source.advance()?,
        };
        self.dispatch(kind)
    }

    /// Parse one value and require that the source is exhausted afterwards.
    pub fn parse_document(&mut self) -> ParseResult<B::Value> {
        let value = self.parse_value()?;

        // Ensure no trailing content
        match self.source.advance()? {
            TokenKind::EndOfInput => Ok(value),
            _ => Err(ParseError::TrailingContent {
                position: self.source.position(),
            }),
        }
    }

    /// Give back the builder.
    pub fn into_builder(self) -> B {
        self.builder
    }

    /// Build the value that starts with the token `kind`.
    fn dispatch(&mut self, kind: TokenKind) -> ParseResult<B::Value> {
        match kind {
            TokenKind::ArrayStart => self.parse_array(),
            TokenKind::ObjectStart => self.parse_object(),
            TokenKind::String => {
                let text = self.token_text(kind)?;
                Ok(self.builder.string(text))
            }
            TokenKind::IntegerNumber | TokenKind::FloatNumber => {
                let number = self.parse_number(kind)?;
                Ok(self.builder.number(number))
            }
            TokenKind::True => Ok(self.builder.boolean(true)),
            TokenKind::False => Ok(self.builder.boolean(false)),
            TokenKind::Null => Ok(self.builder.null()),
            TokenKind::EmbeddedObject => Err(self.unexpected(kind, "unexpected embedded object")),
            TokenKind::ObjectEnd => Err(self.unexpected(kind, "unexpected end of object")),
            TokenKind::FieldName => Err(self.unexpected(kind, "unexpected field name")),
            TokenKind::ArrayEnd => Err(self.unexpected(kind, "unexpected end of array")),
            TokenKind::NotAvailable | TokenKind::EndOfInput => {
                Err(self.unexpected(kind, "unexpected end of token"))
            }
        }
    }

    fn unexpected(&self, token: TokenKind, context: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken {
            token,
            context: context.into(),
            position: self.source.position(),
        }
    }

    /// Owned text of the current token.
    fn token_text(&self, kind: TokenKind) -> ParseResult<String> {
        self.source
            .current_text()
            .map(str::to_owned)
            .ok_or_else(|| self.unexpected(kind, format!("unexpected token {kind} without text")))
    }

    /// Parse the current number token as an `f64`.
    fn parse_number(&self, kind: TokenKind) -> ParseResult<f64> {
        let text = self.token_text(kind)?;
        let position = self.source.position();

        // Sources other than the lexer may hand over arbitrary text
        if !is_valid_number(&text) {
            return Err(ParseError::InvalidNumber { text, position });
        }

        let value: f64 = match text.parse() {
            Ok(value) => value,
            Err(_) => return Err(ParseError::InvalidNumber { text, position }),
        };

        if !value.is_finite() {
            return Err(ParseError::NumberOutOfRange { text, position });
        }

        Ok(value)
    }

    /// Enter a container, checking the nesting depth.
    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        let limit = self.limits.effective_depth();
        if self.depth > limit {
            return Err(ParseError::DepthExceeded {
                depth: self.depth,
                limit,
                position: self.source.position(),
            });
        }
        Ok(())
    }

    /// Parse a JSON array; the current token is `START_ARRAY`.
    fn parse_array(&mut self) -> ParseResult<B::Value> {
        self.enter()?;
        trace!(depth = self.depth, "array start");

        let mut elements = Vec::new();

        loop {
            let kind = self.source.advance()?;
            if kind == TokenKind::ArrayEnd {
                break;
            }

            let position = self.source.position();
            elements.push(self.dispatch(kind)?);

            // Check array length limit
            if elements.len() as u64 > self.limits.max_array_length {
                return Err(ParseError::ArrayTooLong {
                    length: elements.len() as u64,
                    limit: self.limits.max_array_length,
                    position,
                });
            }
        }

        trace!(depth = self.depth, len = elements.len(), "array end");
        self.depth -= 1;
        Ok(self.builder.array(elements))
    }

    /// Parse a JSON object; the current token is `START_OBJECT`.
    fn parse_object(&mut self) -> ParseResult<B::Value> {
        self.enter()?;
        trace!(depth = self.depth, "object start");

        let mut entries = Vec::new();
        let mut field_count: u64 = 0;

        loop {
            // Expect a key or the end of the object
            let kind = self.source.advance()?;
            match kind {
                TokenKind::ObjectEnd => break,
                TokenKind::FieldName => {}
                TokenKind::NotAvailable | TokenKind::EndOfInput => {
                    return Err(self.unexpected(kind, "unexpected end of token"));
                }
                other => return Err(self.unexpected(other, format!("unexpected token {other}"))),
            }

            let key = self.token_text(kind)?;

            // Check field count limit
            field_count += 1;
            if field_count > self.limits.max_object_fields {
                return Err(ParseError::TooManyFields {
                    count: field_count,
                    limit: self.limits.max_object_fields,
                    position: self.source.position(),
                });
            }

            let kind = self.source.advance()?;
            let value = self.dispatch(kind)?;
            entries.push((key, value));
        }

        trace!(depth = self.depth, fields = entries.len(), "object end");
        self.depth -= 1;
        Ok(self.builder.object(entries))
    }
}

/// Parse a JSON document into a [`JsonValue`] with default (lenient) limits.
pub fn parse(input: &[u8]) -> ParseResult<JsonValue> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON document held in a string.
pub fn parse_str(input: &str) -> ParseResult<JsonValue> {
    parse_with_limits(input.as_bytes(), Limits::default())
}

/// Parse a JSON document into a [`JsonValue`] with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> ParseResult<JsonValue> {
    debug!(
        input_len = input.len(),
        max_depth = limits.effective_depth(),
        "parsing JSON document"
    );

    let result = Lexer::new(input, limits)
        .and_then(|mut lexer| Parser::new(&mut lexer, TreeBuilder, limits).parse_document());

    match &result {
        Ok(value) => debug!(root = value.type_name(), "parsed JSON document"),
        Err(e) => debug!(code = e.code(), error = %e, "failed to parse JSON document"),
    }
    result
}

/// Parse one value from a token source into a [`JsonValue`].
///
/// See [`Parser::parse_value`] for how the source is positioned before and
/// after the call.
pub fn parse_value<S: TokenSource + ?Sized>(source: &mut S) -> ParseResult<JsonValue> {
    parse_value_with(source, TreeBuilder, Limits::default())
}

/// Parse one value from a token source with a custom builder and limits.
pub fn parse_value_with<S, B>(source: &mut S, builder: B, limits: Limits) -> ParseResult<B::Value>
where
    S: TokenSource + ?Sized,
    B: ValueBuilder,
{
    Parser::new(source, builder, limits).parse_value()
}
