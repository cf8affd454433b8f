//! JSON lexer/tokenizer.
//!
//! Converts raw JSON text into the semantic token stream consumed by the
//! parser. The lexer owns the punctuation-level grammar: it consumes `:` and
//! `,`, reports object keys as [`TokenKind::FieldName`], and rejects
//! misplaced separators. Everything about values (what may appear where a
//! value is expected) is left to the parser.
//!
//! Strings are unescaped and validated (no raw control characters, no unpaired
//! surrogates); numbers are checked against the RFC 8259 grammar and handed
//! over as raw text.

use super::limits::Limits;
use super::token::{Position, TokenKind, TokenSource};
use crate::error::{LexicalErrorKind, ParseError, ParseResult};

/// Open container on the lexer's context stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Array,
    Object,
}

/// What the lexer expects before the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// A value: document start, after `:`.
    Value,
    /// Just after `[`: a value or `]`.
    ArrayFirst,
    /// Just after `{`: a key or `}`.
    ObjectFirst,
    /// After a key: `:` then a value.
    AfterField,
    /// After a value inside a container: `,` or the closing bracket.
    AfterValue,
    /// Root value complete: only whitespace may follow.
    Done,
}

/// Scan a JSON number at the start of `bytes`.
///
/// Returns the length of the literal and whether it has a fraction or
/// exponent, or `None` if the bytes do not start with a valid number.
pub(crate) fn scan_number(bytes: &[u8]) -> Option<(usize, bool)> {
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    let mut is_float = false;

    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    // Integer part: a single zero, or a non-zero digit followed by digits
    match bytes.get(pos) {
        Some(b'0') => {
            pos += 1;
            if matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                return None;
            }
        }
        Some(b'1'..=b'9') => pos += digits(pos),
        _ => return None,
    }

    // Fractional part
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let count = digits(pos);
        if count == 0 {
            return None;
        }
        pos += count;
        is_float = true;
    }

    // Exponent
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let count = digits(pos);
        if count == 0 {
            return None;
        }
        pos += count;
        is_float = true;
    }

    Some((pos, is_float))
}

/// Returns true if `text` is exactly one JSON number literal.
pub fn is_valid_number(text: &str) -> bool {
    scan_number(text.as_bytes()).is_some_and(|(len, _)| len == text.len())
}

/// JSON lexer over a UTF-8 document.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    limits: Limits,
    stack: Vec<Frame>,
    state: State,
    current: Option<TokenKind>,
    token_start: Position,
    text: String,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    ///
    /// Fails if the input exceeds `limits.max_input_size` or is not UTF-8.
    pub fn new(input: &'a [u8], limits: Limits) -> ParseResult<Self> {
        check_input_size(input.len(), &limits)?;

        let text = std::str::from_utf8(input).map_err(|e| {
            let offset = e.valid_up_to();
            ParseError::Lexical {
                kind: LexicalErrorKind::InvalidUtf8,
                position: position_of(&input[..offset]),
            }
        })?;

        Ok(Self::with_text(text, limits))
    }

    /// Create a lexer over text that is already known to be UTF-8.
    pub fn from_text(input: &'a str, limits: Limits) -> ParseResult<Self> {
        check_input_size(input.len(), &limits)?;
        Ok(Self::with_text(input, limits))
    }

    fn with_text(input: &'a str, limits: Limits) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            line_start: 0,
            limits,
            stack: Vec::new(),
            state: State::Value,
            current: None,
            token_start: Position::start(),
            text: String::new(),
        }
    }

    fn here(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.pos - self.line_start + 1,
        }
    }

    fn error(&self, kind: LexicalErrorKind) -> ParseError {
        ParseError::Lexical {
            kind,
            position: self.here(),
        }
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Character at the current position, for diagnostics.
    fn peek_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\0')
    }

    /// Skip whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' => {
                    self.pos += 1;
                    self.line += 1;
                    self.line_start = self.pos;
                }
                _ => break,
            }
        }
    }

    /// Skip whitespace and mark the start of the next token.
    fn start_token(&mut self) {
        self.skip_whitespace();
        self.token_start = self.here();
    }

    /// Read the next token from the input.
    pub fn next_token(&mut self) -> ParseResult<TokenKind> {
        self.text.clear();
        self.start_token();

        if self.peek().is_none() {
            return Ok(TokenKind::EndOfInput);
        }

        match self.state {
            State::Done => Err(ParseError::TrailingContent {
                position: self.token_start,
            }),
            State::Value => self.read_value(),
            State::ArrayFirst => match self.peek() {
                Some(b']') => self.close(Frame::Array),
                _ => self.read_value(),
            },
            State::ObjectFirst => match self.peek() {
                Some(b'}') => self.close(Frame::Object),
                _ => self.read_field_name(),
            },
            State::AfterField => {
                if self.peek() != Some(b':') {
                    return Err(self.error(LexicalErrorKind::ExpectedColon));
                }
                self.bump();
                self.start_token();
                if self.peek().is_none() {
                    return Ok(TokenKind::EndOfInput);
                }
                self.read_value()
            }
            State::AfterValue => self.read_separator(),
        }
    }

    /// Handle what follows a value inside a container.
    fn read_separator(&mut self) -> ParseResult<TokenKind> {
        let frame = match self.stack.last() {
            Some(frame) => *frame,
            None => return Err(self.error(LexicalErrorKind::ExpectedCommaOrClose)),
        };

        match (self.peek(), frame) {
            (Some(b','), _) => {
                self.bump();
                self.start_token();
                match (self.peek(), frame) {
                    (None, _) => Ok(TokenKind::EndOfInput),
                    (Some(b']'), Frame::Array) | (Some(b'}'), Frame::Object) => {
                        Err(self.error(LexicalErrorKind::TrailingComma))
                    }
                    (_, Frame::Array) => self.read_value(),
                    (_, Frame::Object) => self.read_field_name(),
                }
            }
            (Some(b']'), Frame::Array) => self.close(Frame::Array),
            (Some(b'}'), Frame::Object) => self.close(Frame::Object),
            _ => Err(self.error(LexicalErrorKind::ExpectedCommaOrClose)),
        }
    }

    /// Read a token in value position.
    fn read_value(&mut self) -> ParseResult<TokenKind> {
        match self.peek() {
            Some(b'{') => {
                self.bump();
                self.stack.push(Frame::Object);
                self.state = State::ObjectFirst;
                Ok(TokenKind::ObjectStart)
            }
            Some(b'[') => {
                self.bump();
                self.stack.push(Frame::Array);
                self.state = State::ArrayFirst;
                Ok(TokenKind::ArrayStart)
            }
            // A closing bracket where a value belongs is a valid token for
            // the innermost container; the parser decides it is misplaced.
            Some(b'}') if self.stack.last() == Some(&Frame::Object) => self.close(Frame::Object),
            Some(b']') if self.stack.last() == Some(&Frame::Array) => self.close(Frame::Array),
            Some(b'"') => {
                self.read_string()?;
                Ok(self.finish_value(TokenKind::String))
            }
            Some(b'-' | b'0'..=b'9') => {
                let kind = self.read_number()?;
                Ok(self.finish_value(kind))
            }
            Some(b't') => self.read_literal(b"true", TokenKind::True),
            Some(b'f') => self.read_literal(b"false", TokenKind::False),
            Some(b'n') => self.read_literal(b"null", TokenKind::Null),
            Some(_) => Err(self.error(LexicalErrorKind::UnexpectedCharacter(self.peek_char()))),
            None => Ok(TokenKind::EndOfInput),
        }
    }

    /// Read an object key.
    fn read_field_name(&mut self) -> ParseResult<TokenKind> {
        if self.peek() != Some(b'"') {
            return Err(self.error(LexicalErrorKind::ExpectedFieldName));
        }
        self.read_string()?;
        self.state = State::AfterField;
        Ok(TokenKind::FieldName)
    }

    /// Consume a closing bracket and pop its frame.
    fn close(&mut self, frame: Frame) -> ParseResult<TokenKind> {
        self.bump();
        self.stack.pop();
        Ok(self.finish_value(match frame {
            Frame::Array => TokenKind::ArrayEnd,
            Frame::Object => TokenKind::ObjectEnd,
        }))
    }

    /// Record that a complete value was read.
    fn finish_value(&mut self, kind: TokenKind) -> TokenKind {
        self.state = if self.stack.is_empty() {
            State::Done
        } else {
            State::AfterValue
        };
        kind
    }

    /// Read a string token into `self.text`, handling escape sequences.
    fn read_string(&mut self) -> ParseResult<()> {
        // Consume opening quote
        self.bump();

        loop {
            match self.peek() {
                None => return Err(self.error(LexicalErrorKind::UnterminatedString)),
                Some(b'"') => {
                    self.bump();
                    return Ok(());
                }
                Some(b'\\') => {
                    self.bump();
                    let escaped = self.read_escape_sequence()?;
                    self.push_char(escaped)?;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.error(LexicalErrorKind::ControlCharacter(u32::from(b))));
                }
                Some(b) if b <= 0x7F => {
                    self.bump();
                    self.push_char(char::from(b))?;
                }
                Some(_) => {
                    // Multi-byte UTF-8 sequence; the input was validated up front
                    let ch = self.peek_char();
                    if self.limits.ascii_only {
                        return Err(self.error(LexicalErrorKind::NonAscii(u32::from(ch))));
                    }
                    self.pos += ch.len_utf8();
                    self.push_char(ch)?;
                }
            }
        }
    }

    /// Append a decoded character, enforcing the string length limit.
    fn push_char(&mut self, ch: char) -> ParseResult<()> {
        self.text.push(ch);
        if self.text.len() as u64 > self.limits.max_string_length {
            return Err(ParseError::StringTooLong {
                length: self.text.len() as u64,
                limit: self.limits.max_string_length,
                position: self.token_start,
            });
        }
        Ok(())
    }

    /// Read an escape sequence after a backslash.
    fn read_escape_sequence(&mut self) -> ParseResult<char> {
        match self.bump() {
            None => Err(self.error(LexicalErrorKind::UnterminatedString)),
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\x08'),
            Some(b'f') => Ok('\x0C'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => self.read_unicode_escape(),
            Some(_) => Err(self.error(LexicalErrorKind::InvalidEscape)),
        }
    }

    /// Read a \uXXXX unicode escape sequence, combining surrogate pairs.
    fn read_unicode_escape(&mut self) -> ParseResult<char> {
        let codepoint = u32::from(self.read_hex4()?);

        let codepoint = if (0xD800..=0xDBFF).contains(&codepoint) {
            // A high surrogate must be followed by an escaped low surrogate
            if self.peek() != Some(b'\\') || self.input.as_bytes().get(self.pos + 1) != Some(&b'u')
            {
                return Err(self.error(LexicalErrorKind::UnpairedSurrogate));
            }
            self.pos += 2;
            let low = u32::from(self.read_hex4()?);
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(self.error(LexicalErrorKind::UnpairedSurrogate));
            }
            0x10000 + ((codepoint - 0xD800) << 10) + (low - 0xDC00)
        } else if (0xDC00..=0xDFFF).contains(&codepoint) {
            return Err(self.error(LexicalErrorKind::UnpairedSurrogate));
        } else {
            codepoint
        };

        if self.limits.ascii_only && codepoint > 0x7F {
            return Err(self.error(LexicalErrorKind::NonAscii(codepoint)));
        }

        char::from_u32(codepoint).ok_or_else(|| self.error(LexicalErrorKind::InvalidEscape))
    }

    /// Read 4 hex digits and return the value.
    fn read_hex4(&mut self) -> ParseResult<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let digit = match self.peek() {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                None => return Err(self.error(LexicalErrorKind::UnterminatedString)),
                Some(_) => return Err(self.error(LexicalErrorKind::InvalidEscape)),
            };
            self.bump();
            value = (value << 4) | u16::from(digit);
        }
        Ok(value)
    }

    /// Read a number token, keeping its raw text.
    fn read_number(&mut self) -> ParseResult<TokenKind> {
        let (len, is_float) = scan_number(&self.input.as_bytes()[self.pos..])
            .ok_or_else(|| self.error(LexicalErrorKind::InvalidNumber))?;

        self.text.push_str(&self.input[self.pos..self.pos + len]);
        self.pos += len;

        Ok(if is_float {
            TokenKind::FloatNumber
        } else {
            TokenKind::IntegerNumber
        })
    }

    /// Read a `true`, `false` or `null` literal.
    fn read_literal(&mut self, expected: &[u8], kind: TokenKind) -> ParseResult<TokenKind> {
        for &b in expected {
            if self.peek() != Some(b) {
                return Err(self.error(LexicalErrorKind::InvalidLiteral));
            }
            self.bump();
        }
        Ok(self.finish_value(kind))
    }
}

impl TokenSource for Lexer<'_> {
    fn current_token(&self) -> Option<TokenKind> {
        self.current
    }

    fn advance(&mut self) -> ParseResult<TokenKind> {
        let kind = self.next_token()?;
        self.current = Some(kind);
        Ok(kind)
    }

    fn current_text(&self) -> Option<&str> {
        let kind = self.current?;
        if kind.has_text() {
            Some(&self.text)
        } else {
            kind.lexeme()
        }
    }

    fn position(&self) -> Position {
        self.token_start
    }
}

fn check_input_size(size: usize, limits: &Limits) -> ParseResult<()> {
    if size as u64 > limits.max_input_size {
        return Err(ParseError::InputTooLarge {
            size: size as u64,
            limit: limits.max_input_size,
        });
    }
    Ok(())
}

/// Position just past `prefix`.
fn position_of(prefix: &[u8]) -> Position {
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    Position {
        offset: prefix.len(),
        line: 1 + prefix.iter().filter(|&&b| b == b'\n').count(),
        column: prefix.len() - line_start + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> ParseResult<Vec<(TokenKind, Option<String>)>> {
        let mut lexer = Lexer::new(input.as_bytes(), Limits::lenient())?;
        let mut tokens = Vec::new();
        loop {
            let token = lexer.advance()?;
            if token == TokenKind::EndOfInput {
                break;
            }
            let text = if token.has_text() {
                lexer.current_text().map(str::to_owned)
            } else {
                None
            };
            tokens.push((token, text));
        }
        Ok(tokens)
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).unwrap().into_iter().map(|(kind, _)| kind).collect()
    }

    fn lex_error(input: &str) -> LexicalErrorKind {
        match lex(input) {
            Err(ParseError::Lexical { kind, .. }) => kind,
            other => panic!("expected lexical error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(
            kinds(r#"{"a": [], "b": {}}"#),
            vec![
                TokenKind::ObjectStart,
                TokenKind::FieldName,
                TokenKind::ArrayStart,
                TokenKind::ArrayEnd,
                TokenKind::FieldName,
                TokenKind::ObjectStart,
                TokenKind::ObjectEnd,
                TokenKind::ObjectEnd,
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            kinds("[null, true, false]"),
            vec![
                TokenKind::ArrayStart,
                TokenKind::Null,
                TokenKind::True,
                TokenKind::False,
                TokenKind::ArrayEnd,
            ]
        );
    }

    #[test]
    fn test_field_name_text() {
        let tokens = lex(r#"{"key":"value"}"#).unwrap();
        assert_eq!(tokens[1], (TokenKind::FieldName, Some("key".to_string())));
        assert_eq!(tokens[2], (TokenKind::String, Some("value".to_string())));
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex(r#""a\nb\tc\/\"""#).unwrap();
        assert_eq!(tokens, vec![(TokenKind::String, Some("a\nb\tc/\"".to_string()))]);
    }

    #[test]
    fn test_unicode_escape() {
        let tokens = lex(r#""\u0041\u00e9\uD83D\uDE00""#).unwrap();
        assert_eq!(tokens, vec![(TokenKind::String, Some("Aé😀".to_string()))]);
    }

    #[test]
    fn test_number_kinds() {
        let tokens = lex("[42, -123, 0, 1.5, -2e10, 3E+2, 0.0]").unwrap();
        let numbers: Vec<_> = tokens
            .into_iter()
            .filter(|(kind, _)| kind.is_number())
            .collect();
        assert_eq!(
            numbers,
            vec![
                (TokenKind::IntegerNumber, Some("42".to_string())),
                (TokenKind::IntegerNumber, Some("-123".to_string())),
                (TokenKind::IntegerNumber, Some("0".to_string())),
                (TokenKind::FloatNumber, Some("1.5".to_string())),
                (TokenKind::FloatNumber, Some("-2e10".to_string())),
                (TokenKind::FloatNumber, Some("3E+2".to_string())),
                (TokenKind::FloatNumber, Some("0.0".to_string())),
            ]
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(lex_error("01"), LexicalErrorKind::InvalidNumber);
        assert_eq!(lex_error("-"), LexicalErrorKind::InvalidNumber);
        assert_eq!(lex_error("1."), LexicalErrorKind::InvalidNumber);
        assert_eq!(lex_error("1e"), LexicalErrorKind::InvalidNumber);
        assert_eq!(lex_error("-x"), LexicalErrorKind::InvalidNumber);
    }

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number("0"));
        assert!(is_valid_number("-1.25e-3"));
        assert!(!is_valid_number("+1"));
        assert!(!is_valid_number("1 "));
        assert!(!is_valid_number("NaN"));
        assert!(!is_valid_number(""));
    }

    #[test]
    fn test_separator_errors() {
        assert_eq!(lex_error("[1,]"), LexicalErrorKind::TrailingComma);
        assert_eq!(lex_error(r#"{"a":1,}"#), LexicalErrorKind::TrailingComma);
        assert_eq!(lex_error("[1 2]"), LexicalErrorKind::ExpectedCommaOrClose);
        assert_eq!(lex_error(r#"{"a" 1}"#), LexicalErrorKind::ExpectedColon);
        assert_eq!(lex_error("{1:2}"), LexicalErrorKind::ExpectedFieldName);
        assert_eq!(lex_error("[}"), LexicalErrorKind::UnexpectedCharacter('}'));
    }

    #[test]
    fn test_string_errors() {
        assert_eq!(lex_error(r#""abc"#), LexicalErrorKind::UnterminatedString);
        assert_eq!(lex_error(r#""\x""#), LexicalErrorKind::InvalidEscape);
        assert_eq!(lex_error(r#""\u12G4""#), LexicalErrorKind::InvalidEscape);
        assert_eq!(lex_error(r#""\uD800""#), LexicalErrorKind::UnpairedSurrogate);
        assert_eq!(lex_error(r#""\uDC00""#), LexicalErrorKind::UnpairedSurrogate);
        assert_eq!(lex_error(r#""\uD800A""#), LexicalErrorKind::UnpairedSurrogate);
        assert_eq!(lex_error("\"a\nb\""), LexicalErrorKind::ControlCharacter(0x0A));
    }

    #[test]
    fn test_invalid_literal() {
        assert_eq!(lex_error("nul"), LexicalErrorKind::InvalidLiteral);
        assert_eq!(lex_error("trve"), LexicalErrorKind::InvalidLiteral);
        assert_eq!(lex_error("@"), LexicalErrorKind::UnexpectedCharacter('@'));
    }

    #[test]
    fn test_close_in_value_position() {
        // `{"a":}` yields the closing token; rejecting it is the parser's job
        assert_eq!(
            kinds(r#"{"a":}"#),
            vec![
                TokenKind::ObjectStart,
                TokenKind::FieldName,
                TokenKind::ObjectEnd,
            ]
        );
    }

    #[test]
    fn test_end_of_input_mid_document() {
        assert_eq!(kinds("{"), vec![TokenKind::ObjectStart]);
        assert_eq!(kinds("[1,"), vec![TokenKind::ArrayStart, TokenKind::IntegerNumber]);
        assert_eq!(kinds(r#"{"a":"#), vec![TokenKind::ObjectStart, TokenKind::FieldName]);
        assert!(kinds("").is_empty());
        assert!(kinds("  \n ").is_empty());
    }

    #[test]
    fn test_trailing_content() {
        let result = lex("null extra");
        assert!(matches!(
            result,
            Err(ParseError::TrailingContent { position }) if position.column == 6
        ));
    }

    #[test]
    fn test_positions() {
        let mut lexer = Lexer::new(b"[\n  1,\n  \"x\"]", Limits::lenient()).unwrap();
        lexer.advance().unwrap();
        assert_eq!(lexer.position(), Position::start());
        lexer.advance().unwrap();
        assert_eq!(
            lexer.position(),
            Position {
                offset: 4,
                line: 2,
                column: 3
            }
        );
        lexer.advance().unwrap();
        assert_eq!(lexer.position().line, 3);
        assert_eq!(lexer.position().column, 3);
    }

    #[test]
    fn test_ascii_only() {
        let mut lexer = Lexer::new("\"é\"".as_bytes(), Limits::strict()).unwrap();
        assert!(matches!(
            lexer.advance(),
            Err(ParseError::Lexical {
                kind: LexicalErrorKind::NonAscii(0xE9),
                ..
            })
        ));

        let mut lexer = Lexer::new(br#""\u00e9""#, Limits::strict()).unwrap();
        assert!(matches!(
            lexer.advance(),
            Err(ParseError::Lexical {
                kind: LexicalErrorKind::NonAscii(0xE9),
                ..
            })
        ));
    }

    #[test]
    fn test_string_too_long() {
        let mut limits = Limits::lenient();
        limits.max_string_length = 3;
        let mut lexer = Lexer::new(br#""abcd""#, limits).unwrap();
        let err = lexer.advance().unwrap_err();
        assert_eq!(err.code(), 112);
    }

    #[test]
    fn test_invalid_utf8() {
        let invalid = vec![b'"', 0xFF, 0xFE, b'"'];
        let err = Lexer::new(&invalid, Limits::lenient()).err().unwrap();
        assert_eq!(
            err,
            ParseError::Lexical {
                kind: LexicalErrorKind::InvalidUtf8,
                position: Position {
                    offset: 1,
                    line: 1,
                    column: 2
                },
            }
        );
    }

    #[test]
    fn test_input_too_large() {
        let mut limits = Limits::strict();
        limits.max_input_size = 10;
        let result = Lexer::new(b"this is more than 10 bytes", limits);
        assert!(matches!(
            result,
            Err(ParseError::InputTooLarge { size: 26, limit: 10 })
        ));
    }
}
