//! Expression tokenizer implementation.

use super::{Span, Token, TokenKind};

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A lexer that tokenizes expression input on demand.
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the full input text.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Moves the scan position back to `pos`, which must be a char boundary
    /// at or before the current position.
    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos && self.input.is_char_boundary(pos));
        self.pos = pos;
        self.start = pos;
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    /// Scans a bare word. Keyword recognition is left to the parser.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Identifier(String::from(text)))
    }

    /// Scans the body of a quoted string or identifier, starting at the
    /// opening quote. A quote is escaped by doubling it or with a backslash.
    ///
    /// Returns `None` when the closing quote is missing.
    fn scan_quoted(&mut self, quote: char) -> Option<String> {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.advance()? {
                c if c == quote => {
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        return Some(value);
                    }
                }
                '\\' => match self.advance()? {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '0' => value.push('\0'),
                    other => value.push(other),
                },
                c => value.push(c),
            }
        }
    }

    /// Scans a string literal ('...' or "...").
    fn scan_string(&mut self, quote: char) -> Token {
        match self.scan_quoted(quote) {
            Some(value) => self.make_token(TokenKind::String(value)),
            None => self.error("Unterminated string literal"),
        }
    }

    /// Scans a backtick-quoted identifier.
    fn scan_quoted_identifier(&mut self) -> Token {
        match self.scan_quoted('`') {
            Some(name) => self.make_token(TokenKind::QuotedIdentifier(name)),
            None => self.error("Unterminated quoted identifier"),
        }
    }

    /// Scans a number (integer or float).
    fn scan_number(&mut self) -> Token {
        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Check for decimal point
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Check for exponent
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_float = true;
            self.advance(); // consume e/E
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return self.malformed_number();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == '.' || is_identifier_continue(c)) {
            return self.malformed_number();
        }

        let text = &self.input[self.start..self.pos];

        if is_float {
            match text.parse::<f64>() {
                Ok(f) if f.is_finite() => self.make_token(TokenKind::Float(f)),
                _ => self.error(format!("Numeric literal out of range: {text}")),
            }
        } else {
            match text.parse::<u64>() {
                Ok(n) => self.make_token(TokenKind::Integer(n)),
                Err(_) => self.error(format!("Integer literal out of range: {text}")),
            }
        }
    }

    /// Consumes the rest of a broken numeric literal and reports it.
    fn malformed_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c == '.' || is_identifier_continue(c)) {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        self.error(format!("Malformed numeric literal: {text}"))
    }

    /// Scans a blob literal (X'...' or x'...').
    fn scan_blob(&mut self) -> Token {
        self.advance(); // consume X/x
        self.advance(); // consume opening quote

        let mut bytes = Vec::new();
        let mut high: Option<u8> = None;

        loop {
            match self.peek() {
                Some('\'') => break,
                Some(c) if c.is_ascii_hexdigit() => {
                    self.advance();
                    // to_digit(16) is always Some for a hex digit
                    let nibble = c.to_digit(16).map_or(0, |d| d as u8);
                    match high.take() {
                        Some(h) => bytes.push((h << 4) | nibble),
                        None => high = Some(nibble),
                    }
                }
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                    return self.error("Invalid character in blob literal");
                }
                None => return self.error("Unterminated blob literal"),
            }
        }

        self.advance(); // consume closing quote
        if high.is_some() {
            return self.error("Odd number of hex digits in blob literal");
        }
        self.make_token(TokenKind::Blob(bytes))
    }

    /// Scans what follows a `:`: a numbered or named placeholder, or a bare
    /// colon.
    fn scan_colon(&mut self) -> Token {
        let from = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_digit() => {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
                let key = String::from(&self.input[from..self.pos]);
                self.make_token(TokenKind::NumberedParam(key))
            }
            Some(c) if is_identifier_start(c) => {
                while self.peek().is_some_and(is_identifier_continue) {
                    self.advance();
                }
                let key = String::from(&self.input[from..self.pos]);
                self.make_token(TokenKind::NamedParam(key))
            }
            _ => self.make_token(TokenKind::Colon),
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            // Single-character tokens
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '^' => self.make_token(TokenKind::Caret),
            '~' => self.make_token(TokenKind::BitNot),
            '?' => self.make_token(TokenKind::Question),
            '@' => self.make_token(TokenKind::At),

            // Potentially multi-character tokens
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.pos = self.start;
                self.scan_number()
            }
            '.' => self.make_token(TokenKind::Dot),
            ':' => self.scan_colon(),
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    self.make_token(TokenKind::DoubleStar)
                } else {
                    self.make_token(TokenKind::Star)
                }
            }
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                }
                self.make_token(TokenKind::Eq)
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                } else if self.peek() == Some('>') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else if self.peek() == Some('<') {
                    self.advance();
                    self.make_token(TokenKind::LeftShift)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else if self.peek() == Some('>') {
                    self.advance();
                    self.make_token(TokenKind::RightShift)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Bang)
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    self.make_token(TokenKind::LogicalOr)
                } else {
                    self.make_token(TokenKind::BitOr)
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    self.make_token(TokenKind::LogicalAnd)
                } else {
                    self.make_token(TokenKind::BitAnd)
                }
            }

            // String literals
            '\'' | '"' => {
                self.pos = self.start; // Reset position to scan from quote
                self.scan_string(c)
            }

            // Quoted identifiers
            '`' => {
                self.pos = self.start;
                self.scan_quoted_identifier()
            }

            // Blob literals
            'X' | 'x' if self.peek() == Some('\'') => {
                self.pos = self.start;
                self.scan_blob()
            }

            // Numbers
            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }

            // Identifiers and keywords
            c if is_identifier_start(c) => {
                self.pos = self.start;
                self.scan_identifier()
            }

            _ => self.error(format!("Unexpected character: {c}")),
        }
    }

    /// Tokenizes the entire input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
