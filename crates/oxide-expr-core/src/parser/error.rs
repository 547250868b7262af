//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// The single failure of every entry point: the input is not a valid
/// expression (or list) in the requested mode.
///
/// Lexical and syntactic failures are not distinguished. No partial result is
/// ever produced alongside this error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed expression: {message} at position {}..{}", .span.start, .span.end)]
pub struct MalformedExpression {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
    /// The full text that failed to parse.
    pub input: String,
}

impl MalformedExpression {
    /// Creates a new error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
            input: String::new(),
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("Unexpected token: expected {expected}, found {found:?}"),
            span,
            expected: Some(expected),
            found: Some(found),
            input: String::new(),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("Unexpected end of input: expected {expected}"),
            span,
            expected: Some(expected),
            found: Some(TokenKind::Eof),
            input: String::new(),
        }
    }

    /// Attaches the offending input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Returns the part of the input the error points at.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.input.get(self.span.start..self.span.end).unwrap_or("")
    }
}
