//! Expression lexer.
//!
//! A hand-written, pull-based lexer producing one classified token at a time.
//! Keywords are not a separate token class: they are recognized on identifier
//! tokens through [`Keyword::from_str`], so a backtick-quoted `` `like` `` is
//! never mistaken for the operator.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{IntervalUnit, Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
