//! # oxide-expr-core
//!
//! Client-side compiler for the expression language of document-store CRUD
//! requests: filters, projections, sort orders, update assignments and
//! document paths.
//!
//! This crate provides:
//! - A hand-written lexer and a Pratt expression parser
//! - An AST whose node shapes follow the protocol's expression messages
//! - Stable placeholder numbering for named, numbered and anonymous markers
//! - A canonicalizing renderer whose output re-parses to the same tree
//!
//! ## Parsing and canonicalizing
//!
//! ```rust
//! use oxide_expr_core::{render, Parser};
//!
//! let expr = Parser::new("a + b * c + d").parse().unwrap();
//! assert_eq!(render(&expr), "((a + (b * c)) + d)");
//!
//! let expr = Parser::new("now() - interval 1 hour").parse().unwrap();
//! assert_eq!(render(&expr), "date_sub(now(), 1, \"HOUR\")");
//! ```
//!
//! ## Placeholders
//!
//! Placeholders are numbered by first appearance; repeated names share a
//! position.
//!
//! ```rust
//! use oxide_expr_core::Parser;
//!
//! let mut parser = Parser::new("a == :a and b == :b and (c == 'x' or d == :b)");
//! let expr = parser.parse().unwrap();
//! assert_eq!(parser.placeholders().position("b"), Some(1));
//! assert_eq!(parser.placeholders().len(), 2);
//! assert_eq!(expr.to_string(), "(((a == :0) && (b == :1)) && ((c == \"x\") || (d == :1)))");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{render, Expr, Op, Order, Projection, UpdateOperation};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{MalformedExpression, Parser, PlaceholderMap};
