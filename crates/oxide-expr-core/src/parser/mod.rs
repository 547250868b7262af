//! Expression parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! Interval arithmetic is desugared into `date_add`/`date_sub` calls while
//! parsing, and placeholders are resolved to positions as they are met.

mod error;
mod parser;
mod placeholder;
mod pratt;

pub use error::MalformedExpression;
pub use parser::{Parser, MAX_DEPTH};
pub use placeholder::PlaceholderMap;
