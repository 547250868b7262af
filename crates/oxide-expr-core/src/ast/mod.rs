//! Abstract Syntax Tree (AST) types for document-store expressions.

mod crud;
mod display;
mod expression;

pub use crud::{Column, Order, OrderDirection, Projection, ProjectionTarget, UpdateOperation};
pub use display::{render, render_document_path};
pub use expression::{
    ColumnIdentifier, DocumentPathItem, Expr, FunctionCall, FunctionName, Op, Operator, Scalar,
};
