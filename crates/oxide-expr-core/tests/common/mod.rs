#![allow(dead_code)]

use oxide_expr_core::ast::{ColumnIdentifier, DocumentPathItem, Scalar};
use oxide_expr_core::{render, Expr, MalformedExpression, Op, Parser};

pub fn parse(input: &str) -> Expr {
    Parser::new(input)
        .parse()
        .unwrap_or_else(|e| panic!("Failed to parse: {input}\nError: {e}"))
}

pub fn parse_err(input: &str) -> MalformedExpression {
    Parser::new(input)
        .parse()
        .expect_err(&format!("Expected parse error for: {input}"))
}

pub fn canonical(input: &str) -> String {
    render(&parse(input))
}

/// Checks that `input` renders as `expected`, and that the rendering is a
/// fixed point: re-parsing it yields the same string again.
pub fn round_trip(input: &str, expected: &str) {
    let rendered1 = canonical(input);
    assert_eq!(rendered1, expected, "Unexpected rendering of: {input}");
    let rendered2 = canonical(&rendered1);
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {input}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Checks that the input is already canonical.
pub fn stable(input: &str) {
    round_trip(input, input);
}

pub fn operator(expr: &Expr) -> (Op, &[Expr]) {
    match expr {
        Expr::Operator(op) => (op.op, op.args.as_slice()),
        other => panic!("Expected operator, got {other:?}"),
    }
}

pub fn identifier(expr: &Expr) -> &ColumnIdentifier {
    match expr {
        Expr::Identifier(ident) => ident,
        other => panic!("Expected identifier, got {other:?}"),
    }
}

pub fn scalar(expr: &Expr) -> &Scalar {
    match expr {
        Expr::Literal(scalar) => scalar,
        other => panic!("Expected literal, got {other:?}"),
    }
}

pub fn member(name: &str) -> DocumentPathItem {
    DocumentPathItem::Member(String::from(name))
}
