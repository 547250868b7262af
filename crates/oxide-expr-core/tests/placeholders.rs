//! Tests for placeholder position assignment.

mod common;
use common::*;

use oxide_expr_core::{Expr, Parser};

/// Returns the placeholder on the right of `x == <placeholder>`.
fn rhs_position(expr: &Expr) -> usize {
    match &operator(expr).1[1] {
        Expr::Placeholder(position) => *position,
        other => panic!("Expected placeholder, got {other:?}"),
    }
}

#[test]
fn named_placeholders() {
    let mut parser = Parser::new("a == :a and b == :b and (c == 'x' or d == :b)");
    let e = parser.parse().unwrap();
    let placeholders = parser.placeholders();
    assert_eq!(placeholders.position("a"), Some(0));
    assert_eq!(placeholders.position("b"), Some(1));
    assert_eq!(placeholders.len(), 2);
    assert_eq!(placeholders.anonymous_count(), 0);

    let (_, and) = operator(&e);
    let (_, left) = operator(&and[0]);
    assert_eq!(rhs_position(&left[0]), 0);
    assert_eq!(rhs_position(&left[1]), 1);
    let (_, or) = operator(&and[1]);
    assert_eq!(rhs_position(&or[1]), 1);
}

#[test]
fn numbered_placeholders() {
    let mut parser = Parser::new("a == :1 and b == :3 and (c == :2 or d == :2)");
    let e = parser.parse().unwrap();
    let placeholders = parser.placeholders();
    assert_eq!(placeholders.position("1"), Some(0));
    assert_eq!(placeholders.position("3"), Some(1));
    assert_eq!(placeholders.position("2"), Some(2));
    assert_eq!(placeholders.len(), 3);

    let (_, and) = operator(&e);
    let (_, left) = operator(&and[0]);
    assert_eq!(rhs_position(&left[0]), 0);
    assert_eq!(rhs_position(&left[1]), 1);
    let (_, or) = operator(&and[1]);
    assert_eq!(rhs_position(&or[0]), 2);
    assert_eq!(rhs_position(&or[1]), 2);
}

#[test]
fn unnumbered_placeholders() {
    let mut parser = Parser::new("a == ? and b == ? and (c == 'x' or d == ?)");
    let e = parser.parse().unwrap();
    let placeholders = parser.placeholders();
    assert_eq!(placeholders.position("0"), Some(0));
    assert_eq!(placeholders.position("1"), Some(1));
    assert_eq!(placeholders.position("2"), Some(2));
    assert_eq!(placeholders.len(), 3);
    assert_eq!(placeholders.anonymous_count(), 3);

    let (_, and) = operator(&e);
    let (_, left) = operator(&and[0]);
    assert_eq!(rhs_position(&left[0]), 0);
    assert_eq!(rhs_position(&left[1]), 1);
    let (_, or) = operator(&and[1]);
    assert_eq!(rhs_position(&or[1]), 2);
}

#[test]
fn mixed_forms_follow_first_appearance() {
    let mut parser = Parser::new("f(?, :name, ?, :name)");
    let e = parser.parse().unwrap();
    let Expr::FunctionCall(call) = &e else {
        panic!("Expected call, got {e:?}");
    };
    assert_eq!(
        call.args,
        vec![
            Expr::Placeholder(0),
            Expr::Placeholder(1),
            Expr::Placeholder(2),
            Expr::Placeholder(1),
        ]
    );
    let pairs: Vec<(String, usize)> = parser
        .placeholders()
        .iter()
        .map(|(key, position)| (key.to_string(), position))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (String::from("0"), 0),
            (String::from("name"), 1),
            (String::from("1"), 2),
        ]
    );
}

#[test]
fn anonymous_and_numbered_share_keys() {
    let mut parser = Parser::new("? == :0");
    let e = parser.parse().unwrap();
    assert_eq!(operator(&e).1, &[Expr::Placeholder(0), Expr::Placeholder(0)]);
    assert_eq!(parser.placeholders().len(), 1);
}

#[test]
fn placeholders_span_list_entries() {
    let mut parser = Parser::new("? desc, :a, ?");
    let orders = parser.parse_order_spec().unwrap();
    let fields: Vec<&Expr> = orders.iter().map(|o| &o.field).collect();
    assert_eq!(
        fields,
        vec![&Expr::Placeholder(0), &Expr::Placeholder(1), &Expr::Placeholder(2)]
    );
    assert_eq!(parser.into_placeholders().len(), 3);
}

#[test]
fn each_parser_starts_fresh() {
    let first = {
        let mut parser = Parser::new(":x + :y");
        parser.parse().unwrap();
        parser.into_placeholders()
    };
    let mut parser = Parser::new(":y");
    parser.parse().unwrap();
    assert_eq!(first.position("y"), Some(1));
    assert_eq!(parser.placeholders().position("y"), Some(0));
}

#[test]
fn positions_are_rendered_not_names() {
    round_trip("a == :zeta and b == :alpha", "((a == :0) && (b == :1))");
}
