//! Tests for the serialized form of parsed trees.

mod common;
use common::*;

use oxide_expr_core::ast::{Order, UpdateOperation};
use oxide_expr_core::{Expr, Parser};
use serde_json::json;

#[test]
fn operator_serializes_with_snake_case_name() {
    let value = serde_json::to_value(parse("a + 1")).unwrap();
    assert_eq!(value["Operator"]["op"], json!("add"));
    assert_eq!(value["Operator"]["args"][1], json!({ "Literal": { "Signed": 1 } }));
    assert_eq!(
        value["Operator"]["args"][0]["Identifier"]["name"],
        json!("a")
    );
}

#[test]
fn placeholder_serializes_as_position() {
    let value = serde_json::to_value(parse(":name")).unwrap();
    assert_eq!(value, json!({ "Placeholder": 0 }));
}

#[test]
fn document_path_serializes_in_order() {
    let value = serde_json::to_value(parse("@.a[0]")).unwrap();
    assert_eq!(
        value["Identifier"]["document_path"],
        json!([{ "Member": "a" }, { "ArrayIndex": 0 }])
    );
}

#[test]
fn tree_survives_json_round_trip() {
    let expr = parse("f(a@.b[*], [1, 'x'], {k: 2.5}) not between -1 and X'00'");
    let text = serde_json::to_string(&expr).unwrap();
    let back: Expr = serde_json::from_str(&text).unwrap();
    assert_eq!(back, expr);
}

#[test]
fn list_values_serialize() {
    let orders = Parser::new("a desc").parse_order_spec().unwrap();
    let value = serde_json::to_value(&orders).unwrap();
    assert_eq!(value[0]["direction"], json!("Desc"));
    let back: Vec<Order> = serde_json::from_value(value).unwrap();
    assert_eq!(back, orders);

    let ops = Parser::new("x = 1").parse_update_list().unwrap();
    let value = serde_json::to_value(&ops).unwrap();
    let back: Vec<UpdateOperation> = serde_json::from_value(value).unwrap();
    assert_eq!(back, ops);
}
