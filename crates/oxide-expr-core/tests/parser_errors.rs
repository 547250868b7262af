//! Tests for inputs that must be rejected.

mod common;
use common::*;

use oxide_expr_core::parser::MAX_DEPTH;
use oxide_expr_core::Parser;

#[test]
fn error_empty_input() {
    let _ = parse_err("");
    let _ = parse_err("   ");
}

#[test]
fn error_malformed_numbers() {
    let _ = parse_err("1ee1");
    let _ = parse_err("1.1.1");
    let _ = parse_err("1e");
    let _ = parse_err("18446744073709551616");
    let _ = parse_err("-9223372036854775809");
}

#[test]
fn error_incomplete_binary() {
    let _ = parse_err("1 + ");
    let _ = parse_err("a is");
    let _ = parse_err("not");
}

#[test]
fn error_argument_lists() {
    let _ = parse_err("x 1,2,3)");
    let _ = parse_err("x(1,2,3");
    let _ = parse_err("x(1 2,3)");
    let _ = parse_err("x(1,, 2,3)");
    let _ = parse_err("x(,1)");
    let _ = parse_err("x(1,)");
}

#[test]
fn error_unbalanced_parens() {
    let _ = parse_err("(a");
    let _ = parse_err("a)");
    let _ = parse_err("((a + b)");
}

#[test]
fn error_keywords_out_of_place() {
    let _ = parse_err("x not y");
    let _ = parse_err("x like");
    let _ = parse_err("like");
    let _ = parse_err("like x");
    let _ = parse_err("a + and");
    let _ = parse_err("desc");
}

#[test]
fn error_intervals() {
    let _ = parse_err("x + interval 1 MACROsecond");
    let _ = parse_err("x + interval 1 + 1");
    let _ = parse_err("x * interval 1 hour");
    let _ = parse_err("interval 1 day");
    let _ = parse_err("x + interval 1");
}

#[test]
fn error_qualified_names() {
    let _ = parse_err("a.b.c.d > 1");
    let _ = parse_err("x.1 > 1");
    let _ = parse_err("a.b.c(1)");
    let _ = parse_err("a.");
}

#[test]
fn error_document_paths() {
    let _ = parse_err("a@**");
    let _ = parse_err("a@[1.1]");
    let _ = parse_err("a@[-1]");
    let _ = parse_err("a@[\u{2212}1]");
    let _ = parse_err("a@1");
    let _ = parse_err("a@.1");
    let _ = parse_err("a@a");
    let _ = parse_err("a@.+");
    let _ = parse_err("a@(x)");
    let _ = parse_err("x@ > 1");
    let _ = parse_err("@");
    let _ = parse_err("a@[0");
    let _ = parse_err("a@[4294967296]");
}

#[test]
fn error_unterminated_quotes() {
    let _ = parse_err("\"xyz");
    let _ = parse_err("'xyz");
    let _ = parse_err("`xyz");
    let _ = parse_err("X'ABC'");
}

#[test]
fn error_between_without_upper_bound() {
    let _ = parse_err("x between 1");
    let _ = parse_err("x between 1 and");
}

#[test]
fn error_bad_placeholders() {
    let _ = parse_err(":>1");
    let _ = parse_err(":1.1");
    let _ = parse_err(":");
}

#[test]
fn error_chained_comparisons() {
    let err = parse_err("a == b == c");
    assert_eq!(err.span.start, 7);
    let _ = parse_err("a < b like c");
    let _ = parse_err("a in (1) in (2)");
}

#[test]
fn error_in_requires_list() {
    let _ = parse_err("a in ()");
    let _ = parse_err("a in 1");
}

#[test]
fn error_containers() {
    let _ = parse_err("[1,]");
    let _ = parse_err("[1");
    let _ = parse_err("{a 1}");
    let _ = parse_err("{a: 1,}");
    let _ = parse_err("{1: 2}");
    let err = parse_err("{a: 1, a: 2}");
    assert!(err.message.contains("Duplicate object key"));
}

#[test]
fn error_carries_input_and_position() {
    let err = parse_err("1 + 1ee1");
    assert_eq!(err.input, "1 + 1ee1");
    assert_eq!(err.span.start, 4);
    assert_eq!(err.fragment(), "1ee1");
    assert!(err
        .to_string()
        .starts_with("malformed expression: Malformed numeric literal"));
}

#[test]
fn error_trailing_tokens() {
    let err = parse_err("a b");
    assert_eq!(err.expected.as_deref(), Some("end of input"));
    assert_eq!(err.span.start, 2);
}

#[test]
fn error_keeps_placeholders_seen_before_failure() {
    let mut parser = Parser::new("a == :x and");
    assert!(parser.parse().is_err());
    assert_eq!(parser.placeholders().position("x"), Some(0));
}

#[test]
fn error_parentheses_nested_too_deeply() {
    let input = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = parse_err(&input);
    assert!(err.message.contains("nested too deeply"));
    assert_eq!(err.span.start, MAX_DEPTH);
}

#[test]
fn error_prefix_operators_nested_too_deeply() {
    let err = parse_err(&format!("{}1", "-".repeat(10_000)));
    assert!(err.message.contains("nested too deeply"));
    let err = parse_err(&format!("{}a", "not ".repeat(10_000)));
    assert!(err.message.contains("nested too deeply"));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let depth = MAX_DEPTH - 1;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(canonical(&input), "1");
}

#[test]
fn sibling_expressions_do_not_count_as_nesting() {
    let input = format!("f({})", vec!["(1 + 2)"; 1_000].join(", "));
    assert!(Parser::new(&input).parse().is_ok());
}

#[test]
fn error_not_does_not_hide_chained_comparison() {
    let err = parse_err("x == not a == b");
    assert!(err.message.contains("cannot be chained"));
}
