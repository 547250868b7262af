//! Canonical rendering of expressions.
//!
//! Every binary operator is wrapped in its own parentheses, keywords and
//! literals are case-normalized, strings are always double-quoted and
//! identifiers are quoted only when they have to be. Parsing the output again
//! yields a tree that renders to the same text.

use std::fmt::{self, Display, Formatter};

use super::{
    Column, ColumnIdentifier, DocumentPathItem, Expr, FunctionCall, FunctionName, Op, Operator,
    Order, Projection, ProjectionTarget, Scalar, UpdateOperation,
};
use crate::lexer::Keyword;

/// Renders an expression in canonical form.
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

/// Renders a document path with its leading `@`.
#[must_use]
pub fn render_document_path(path: &[DocumentPathItem]) -> String {
    let mut out = String::from("@");
    for item in path {
        out.push_str(&item.to_string());
    }
    out
}

fn is_plain_word(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_quoted(f: &mut Formatter<'_>, text: &str, quote: char) -> fmt::Result {
    let escaped = text
        .replace('\\', "\\\\")
        .replace(quote, &format!("{quote}{quote}"));
    write!(f, "{quote}{escaped}{quote}")
}

/// Writes an identifier, backtick-quoting it unless it is a plain,
/// non-reserved word.
fn write_identifier(f: &mut Formatter<'_>, name: &str) -> fmt::Result {
    if is_plain_word(name) && Keyword::from_str(name).is_none() {
        f.write_str(name)
    } else {
        write_quoted(f, name, '`')
    }
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Double(v) => {
                let text = v.to_string();
                if v.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
            Self::String(s) => write_quoted(f, s, '"'),
            Self::Octets(bytes) => {
                let hex: String = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
                write!(f, "X'{hex}'")
            }
        }
    }
}

impl Display for DocumentPathItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(name) if is_plain_word(name) => write!(f, ".{name}"),
            Self::Member(name) => {
                f.write_str(".")?;
                write_quoted(f, name, '"')
            }
            Self::MemberAsterisk => f.write_str(".*"),
            Self::ArrayIndex(index) => write!(f, "[{index}]"),
            Self::ArrayIndexAsterisk => f.write_str("[*]"),
            Self::DoubleAsterisk => f.write_str("**"),
        }
    }
}

impl Display for ColumnIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let segments = [&self.schema_name, &self.table_name, &self.name];
        let mut first = true;
        for segment in segments.into_iter().flatten() {
            if !first {
                f.write_str(".")?;
            }
            write_identifier(f, segment)?;
            first = false;
        }
        if !self.document_path.is_empty() {
            f.write_str(&render_document_path(&self.document_path))?;
        }
        Ok(())
    }
}

impl Display for FunctionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema_name {
            write_identifier(f, schema)?;
            f.write_str(".")?;
        }
        write_identifier(f, &self.name)
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.args)?;
        f.write_str(")")
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_operator(f, self, false)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expr(f, self, false)
    }
}

/// Writes an expression. `nested` is set when the expression is an operand
/// of another operator.
fn write_expr(f: &mut Formatter<'_>, expr: &Expr, nested: bool) -> fmt::Result {
    match expr {
        Expr::Literal(scalar) => write!(f, "{scalar}"),
        Expr::Identifier(ident) => write!(f, "{ident}"),
        Expr::Placeholder(position) => write!(f, ":{position}"),
        Expr::FunctionCall(call) => write!(f, "{call}"),
        Expr::Operator(op) => write_operator(f, op, nested),
        Expr::Array(items) => {
            f.write_str("[")?;
            write_list(f, items)?;
            f.write_str("]")
        }
        Expr::Object(fields) => {
            f.write_str("{")?;
            for (i, (key, value)) in fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_quoted(f, key, '"')?;
                write!(f, ": {value}")?;
            }
            f.write_str("}")
        }
    }
}

const fn is_numeric_literal(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Literal(Scalar::Signed(_) | Scalar::Unsigned(_) | Scalar::Double(_))
    )
}

/// True for operands that would bind differently on the left of `^`.
fn binds_looser_than_power(expr: &Expr) -> bool {
    match expr {
        Expr::Operator(op) => op.op.is_prefix() && op.args.len() == 1,
        Expr::Literal(Scalar::Signed(n)) => *n < 0,
        Expr::Literal(Scalar::Double(v)) => v.is_sign_negative(),
        _ => false,
    }
}

fn write_operator(f: &mut Formatter<'_>, operator: &Operator, nested: bool) -> fmt::Result {
    let name = operator.op.as_str();
    let args = operator.args.as_slice();

    match (operator.op, args) {
        (Op::Pow, [left, right]) => {
            f.write_str("(")?;
            if binds_looser_than_power(left) {
                f.write_str("(")?;
                write_expr(f, left, false)?;
                f.write_str(")")?;
            } else {
                write_expr(f, left, true)?;
            }
            f.write_str(" ^ ")?;
            write_expr(f, right, true)?;
            f.write_str(")")
        }
        (
            Op::Or
            | Op::Xor
            | Op::And
            | Op::Eq
            | Op::NotEq
            | Op::Gt
            | Op::GtEq
            | Op::Lt
            | Op::LtEq
            | Op::Is
            | Op::BitOr
            | Op::BitAnd
            | Op::LeftShift
            | Op::RightShift
            | Op::Add
            | Op::Sub
            | Op::Mul
            | Op::Div
            | Op::IntDiv
            | Op::Mod,
            [left, right],
        ) => {
            f.write_str("(")?;
            write_expr(f, left, true)?;
            write!(f, " {name} ")?;
            write_expr(f, right, true)?;
            f.write_str(")")
        }
        (Op::Regexp | Op::NotRegexp, [left, right]) => {
            let keyword = if operator.op == Op::Regexp {
                "regexp"
            } else {
                "not regexp"
            };
            f.write_str("(")?;
            write_expr(f, left, true)?;
            write!(f, " {keyword} ")?;
            write_expr(f, right, true)?;
            f.write_str(")")
        }
        (Op::Between | Op::NotBetween, [value, low, high]) => {
            let keyword = if operator.op == Op::Between {
                "between"
            } else {
                "not between"
            };
            f.write_str("(")?;
            write_expr(f, value, true)?;
            write!(f, " {keyword} ")?;
            write_expr(f, low, true)?;
            f.write_str(" AND ")?;
            write_expr(f, high, true)?;
            f.write_str(")")
        }
        (Op::Like | Op::NotLike, [value, pattern, rest @ ..]) if rest.len() <= 1 => {
            let keyword = if operator.op == Op::Like {
                "like"
            } else {
                "not like"
            };
            if nested {
                f.write_str("(")?;
            }
            write_expr(f, value, true)?;
            write!(f, " {keyword} ")?;
            write_expr(f, pattern, true)?;
            if let [escape] = rest {
                f.write_str(" ESCAPE ")?;
                write_expr(f, escape, true)?;
            }
            if nested {
                f.write_str(")")?;
            }
            Ok(())
        }
        (Op::In | Op::NotIn, [value, list @ ..]) if !list.is_empty() => {
            let keyword = if operator.op == Op::In { "in" } else { "not in" };
            if nested {
                f.write_str("(")?;
            }
            write_expr(f, value, true)?;
            write!(f, " {keyword}(")?;
            write_list(f, list)?;
            f.write_str(")")?;
            if nested {
                f.write_str(")")?;
            }
            Ok(())
        }
        (Op::Not, [operand]) => {
            if nested {
                f.write_str("(")?;
            }
            f.write_str("not ")?;
            write_expr(f, operand, true)?;
            if nested {
                f.write_str(")")?;
            }
            Ok(())
        }
        (Op::Neg | Op::Plus, [operand]) if is_numeric_literal(operand) => {
            write!(f, "{name}({operand})")
        }
        (Op::Neg | Op::Plus | Op::BitNot | Op::Bang, [operand]) => {
            f.write_str(name)?;
            write_expr(f, operand, true)
        }
        // is_not, and any operator with an unexpected arity, use call syntax.
        _ => {
            write!(f, "{name}(")?;
            write_list(f, args)?;
            f.write_str(")")
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)?;
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.as_str())?;
        }
        Ok(())
    }
}

impl Display for Projection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)?;
        match &self.target {
            Some(ProjectionTarget::Alias(alias)) => {
                f.write_str(" as ")?;
                write_identifier(f, alias)
            }
            Some(ProjectionTarget::Path(path)) => {
                write!(f, " as {}", render_document_path(path))
            }
            None => Ok(()),
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_identifier(f, &self.name)
    }
}

impl Display for UpdateOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.source, self.value)
    }
}
