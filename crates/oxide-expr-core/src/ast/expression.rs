//! Expression AST types.
//!
//! The node shapes mirror the tagged expression messages of the document-store
//! wire protocol: a node is a literal, a column/document identifier, a resolved
//! placeholder, a function call, a builtin operator application, or an
//! array/object literal.

use serde::{Deserialize, Serialize};

/// A scalar literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// Signed integer.
    Signed(i64),
    /// Unsigned integer, used only when the value exceeds `i64::MAX`.
    Unsigned(u64),
    /// Double. Scientific notation is normalized at parse time.
    Double(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    String(String),
    /// NULL.
    Null,
    /// Raw bytes.
    Octets(Vec<u8>),
}

/// Builtin operators.
///
/// The wire name of each operator is given by [`Op::as_str`]. Unary `-` and
/// `+` share their wire name with the binary forms and are told apart by
/// argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    // Logical
    Or,
    Xor,
    And,
    Not,

    // Comparison family
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Is,
    /// `a is not b`. Always rendered in call form, `is_not(a, b)`, which
    /// parses back as a [`FunctionCall`] named `is_not` rather than this
    /// operator. The rendered text is stable, the tree shape is not.
    IsNot,
    Like,
    NotLike,
    Regexp,
    NotRegexp,
    Between,
    NotBetween,
    In,
    NotIn,

    // Bitwise
    BitOr,
    BitAnd,
    LeftShift,
    RightShift,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    Pow,

    // Prefix
    Neg,
    Plus,
    BitNot,
    Bang,
}

impl Op {
    /// Returns the wire name of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::Xor => "xor",
            Self::And => "&&",
            Self::Not => "not",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Is => "is",
            Self::IsNot => "is_not",
            Self::Like => "like",
            Self::NotLike => "not_like",
            Self::Regexp => "regexp",
            Self::NotRegexp => "not_regexp",
            Self::Between => "between",
            Self::NotBetween => "not_between",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Add | Self::Plus => "+",
            Self::Sub | Self::Neg => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "div",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::BitNot => "~",
            Self::Bang => "!",
        }
    }

    /// Returns true for single-operand prefix operators.
    #[must_use]
    pub const fn is_prefix(&self) -> bool {
        matches!(
            self,
            Self::Not | Self::Neg | Self::Plus | Self::BitNot | Self::Bang
        )
    }
}

/// One step of a document path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentPathItem {
    /// `.name`
    Member(String),
    /// `.*`
    MemberAsterisk,
    /// `[N]`
    ArrayIndex(u32),
    /// `[*]`
    ArrayIndexAsterisk,
    /// `**`
    DoubleAsterisk,
}

/// A (possibly qualified) column reference with an optional document path.
///
/// An identifier without a name but with a path is a reference relative to
/// the document root (`@.a.b`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnIdentifier {
    /// Schema name.
    pub schema_name: Option<String>,
    /// Table name.
    pub table_name: Option<String>,
    /// Column or field name.
    pub name: Option<String>,
    /// Path into the document stored in the column.
    pub document_path: Vec<DocumentPathItem>,
}

impl ColumnIdentifier {
    /// Creates a reference to a plain column.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a reference relative to the document root.
    #[must_use]
    pub fn document(path: Vec<DocumentPathItem>) -> Self {
        Self {
            document_path: path,
            ..Self::default()
        }
    }

    /// Qualifies the column with a table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table_name = Some(table.into());
        self
    }

    /// Qualifies the table with a schema name.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    /// Attaches a document path to the column.
    #[must_use]
    pub fn with_path(mut self, path: Vec<DocumentPathItem>) -> Self {
        self.document_path = path;
        self
    }

    /// Returns true if this refers to the document root rather than a column.
    #[must_use]
    pub fn is_document_root(&self) -> bool {
        self.name.is_none() && !self.document_path.is_empty()
    }
}

/// A function name, optionally qualified with a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionName {
    /// Schema name.
    pub schema_name: Option<String>,
    /// Function name, case preserved.
    pub name: String,
}

impl FunctionName {
    /// Creates an unqualified function name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema_name: None,
            name: name.into(),
        }
    }
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// The function name.
    pub name: FunctionName,
    /// The arguments.
    pub args: Vec<Expr>,
}

/// A builtin operator application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    /// The operator.
    pub op: Op,
    /// The operands, in source order.
    pub args: Vec<Expr>,
}

impl Operator {
    /// Returns the wire name of the operator.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.op.as_str()
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal value.
    Literal(Scalar),
    /// A column and/or document path reference.
    Identifier(ColumnIdentifier),
    /// A placeholder, by resolved position.
    Placeholder(usize),
    /// A function call.
    FunctionCall(FunctionCall),
    /// A builtin operator.
    Operator(Operator),
    /// An array literal.
    Array(Vec<Expr>),
    /// An object literal; fields keep their source order.
    Object(Vec<(String, Expr)>),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Identifier(ColumnIdentifier::column(name))
    }

    /// Creates a reference relative to the document root.
    #[must_use]
    pub fn document_path(path: Vec<DocumentPathItem>) -> Self {
        Self::Identifier(ColumnIdentifier::document(path))
    }

    /// Creates a new signed integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Scalar::Signed(value))
    }

    /// Creates a new double literal.
    #[must_use]
    pub const fn double(value: f64) -> Self {
        Self::Literal(Scalar::Double(value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Scalar::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Scalar::Bool(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Scalar::Null)
    }

    /// Creates an unqualified function call.
    #[must_use]
    pub fn call(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::FunctionCall(FunctionCall {
            name: FunctionName::new(name),
            args,
        })
    }

    /// Creates an operator application.
    #[must_use]
    pub const fn operator(op: Op, args: Vec<Self>) -> Self {
        Self::Operator(Operator { op, args })
    }

    /// Creates a prefix operator application.
    #[must_use]
    pub fn unary(op: Op, operand: Self) -> Self {
        Self::operator(op, vec![operand])
    }

    /// Creates a binary operator application.
    #[must_use]
    pub fn binary(self, op: Op, right: Self) -> Self {
        Self::operator(op, vec![self, right])
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(Op::Eq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(Op::Gt, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(Op::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(Op::Or, right)
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::operator(Op::Between, vec![self, low, high])
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        let mut args = Vec::with_capacity(list.len() + 1);
        args.push(self);
        args.extend(list);
        Self::operator(Op::In, args)
    }

    /// Returns the operator node, if this is one.
    #[must_use]
    pub const fn as_operator(&self) -> Option<&Operator> {
        match self {
            Self::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the identifier, if this is one.
    #[must_use]
    pub const fn as_identifier(&self) -> Option<&ColumnIdentifier> {
        match self {
            Self::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    /// Returns the literal value, if this is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Scalar> {
        match self {
            Self::Literal(scalar) => Some(scalar),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_wire_names() {
        assert_eq!(Op::And.as_str(), "&&");
        assert_eq!(Op::IsNot.as_str(), "is_not");
        assert_eq!(Op::NotBetween.as_str(), "not_between");
        assert_eq!(Op::Neg.as_str(), Op::Sub.as_str());
        assert!(Op::Not.is_prefix());
        assert!(!Op::Pow.is_prefix());
    }

    #[test]
    fn test_expr_builders() {
        let col = Expr::column("name");
        assert!(matches!(&col, Expr::Identifier(id) if id.name.as_deref() == Some("name")));

        let lit = Expr::integer(42);
        assert!(matches!(lit, Expr::Literal(Scalar::Signed(42))));
    }

    #[test]
    fn test_expr_chaining() {
        let expr = Expr::column("age")
            .gt(Expr::integer(18))
            .and(Expr::column("status").eq(Expr::string("active")));

        let and = expr.as_operator().expect("operator");
        assert_eq!(and.op, Op::And);
        assert_eq!(and.args.len(), 2);
        assert_eq!(and.args[0].as_operator().map(|o| o.op), Some(Op::Gt));
    }

    #[test]
    fn test_in_list_flattens_arguments() {
        let expr = Expr::column("a").in_list(vec![Expr::integer(1), Expr::integer(2)]);
        let op = expr.as_operator().expect("operator");
        assert_eq!(op.name(), "in");
        assert_eq!(op.args.len(), 3);
    }

    #[test]
    fn test_column_identifier_builders() {
        let ident = ColumnIdentifier::column("c")
            .with_table("t")
            .with_schema("s")
            .with_path(vec![DocumentPathItem::Member("x".into())]);
        assert_eq!(ident.schema_name.as_deref(), Some("s"));
        assert_eq!(ident.table_name.as_deref(), Some("t"));
        assert!(!ident.is_document_root());

        let root = ColumnIdentifier::document(vec![DocumentPathItem::DoubleAsterisk]);
        assert!(root.is_document_root());
    }
}
