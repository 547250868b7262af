//! Expression parser implementation.

use tracing::debug;

use super::error::MalformedExpression;
use super::placeholder::PlaceholderMap;
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_infix, token_to_unary_op, Infix,
    COMPARISON_OPERAND_BP, MULTIPLICATIVE_BP,
};
use crate::ast::{
    Column, ColumnIdentifier, DocumentPathItem, Expr, FunctionCall, FunctionName, Op, Order,
    OrderDirection, Projection, ProjectionTarget, Scalar, UpdateOperation,
};
use crate::lexer::{IntervalUnit, Keyword, Lexer, Token, TokenKind};

/// Maximum number of nested sub-expressions in one input.
pub const MAX_DEPTH: usize = 64;

/// Expression parser.
///
/// One parser handles one input. Placeholders seen while parsing are
/// recorded in a [`PlaceholderMap`] that can be read once parsing is done.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    placeholders: PlaceholderMap,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            placeholders: PlaceholderMap::new(),
            depth: 0,
        }
    }

    /// Returns the placeholders resolved so far.
    #[must_use]
    pub const fn placeholders(&self) -> &PlaceholderMap {
        &self.placeholders
    }

    /// Consumes the parser, keeping only its placeholder map.
    #[must_use]
    pub fn into_placeholders(self) -> PlaceholderMap {
        self.placeholders
    }

    /// Parses a single expression.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if the input is not one complete
    /// expression.
    pub fn parse(&mut self) -> Result<Expr, MalformedExpression> {
        let result = self.parse_expression(0);
        self.complete("parse", result)
    }

    /// Parses a comma-separated order specification (`a, b desc`).
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if any entry is malformed.
    pub fn parse_order_spec(&mut self) -> Result<Vec<Order>, MalformedExpression> {
        let result = self.parse_list(Self::parse_order);
        self.complete("parse_order_spec", result)
    }

    /// Parses a document projection list (`@.a as @.b, 1 as @[0]`).
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if any entry is malformed or lacks a
    /// target that cannot be inferred.
    pub fn parse_document_projection(&mut self) -> Result<Vec<Projection>, MalformedExpression> {
        let result = self.parse_list(Self::parse_document_projection_item);
        self.complete("parse_document_projection", result)
    }

    /// Parses the column list of a table insert.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if any entry is not a column name.
    pub fn parse_table_insert_projection(&mut self) -> Result<Vec<Column>, MalformedExpression> {
        let result = self.parse_list(|p| {
            Ok(Column {
                name: p.expect_identifier()?,
            })
        });
        self.complete("parse_table_insert_projection", result)
    }

    /// Parses the column list of a table update.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if any entry is not a column
    /// reference.
    pub fn parse_table_update_projection(
        &mut self,
    ) -> Result<Vec<ColumnIdentifier>, MalformedExpression> {
        let result = self.parse_list(Self::parse_column_identifier);
        self.complete("parse_table_update_projection", result)
    }

    /// Parses the projection list of a table select (`a, b as c`).
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if any entry is malformed.
    pub fn parse_table_select_projection(
        &mut self,
    ) -> Result<Vec<Projection>, MalformedExpression> {
        let result = self.parse_list(Self::parse_table_select_item);
        self.complete("parse_table_select_projection", result)
    }

    /// Parses a list of `column = value` assignments.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if any assignment is malformed.
    pub fn parse_update_list(&mut self) -> Result<Vec<UpdateOperation>, MalformedExpression> {
        let result = self.parse_list(Self::parse_update_operation);
        self.complete("parse_update_list", result)
    }

    /// Parses a standalone document path. The leading `@` is optional.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedExpression` if the input is not a valid path.
    pub fn parse_document_path(&mut self) -> Result<Vec<DocumentPathItem>, MalformedExpression> {
        if self.check(&TokenKind::At) {
            self.advance();
        }
        let result = self.parse_document_path_items();
        self.complete("parse_document_path", result)
    }

    /// Requires the whole input to be consumed and attaches the input text to
    /// any failure.
    fn complete<T>(
        &self,
        entry: &'static str,
        result: Result<T, MalformedExpression>,
    ) -> Result<T, MalformedExpression> {
        let result = result.and_then(|value| {
            if self.current.is_eof() {
                Ok(value)
            } else {
                Err(self.error_here("end of input"))
            }
        });

        match result {
            Ok(value) => {
                debug!(entry, positions = self.placeholders.len(), "expression parsed");
                Ok(value)
            }
            Err(err) => {
                let err = err.with_input(self.lexer.input());
                debug!(entry, error = %err, "expression rejected");
                Err(err)
            }
        }
    }

    fn parse_order(&mut self) -> Result<Order, MalformedExpression> {
        let field = self.parse_expression(0)?;
        let direction = match self.current.keyword() {
            Some(Keyword::Asc) => Some(OrderDirection::Asc),
            Some(Keyword::Desc) => Some(OrderDirection::Desc),
            _ => None,
        };
        if direction.is_some() {
            self.advance();
        }
        Ok(Order { field, direction })
    }

    fn parse_document_projection_item(&mut self) -> Result<Projection, MalformedExpression> {
        let source = self.parse_expression(0)?;

        let target = if self.check_keyword(Keyword::As) {
            self.advance();
            if self.check(&TokenKind::At) {
                self.advance();
                self.parse_document_path_items()?
            } else {
                vec![DocumentPathItem::Member(self.expect_identifier()?)]
            }
        } else {
            // A bare document path projects onto itself
            match &source {
                Expr::Identifier(ident) if ident.is_document_root() => {
                    ident.document_path.clone()
                }
                _ => return Err(self.error_here("AS")),
            }
        };

        Ok(Projection {
            source,
            target: Some(ProjectionTarget::Path(target)),
        })
    }

    fn parse_table_select_item(&mut self) -> Result<Projection, MalformedExpression> {
        let source = self.parse_expression(0)?;
        let target = if self.check_keyword(Keyword::As) {
            self.advance();
            Some(ProjectionTarget::Alias(self.expect_identifier()?))
        } else {
            None
        };
        Ok(Projection { source, target })
    }

    fn parse_update_operation(&mut self) -> Result<UpdateOperation, MalformedExpression> {
        let source = self.parse_column_identifier()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expression(0)?;
        Ok(UpdateOperation { source, value })
    }

    /// Parses an expression, refusing to nest deeper than [`MAX_DEPTH`].
    fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, MalformedExpression> {
        if self.depth >= MAX_DEPTH {
            return Err(MalformedExpression::new(
                "Expression nested too deeply",
                self.current.span,
            ));
        }
        self.depth += 1;
        let result = self.parse_pratt(min_bp);
        self.depth -= 1;
        result
    }

    /// Parses an expression using Pratt parsing.
    fn parse_pratt(&mut self, min_bp: u8) -> Result<Expr, MalformedExpression> {
        let mut lhs = self.parse_prefix(min_bp)?;
        let mut compared = false;

        loop {
            let Some(infix) = token_to_infix(&self.current) else {
                break;
            };
            let (l_bp, r_bp) = infix_binding_power(infix);
            if l_bp < min_bp {
                break;
            }

            if infix.is_comparison() {
                if compared {
                    return Err(MalformedExpression::new(
                        "Comparison operators cannot be chained",
                        self.current.span,
                    ));
                }
                compared = true;
            } else {
                compared = false;
            }

            lhs = match infix {
                Infix::Binary(op) => {
                    self.advance();
                    if matches!(op, Op::Add | Op::Sub) && self.check_keyword(Keyword::Interval) {
                        self.advance();
                        self.parse_interval(lhs, op)?
                    } else {
                        let rhs = self.parse_expression(r_bp)?;
                        lhs.binary(op, rhs)
                    }
                }
                Infix::Is => {
                    self.advance();
                    let op = if self.check_keyword(Keyword::Not) {
                        self.advance();
                        Op::IsNot
                    } else {
                        Op::Is
                    };
                    let rhs = self.parse_expression(r_bp)?;
                    lhs.binary(op, rhs)
                }
                Infix::Not => {
                    self.advance();
                    self.parse_negatable(lhs, true)?
                }
                Infix::Like | Infix::Regexp | Infix::Between | Infix::In => {
                    self.parse_negatable(lhs, false)?
                }
            };
        }

        Ok(lhs)
    }

    /// Parses the comparison forms that have a `not` variant. The current
    /// token is `like`, `regexp`, `between` or `in`.
    fn parse_negatable(&mut self, lhs: Expr, negated: bool) -> Result<Expr, MalformedExpression> {
        let pick = |plain: Op, negative: Op| if negated { negative } else { plain };

        let keyword = match self.current.keyword() {
            Some(kw @ (Keyword::Like | Keyword::Regexp | Keyword::Between | Keyword::In)) => kw,
            _ => return Err(self.error_here("LIKE, REGEXP, BETWEEN or IN")),
        };
        self.advance();

        match keyword {
            Keyword::Like => {
                let pattern = self.parse_expression(COMPARISON_OPERAND_BP)?;
                let mut args = vec![lhs, pattern];
                if self.check_keyword(Keyword::Escape) {
                    self.advance();
                    args.push(self.parse_expression(COMPARISON_OPERAND_BP)?);
                }
                Ok(Expr::operator(pick(Op::Like, Op::NotLike), args))
            }
            Keyword::Regexp => {
                let pattern = self.parse_expression(COMPARISON_OPERAND_BP)?;
                Ok(lhs.binary(pick(Op::Regexp, Op::NotRegexp), pattern))
            }
            Keyword::Between => {
                let low = self.parse_expression(COMPARISON_OPERAND_BP)?;
                self.expect_keyword(Keyword::And)?;
                let high = self.parse_expression(COMPARISON_OPERAND_BP)?;
                Ok(Expr::operator(
                    pick(Op::Between, Op::NotBetween),
                    vec![lhs, low, high],
                ))
            }
            _ => {
                self.expect(&TokenKind::LeftParen)?;
                let list = self.parse_list(|p| p.parse_expression(0))?;
                self.expect(&TokenKind::RightParen)?;
                let mut args = Vec::with_capacity(list.len() + 1);
                args.push(lhs);
                args.extend(list);
                Ok(Expr::operator(pick(Op::In, Op::NotIn), args))
            }
        }
    }

    /// Parses `<amount> <unit>` after `+ interval` / `- interval` and
    /// rewrites it as a `date_add` / `date_sub` call.
    fn parse_interval(&mut self, date: Expr, op: Op) -> Result<Expr, MalformedExpression> {
        let amount = self.parse_expression(MULTIPLICATIVE_BP)?;

        let unit = match &self.current.kind {
            TokenKind::Identifier(word) => IntervalUnit::from_str(word),
            _ => None,
        };
        let Some(unit) = unit else {
            return Err(self.error_here("interval unit"));
        };
        self.advance();

        let function = if op == Op::Sub { "date_sub" } else { "date_add" };
        Ok(Expr::call(
            function,
            vec![date, amount, Expr::string(unit.as_str())],
        ))
    }

    /// Parses a prefix expression (unary operator or primary). The operand
    /// never binds looser than the surrounding `min_bp`.
    fn parse_prefix(&mut self, min_bp: u8) -> Result<Expr, MalformedExpression> {
        let Some(op) = token_to_unary_op(&self.current) else {
            return self.parse_primary();
        };
        self.advance();

        // A sign directly in front of a number is part of the literal
        let folds = matches!(op, Op::Neg | Op::Plus)
            && matches!(self.current.kind, TokenKind::Integer(_) | TokenKind::Float(_));
        let span = self.current.span;

        let operand = self.parse_expression(prefix_binding_power(op).max(min_bp))?;
        match operand {
            Expr::Literal(scalar) if folds => fold_sign(op == Op::Neg, scalar)
                .map(Expr::Literal)
                .ok_or_else(|| MalformedExpression::new("Integer literal out of range", span)),
            operand => Ok(Expr::unary(op, operand)),
        }
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, MalformedExpression> {
        match &self.current.kind {
            TokenKind::Integer(n) => {
                let n = *n;
                self.advance();
                let scalar = i64::try_from(n).map_or(Scalar::Unsigned(n), Scalar::Signed);
                Ok(Expr::Literal(scalar))
            }
            TokenKind::Float(v) => {
                let v = *v;
                self.advance();
                Ok(Expr::double(v))
            }
            TokenKind::String(s) => {
                let s = s.clone();
                self.advance();
                Ok(Expr::string(s))
            }
            TokenKind::Blob(bytes) => {
                let bytes = bytes.clone();
                self.advance();
                Ok(Expr::Literal(Scalar::Octets(bytes)))
            }
            TokenKind::Question => {
                self.advance();
                Ok(Expr::Placeholder(self.placeholders.anonymous()))
            }
            TokenKind::NumberedParam(key) | TokenKind::NamedParam(key) => {
                let position = self.placeholders.resolve(key);
                self.advance();
                Ok(Expr::Placeholder(position))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression(0)?;
                self.expect(&TokenKind::RightParen)?;
                Ok(expr)
            }
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::At => {
                self.advance();
                let path = self.parse_document_path_items()?;
                Ok(Expr::document_path(path))
            }
            TokenKind::QuotedIdentifier(_) => self.parse_identifier_or_call(),
            TokenKind::Identifier(_) => match self.current.keyword() {
                Some(Keyword::True) => {
                    self.advance();
                    Ok(Expr::boolean(true))
                }
                Some(Keyword::False) => {
                    self.advance();
                    Ok(Expr::boolean(false))
                }
                Some(Keyword::Null) => {
                    self.advance();
                    Ok(Expr::null())
                }
                Some(_) => Err(self.error_here("expression")),
                None => self.parse_identifier_or_call(),
            },
            _ => Err(self.error_here("expression")),
        }
    }

    /// Parses a (qualified) column reference or a function call.
    fn parse_identifier_or_call(&mut self) -> Result<Expr, MalformedExpression> {
        let start = self.current.span;
        let mut parts = self.parse_qualified_name()?;

        if !self.check(&TokenKind::LeftParen) {
            let ident = self.finish_column_identifier(parts)?;
            return Ok(Expr::Identifier(ident));
        }

        if parts.len() > 2 {
            return Err(MalformedExpression::new(
                "Function names take at most a schema qualifier",
                start.merge(self.current.span),
            ));
        }
        self.advance();

        let args = if self.check(&TokenKind::RightParen) {
            vec![]
        } else {
            self.parse_list(|p| p.parse_expression(0))?
        };
        self.expect(&TokenKind::RightParen)?;

        let name = parts.pop().unwrap_or_default();
        Ok(Expr::FunctionCall(FunctionCall {
            name: FunctionName {
                schema_name: parts.pop(),
                name,
            },
            args,
        }))
    }

    fn parse_column_identifier(&mut self) -> Result<ColumnIdentifier, MalformedExpression> {
        let parts = self.parse_qualified_name()?;
        self.finish_column_identifier(parts)
    }

    /// Parses up to three dot-separated name segments.
    fn parse_qualified_name(&mut self) -> Result<Vec<String>, MalformedExpression> {
        let start = self.current.span;
        let mut parts = vec![self.expect_identifier()?];
        while self.check(&TokenKind::Dot) {
            self.advance();
            parts.push(self.expect_identifier()?);
        }

        if parts.len() > 3 {
            return Err(MalformedExpression::new(
                "Too many qualifiers: expected at most schema.table.column",
                start.merge(self.current.span),
            ));
        }
        Ok(parts)
    }

    /// Builds a column identifier from its name segments and an optional
    /// `@` document path.
    fn finish_column_identifier(
        &mut self,
        mut parts: Vec<String>,
    ) -> Result<ColumnIdentifier, MalformedExpression> {
        let name = parts.pop();
        let table_name = parts.pop();
        let schema_name = parts.pop();

        let document_path = if self.check(&TokenKind::At) {
            self.advance();
            self.parse_document_path_items()?
        } else {
            vec![]
        };

        Ok(ColumnIdentifier {
            schema_name,
            table_name,
            name,
            document_path,
        })
    }

    /// Parses the items of a document path following `@`.
    fn parse_document_path_items(&mut self) -> Result<Vec<DocumentPathItem>, MalformedExpression> {
        let mut path = vec![];

        loop {
            match &self.current.kind {
                TokenKind::Dot => {
                    self.advance();
                    let item = match &self.current.kind {
                        TokenKind::Star => DocumentPathItem::MemberAsterisk,
                        TokenKind::Identifier(name)
                        | TokenKind::QuotedIdentifier(name)
                        | TokenKind::String(name) => DocumentPathItem::Member(name.clone()),
                        _ => return Err(self.error_here("member name or '*'")),
                    };
                    self.advance();
                    path.push(item);
                }
                TokenKind::LeftBracket => {
                    self.advance();
                    let item = match &self.current.kind {
                        TokenKind::Star => DocumentPathItem::ArrayIndexAsterisk,
                        TokenKind::Integer(n) => match u32::try_from(*n) {
                            Ok(index) => DocumentPathItem::ArrayIndex(index),
                            Err(_) => {
                                return Err(MalformedExpression::new(
                                    "Array index out of range",
                                    self.current.span,
                                ));
                            }
                        },
                        _ => return Err(self.error_here("array index or '*'")),
                    };
                    self.advance();
                    self.expect(&TokenKind::RightBracket)?;
                    path.push(item);
                }
                TokenKind::DoubleStar => {
                    self.advance();
                    path.push(DocumentPathItem::DoubleAsterisk);
                }
                _ => break,
            }
        }

        match path.last() {
            None => Err(self.error_here("document path")),
            Some(DocumentPathItem::DoubleAsterisk) => Err(MalformedExpression::new(
                "Document path cannot end with '**'",
                self.current.span,
            )),
            Some(_) => Ok(path),
        }
    }

    fn parse_array(&mut self) -> Result<Expr, MalformedExpression> {
        self.expect(&TokenKind::LeftBracket)?;
        let items = if self.check(&TokenKind::RightBracket) {
            vec![]
        } else {
            self.parse_list(|p| p.parse_expression(0))?
        };
        self.expect(&TokenKind::RightBracket)?;
        Ok(Expr::Array(items))
    }

    fn parse_object(&mut self) -> Result<Expr, MalformedExpression> {
        self.expect(&TokenKind::LeftBrace)?;
        let mut fields: Vec<(String, Expr)> = vec![];

        if !self.check(&TokenKind::RightBrace) {
            loop {
                let key_span = self.current.span;
                let key = match &self.current.kind {
                    TokenKind::String(key)
                    | TokenKind::Identifier(key)
                    | TokenKind::QuotedIdentifier(key) => key.clone(),
                    _ => return Err(self.error_here("object key")),
                };
                self.advance();
                if fields.iter().any(|(existing, _)| *existing == key) {
                    return Err(MalformedExpression::new(
                        format!("Duplicate object key: {key}"),
                        key_span,
                    ));
                }

                self.expect_colon()?;
                let value = self.parse_expression(0)?;
                fields.push((key, value));

                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }

        self.expect(&TokenKind::RightBrace)?;
        Ok(Expr::Object(fields))
    }

    /// Consumes the `:` after an object key. Without a space the lexer reads
    /// `:1` or `:name` as a placeholder, so that token is re-scanned from just
    /// past the colon.
    fn expect_colon(&mut self) -> Result<(), MalformedExpression> {
        match &self.current.kind {
            TokenKind::Colon => {
                self.advance();
                Ok(())
            }
            TokenKind::NumberedParam(_) | TokenKind::NamedParam(_) => {
                self.lexer.rewind(self.current.span.start + 1);
                self.advance();
                Ok(())
            }
            _ => Err(self.error_here("':'")),
        }
    }

    /// Parses a non-empty comma-separated list.
    fn parse_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, MalformedExpression>,
    ) -> Result<Vec<T>, MalformedExpression> {
        let mut items = vec![];
        loop {
            items.push(item(self)?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(items)
    }

    // --- Helper methods ---

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.keyword() == Some(keyword)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), MalformedExpression> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("{kind:?}")))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), MalformedExpression> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(keyword.as_str()))
        }
    }

    /// Expects and returns a name: a non-reserved word or a quoted
    /// identifier.
    fn expect_identifier(&mut self) -> Result<String, MalformedExpression> {
        match &self.current.kind {
            TokenKind::Identifier(name) if Keyword::from_str(name).is_none() => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            TokenKind::QuotedIdentifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error_here("identifier")),
        }
    }

    /// Builds an error for the current token. Lexical errors keep their own
    /// message.
    fn error_here(&self, expected: &str) -> MalformedExpression {
        let span = self.current.span;
        match &self.current.kind {
            TokenKind::Error(message) => MalformedExpression::new(message.clone(), span),
            TokenKind::Eof => MalformedExpression::unexpected_eof(expected, span),
            kind => MalformedExpression::unexpected(expected, kind.clone(), span),
        }
    }
}

/// Applies a sign to a numeric literal.
///
/// Returns `None` when a negated integer does not fit in `i64`.
fn fold_sign(negate: bool, scalar: Scalar) -> Option<Scalar> {
    match scalar {
        Scalar::Double(v) if negate => Some(Scalar::Double(-v)),
        Scalar::Signed(n) if negate => n.checked_neg().map(Scalar::Signed),
        Scalar::Unsigned(n) if negate => 0i64.checked_sub_unsigned(n).map(Scalar::Signed),
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Expr, MalformedExpression> {
        Parser::new(input).parse()
    }

    #[test]
    fn test_simple_expression() {
        let expr = parse("a == 1").unwrap();
        let op = expr.as_operator().expect("operator");
        assert_eq!(op.op, Op::Eq);
        assert_eq!(op.args[0], Expr::column("a"));
        assert_eq!(op.args[1], Expr::integer(1));
    }

    #[test]
    fn test_expression_precedence() {
        // 1 + 2 * 3 should be parsed as 1 + (2 * 3)
        let expr = parse("1 + 2 * 3").unwrap();
        let op = expr.as_operator().expect("operator");
        assert_eq!(op.op, Op::Add);
        assert_eq!(op.args[1].as_operator().map(|o| o.op), Some(Op::Mul));
    }

    #[test]
    fn test_sign_folding() {
        assert_eq!(parse("-20").unwrap(), Expr::integer(-20));
        assert_eq!(parse("+2").unwrap(), Expr::integer(2));
        assert_eq!(parse("-2.5").unwrap(), Expr::double(-2.5));
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            Expr::integer(i64::MIN)
        );
        assert!(parse("-9223372036854775809").is_err());
        assert_eq!(
            parse("9223372036854775808").unwrap(),
            Expr::Literal(Scalar::Unsigned(9_223_372_036_854_775_808))
        );
    }

    #[test]
    fn test_parenthesized_sign_is_an_operator() {
        let expr = parse("-(2)").unwrap();
        assert_eq!(expr, Expr::unary(Op::Neg, Expr::integer(2)));
    }

    #[test]
    fn test_power_binds_tighter_than_sign() {
        let expr = parse("-2 ^ 2").unwrap();
        assert_eq!(
            expr,
            Expr::unary(Op::Neg, Expr::integer(2).binary(Op::Pow, Expr::integer(2)))
        );
    }

    #[test]
    fn test_parameter_placeholders() {
        let mut parser = Parser::new("a = ? and b = :x and c = :x and d = ?");
        let expr = parser.parse().unwrap();
        let placeholders = parser.into_placeholders();
        assert_eq!(placeholders.len(), 3);
        assert_eq!(placeholders.anonymous_count(), 2);
        assert_eq!(placeholders.position("x"), Some(1));
        assert!(matches!(expr, Expr::Operator(_)));
    }

    #[test]
    fn test_object_colon_without_space() {
        let expr = parse("{\"a\":1, b:c}").unwrap();
        assert_eq!(
            expr,
            Expr::Object(vec![
                (String::from("a"), Expr::integer(1)),
                (String::from("b"), Expr::column("c")),
            ])
        );
    }

    #[test]
    fn test_lexical_error_message_is_kept() {
        let err = parse("1 + 1ee1").unwrap_err();
        assert!(err.message.contains("Malformed numeric literal"));
        assert_eq!(err.input, "1 + 1ee1");
        assert_eq!(err.fragment(), "1ee1");
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("a b").unwrap_err();
        assert_eq!(err.expected.as_deref(), Some("end of input"));
    }
}
