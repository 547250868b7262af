//! Pratt expression parser tables for operator precedence.

use crate::ast::Op;
use crate::lexer::{Keyword, Token, TokenKind};

/// Binding power of the multiplicative level. Interval amounts are parsed at
/// this level so that `interval 1 + 1 hour` is rejected.
pub const MULTIPLICATIVE_BP: u8 = 17;

/// Binding power of the comparison family's right-hand operands.
pub const COMPARISON_OPERAND_BP: u8 = 10;

/// Infix forms, including the keyword-driven comparison shapes that need
/// more than one right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infix {
    /// A plain binary operator.
    Binary(Op),
    /// `is [not]`
    Is,
    /// `not like`, `not between`, `not in` or `not regexp`
    Not,
    /// `like [escape]`
    Like,
    /// `regexp`
    Regexp,
    /// `between .. and ..`
    Between,
    /// `in (..)`
    In,
}

impl Infix {
    /// Returns true for members of the (non-chaining) comparison family.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        match self {
            Self::Binary(op) => matches!(
                op,
                Op::Eq | Op::NotEq | Op::Gt | Op::GtEq | Op::Lt | Op::LtEq
            ),
            _ => true,
        }
    }
}

/// Converts a token to an infix form.
#[must_use]
pub fn token_to_infix(token: &Token) -> Option<Infix> {
    let op = match &token.kind {
        TokenKind::LogicalOr => Op::Or,
        TokenKind::LogicalAnd => Op::And,
        TokenKind::Eq => Op::Eq,
        TokenKind::NotEq => Op::NotEq,
        TokenKind::Gt => Op::Gt,
        TokenKind::GtEq => Op::GtEq,
        TokenKind::Lt => Op::Lt,
        TokenKind::LtEq => Op::LtEq,
        TokenKind::BitOr => Op::BitOr,
        TokenKind::BitAnd => Op::BitAnd,
        TokenKind::LeftShift => Op::LeftShift,
        TokenKind::RightShift => Op::RightShift,
        TokenKind::Plus => Op::Add,
        TokenKind::Minus => Op::Sub,
        TokenKind::Star => Op::Mul,
        TokenKind::Slash => Op::Div,
        TokenKind::Percent => Op::Mod,
        TokenKind::Caret => Op::Pow,
        TokenKind::Identifier(_) => {
            return match token.keyword()? {
                Keyword::Or => Some(Infix::Binary(Op::Or)),
                Keyword::Xor => Some(Infix::Binary(Op::Xor)),
                Keyword::And => Some(Infix::Binary(Op::And)),
                Keyword::Div => Some(Infix::Binary(Op::IntDiv)),
                Keyword::Is => Some(Infix::Is),
                Keyword::Not => Some(Infix::Not),
                Keyword::Like => Some(Infix::Like),
                Keyword::Regexp => Some(Infix::Regexp),
                Keyword::Between => Some(Infix::Between),
                Keyword::In => Some(Infix::In),
                _ => None,
            };
        }
        _ => return None,
    };
    Some(Infix::Binary(op))
}

/// Returns the infix binding power.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
/// - Right associative: left_bp > right_bp
#[must_use]
pub const fn infix_binding_power(infix: Infix) -> (u8, u8) {
    match infix {
        Infix::Binary(op) => match op {
            // Logical OR (lowest precedence)
            Op::Or => (1, 2),

            Op::Xor => (3, 4),

            // Logical AND
            Op::And => (5, 6),

            // Bitwise
            Op::BitOr | Op::BitAnd => (11, 12),

            // Bit shifts
            Op::LeftShift | Op::RightShift => (13, 14),

            // Additive, including interval arithmetic
            Op::Add | Op::Sub => (15, 16),

            // Multiplicative
            Op::Mul | Op::Div | Op::IntDiv | Op::Mod => (MULTIPLICATIVE_BP, 18),

            // Power, right associative and tighter than prefix operators
            Op::Pow => (22, 21),

            // Comparisons
            _ => (9, COMPARISON_OPERAND_BP),
        },
        Infix::Is | Infix::Not | Infix::Like | Infix::Regexp | Infix::Between | Infix::In => {
            (9, COMPARISON_OPERAND_BP)
        }
    }
}

/// Converts a token to a prefix operator.
#[must_use]
pub fn token_to_unary_op(token: &Token) -> Option<Op> {
    match &token.kind {
        TokenKind::Minus => Some(Op::Neg),
        TokenKind::Plus => Some(Op::Plus),
        TokenKind::BitNot => Some(Op::BitNot),
        TokenKind::Bang => Some(Op::Bang),
        TokenKind::Identifier(_) if token.keyword() == Some(Keyword::Not) => Some(Op::Not),
        _ => None,
    }
}

/// Returns the binding power of a prefix operator's operand.
#[must_use]
pub const fn prefix_binding_power(op: Op) -> u8 {
    match op {
        // `not a == b` negates the comparison
        Op::Not => 7,
        _ => 19,
    }
}
