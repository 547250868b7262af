//! Token types for the expression lexer.

use super::Span;

/// Reserved keywords of the expression language.
///
/// The lexer emits every word as [`TokenKind::Identifier`]; the parser consults
/// this table (case-insensitively) to decide whether a word is an operator
/// keyword. Reserved words cannot be used as bare identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Logical operators
    And,
    Or,
    Xor,
    Not,

    // Comparison family
    Is,
    Like,
    Regexp,
    Escape,
    Between,
    In,

    // Arithmetic
    Interval,
    Div,

    // Literals
    True,
    False,
    Null,

    // Projection and ordering
    As,
    Asc,
    Desc,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "XOR" => Some(Self::Xor),
            "NOT" => Some(Self::Not),
            "IS" => Some(Self::Is),
            "LIKE" => Some(Self::Like),
            "REGEXP" => Some(Self::Regexp),
            "ESCAPE" => Some(Self::Escape),
            "BETWEEN" => Some(Self::Between),
            "IN" => Some(Self::In),
            "INTERVAL" => Some(Self::Interval),
            "DIV" => Some(Self::Div),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "NULL" => Some(Self::Null),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Is => "IS",
            Self::Like => "LIKE",
            Self::Regexp => "REGEXP",
            Self::Escape => "ESCAPE",
            Self::Between => "BETWEEN",
            Self::In => "IN",
            Self::Interval => "INTERVAL",
            Self::Div => "DIV",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Time units accepted after `interval <amount>`.
///
/// Units are not reserved: `day` is still a valid column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    Microsecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    SecondMicrosecond,
    MinuteMicrosecond,
    MinuteSecond,
    HourMicrosecond,
    HourSecond,
    HourMinute,
    DayMicrosecond,
    DaySecond,
    DayMinute,
    DayHour,
    YearMonth,
}

impl IntervalUnit {
    /// Attempts to parse a unit from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "MICROSECOND" => Some(Self::Microsecond),
            "SECOND" => Some(Self::Second),
            "MINUTE" => Some(Self::Minute),
            "HOUR" => Some(Self::Hour),
            "DAY" => Some(Self::Day),
            "WEEK" => Some(Self::Week),
            "MONTH" => Some(Self::Month),
            "QUARTER" => Some(Self::Quarter),
            "YEAR" => Some(Self::Year),
            "SECOND_MICROSECOND" => Some(Self::SecondMicrosecond),
            "MINUTE_MICROSECOND" => Some(Self::MinuteMicrosecond),
            "MINUTE_SECOND" => Some(Self::MinuteSecond),
            "HOUR_MICROSECOND" => Some(Self::HourMicrosecond),
            "HOUR_SECOND" => Some(Self::HourSecond),
            "HOUR_MINUTE" => Some(Self::HourMinute),
            "DAY_MICROSECOND" => Some(Self::DayMicrosecond),
            "DAY_SECOND" => Some(Self::DaySecond),
            "DAY_MINUTE" => Some(Self::DayMinute),
            "DAY_HOUR" => Some(Self::DayHour),
            "YEAR_MONTH" => Some(Self::YearMonth),
            _ => None,
        }
    }

    /// Returns the canonical (upper-case) unit name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Microsecond => "MICROSECOND",
            Self::Second => "SECOND",
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Quarter => "QUARTER",
            Self::Year => "YEAR",
            Self::SecondMicrosecond => "SECOND_MICROSECOND",
            Self::MinuteMicrosecond => "MINUTE_MICROSECOND",
            Self::MinuteSecond => "MINUTE_SECOND",
            Self::HourMicrosecond => "HOUR_MICROSECOND",
            Self::HourSecond => "HOUR_SECOND",
            Self::HourMinute => "HOUR_MINUTE",
            Self::DayMicrosecond => "DAY_MICROSECOND",
            Self::DaySecond => "DAY_SECOND",
            Self::DayMinute => "DAY_MINUTE",
            Self::DayHour => "DAY_HOUR",
            Self::YearMonth => "YEAR_MONTH",
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42). Signs are separate tokens.
    Integer(u64),
    /// Float literal (e.g., 3.14, .5, 1e-4)
    Float(f64),
    /// String literal, unescaped (e.g., 'hello' or "hello")
    String(String),
    /// Binary literal (e.g., X'1234')
    Blob(Vec<u8>),

    // Identifiers
    /// Bare word; may turn out to be a keyword
    Identifier(String),
    /// Backtick-quoted identifier, unescaped
    QuotedIdentifier(String),

    // Placeholders
    /// ?
    Question,
    /// :3
    NumberedParam(String),
    /// :name
    NamedParam(String),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// **
    DoubleStar,
    /// /
    Slash,
    /// %
    Percent,
    /// ^
    Caret,
    /// = or ==
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// &&
    LogicalAnd,
    /// ||
    LogicalOr,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ~
    BitNot,
    /// !
    Bang,
    /// <<
    LeftShift,
    /// >>
    RightShift,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// :
    Colon,
    /// @
    At,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

/// A token with its span in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a bare word spelling one.
    ///
    /// Quoted identifiers never match.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Identifier(word) => Keyword::from_str(word),
            _ => None,
        }
    }
}
