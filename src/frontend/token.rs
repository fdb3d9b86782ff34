use logos::Logos;
use ordered_float::OrderedFloat;

use crate::{
    ast::{BinaryOperator, LiteralValue},
    frontend::position::Position,
};

/// Reasons the table-driven recognizer can reject input.
///
/// The default variant is what `logos` reports when no rule matches the
/// character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// No token starts with the character under the cursor.
    #[default]
    IllegalCharacter,
    /// A numeric literal cannot be represented.
    LiteralTooLarge,
}

/// The kind of a lexical token, with the value of numeric literals.
///
/// Spaces and tabs are skipped. Every other character that does not start one
/// of these tokens, newlines included, is illegal.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t]+")]
#[logos(error = LexFailure)]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// Literals with a single decimal point, such as `3.14` or `3.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(OrderedFloat<f64>),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl TokenKind {
    /// The upper-case type name used when printing tokens, e.g. `INT`.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
        }
    }

    /// The literal value carried by numeric tokens.
    #[must_use]
    pub fn value(self) -> Option<LiteralValue> {
        match self {
            Self::Int(n) => Some(n.into()),
            Self::Float(x) => Some(x.into_inner().into()),
            _ => None,
        }
    }

    /// Maps an operator token to its binary operator.
    ///
    /// # Example
    /// ```
    /// use fal::{ast::BinaryOperator, frontend::token::TokenKind};
    ///
    /// assert_eq!(TokenKind::Mul.binary_operator(), Some(BinaryOperator::Mul));
    /// assert_eq!(TokenKind::LParen.binary_operator(), None);
    /// ```
    #[must_use]
    pub const fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Mul => Some(BinaryOperator::Mul),
            Self::Div => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}:{value}", self.type_name()),
            None => f.write_str(self.type_name()),
        }
    }
}

/// A token together with the span of source it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What was read.
    pub kind:      TokenKind,
    /// Position of the first character of the token.
    pub pos_start: Position,
    /// Position just past the last character of the token.
    pub pos_end:   Position,
}

impl Token {
    /// Creates a token spanning `[pos_start, pos_end)`.
    #[must_use]
    pub const fn new(kind: TokenKind, pos_start: Position, pos_end: Position) -> Self {
        Self { kind,
               pos_start,
               pos_end }
    }

    /// The literal value of numeric tokens, `None` for operators and parens.
    #[must_use]
    pub fn value(&self) -> Option<LiteralValue> {
        self.kind.value()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns `LexFailure::LiteralTooLarge` when the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Result<i64, LexFailure> {
    lex.slice().parse().map_err(|_| LexFailure::LiteralTooLarge)
}

/// Parses a floating-point literal from the current token slice.
///
/// Every slice the `Float` rule admits is valid `f64` syntax, and overly long
/// literals saturate to infinity, so parsing does not fail in practice. A
/// failure would still be the literal's fault and is reported as such.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Result<OrderedFloat<f64>, LexFailure> {
    lex.slice()
       .parse()
       .map(OrderedFloat)
       .map_err(|_| LexFailure::LiteralTooLarge)
}
