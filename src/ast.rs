use crate::frontend::{position::Position, token::Token};

/// Represents a literal value in the language.
///
/// `LiteralValue` is the raw number carried by a numeric token. Integer and
/// real literals are kept apart so later stages can tell `3` from `3.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part, so `3.0` never prints as `3`.
            Self::Real(x) => write!(f, "{x:?}"),
        }
    }
}

/// The operators a binary node can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// A node of the abstract syntax tree.
///
/// The tree is strictly owned from parent to child: every `BinOp` holds its
/// two operands in boxes and there are no back references.
///
/// Nodes print in a compact nested form, e.g. `(INT:2, PLUS, (INT:3, MUL,
/// INT:4))` for `2 + 3 * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A numeric literal. `tok` is always an `INT` or `FLOAT` token.
    Number {
        /// The literal token.
        tok: Token,
    },
    /// A binary operation. `op` is always `PLUS`, `MINUS`, `MUL` or `DIV`.
    BinOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token.
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Position of the first character of the expression.
    #[must_use]
    pub fn pos_start(&self) -> &Position {
        match self {
            Self::Number { tok } => &tok.pos_start,
            Self::BinOp { left, .. } => left.pos_start(),
        }
    }

    /// Position just past the last character of the expression.
    ///
    /// Closing parentheses around a sub-expression are not part of its span.
    #[must_use]
    pub fn pos_end(&self) -> &Position {
        match self {
            Self::Number { tok } => &tok.pos_end,
            Self::BinOp { right, .. } => right.pos_end(),
        }
    }

    /// The operator of a binary node, `None` for literals.
    #[must_use]
    pub const fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Number { .. } => None,
            Self::BinOp { op, .. } => op.kind.binary_operator(),
        }
    }

    /// The value of a literal node, `None` for binary nodes.
    #[must_use]
    pub fn value(&self) -> Option<LiteralValue> {
        match self {
            Self::Number { tok } => tok.value(),
            Self::BinOp { .. } => None,
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { tok } => write!(f, "{tok}"),
            Self::BinOp { left, op, right } => write!(f, "({left}, {op}, {right})"),
        }
    }
}
