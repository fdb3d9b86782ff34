use std::{iter::Peekable, slice};

use crate::{
    error::Error,
    frontend::{position::Position, token::Token},
};

/// Entry point and operand parsing.
///
/// Holds `parse`, which runs the whole grammar and rejects trailing tokens,
/// and `factor`, the highest-precedence rule (literals and groupings).
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative tiers on top of one shared
/// left-associative folding helper.
pub mod binary;

pub type ParseResult<T> = Result<T, Error>;

/// Deepest parenthesis nesting the parser descends into.
pub const MAX_NESTING: usize = 256;

/// Knobs that change how a token stream is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Number of tokens at the front of the stream the parser ignores.
    ///
    /// The legacy front end started reading at the third token; set this to
    /// `2` to reproduce it. Defaults to `0`.
    pub skip_leading_tokens: usize,
}

/// Builds an AST from a token sequence by recursive descent.
///
/// ```text
/// expr   := term (("+" | "-") term)*
/// term   := factor (("*" | "/") factor)*
/// factor := INT | FLOAT | "(" expr ")"
/// ```
///
/// The cursor only ever moves forward. There is no end-of-input token; the
/// parser is handed the position just past the input instead, and anchors
/// end-of-input diagnostics there.
///
/// Groupings may nest at most [`MAX_NESTING`] deep.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
    end:    Position,
    depth:  usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser reading `tokens` from the first one.
    #[must_use]
    pub fn new(tokens: &'a [Token], end: Position) -> Self {
        Self::with_options(tokens, end, &ParseOptions::default())
    }

    /// Creates a parser configured by `options`.
    #[must_use]
    pub fn with_options(tokens: &'a [Token], end: Position, options: &ParseOptions) -> Self {
        let skipped = options.skip_leading_tokens.min(tokens.len());

        Self { tokens: tokens[skipped..].iter().peekable(),
               end,
               depth: 0 }
    }

    /// The token under the cursor, `None` past the last token.
    fn current(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Consumes and returns the token under the cursor.
    fn advance(&mut self) -> Option<&'a Token> {
        self.tokens.next()
    }
}
