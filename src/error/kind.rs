/// Classifies every diagnostic the front end can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The lexer met a character that starts no token.
    IllegalCharacter,
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge,
    /// The parser found a token that cannot appear where it stands.
    UnexpectedToken,
    /// A `(` was never closed.
    ExpectedClosingParen,
    /// The input stopped where an operand was required.
    UnexpectedEndOfInput,
    /// Parentheses are nested deeper than the parser accepts.
    NestingTooDeep,
}

impl ErrorKind {
    /// The name printed in front of a diagnostic.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IllegalCharacter => "Illegal Character, character not defined",
            Self::LiteralTooLarge => "Illegal Literal, number too large",
            Self::UnexpectedToken => "Invalid Syntax, unexpected token",
            Self::ExpectedClosingParen => "Invalid Syntax, expected ')'",
            Self::UnexpectedEndOfInput => "Invalid Syntax, unexpected end of input",
            Self::NestingTooDeep => "Invalid Syntax, nesting too deep",
        }
    }

    /// Whether the lexer, rather than the parser, raises this kind.
    #[must_use]
    pub const fn is_lexical(self) -> bool {
        matches!(self, Self::IllegalCharacter | Self::LiteralTooLarge)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
