use crate::{
    error::ErrorKind,
    frontend::{position::Position, token::Token},
};

/// A diagnostic anchored to a span of source text.
///
/// Both the lexer and the parser report failures with this type. The span
/// `[pos_start, pos_end)` covers the offending text; `details` is a short
/// message naming it.
///
/// # Example
/// ```
/// use fal::{error::ErrorKind, run};
///
/// let err = run("test", "5 + & ").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::IllegalCharacter);
/// assert_eq!(err.as_string(),
///            "Illegal Character, character not defined: \n[&] on File test, line 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Where the offending text starts.
    pub pos_start: Position,
    /// Where the offending text ends (exclusive).
    pub pos_end:   Position,
    /// What went wrong.
    pub kind:      ErrorKind,
    /// Human-readable detail naming the offending text.
    pub details:   String,
}

impl Error {
    /// Creates a diagnostic with arbitrary details.
    pub fn new(pos_start: Position,
               pos_end: Position,
               kind: ErrorKind,
               details: impl Into<String>)
               -> Self {
        Self { pos_start,
               pos_end,
               kind,
               details: details.into() }
    }

    /// A character that starts no token.
    #[must_use]
    pub fn illegal_character(pos_start: Position, pos_end: Position, ch: char) -> Self {
        Self::new(pos_start, pos_end, ErrorKind::IllegalCharacter, bracketed(ch))
    }

    /// An integer literal too large to represent.
    #[must_use]
    pub fn literal_too_large(pos_start: Position, pos_end: Position, literal: &str) -> Self {
        Self::new(pos_start, pos_end, ErrorKind::LiteralTooLarge, bracketed(literal))
    }

    /// A token that does not fit the grammar where it was found.
    #[must_use]
    pub fn unexpected_token(token: &Token, expected: &str) -> Self {
        Self::new(token.pos_start.copy(),
                  token.pos_end.copy(),
                  ErrorKind::UnexpectedToken,
                  bracketed(format_args!("expected {expected}, found {token}")))
    }

    /// A missing `)`. `found` is the token standing in its place, if any.
    #[must_use]
    pub fn expected_closing_paren(found: Option<&Token>, end: &Position) -> Self {
        match found {
            Some(token) => Self::new(token.pos_start.copy(),
                                     token.pos_end.copy(),
                                     ErrorKind::ExpectedClosingParen,
                                     bracketed(format_args!("expected ')', found {token}"))),
            None => Self::new(end.copy(),
                              end.copy(),
                              ErrorKind::ExpectedClosingParen,
                              bracketed("expected ')', found end of input")),
        }
    }

    /// The input ended where `expected` was required.
    #[must_use]
    pub fn unexpected_end_of_input(end: &Position, expected: &str) -> Self {
        Self::new(end.copy(),
                  end.copy(),
                  ErrorKind::UnexpectedEndOfInput,
                  bracketed(format_args!("expected {expected}")))
    }

    /// An opening parenthesis past the nesting limit.
    #[must_use]
    pub fn nesting_too_deep(token: &Token, limit: usize) -> Self {
        Self::new(token.pos_start.copy(),
                  token.pos_end.copy(),
                  ErrorKind::NestingTooDeep,
                  bracketed(format_args!("more than {limit} nested '('")))
    }

    /// Renders the diagnostic on one logical line.
    ///
    /// The kind and details are followed directly by the file name and the
    /// 1-based line number of `pos_start`.
    #[must_use]
    pub fn as_string(&self) -> String {
        format!("{}: {}File {}, line {}",
                self.kind,
                self.details,
                self.pos_start.fname,
                self.pos_start.line + 1)
    }

    /// The source line of `pos_start` with carets under the offending span.
    ///
    /// A span running past the end of its line is underlined to the end of
    /// the line. At least one caret is always printed.
    ///
    /// # Example
    /// ```
    /// use fal::run;
    ///
    /// let err = run("test", "1 + $").unwrap_err();
    /// assert_eq!(err.excerpt(), "1 + $\n    ^");
    /// ```
    #[must_use]
    pub fn excerpt(&self) -> String {
        let line = self.pos_start.line_text();
        let start = self.pos_start.col;
        let end = if self.pos_end.line == self.pos_start.line {
            self.pos_end.col
        } else {
            line.chars().count()
        };
        let width = end.saturating_sub(start).max(1);

        format!("{line}\n{}{}", " ".repeat(start), "^".repeat(width))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl std::error::Error for Error {}

/// Wraps the offending text the way every diagnostic quotes it.
fn bracketed(subject: impl std::fmt::Display) -> String {
    format!("\n[{subject}] on ")
}
