use std::sync::Arc;

use logos::Logos;
use tracing::trace;

use crate::{
    error::{Error, ErrorKind},
    frontend::{
        position::Position,
        token::{LexFailure, Token, TokenKind},
    },
};

/// Turns source text into tokens.
///
/// Token recognition is delegated to the [`TokenKind`] automaton. The lexer
/// walks its own [`Position`] cursor over every character the automaton
/// consumes, skipped whitespace included, so each token and diagnostic gets an
/// exact line and column.
///
/// # Example
/// ```
/// use fal::frontend::{lexer::Lexer, token::TokenKind};
///
/// let tokens = Lexer::new("demo", "1 + 2").make_tokens().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Int(1), TokenKind::Plus, TokenKind::Int(2)]);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    text:         Arc<str>,
    pos:          Position,
    current_char: Option<char>,
}

impl Lexer {
    /// Creates a lexer with its cursor on the first character of `text`.
    pub fn new(fname: &str, text: &str) -> Self {
        let text: Arc<str> = Arc::from(text);
        let pos = Position::new(fname, Arc::clone(&text));
        let current_char = text.chars().next();

        Self { text,
               pos,
               current_char }
    }

    /// Puts the cursor back on the first character.
    fn rewind(&mut self) {
        self.pos = Position::new(Arc::clone(&self.pos.fname), Arc::clone(&self.text));
        self.current_char = self.text.chars().next();
    }

    /// The cursor. After [`Lexer::make_tokens`] succeeds it sits at the end of
    /// the input.
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.pos
    }

    /// The character under the cursor, `None` once the input is exhausted.
    #[must_use]
    pub const fn current_char(&self) -> Option<char> {
        self.current_char
    }

    /// Tokenizes the whole input.
    ///
    /// Lexing stops at the first illegal character; no partial token list is
    /// returned. Every call lexes the input from the start.
    ///
    /// # Errors
    /// - `IllegalCharacter` spanning the first character that starts no token.
    /// - `LiteralTooLarge` spanning an integer literal that overflows `i64`.
    pub fn make_tokens(&mut self) -> Result<Vec<Token>, Error> {
        self.rewind();
        let text = Arc::clone(&self.text);
        let mut lexemes = TokenKind::lexer(&*text);
        let mut tokens = Vec::new();

        while let Some(result) = lexemes.next() {
            let span = lexemes.span();
            self.advance_to(span.start);
            let pos_start = self.pos.copy();

            match result {
                Ok(kind) => {
                    self.advance_to(span.end);
                    let token = Token::new(kind, pos_start, self.pos.copy());
                    trace!(token = %token,
                           line = token.pos_start.line,
                           col = token.pos_start.col,
                           "lexed token");
                    tokens.push(token);
                },
                Err(LexFailure::IllegalCharacter) => {
                    return Err(self.illegal_character(pos_start));
                },
                Err(LexFailure::LiteralTooLarge) => {
                    self.advance_to(span.end);
                    return Err(Error::literal_too_large(pos_start,
                                                        self.pos.copy(),
                                                        lexemes.slice()));
                },
            }
        }

        self.advance_to(self.text.len());
        Ok(tokens)
    }

    /// Consumes the character under the cursor and reports it as illegal.
    ///
    /// Logos only fails on input it has not consumed, so the cursor is never
    /// at the end here; should it be, the error names the end of input.
    fn illegal_character(&mut self, pos_start: Position) -> Error {
        match self.current_char {
            Some(ch) => {
                self.advance();
                Error::illegal_character(pos_start, self.pos.copy(), ch)
            },
            None => Error::new(pos_start.copy(),
                               pos_start,
                               ErrorKind::IllegalCharacter,
                               "\n[end of input] on "),
        }
    }

    /// Steps the cursor over the current character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char {
            self.pos.advance(ch);
            self.current_char = self.text[self.pos.index..].chars().next();
        }
    }

    /// Steps the cursor forward until it reaches byte offset `index`.
    fn advance_to(&mut self, index: usize) {
        while self.pos.index < index && self.current_char.is_some() {
            self.advance();
        }
    }
}
