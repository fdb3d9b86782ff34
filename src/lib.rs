//! # fal
//!
//! fal is the front end of the FAL arithmetic expression language.
//! It turns source text into an abstract syntax tree, reporting precise,
//! position-anchored diagnostics for invalid input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Node,
    frontend::{
        lexer::Lexer,
        parser::{ParseOptions, Parser},
        token::Token,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum produced by the parser, together with
/// the literal values and binary operators it is built from.
///
/// # Responsibilities
/// - Defines the literal and binary-operation node types.
/// - Exposes the source span of every sub-expression for later stages.
pub mod ast;
/// Provides the diagnostic type shared by lexing and parsing.
///
/// Every failure carries its kind, a detail message and the span of source it
/// refers to, and renders to a one-line message naming the file and line.
pub mod error;
/// Turns source text into an AST.
///
/// Ties together position tracking, tokens, the lexer and the parser.
///
/// # Responsibilities
/// - Tracks positions in the source for spans and diagnostics.
/// - Tokenizes input and parses the token stream.
/// - Reports the first failure of either phase.
pub mod frontend;

pub use error::{Error, ErrorKind};

/// Lexes and parses `text`, returning its AST.
///
/// `fname` names the source in diagnostics only.
///
/// # Errors
/// Returns the first lexical error, or the first syntax error if lexing
/// succeeds. The parser never runs on input the lexer rejected.
///
/// # Examples
/// ```
/// use fal::run;
///
/// let ast = run("t", "12 + 4.5").unwrap();
/// assert_eq!(ast.to_string(), "(INT:12, PLUS, FLOAT:4.5)");
///
/// // `x` is not part of the language.
/// assert!(run("t", "x + 1").is_err());
/// ```
pub fn run(fname: &str, text: &str) -> Result<Node, Error> {
    run_with_options(fname, text, &ParseOptions::default())
}

/// Like [`run`], with parser behaviour set by `options`.
///
/// # Examples
/// ```
/// use fal::{frontend::parser::ParseOptions, run_with_options};
///
/// let options = ParseOptions { skip_leading_tokens: 2 };
/// let ast = run_with_options("t", "9 9 2 + 3", &options).unwrap();
/// assert_eq!(ast.to_string(), "(INT:2, PLUS, INT:3)");
/// ```
pub fn run_with_options(fname: &str, text: &str, options: &ParseOptions) -> Result<Node, Error> {
    let mut lexer = Lexer::new(fname, text);
    let tokens = lexer.make_tokens().inspect_err(|e| debug!(kind = ?e.kind, "lexing failed"))?;
    debug!(fname, count = tokens.len(), "lexed source");

    let mut parser = Parser::with_options(&tokens, lexer.position().copy(), options);
    let ast = parser.parse()
                    .inspect_err(|e| debug!(kind = ?e.kind, "parsing failed"))?;
    debug!(fname, %ast, "parsed source");

    Ok(ast)
}

/// Runs the lexer alone.
///
/// # Errors
/// Returns the first lexical error.
///
/// # Examples
/// ```
/// use fal::tokenize;
///
/// let tokens = tokenize("t", "3.14 * (2)").unwrap();
/// let printed: Vec<String> = tokens.iter().map(ToString::to_string).collect();
/// assert_eq!(printed, ["FLOAT:3.14", "MUL", "LPAREN", "INT:2", "RPAREN"]);
/// ```
pub fn tokenize(fname: &str, text: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(fname, text).make_tokens()
}
