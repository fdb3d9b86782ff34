/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the complete token
/// sequence, or the first lexical error with its exact location.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans.
/// - Scans integer and decimal literals.
/// - Reports illegal characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees with the usual arithmetic
///   precedence and left associativity.
/// - Validates the grammar, reporting errors anchored at the offending token.
pub mod parser;
/// Source positions.
///
/// A cursor over the source text tracking byte offset, line and column, used
/// to anchor tokens and diagnostics.
pub mod position;
/// Lexical tokens.
///
/// Declares the token kinds, their literal values, and the table-driven
/// recognizer rules used by the lexer.
pub mod token;
