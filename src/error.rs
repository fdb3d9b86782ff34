/// Diagnostic values.
///
/// Defines the `Error` struct shared by the lexer and the parser: a span of
/// source, a kind and a detail message, with rendering to a one-line message
/// and to an underlined source excerpt.
pub mod diagnostic;
/// Error kinds.
///
/// The closed set of failures the front end reports, split between lexical
/// failures (illegal characters, oversized literals) and syntax failures.
pub mod kind;

pub use diagnostic::Error;
pub use kind::ErrorKind;
