//! Parse error type.
//!
//! Exactly one fatal error is raised per failed parse; there is no
//! recovery. The message formats are part of the stable surface of the
//! compiler and match the original diagnostics character for
//! character.

use thiserror::Error;

/// A fatal syntax error with its source position.
///
/// `column` is the byte distance from the last newline before the
/// offending lexeme (see [`lc_lex::find_column`]); end-of-input errors
/// carry no position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parser ran into a lexeme the scanner could not classify.
    #[error("Unknown literal '{literal}' at {line}:{column}")]
    UnknownLiteral {
        literal: String,
        line: u32,
        column: usize,
    },

    /// A well-formed lexeme appeared where the grammar does not allow
    /// it. `value` is pre-rendered: quoted for textual lexemes, bare
    /// for numbers.
    #[error("Syntax error. Unexpected token {tag}[{value}] at {line}:{column}")]
    UnexpectedToken {
        tag: &'static str,
        value: String,
        line: u32,
        column: usize,
    },

    /// The input ended in the middle of a production.
    #[error("Syntax error at EOF.")]
    UnexpectedEof,
}
