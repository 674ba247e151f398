//! lc-lex - Lexical analysis for the L language.
//!
//! The scanner turns raw source text into a lazy stream of tagged
//! lexemes. Every character of the input is covered by exactly one of:
//! an ignored run (spaces, tabs, `//` comments), a newline run (which
//! advances the line counter and emits nothing), or a lexeme. Unknown
//! characters surface as `ERROR` lexemes rather than failures, so
//! scanning always runs to the end of the input.
//!
//! # Example
//!
//! ```
//! use lc_lex::{tokenize, Tag};
//!
//! let lexemes: Vec<_> = tokenize("write(1); @").collect();
//! assert_eq!(lexemes.len(), 6);
//! assert_eq!(lexemes[5].tag, Tag::Error);
//! ```

pub mod cursor;
mod dump;
mod scanner;
mod token;

pub use dump::dump_tokens;
pub use scanner::Lexer;
pub use token::{find_column, keyword_from_ident, LexValue, Lexeme, Tag};

#[cfg(test)]
mod edge_cases;

/// Tokenizes `source`, returning the lazy lexeme stream.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}
