//! lc-util - Shared infrastructure for the L compiler.
//!
//! This crate carries the pieces every pipeline phase needs: the
//! diagnostic handler used to collect non-fatal warnings, the interned
//! [`Symbol`] type for identifiers, and the [`DumpFormat`] switch shared
//! by the token and AST dump surfaces.

mod diagnostic;
mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use symbol::Symbol;

use std::fmt;
use std::str::FromStr;

/// Output format for the diagnostic dump surfaces (tokens and AST).
///
/// Mirrors the `-f`/`--format` option of the driver; `txt` is the
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    /// Plain-text rendering, one node or lexeme per line.
    #[default]
    Txt,
    /// Pretty-printed JSON with two-space indentation.
    Json,
}

impl FromStr for DumpFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(DumpFormat::Txt),
            "json" => Ok(DumpFormat::Json),
            other => Err(format!(
                "Unknown format '{other}'. Only 'txt' or 'json' are allowed."
            )),
        }
    }
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpFormat::Txt => write!(f, "txt"),
            DumpFormat::Json => write!(f, "json"),
        }
    }
}
