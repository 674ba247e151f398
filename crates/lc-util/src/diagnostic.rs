//! Diagnostic collection.
//!
//! Fatal errors in this compiler are typed values returned through
//! `Result`; the handler exists for everything non-fatal. A handler is
//! created per compile invocation and dropped with it, so no diagnostic
//! state leaks between runs.

use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that fails the compile.
    Error,
    /// A warning; never affects the outcome of the compile.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the message.
    pub level: Level,
    /// Human-readable message text.
    pub message: String,
}

/// Collects diagnostics for one compile invocation.
///
/// # Example
///
/// ```
/// use lc_util::Handler;
///
/// let mut handler = Handler::new();
/// handler.warn("main function is not defined");
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warnings().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            level: Level::Warning,
            message: message.into(),
        });
    }

    /// Records an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            level: Level::Error,
            message: message.into(),
        });
    }

    /// True if any error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    /// All recorded diagnostics, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The messages of all warning-level diagnostics, in order.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
            .map(|d| d.message.as_str())
    }
}
