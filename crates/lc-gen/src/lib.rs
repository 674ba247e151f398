//! lc-gen - Python code generation for the L language.
//!
//! Lowers the parsed AST into a self-contained Python script: a
//! preamble importing `argv`, one `def` block per function in source
//! order, and a bootstrap footer that calls `main` on the command-line
//! arguments. Generation is a pure function of the tree; the closed AST
//! makes ill-shaped input unrepresentable, so there is nothing to fail
//! on.
//!
//! # Example
//!
//! ```
//! let (program, _) = lc_par::parse("function main() { write(2 + 3); }").unwrap();
//! let lines = lc_gen::generate(&program);
//! assert!(lines.contains(&"    print((2+3))".to_string()));
//! ```

mod python;

pub use python::{generate, PyGenerator};

#[cfg(test)]
mod tests;
