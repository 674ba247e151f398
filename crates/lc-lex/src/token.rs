//! Lexeme model for the L language.
//!
//! A lexeme is a tagged span of source text: the [`Tag`] classifies it,
//! the [`LexValue`] carries the matched text or parsed number, and
//! `lineno`/`index` locate it for diagnostics.

use std::fmt;

use lc_util::Symbol;
use serde::ser::{Serialize, Serializer};

/// The closed set of lexeme tags.
///
/// Tag names (as rendered by [`Tag::name`]) are part of the stable dump
/// and error-message surface, e.g. `Syntax error. Unexpected token
/// SEMICOLON[';'] at 2:14`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`, minus the keywords.
    Ident,
    /// Keyword `function`.
    Func,
    /// Keyword `let`.
    Let,
    /// Integer literal.
    Int,
    /// Floating-point literal.
    Float,
    /// Keyword `if`.
    If,
    /// Keyword `else`.
    Else,
    /// Keyword `while`.
    While,
    /// Keyword `read`.
    Read,
    /// Keyword `write`.
    Write,
    /// Keyword `return`.
    Return,
    /// `=`
    Assign,
    /// `^`
    Pow,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `==`
    Equ,
    /// `!=`
    Neq,
    /// `<=`
    Leq,
    /// `<`
    Les,
    /// `>=`
    Geq,
    /// `>`
    Grt,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// A single character the scanner could not classify. Never fatal
    /// during scanning; the parser turns it into an `Unknown literal`
    /// error if it reaches the grammar.
    Error,
}

impl Tag {
    /// The stable upper-case name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Ident => "IDENT",
            Tag::Func => "FUNC",
            Tag::Let => "LET",
            Tag::Int => "INT",
            Tag::Float => "FLOAT",
            Tag::If => "IF",
            Tag::Else => "ELSE",
            Tag::While => "WHILE",
            Tag::Read => "READ",
            Tag::Write => "WRITE",
            Tag::Return => "RETURN",
            Tag::Assign => "ASSIGN",
            Tag::Pow => "POW",
            Tag::Mul => "MUL",
            Tag::Div => "DIV",
            Tag::Add => "ADD",
            Tag::Sub => "SUB",
            Tag::Equ => "EQU",
            Tag::Neq => "NEQ",
            Tag::Leq => "LEQ",
            Tag::Les => "LES",
            Tag::Geq => "GEQ",
            Tag::Grt => "GRT",
            Tag::Not => "NOT",
            Tag::And => "AND",
            Tag::Or => "OR",
            Tag::LCurly => "LCURLY",
            Tag::RCurly => "RCURLY",
            Tag::LParen => "LPAREN",
            Tag::RParen => "RPAREN",
            Tag::Semicolon => "SEMICOLON",
            Tag::Comma => "COMMA",
            Tag::Error => "ERROR",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps identifier text to its keyword tag, if it is reserved.
pub fn keyword_from_ident(text: &str) -> Option<Tag> {
    match text {
        "function" => Some(Tag::Func),
        "let" => Some(Tag::Let),
        "if" => Some(Tag::If),
        "else" => Some(Tag::Else),
        "while" => Some(Tag::While),
        "read" => Some(Tag::Read),
        "write" => Some(Tag::Write),
        "return" => Some(Tag::Return),
        _ => None,
    }
}

/// The value attached to a lexeme.
///
/// Identifiers, keywords, operators, punctuation, and error characters
/// carry their matched text; numeric literals carry the parsed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LexValue {
    /// Matched source text, interned.
    Text(Symbol),
    /// Parsed integer value.
    Int(i64),
    /// Parsed floating value.
    Float(f64),
}

impl LexValue {
    /// The matched text, for textual values.
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            LexValue::Text(sym) => Some(sym.as_str()),
            _ => None,
        }
    }

    /// Raw rendering, as used by the plain-text token dump. Textual
    /// values print unquoted; floats always keep a decimal point.
    pub fn raw(&self) -> String {
        match self {
            LexValue::Text(sym) => sym.as_str().to_string(),
            LexValue::Int(v) => v.to_string(),
            LexValue::Float(v) => format!("{v:?}"),
        }
    }

    /// Quoted rendering, as used in syntax error messages: textual
    /// values in single quotes, numbers bare.
    pub fn repr(&self) -> String {
        match self {
            LexValue::Text(sym) => format!("'{}'", sym.as_str()),
            LexValue::Int(v) => v.to_string(),
            LexValue::Float(v) => format!("{v:?}"),
        }
    }
}

impl fmt::Display for LexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

impl Serialize for LexValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LexValue::Text(sym) => serializer.serialize_str(sym.as_str()),
            LexValue::Int(v) => serializer.serialize_i64(*v),
            LexValue::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

/// A single scanned lexeme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lexeme {
    /// Classification of the matched span.
    pub tag: Tag,
    /// Matched text or parsed numeric value.
    pub value: LexValue,
    /// Line the lexeme starts on (1-based).
    pub lineno: u32,
    /// Byte offset of the lexeme from the start of the input.
    pub index: usize,
}

/// Computes the column of a byte index for diagnostics.
///
/// The column is the distance from the last newline strictly before the
/// index (or from the start of the input on the first line), matching
/// the original compiler's reporting.
pub fn find_column(text: &str, index: usize) -> usize {
    let index = index.min(text.len());
    let last_cr = text[..index].rfind('\n').unwrap_or(0);
    index - last_cr
}
