//! The scanner: source text to lexeme stream.
//!
//! Classification follows a strict priority at every step: ignored runs
//! (spaces, tabs, `//` comments), newline runs (which only advance the
//! line counter), keywords, two-character operators before
//! one-character ones, numbers, identifiers. Anything left over becomes
//! a one-character `ERROR` lexeme and scanning continues, so the
//! scanner never fails.

use lc_util::Symbol;

use crate::cursor::Cursor;
use crate::token::{keyword_from_ident, LexValue, Lexeme, Tag};

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lexer for L source text.
///
/// Implements [`Iterator`], yielding lexemes lazily in source order
/// until the input is exhausted.
///
/// # Example
///
/// ```
/// use lc_lex::{tokenize, Tag};
///
/// let tags: Vec<Tag> = tokenize("let x = 1;").map(|lex| lex.tag).collect();
/// assert_eq!(tags, [Tag::Let, Tag::Ident, Tag::Assign, Tag::Int, Tag::Semicolon]);
/// ```
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next lexeme, or `None` at the end of the input.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        self.skip_ignored();

        if self.cursor.is_at_end() {
            return None;
        }

        let index = self.cursor.position();
        let lineno = self.cursor.line();

        let tag = match self.cursor.current_char() {
            '{' => self.single(Tag::LCurly),
            '}' => self.single(Tag::RCurly),
            '(' => self.single(Tag::LParen),
            ')' => self.single(Tag::RParen),
            ';' => self.single(Tag::Semicolon),
            ',' => self.single(Tag::Comma),
            '^' => self.single(Tag::Pow),
            '*' => self.single(Tag::Mul),
            // A second '/' would have started a comment, consumed above.
            '/' => self.single(Tag::Div),
            '+' => self.single(Tag::Add),
            '-' => self.single(Tag::Sub),
            '=' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    Tag::Equ
                } else {
                    Tag::Assign
                }
            }
            '!' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    Tag::Neq
                } else {
                    Tag::Not
                }
            }
            '<' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    Tag::Leq
                } else {
                    Tag::Les
                }
            }
            '>' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    Tag::Geq
                } else {
                    Tag::Grt
                }
            }
            '&' => {
                self.cursor.advance();
                if self.cursor.match_char('&') {
                    Tag::And
                } else {
                    // A lone '&' is not an operator of L.
                    Tag::Error
                }
            }
            '|' => {
                self.cursor.advance();
                if self.cursor.match_char('|') {
                    Tag::Or
                } else {
                    Tag::Error
                }
            }
            c if is_ident_start(c) => return Some(self.lex_identifier(index, lineno)),
            c if c.is_ascii_digit() => return Some(self.lex_number(index, lineno)),
            _ => self.single(Tag::Error),
        };

        let text = self.cursor.slice_from(index);
        Some(Lexeme {
            tag,
            value: LexValue::Text(Symbol::intern(text)),
            lineno,
            index,
        })
    }

    /// Consumes one character and returns `tag`.
    fn single(&mut self, tag: Tag) -> Tag {
        self.cursor.advance();
        tag
    }

    /// Lexes an identifier or keyword starting at `index`.
    fn lex_identifier(&mut self, index: usize, lineno: u32) -> Lexeme {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(index);
        Lexeme {
            tag: keyword_from_ident(text).unwrap_or(Tag::Ident),
            value: LexValue::Text(Symbol::intern(text)),
            lineno,
            index,
        }
    }

    /// Lexes an integer or floating-point literal starting at `index`.
    ///
    /// A float needs a digit on both sides of the decimal point; a
    /// trailing bare `.` is left for the next round (where it becomes
    /// an `ERROR` lexeme, `.` being no token of L).
    fn lex_number(&mut self, index: usize, lineno: u32) -> Lexeme {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let is_float =
            self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();

        let value = if is_float {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            LexValue::Float(self.cursor.slice_from(index).parse().unwrap_or(0.0))
        } else {
            LexValue::Int(self.cursor.slice_from(index).parse().unwrap_or(0))
        };

        Lexeme {
            tag: if is_float { Tag::Float } else { Tag::Int },
            value,
            lineno,
            index,
        }
    }

    /// Skips spaces, tabs, newline runs, and `//` comments. Newlines
    /// advance the cursor's line counter as they are consumed.
    fn skip_ignored(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\n' => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        self.next_lexeme()
    }
}
