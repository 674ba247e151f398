//! lc-par - Parser for the L language.
//!
//! Consumes the lexeme stream of `lc-lex` and produces the typed AST of
//! [`ast`]. The grammar is the one of the original compiler:
//!
//! - `program := fdef+`
//! - `fdef := 'function' IDENT '(' arg_list? ')' statement`
//! - `statement := operation ';' | block | if | if_else | while`
//! - `operation := 'let' IDENT ('=' expression)? | IDENT '=' expression
//!   | 'read' '(' IDENT ')' | 'write' '(' expr-or-cond ')'
//!   | 'return' expression | expression | condition`
//!
//! Expressions and conditions are syntactically distinct derivations;
//! the expression module holds the precedence table and the class
//! discipline that enforces the distinction. An `else` always binds to
//! the nearest unmatched `if`.
//!
//! On failure the parser raises exactly one fatal [`ParseError`] with a
//! source position. Non-fatal findings (a missing `main`) are recorded
//! as warnings on the caller's [`Handler`] and never fail the parse.
//!
//! # Example
//!
//! ```
//! let (program, warnings) = lc_par::parse("function main() { return 0; }").unwrap();
//! assert_eq!(program.funcs.len(), 1);
//! assert!(warnings.is_empty());
//! ```

pub mod ast;
mod dump;
mod error;
mod expr;

pub use ast::{BinOp, Expr, FnDef, Op, Program, UnOp};
pub use dump::dump_ast;
pub use error::ParseError;

use lc_lex::{find_column, tokenize, Lexeme, Tag};
use lc_util::{Handler, Symbol};

#[cfg(test)]
mod edge_cases;

pub(crate) type PResult<T> = Result<T, ParseError>;

/// Parses `text` into a program, returning the warnings alongside it.
///
/// Convenience wrapper over [`Parser`] for callers that do not manage
/// their own diagnostic handler. Each call is fully independent.
pub fn parse(text: &str) -> Result<(Program, Vec<String>), ParseError> {
    let mut handler = Handler::new();
    let program = {
        let mut parser = Parser::new(text, &mut handler);
        parser.parse()?
    };
    let warnings = handler.warnings().map(str::to_owned).collect();
    Ok((program, warnings))
}

/// Recursive-descent parser over a scanned lexeme stream.
pub struct Parser<'a> {
    /// The full token stream, including any `ERROR` lexemes.
    tokens: Vec<Lexeme>,

    /// Current position in the token stream.
    position: usize,

    /// Source text, for column computation in error messages.
    text: &'a str,

    /// Receives non-fatal warnings.
    handler: &'a mut Handler,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `text`, scanning it up front.
    pub fn new(text: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            tokens: tokenize(text).collect(),
            position: 0,
            text,
            handler,
        }
    }

    /// Parses a complete program.
    ///
    /// After a successful parse the top-level definitions are checked
    /// for a function named `main`; its absence is warned about, not
    /// rejected.
    pub fn parse(&mut self) -> PResult<Program> {
        let mut funcs = vec![self.parse_fdef()?];
        while !self.is_at_end() {
            funcs.push(self.parse_fdef()?);
        }

        let program = Program { funcs };
        if program.main_fn().is_none() {
            self.handler.warn("main function is not defined");
        }
        Ok(program)
    }

    /// `fdef := 'function' IDENT '(' arg_list? ')' statement`
    fn parse_fdef(&mut self) -> PResult<FnDef> {
        self.expect(Tag::Func)?;
        let name = self.expect_ident()?;

        self.expect(Tag::LParen)?;
        let mut params = Vec::new();
        if !self.check(Tag::RParen) {
            loop {
                params.push(self.expect_ident()?);
                if !self.eat(Tag::Comma) {
                    break;
                }
            }
        }
        self.expect(Tag::RParen)?;

        let body = self.parse_statement()?;
        Ok(FnDef { name, params, body })
    }

    /// `statement := operation ';' | block | if | if_else | while`
    ///
    /// Returns the operations the statement contributes to the
    /// enclosing sequence: blocks dissolve into it and `let x = e`
    /// expands to a declaration plus an assignment.
    fn parse_statement(&mut self) -> PResult<Vec<Op>> {
        match self.current_tag() {
            Some(Tag::LCurly) => self.parse_block(),
            Some(Tag::If) => self.parse_if(),
            Some(Tag::While) => self.parse_while(),
            _ => {
                let ops = self.parse_operation()?;
                self.expect(Tag::Semicolon)?;
                Ok(ops)
            }
        }
    }

    /// `block := '{' statement* '}'`
    fn parse_block(&mut self) -> PResult<Vec<Op>> {
        self.expect(Tag::LCurly)?;
        let mut ops = Vec::new();
        while !self.check(Tag::RCurly) {
            ops.extend(self.parse_statement()?);
        }
        self.expect(Tag::RCurly)?;
        Ok(ops)
    }

    /// `if := 'if' '(' condition ')' statement ('else' statement)?`
    ///
    /// Consuming the `else` greedily after the then-branch binds it to
    /// the nearest unmatched `if`, resolving the dangling else the way
    /// the precedence pair IFX-vs-ELSE does.
    fn parse_if(&mut self) -> PResult<Vec<Op>> {
        self.expect(Tag::If)?;
        self.expect(Tag::LParen)?;
        let cond = self.condition()?;
        self.expect(Tag::RParen)?;

        let then_ops = self.parse_statement()?;
        let else_ops = if self.eat(Tag::Else) {
            Some(self.parse_statement()?)
        } else {
            None
        };

        Ok(vec![Op::If {
            cond,
            then_ops,
            else_ops,
        }])
    }

    /// `while := 'while' '(' condition ')' statement`
    fn parse_while(&mut self) -> PResult<Vec<Op>> {
        self.expect(Tag::While)?;
        self.expect(Tag::LParen)?;
        let cond = self.condition()?;
        self.expect(Tag::RParen)?;
        let body = self.parse_statement()?;
        Ok(vec![Op::While { cond, body }])
    }

    /// A single operation, without the trailing semicolon.
    fn parse_operation(&mut self) -> PResult<Vec<Op>> {
        match self.current_tag() {
            Some(Tag::Let) => {
                self.advance();
                let name = self.expect_ident()?;
                if self.eat(Tag::Assign) {
                    // 'let x = e' is sugar for a declaration followed
                    // by an assignment in the enclosing sequence.
                    let value = self.expression()?;
                    Ok(vec![Op::VarDecl(name), Op::Assign(name, value)])
                } else {
                    Ok(vec![Op::VarDecl(name)])
                }
            }
            Some(Tag::Read) => {
                self.advance();
                self.expect(Tag::LParen)?;
                let var = self.expect_ident()?;
                self.expect(Tag::RParen)?;
                Ok(vec![Op::Read(var)])
            }
            Some(Tag::Write) => {
                self.advance();
                self.expect(Tag::LParen)?;
                let value = self.expression_or_condition()?;
                self.expect(Tag::RParen)?;
                Ok(vec![Op::Write(value)])
            }
            Some(Tag::Return) => {
                self.advance();
                let value = self.expression()?;
                Ok(vec![Op::Return(value)])
            }
            Some(Tag::Ident) if self.peek_tag(1) == Some(Tag::Assign) => {
                let var = self.expect_ident()?;
                self.advance();
                let value = self.expression()?;
                Ok(vec![Op::Assign(var, value)])
            }
            _ => Ok(vec![Op::Expr(self.expression_or_condition()?)]),
        }
    }

    // ------------------------------------------------------------------
    // Token stream navigation
    // ------------------------------------------------------------------

    pub(crate) fn current(&self) -> Option<&Lexeme> {
        self.tokens.get(self.position)
    }

    pub(crate) fn current_tag(&self) -> Option<Tag> {
        self.current().map(|lex| lex.tag)
    }

    fn peek_tag(&self, offset: usize) -> Option<Tag> {
        self.tokens.get(self.position + offset).map(|lex| lex.tag)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn advance(&mut self) {
        self.position += 1;
    }

    pub(crate) fn check(&self, tag: Tag) -> bool {
        self.current_tag() == Some(tag)
    }

    /// Consumes the current lexeme if it has the given tag.
    pub(crate) fn eat(&mut self, tag: Tag) -> bool {
        if self.check(tag) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a lexeme of the given tag or raises a syntax error at
    /// the current position.
    pub(crate) fn expect(&mut self, tag: Tag) -> PResult<Lexeme> {
        match self.current() {
            Some(lex) if lex.tag == tag => {
                let lex = *lex;
                self.advance();
                Ok(lex)
            }
            _ => Err(self.unexpected_here()),
        }
    }

    fn expect_ident(&mut self) -> PResult<Symbol> {
        let lex = self.expect(Tag::Ident)?;
        lex.value
            .as_text()
            .map(Symbol::intern)
            .ok_or_else(|| self.unexpected_at(&lex))
    }

    // ------------------------------------------------------------------
    // Error construction
    // ------------------------------------------------------------------

    /// The single fatal error for the current lookahead.
    pub(crate) fn unexpected_here(&self) -> ParseError {
        match self.current() {
            Some(lex) => {
                let lex = *lex;
                self.unexpected_at(&lex)
            }
            None => ParseError::UnexpectedEof,
        }
    }

    /// The single fatal error for a specific lexeme. An `ERROR` lexeme
    /// reports the unknown character itself; anything else reports the
    /// out-of-place token.
    pub(crate) fn unexpected_at(&self, lex: &Lexeme) -> ParseError {
        let line = lex.lineno;
        let column = find_column(self.text, lex.index);
        if lex.tag == Tag::Error {
            ParseError::UnknownLiteral {
                literal: lex.value.raw(),
                line,
                column,
            }
        } else {
            ParseError::UnexpectedToken {
                tag: lex.tag.name(),
                value: lex.value.repr(),
                line,
                column,
            }
        }
    }
}
