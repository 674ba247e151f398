//! Expression and condition parsing (Pratt core).
//!
//! One binding-power loop handles both of the grammar's derivations:
//! arithmetic `expression`s and boolean `condition`s. Each parsed
//! subtree carries its syntactic [`Class`]; an operator that receives
//! an operand of the wrong class raises the syntax error the LALR
//! grammar would, at the operator itself. The comparison level is
//! non-associative — `a < b < c` trips the class check at the second
//! `<`, since the left operand is a condition by then.
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators | Associativity |
//! |-------|--------------------------------|---------------|
//! | 1 | `\|\|` | Right |
//! | 2 | `&&` | Right |
//! | 3 | `!` (prefix) | Right |
//! | 4 | `==` `!=` `<=` `<` `>=` `>` | None |
//! | 5 | `+` `-` | Left |
//! | 6 | `*` `/` | Left |
//! | 7 | `-` (prefix) | Right |
//! | 8 | `^` | Right |

use lc_lex::{LexValue, Tag};
use lc_util::Symbol;

use crate::ast::{BinOp, Expr, UnOp};
use crate::{PResult, ParseError, Parser};

/// Binding power levels. Left-associative operators use `(n, n + 1)`,
/// right-associative ones `(n + 1, n)`; prefix operators carry the
/// binding power of their operand.
mod bp {
    /// Start of expression.
    pub const MIN: u8 = 0;

    /// `||`
    pub const OR: (u8, u8) = (2, 1);

    /// `&&`
    pub const AND: (u8, u8) = (4, 3);

    /// Prefix `!`: binds tighter than `&&`, looser than comparisons.
    pub const NOT: u8 = 5;

    /// `==` `!=` `<=` `<` `>=` `>`
    pub const CMP: (u8, u8) = (6, 7);

    /// `+` `-`
    pub const ADD: (u8, u8) = (8, 9);

    /// `*` `/`
    pub const MUL: (u8, u8) = (10, 11);

    /// Prefix `-`: binds tighter than `*`, looser than `^`, so
    /// `-a ^ b` is `-(a ^ b)` and `-a * b` is `(-a) * b`.
    pub const NEG: u8 = 13;

    /// `^`
    pub const POW: (u8, u8) = (14, 13);
}

/// Syntactic class of a parsed subtree. The grammar derives arithmetic
/// expressions and boolean conditions from disjoint rules; operators
/// only accept the class they are declared for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Class {
    Expression,
    Condition,
}

/// What an infix operator consumes and produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InfixKind {
    /// Expression × Expression → Expression.
    Arith,
    /// Expression × Expression → Condition.
    Compare,
    /// Condition × Condition → Condition.
    Logic,
}

fn infix(tag: Tag) -> Option<(BinOp, (u8, u8), InfixKind)> {
    use InfixKind::*;
    match tag {
        Tag::Or => Some((BinOp::Or, bp::OR, Logic)),
        Tag::And => Some((BinOp::And, bp::AND, Logic)),
        Tag::Equ => Some((BinOp::Equ, bp::CMP, Compare)),
        Tag::Neq => Some((BinOp::Neq, bp::CMP, Compare)),
        Tag::Leq => Some((BinOp::Leq, bp::CMP, Compare)),
        Tag::Les => Some((BinOp::Les, bp::CMP, Compare)),
        Tag::Geq => Some((BinOp::Geq, bp::CMP, Compare)),
        Tag::Grt => Some((BinOp::Grt, bp::CMP, Compare)),
        Tag::Add => Some((BinOp::Add, bp::ADD, Arith)),
        Tag::Sub => Some((BinOp::Sub, bp::ADD, Arith)),
        Tag::Mul => Some((BinOp::Mul, bp::MUL, Arith)),
        Tag::Div => Some((BinOp::Div, bp::MUL, Arith)),
        Tag::Pow => Some((BinOp::Pow, bp::POW, Arith)),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    /// `expression`: the arithmetic derivation. A condition in this
    /// position is a syntax error at the token where it shows.
    pub(crate) fn expression(&mut self) -> PResult<Expr> {
        let (expr, class) = self.expr_bp(bp::MIN, false)?;
        if class != Class::Expression {
            return Err(self.unexpected_here());
        }
        Ok(expr)
    }

    /// `condition`: the boolean derivation, required by `if` and
    /// `while` heads.
    pub(crate) fn condition(&mut self) -> PResult<Expr> {
        let (expr, class) = self.expr_bp(bp::MIN, true)?;
        if class != Class::Condition {
            return Err(self.unexpected_here());
        }
        Ok(expr)
    }

    /// Either derivation, as accepted by `write(...)` and bare
    /// operation statements.
    pub(crate) fn expression_or_condition(&mut self) -> PResult<Expr> {
        Ok(self.expr_bp(bp::MIN, true)?.0)
    }

    /// The Pratt loop. `min_bp` controls which operators this level may
    /// consume; `in_condition` is false where the grammar only derives
    /// expressions, which keeps comparison and boolean operators for
    /// the caller to reject.
    fn expr_bp(&mut self, min_bp: u8, in_condition: bool) -> PResult<(Expr, Class)> {
        let (mut lhs, mut class) = self.prefix(in_condition)?;

        loop {
            let Some(lex) = self.current().copied() else { break };
            let Some((op, (l_bp, r_bp), kind)) = infix(lex.tag) else {
                break;
            };
            if !in_condition && kind != InfixKind::Arith {
                break;
            }
            if l_bp < min_bp {
                break;
            }

            let operand_class = match kind {
                InfixKind::Arith | InfixKind::Compare => Class::Expression,
                InfixKind::Logic => Class::Condition,
            };
            if class != operand_class {
                return Err(self.unexpected_at(&lex));
            }

            self.advance();
            let (rhs, rhs_class) =
                self.expr_bp(r_bp, operand_class == Class::Condition)?;
            if rhs_class != operand_class {
                return Err(self.unexpected_here());
            }

            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
            class = match kind {
                InfixKind::Arith => Class::Expression,
                InfixKind::Compare | InfixKind::Logic => Class::Condition,
            };
        }

        Ok((lhs, class))
    }

    /// A prefix operator or primary: literal, variable, call,
    /// parenthesized subtree, `-e`, or `!c`.
    fn prefix(&mut self, in_condition: bool) -> PResult<(Expr, Class)> {
        let Some(lex) = self.current().copied() else {
            return Err(ParseError::UnexpectedEof);
        };

        match lex.tag {
            Tag::Sub => {
                self.advance();
                let (operand, class) = self.expr_bp(bp::NEG, false)?;
                if class != Class::Expression {
                    return Err(self.unexpected_here());
                }
                Ok((
                    Expr::Unary(UnOp::Neg, Box::new(operand)),
                    Class::Expression,
                ))
            }
            Tag::Not => {
                if !in_condition {
                    // '!' only exists in the condition derivation.
                    return Err(self.unexpected_at(&lex));
                }
                self.advance();
                let (operand, class) = self.expr_bp(bp::NOT, true)?;
                if class != Class::Condition {
                    return Err(self.unexpected_here());
                }
                Ok((Expr::Unary(UnOp::Not, Box::new(operand)), Class::Condition))
            }
            Tag::Int => {
                let value = match lex.value {
                    LexValue::Int(v) => v,
                    _ => return Err(self.unexpected_at(&lex)),
                };
                self.advance();
                Ok((Expr::Int(value), Class::Expression))
            }
            Tag::Float => {
                let value = match lex.value {
                    LexValue::Float(v) => v,
                    _ => return Err(self.unexpected_at(&lex)),
                };
                self.advance();
                Ok((Expr::Float(value), Class::Expression))
            }
            Tag::Ident => {
                let name = match lex.value.as_text() {
                    Some(text) => Symbol::intern(text),
                    None => return Err(self.unexpected_at(&lex)),
                };
                self.advance();
                if self.eat(Tag::LParen) {
                    let args = self.parse_call_args()?;
                    Ok((Expr::Call(name, args), Class::Expression))
                } else {
                    Ok((Expr::Var(name), Class::Expression))
                }
            }
            Tag::LParen => {
                self.advance();
                // Parentheses admit either derivation; the class of the
                // inner subtree carries through unchanged.
                let (inner, class) = self.expr_bp(bp::MIN, true)?;
                self.expect(Tag::RParen)?;
                Ok((inner, class))
            }
            _ => Err(self.unexpected_at(&lex)),
        }
    }

    /// `exp_list? ')'` after a call's opening parenthesis. Arguments
    /// are expressions; the closing parenthesis is consumed.
    fn parse_call_args(&mut self) -> PResult<Vec<Expr>> {
        let mut args = Vec::new();
        if !self.check(Tag::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.eat(Tag::Comma) {
                    break;
                }
            }
        }
        self.expect(Tag::RParen)?;
        Ok(args)
    }
}
