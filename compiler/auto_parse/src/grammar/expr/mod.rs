//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expr`) and the precedence-climbing loop
//! - `operators.rs`: precedence table and operator matching
//! - `primary.rs`: literals, names, groups, array/object literals, `if`, f-strings
//! - `postfix.rs`: call and index

mod operators;
mod postfix;
mod primary;

use auto_ir::{Expr, ExprKind};
use auto_stack::ensure_sufficient_stack;
use tracing::trace;

use self::operators::{Infix, Prec, PREC_CALL, PREC_NONE, PREC_UNARY};
use crate::Parser;

impl Parser<'_> {
    /// Parse a full expression.
    pub fn parse_expr(&mut self) -> Expr {
        self.parse_binary(PREC_NONE)
    }

    /// Climb operators binding tighter than `min`.
    ///
    /// Postfix call/index bind tighter than every infix operator except `.`,
    /// so they apply to the operand just parsed: `f(1) + 2` calls first,
    /// `a.b(c)` calls `a.b`.
    fn parse_binary(&mut self, min: Prec) -> Expr {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_unary();
            loop {
                if self.at_postfix() && PREC_CALL > min {
                    left = self.parse_postfix(left);
                    continue;
                }
                let Some(infix) = self.match_infix() else {
                    break;
                };
                let prec = infix.prec();
                if prec <= min {
                    break;
                }
                self.advance();
                self.skip_newlines();
                let next = if infix.is_right_assoc() { prec - 1 } else { prec };
                let right = self.parse_binary(next);
                trace!(?infix, "infix");
                left = build_infix(left, infix, right);
            }
            left
        })
    }

    fn parse_unary(&mut self) -> Expr {
        if let Some(op) = self.match_unary_op() {
            let pos = self.advance().pos;
            let operand = self.parse_binary(PREC_UNARY);
            let pos = pos.merge(operand.pos);
            return Expr::new(
                ExprKind::Unary {
                    op,
                    expr: Box::new(operand),
                },
                pos,
            );
        }
        self.parse_primary()
    }
}

fn build_infix(left: Expr, infix: Infix, right: Expr) -> Expr {
    let pos = left.pos.merge(right.pos);
    let kind = match infix {
        Infix::Binary(op) => ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        Infix::Range(eq) => ExprKind::Range {
            start: Box::new(left),
            end: Box::new(right),
            eq,
        },
    };
    Expr::new(kind, pos)
}
