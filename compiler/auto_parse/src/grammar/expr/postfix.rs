//! Postfix operators: call `f(args)` and index `a[i]`.

use auto_ir::{Expr, ExprKind, TokenKind};

use crate::error::malformed_index;
use crate::Parser;

impl Parser<'_> {
    /// Apply one postfix operator to `callee`. The cursor is on `(` or `[`.
    pub(super) fn parse_postfix(&mut self, callee: Expr) -> Expr {
        match self.current_kind() {
            TokenKind::LParen => self.parse_call(callee),
            _ => self.parse_index(callee),
        }
    }

    fn parse_call(&mut self, callee: Expr) -> Expr {
        let open = self.advance().pos;
        let args = self.series(open, TokenKind::RParen, '(', Self::parse_expr);
        let pos = callee.pos.merge(self.previous_pos());
        Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            pos,
        )
    }

    /// `[` after an operand must hold exactly one expression.
    fn parse_index(&mut self, array: Expr) -> Expr {
        let open = self.advance().pos;
        let mut items = self.series(open, TokenKind::RSquare, '[', Self::parse_expr);
        let pos = array.pos.merge(self.previous_pos());

        if items.len() != 1 {
            self.report(malformed_index(open.merge(self.previous_pos())));
        }
        let index = if items.is_empty() {
            Expr::nil(open)
        } else {
            items.swap_remove(0)
        };
        Expr::new(
            ExprKind::Index {
                array: Box::new(array),
                index: Box::new(index),
            },
            pos,
        )
    }
}
