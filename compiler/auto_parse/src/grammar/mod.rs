//! Grammar productions, added to [`Parser`] as `impl` blocks.
//!
//! - `expr/`: precedence climbing, primary terms, postfix operators
//! - `stmt.rs`: statements and blocks
//! - `ty.rs`: type annotations

mod expr;
mod stmt;
mod ty;

use auto_diagnostic::{expected_token, unclosed_delimiter};
use auto_ir::{Pos, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// Comma-separated items up to `close`. The opening delimiter at `open`
    /// has already been consumed. Newlines between items are ignored and a
    /// trailing comma is allowed.
    pub(crate) fn series<T>(
        &mut self,
        open: Pos,
        close: TokenKind,
        delimiter: char,
        mut item: impl FnMut(&mut Self) -> T,
    ) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            self.skip_newlines();
            if self.eat(close) {
                break;
            }
            if self.is_at_end() {
                self.report(unclosed_delimiter(open, self.current_pos(), delimiter));
                break;
            }

            let before = self.current_pos();
            items.push(item(self));
            if self.current_pos() == before && !self.check(TokenKind::Comma) && !self.check(close) {
                // The item consumed nothing; skip the token so the loop advances.
                self.advance();
            }

            self.skip_newlines();
            if self.eat(TokenKind::Comma) {
                continue;
            }
            if self.eat(close) {
                break;
            }
            if self.is_at_end() {
                self.report(unclosed_delimiter(open, self.current_pos(), delimiter));
                break;
            }
            // Missing comma: report it and treat the token as the next item.
            let expected = format!("`,` or `{}`", close.name());
            let diag = expected_token(self.current_pos(), &expected, self.current_lexeme());
            self.report(diag);
        }
        items
    }
}
