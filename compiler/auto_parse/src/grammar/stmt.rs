//! Statement parsing.

use auto_diagnostic::unclosed_delimiter;
use auto_ir::{Expr, Param, Stmt, StmtKind, TokenKind};
use auto_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::error::{expected_identifier, missing_body};
use crate::Parser;

impl Parser<'_> {
    /// Parse one statement, or `None` at the end of input.
    ///
    /// Leading newlines and semicolons are skipped.
    pub fn parse_stmt(&mut self) -> Option<Stmt> {
        self.skip_separators();
        if self.is_at_end() {
            return None;
        }
        let stmt = ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::Var | TokenKind::Let | TokenKind::Mut => self.parse_store(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::For => self.parse_for(),
            TokenKind::LBrace => self.parse_block_stmt(),
            TokenKind::Fn => self.parse_fn(),
            TokenKind::Break => Stmt::new(StmtKind::Break, self.advance().pos),
            _ => {
                let expr = self.parse_expr();
                let pos = expr.pos;
                Stmt::new(StmtKind::Expr(expr), pos)
            }
        });
        trace!(kind = stmt.kind.name(), "statement");
        Some(stmt)
    }

    /// `var|let|mut name [type] = expr`
    fn parse_store(&mut self) -> Stmt {
        let pos = self.advance().pos;
        let name = self.parse_name("variable name");
        let ty = if self.check(TokenKind::Asn) {
            None
        } else {
            self.parse_type()
        };

        let expr = if self.expect(TokenKind::Asn) || !self.at_stmt_end() {
            self.skip_newlines();
            self.parse_expr()
        } else {
            Expr::nil(self.current_pos())
        };
        let pos = pos.merge(expr.pos);
        Stmt::new(StmtKind::Store { name, ty, expr }, pos)
    }

    /// `if cond stmt [else stmt]`
    fn parse_if_stmt(&mut self) -> Stmt {
        let pos = self.advance().pos;
        let cond = self.parse_expr();
        let then = self.parse_body("if");
        let els = if self.eat_else() {
            Some(Box::new(self.parse_body("else")))
        } else {
            None
        };
        Stmt::new(
            StmtKind::If {
                cond,
                then: Box::new(then),
                els,
            },
            pos.merge(self.previous_pos()),
        )
    }

    /// `for name in iter stmt`
    fn parse_for(&mut self) -> Stmt {
        let pos = self.advance().pos;
        let var = self.parse_name("loop variable");
        self.expect(TokenKind::In);
        let iter = self.parse_expr();
        let body = self.parse_body("for");
        Stmt::new(
            StmtKind::For {
                var,
                iter,
                body: Box::new(body),
            },
            pos.merge(self.previous_pos()),
        )
    }

    fn parse_block_stmt(&mut self) -> Stmt {
        let pos = self.current_pos();
        let stmts = self.parse_block_body();
        Stmt::new(StmtKind::Block(stmts), pos.merge(self.previous_pos()))
    }

    /// `fn name(param [type], ...) [type] { body }`
    fn parse_fn(&mut self) -> Stmt {
        let pos = self.advance().pos;
        let name = self.parse_name("function name");

        let params = if self.check(TokenKind::LParen) {
            let open = self.advance().pos;
            self.series(open, TokenKind::RParen, '(', Self::parse_param)
        } else {
            self.expect(TokenKind::LParen);
            Vec::new()
        };

        let ret = if self.check(TokenKind::LBrace) {
            None
        } else {
            self.parse_type()
        };
        let body = self.parse_block_body();
        Stmt::new(
            StmtKind::Fn {
                name,
                params,
                ret,
                body,
            },
            pos.merge(self.previous_pos()),
        )
    }

    fn parse_param(&mut self) -> Param {
        let name = self.parse_name("parameter name");
        let ty = if matches!(self.current_kind(), TokenKind::Comma | TokenKind::RParen) {
            None
        } else {
            self.parse_type()
        };
        Param { name, ty }
    }

    /// `{ stmts }`. Reports a missing `{` or `}` and returns what was parsed.
    pub(crate) fn parse_block_body(&mut self) -> Vec<Stmt> {
        let open = self.current_pos();
        if !self.expect(TokenKind::LBrace) {
            return Vec::new();
        }
        let mut stmts = Vec::new();
        loop {
            self.skip_separators();
            if self.eat(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.report(unclosed_delimiter(open, self.current_pos(), '{'));
                break;
            }
            if let Some(stmt) = self.parse_stmt() {
                stmts.push(stmt);
            }
        }
        stmts
    }

    /// Body of `if`, `else` or `for`: any statement, on the same line or the next.
    fn parse_body(&mut self, construct: &str) -> Stmt {
        self.skip_newlines();
        if !self.check(TokenKind::RBrace) {
            if let Some(stmt) = self.parse_stmt() {
                return stmt;
            }
        }
        self.report(missing_body(self.previous_pos(), construct));
        Stmt::new(StmtKind::EmptyLine, self.current_pos())
    }

    /// Consume `else`, also when it starts the next line.
    pub(crate) fn eat_else(&mut self) -> bool {
        if self.check(TokenKind::Newline) && self.peek_kind() == TokenKind::Else {
            self.advance();
        }
        self.eat(TokenKind::Else)
    }

    /// An identifier, or a reported placeholder. A stray token is skipped
    /// unless it is punctuation the caller goes on to expect.
    fn parse_name(&mut self, what: &str) -> String {
        if self.check(TokenKind::Ident) {
            return self.advance().text;
        }
        let diag = expected_identifier(self.current_pos(), what, self.current_lexeme());
        self.report(diag);
        let expected_next = matches!(
            self.current_kind(),
            TokenKind::Asn
                | TokenKind::In
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::Comma
        );
        if !expected_next && !self.at_stmt_end() {
            self.advance();
        }
        String::new()
    }

    fn at_stmt_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Newline | TokenKind::Semi | TokenKind::RBrace | TokenKind::Eof
        )
    }
}
