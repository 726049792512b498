//! Primary terms: literals, names, groups, array and object literals,
//! `if` expressions and format strings.

use auto_diagnostic::{expected_expression, unclosed_delimiter};
use auto_ir::{Expr, ExprKind, Pair, Token, TokenKind};
use tracing::trace;

use crate::error::expected_identifier;
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Expr {
        let pos = self.current_pos();
        let kind = match self.current_kind() {
            TokenKind::Int => ExprKind::Int(int_literal(&self.advance())),
            TokenKind::Uint => ExprKind::Uint(uint_literal(&self.advance())),
            TokenKind::U8 => ExprKind::U8(u8_literal(&self.advance())),
            TokenKind::I8 => ExprKind::I8(i8_literal(&self.advance())),
            // Floating literals are all double precision at runtime.
            TokenKind::Float | TokenKind::Double => {
                ExprKind::Double(float_literal(&self.advance()))
            }
            TokenKind::True => {
                self.advance();
                ExprKind::Bool(true)
            }
            TokenKind::False => {
                self.advance();
                ExprKind::Bool(false)
            }
            TokenKind::Nil => {
                self.advance();
                ExprKind::Nil
            }
            TokenKind::Null => {
                self.advance();
                ExprKind::Null
            }
            TokenKind::Str => ExprKind::Str(self.advance().text),
            TokenKind::CStr => ExprKind::CStr(self.advance().text),
            TokenKind::Char => {
                let text = self.advance().text;
                ExprKind::Char(text.chars().next().unwrap_or('\0'))
            }
            TokenKind::Ident => ExprKind::Ident(self.advance().text),
            TokenKind::LParen => return self.parse_group(),
            TokenKind::LSquare => return self.parse_array(),
            TokenKind::LBrace => return self.parse_object(),
            TokenKind::If => return self.parse_if_expr(),
            TokenKind::FStrStart => return self.parse_fstr(),
            _ => {
                let diag = expected_expression(pos, self.current_lexeme());
                self.report(diag);
                if !self.is_at_end() {
                    self.advance();
                }
                ExprKind::Nil
            }
        };
        Expr::new(kind, pos)
    }

    /// `( expr )`
    fn parse_group(&mut self) -> Expr {
        let open = self.advance().pos;
        self.skip_newlines();
        let mut expr = self.parse_expr();
        self.skip_newlines();
        if !self.eat(TokenKind::RParen) {
            self.report(unclosed_delimiter(open, self.current_pos(), '('));
        }
        expr.pos = open.merge(self.previous_pos());
        expr
    }

    /// `[a, b, c]`
    fn parse_array(&mut self) -> Expr {
        let open = self.advance().pos;
        let elems = self.series(open, TokenKind::RSquare, '[', Self::parse_expr);
        Expr::new(ExprKind::Array(elems), open.merge(self.previous_pos()))
    }

    /// `{key: value, "key": value}`
    fn parse_object(&mut self) -> Expr {
        let open = self.advance().pos;
        let pairs = self.series(open, TokenKind::RBrace, '{', Self::parse_pair);
        Expr::new(ExprKind::Object(pairs), open.merge(self.previous_pos()))
    }

    fn parse_pair(&mut self) -> Pair {
        let key = match self.current_kind() {
            TokenKind::Ident | TokenKind::Str => self.advance().text,
            _ => {
                let diag = expected_identifier(self.current_pos(), "object key", self.current_lexeme());
                self.report(diag);
                if !self.is_at_end() {
                    self.advance();
                }
                String::new()
            }
        };
        self.expect(TokenKind::Colon);
        self.skip_newlines();
        let value = self.parse_expr();
        Pair { key, value }
    }

    /// `if cond { ... } [else { ... } | else if ...]`
    fn parse_if_expr(&mut self) -> Expr {
        let pos = self.advance().pos;
        let cond = self.parse_expr();
        let then = self.parse_block_expr();
        let els = if self.eat_else() {
            if self.check(TokenKind::If) {
                Some(Box::new(self.parse_if_expr()))
            } else {
                Some(Box::new(self.parse_block_expr()))
            }
        } else {
            None
        };
        Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then: Box::new(then),
                els,
            },
            pos.merge(self.previous_pos()),
        )
    }

    /// `{ stmts }` as a value-producing block.
    fn parse_block_expr(&mut self) -> Expr {
        let pos = self.current_pos();
        let stmts = self.parse_block_body();
        Expr::new(ExprKind::Block(stmts), pos.merge(self.previous_pos()))
    }

    /// A format-string token run: text parts become string literals, each
    /// interpolation becomes the embedded expression.
    fn parse_fstr(&mut self) -> Expr {
        let start = self.advance().pos;
        let mut parts = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::FStrPart => {
                    let token = self.advance();
                    parts.push(Expr::new(ExprKind::Str(token.text), token.pos));
                }
                TokenKind::FStrNote => {
                    self.advance();
                    parts.push(self.parse_interpolation());
                }
                TokenKind::FStrEnd => {
                    self.advance();
                    break;
                }
                // Unterminated: the lexer stopped without an end token.
                TokenKind::Eof => break,
                _ => {
                    let diag = expected_expression(self.current_pos(), self.current_lexeme());
                    self.report(diag);
                    self.advance();
                }
            }
        }
        trace!(parts = parts.len(), "format string");
        Expr::new(ExprKind::FStr(parts), start.merge(self.previous_pos()))
    }

    /// After the marker: a bare name or `{ expr }`.
    fn parse_interpolation(&mut self) -> Expr {
        if self.check(TokenKind::LBrace) {
            let open = self.advance().pos;
            let expr = self.parse_expr();
            if !self.eat(TokenKind::RBrace) {
                self.report(unclosed_delimiter(open, self.current_pos(), '{'));
            }
            return expr;
        }
        // The lexer always follows the marker with a name or `{`.
        let pos = self.current_pos();
        let name = if self.check(TokenKind::Ident) {
            self.advance().text
        } else {
            String::new()
        };
        Expr::new(ExprKind::Ident(name), pos)
    }
}

/// Digits of a numeric lexeme with `_` separators and the type suffix removed.
fn digits(token: &Token, suffix: &[&str]) -> (String, u32) {
    let text = token.text.as_str();
    let (body, radix) = match text.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    let body = suffix
        .iter()
        .find_map(|s| body.strip_suffix(s))
        .unwrap_or(body);
    (body.replace('_', ""), radix)
}

fn parse_int(token: &Token, suffix: &[&str]) -> i64 {
    let (body, radix) = digits(token, suffix);
    i64::from_str_radix(&body, radix).unwrap_or(0)
}

/// Integer literals convert without overflow checks: out-of-range values wrap.
#[allow(clippy::cast_possible_truncation)]
fn int_literal(token: &Token) -> i32 {
    parse_int(token, &["i"]) as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn uint_literal(token: &Token) -> u32 {
    parse_int(token, &["u"]) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn u8_literal(token: &Token) -> u8 {
    parse_int(token, &["u8"]) as u8
}

#[allow(clippy::cast_possible_truncation)]
fn i8_literal(token: &Token) -> i8 {
    parse_int(token, &["i8"]) as i8
}

fn float_literal(token: &Token) -> f64 {
    let text = token.text.replace('_', "");
    let body = text
        .strip_suffix('f')
        .or_else(|| text.strip_suffix('d'))
        .unwrap_or(&text);
    body.parse().unwrap_or(0.0)
}
