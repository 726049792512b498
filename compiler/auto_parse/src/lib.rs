//! Parser for auto-lang.
//!
//! Pulls tokens from the lexer with two tokens of lookahead and builds an
//! owned [`Code`] tree. Expressions use precedence climbing; statements use
//! recursive descent.
//!
//! Parsing never aborts. A missing token is recorded as a [`Diagnostic`]
//! and the parser carries on, so one run can report several problems. A
//! token that cannot start anything is reported and skipped, so every call
//! makes progress and the whole input is always consumed.

mod cursor;
mod error;
mod grammar;

use auto_diagnostic::{Diagnostic, DiagnosticQueue};
use auto_ir::{Code, Pos, Token, TokenKind};
use auto_lexer::Lexer;
use tracing::debug;

use crate::cursor::Cursor;

/// Everything produced by one parse.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub code: Code,
    /// Diagnostics from the lexer (E0xxx).
    pub lex_errors: Vec<Diagnostic>,
    /// Diagnostics from the parser (E1xxx), sorted by position.
    pub errors: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_lex_errors(&self) -> bool {
        !self.lex_errors.is_empty()
    }

    pub fn has_parse_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.has_lex_errors() || self.has_parse_errors()
    }

    /// Lexer diagnostics first, then parser diagnostics.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lex_errors.iter().chain(&self.errors)
    }
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    diagnostics: DiagnosticQueue,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_lexer(Lexer::new(source))
    }

    /// Parse from a preconfigured lexer (e.g. a custom interpolation marker).
    pub fn with_lexer(lexer: Lexer<'src>) -> Self {
        Parser {
            cursor: Cursor::new(lexer),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_pos(&self) -> Pos {
        self.cursor.current_pos()
    }

    #[inline]
    fn current_lexeme(&self) -> &str {
        self.cursor.current_lexeme()
    }

    #[inline]
    fn peek_kind(&self) -> TokenKind {
        self.cursor.peek_kind()
    }

    #[inline]
    fn previous_pos(&self) -> Pos {
        self.cursor.previous_pos()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    #[inline]
    fn skip_separators(&mut self) {
        self.cursor.skip_separators();
    }

    /// Consume `kind` or report it missing. Returns whether it was there.
    fn expect(&mut self, kind: TokenKind) -> bool {
        match self.cursor.expect(kind) {
            Ok(_) => true,
            Err(diag) => {
                self.report(diag);
                false
            }
        }
    }

    fn report(&mut self, diag: Diagnostic) {
        debug!(code = %diag.code, message = %diag.message, "parse error");
        self.diagnostics.push(diag);
    }

    /// Parse the whole input.
    pub fn parse(mut self) -> ParseOutput {
        let mut stmts = Vec::new();
        while let Some(stmt) = self.parse_stmt() {
            stmts.push(stmt);
        }
        debug!(
            stmts = stmts.len(),
            errors = self.diagnostics.error_count(),
            "parsed"
        );

        ParseOutput {
            code: Code::new(stmts),
            lex_errors: self.cursor.take_lex_errors(),
            errors: self.diagnostics.flush(),
        }
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests;
