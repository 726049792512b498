//! Token cursor over the lexer.
//!
//! Holds exactly two tokens of lookahead, `current` and `peek`, pulled on
//! demand from the [`Lexer`]. Comment tokens are dropped here, so the
//! grammar never sees them.

use std::mem;

use auto_diagnostic::{expected_token, Diagnostic};
use auto_ir::{Pos, Token, TokenKind};
use auto_lexer::Lexer;
use tracing::trace;

pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
    /// Position of the last consumed token.
    previous: Pos,
}

impl<'src> Cursor<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = pull(&mut lexer);
        let peek = pull(&mut lexer);
        Cursor {
            lexer,
            current,
            peek,
            previous: Pos::DUMMY,
        }
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_pos(&self) -> Pos {
        self.current.pos
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn previous_pos(&self) -> Pos {
        self.previous
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind.is_eof()
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// The current lexeme as it should appear in a diagnostic.
    pub fn current_lexeme(&self) -> &str {
        match self.current.kind {
            TokenKind::Newline | TokenKind::Eof => self.current.kind.name(),
            kind if self.current.text.is_empty() => kind.name(),
            _ => &self.current.text,
        }
    }

    /// Consume the current token and return it. At the end of input this
    /// keeps returning `Eof`.
    pub fn advance(&mut self) -> Token {
        let next = pull(&mut self.lexer);
        let peek = mem::replace(&mut self.peek, next);
        let token = mem::replace(&mut self.current, peek);
        trace!(token = %token, "advance");
        self.previous = token.pos;
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or describe what was found instead.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, Diagnostic> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let expected = format!("`{}`", kind.name());
            Err(expected_token(
                self.current_pos(),
                &expected,
                self.current_lexeme(),
            ))
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip statement separators: newlines and semicolons.
    pub fn skip_separators(&mut self) {
        while matches!(self.current.kind, TokenKind::Newline | TokenKind::Semi) {
            self.advance();
        }
    }

    /// Diagnostics the lexer recorded so far.
    pub fn take_lex_errors(&mut self) -> Vec<Diagnostic> {
        self.lexer.take_errors()
    }
}

/// Next non-comment token from the lexer.
fn pull(lexer: &mut Lexer<'_>) -> Token {
    loop {
        let token = lexer.next_token();
        if !token.kind.is_trivia() {
            return token;
        }
    }
}
