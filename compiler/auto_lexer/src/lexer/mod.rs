//! Token scanner.
//!
//! Most lexemes map to exactly one token. Comments and format strings map
//! to several; those are scanned in one go and queued in `pending`, then
//! handed out one per [`Lexer::next_token`] call in source order.

use std::collections::VecDeque;

use auto_diagnostic::{invalid_character, unterminated_comment, Diagnostic};
use auto_ir::{Pos, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::Cursor;

/// Default character that starts an interpolation inside a format string.
pub const DEFAULT_INTERPOLATION_MARKER: char = '$';

/// All tokens of a source text, ending with exactly one `Eof`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    pending: VecDeque<Token>,
    marker: char,
    errors: Vec<Diagnostic>,
    /// Set once `Eof` has been queued; every later call yields `Eof` again.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            pending: VecDeque::new(),
            marker: DEFAULT_INTERPOLATION_MARKER,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Change the character that introduces `$name` / `${expr}` inside
    /// format strings.
    pub fn set_interpolation_marker(&mut self, marker: char) {
        self.marker = marker;
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn take_errors(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.errors)
    }

    /// Next token in source order. After the input is exhausted (or an
    /// error stopped the scan) this keeps returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        if self.pending.is_empty() && !self.finished {
            self.scan();
        }
        match self.pending.pop_front() {
            Some(token) => token,
            None => Token::eof(self.cursor.pos_here(0)),
        }
    }

    /// Scan the whole input.
    pub fn tokenize(mut self) -> LexOutput {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        debug!(tokens = tokens.len(), errors = self.errors.len(), "lexed source");
        LexOutput {
            tokens,
            errors: self.errors,
        }
    }

    fn push(&mut self, kind: TokenKind, start: Pos) {
        let text = self.cursor.slice_from(start.pos);
        let token = Token::new(kind, self.extend(start), text);
        self.pending.push_back(token);
    }

    fn push_text(&mut self, kind: TokenKind, start: Pos, text: &str) {
        let token = Token::new(kind, self.extend(start), text);
        self.pending.push_back(token);
    }

    /// `start` stretched to the current byte.
    fn extend(&self, start: Pos) -> Pos {
        Pos {
            len: self.cursor.offset() - start.pos,
            ..start
        }
    }

    fn finish(&mut self) {
        let pos = self.cursor.pos_here(0);
        self.pending.push_back(Token::eof(pos));
        self.finished = true;
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
    }

    /// Scan one lexeme and queue its token(s).
    fn scan(&mut self) {
        self.skip_whitespace();
        if self.cursor.is_eof() {
            self.finish();
            return;
        }

        let start = self.cursor.pos_here(0);
        match self.cursor.current() {
            b'\n' => {
                self.cursor.advance();
                self.push(TokenKind::Newline, start);
            }
            b'0'..=b'9' => self.number(start),
            b'c' if self.cursor.peek() == b'"' => {
                self.cursor.advance();
                self.string(start, TokenKind::CStr);
            }
            b'f' if self.cursor.peek() == b'"' => self.format_string(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'"' => self.string(start, TokenKind::Str),
            b'`' => self.format_string(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash(start),
            b'+' => self.with_eq(start, TokenKind::Add, TokenKind::AddEq),
            b'*' => self.with_eq(start, TokenKind::Star, TokenKind::MulEq),
            b'!' => self.with_eq(start, TokenKind::Not, TokenKind::Neq),
            b'<' => self.with_eq(start, TokenKind::Lt, TokenKind::Le),
            b'>' => self.with_eq(start, TokenKind::Gt, TokenKind::Ge),
            b'-' => {
                let kind = match self.cursor.peek() {
                    b'>' => TokenKind::Arrow,
                    b'=' => TokenKind::SubEq,
                    _ => TokenKind::Sub,
                };
                self.symbol(start, kind);
            }
            b'=' => {
                let kind = match self.cursor.peek() {
                    b'=' => TokenKind::Eq,
                    b'>' => TokenKind::DoubleArrow,
                    _ => TokenKind::Asn,
                };
                self.symbol(start, kind);
            }
            b'.' => {
                let kind = match (self.cursor.peek(), self.cursor.peek2()) {
                    (b'.', b'=') => TokenKind::RangeEq,
                    (b'.', _) => TokenKind::Range,
                    _ => TokenKind::Dot,
                };
                self.symbol(start, kind);
            }
            b'(' => self.symbol(start, TokenKind::LParen),
            b')' => self.symbol(start, TokenKind::RParen),
            b'[' => self.symbol(start, TokenKind::LSquare),
            b']' => self.symbol(start, TokenKind::RSquare),
            b'{' => self.symbol(start, TokenKind::LBrace),
            b'}' => self.symbol(start, TokenKind::RBrace),
            b',' => self.symbol(start, TokenKind::Comma),
            b';' => self.symbol(start, TokenKind::Semi),
            b':' => self.symbol(start, TokenKind::Colon),
            b'|' => self.symbol(start, TokenKind::VBar),
            b'?' => self.symbol(start, TokenKind::Question),
            b'@' => self.symbol(start, TokenKind::At),
            b'#' => self.symbol(start, TokenKind::Hash),
            _ => self.invalid(start),
        }
    }

    /// Fixed-text token; its length comes from the kind's spelling.
    fn symbol(&mut self, start: Pos, kind: TokenKind) {
        let len = match kind {
            TokenKind::RangeEq => 3,
            TokenKind::Arrow
            | TokenKind::SubEq
            | TokenKind::Eq
            | TokenKind::DoubleArrow
            | TokenKind::Range => 2,
            _ => 1,
        };
        self.cursor.advance_n(len);
        self.push(kind, start);
    }

    fn with_eq(&mut self, start: Pos, single: TokenKind, with_eq: TokenKind) {
        self.cursor.advance();
        let kind = if self.cursor.current() == b'=' {
            self.cursor.advance();
            with_eq
        } else {
            single
        };
        self.push(kind, start);
    }

    fn invalid(&mut self, start: Pos) {
        let ch = self.cursor.current_char().unwrap_or('\u{FFFD}');
        let pos = Pos {
            len: u32::try_from(ch.len_utf8()).unwrap_or(1),
            ..start
        };
        trace!(?pos, ch = %ch.escape_default(), "invalid character");
        self.errors.push(invalid_character(pos, ch));
        self.finish();
    }

    fn identifier(&mut self, start: Pos) {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(start.pos);
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Ident);
        self.push(kind, start);
    }

    /// Integer or decimal literal with an optional type suffix.
    ///
    /// The token text keeps the suffix and any `_` separators; the parser
    /// strips them when it converts the value.
    fn number(&mut self, start: Pos) {
        let hex = self.cursor.current() == b'0' && self.cursor.peek() == b'x';
        if hex {
            self.cursor.advance_n(2);
        }

        let mut has_dot = false;
        loop {
            match self.cursor.current() {
                b'_' => self.cursor.advance(),
                b'.' if !has_dot && self.cursor.peek().is_ascii_digit() => {
                    has_dot = true;
                    self.cursor.advance();
                }
                b if hex && b.is_ascii_hexdigit() => self.cursor.advance(),
                b if b.is_ascii_digit() => self.cursor.advance(),
                _ => break,
            }
        }

        let mut kind = match self.cursor.current() {
            b'f' => {
                self.cursor.advance();
                TokenKind::Float
            }
            b'd' => {
                self.cursor.advance();
                TokenKind::Double
            }
            b'u' => {
                self.cursor.advance();
                if self.cursor.current() == b'8' {
                    self.cursor.advance();
                    TokenKind::U8
                } else {
                    TokenKind::Uint
                }
            }
            b'i' => {
                self.cursor.advance();
                if self.cursor.current() == b'8' {
                    self.cursor.advance();
                    TokenKind::I8
                } else {
                    TokenKind::Int
                }
            }
            _ => TokenKind::Int,
        };
        if has_dot {
            kind = TokenKind::Float;
        }
        self.push(kind, start);
    }

    /// `"..."` or `c"..."`. The cursor is on the opening quote. Escapes are
    /// kept verbatim in the body; an unterminated literal keeps what was read.
    fn string(&mut self, start: Pos, kind: TokenKind) {
        self.cursor.advance();
        let body_start = self.cursor.offset();
        let mut body_end = None;
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'"' => {
                    body_end = Some(self.cursor.offset());
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                _ => self.cursor.advance_char(),
            }
        }
        let body = match body_end {
            Some(end) => {
                let full = self.cursor.slice_from(body_start);
                let body_len = (end - body_start) as usize;
                full.get(..body_len).unwrap_or(full)
            }
            None => self.cursor.slice_from(body_start),
        };
        self.push_text(kind, start, body);
    }

    /// `'c'`; the token text is the single character, escapes decoded.
    fn char_literal(&mut self, start: Pos) {
        self.cursor.advance();
        let mut value = self.cursor.current_char();
        self.cursor.advance_char();
        if value == Some('\\') && !self.cursor.is_eof() {
            value = self.cursor.current_char().map(unescape);
            self.cursor.advance_char();
        }
        if self.cursor.current() == b'\'' {
            self.cursor.advance();
        }
        let text = value.map(String::from).unwrap_or_default();
        self.push_text(TokenKind::Char, start, &text);
    }

    fn slash(&mut self, start: Pos) {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.push(TokenKind::CommentLine, start);
                let content = self.cursor.pos_here(0);
                while !self.cursor.is_eof() && self.cursor.current() != b'\n' {
                    self.cursor.advance();
                }
                self.push(TokenKind::CommentContent, content);
            }
            b'*' => self.block_comment(start),
            _ => self.with_eq(start, TokenKind::Div, TokenKind::DivEq),
        }
    }

    fn block_comment(&mut self, start: Pos) {
        self.cursor.advance_n(2);
        let open = self.extend(start);
        let content = self.cursor.pos_here(0);
        while !self.cursor.is_eof() {
            if self.cursor.current() == b'*' && self.cursor.peek() == b'/' {
                let text = self.cursor.slice_from(content.pos);
                let content = self.extend(content);
                let close = self.cursor.pos_here(2);
                self.cursor.advance_n(2);
                self.pending
                    .push_back(Token::new(TokenKind::CommentStart, open, "/*"));
                self.pending
                    .push_back(Token::new(TokenKind::CommentContent, content, text));
                self.pending
                    .push_back(Token::new(TokenKind::CommentEnd, close, "*/"));
                return;
            }
            self.cursor.advance();
        }
        self.errors.push(unterminated_comment(open));
        self.finish();
    }

    /// `f"..."` or `` `...` ``.
    ///
    /// Queues `FStrStart`, then literal runs as `FStrPart`, each interpolation
    /// as `FStrNote` followed by either an identifier or a braced token run,
    /// then `FStrEnd`. An unterminated format string has no `FStrEnd`.
    fn format_string(&mut self, start: Pos) {
        let close = if self.cursor.current() == b'`' {
            self.cursor.advance();
            b'`'
        } else {
            self.cursor.advance_n(2);
            b'"'
        };
        self.push(TokenKind::FStrStart, start);

        let mut part = self.cursor.pos_here(0);
        while !self.cursor.is_eof() {
            if self.cursor.current() == close {
                self.flush_part(part);
                let end = self.cursor.pos_here(0);
                self.cursor.advance();
                self.push(TokenKind::FStrEnd, end);
                return;
            }
            if self.at_interpolation() {
                self.flush_part(part);
                self.interpolation();
                if self.finished {
                    return;
                }
                part = self.cursor.pos_here(0);
                continue;
            }
            self.cursor.advance_char();
        }
        self.flush_part(part);
    }

    /// The marker followed by `{` or the start of a name. A marker followed
    /// by anything else is literal text.
    fn at_interpolation(&self) -> bool {
        if self.cursor.current_char() != Some(self.marker) {
            return false;
        }
        let width = u32::try_from(self.marker.len_utf8()).unwrap_or(1);
        let next = self.cursor.nth(width);
        next == b'{' || next.is_ascii_alphabetic() || next == b'_'
    }

    fn flush_part(&mut self, part: Pos) {
        if self.cursor.offset() > part.pos {
            self.push(TokenKind::FStrPart, part);
        }
    }

    /// The cursor is on the marker.
    fn interpolation(&mut self) {
        let note = self.cursor.pos_here(0);
        self.cursor.advance_char();
        self.push(TokenKind::FStrNote, note);

        if self.cursor.current() != b'{' {
            let name = self.cursor.pos_here(0);
            self.cursor
                .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
            self.push(TokenKind::Ident, name);
            return;
        }

        let brace = self.cursor.pos_here(0);
        self.cursor.advance();
        self.push(TokenKind::LBrace, brace);

        let mut depth = 1u32;
        while depth > 0 && !self.finished {
            self.skip_whitespace();
            if self.cursor.is_eof() {
                return;
            }
            match self.cursor.current() {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
            self.scan();
        }
    }
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

/// Lex `source` with the default interpolation marker.
pub fn tokenize(source: &str) -> LexOutput {
    Lexer::new(source).tokenize()
}
