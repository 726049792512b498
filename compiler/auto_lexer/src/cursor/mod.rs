//! Byte cursor with line/column tracking.
//!
//! Reading past the end yields `0`, so scanning loops terminate on the
//! end of input without separate bounds checks. Interior NUL bytes are
//! told apart from the end with [`Cursor::is_eof`].

use auto_ir::Pos;

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the current byte.
    pos: u32,
    /// 1-based line of the current byte.
    line: u32,
    /// 0-based column of the current byte.
    at: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
            at: 0,
        }
    }

    /// Byte `offset` positions ahead, or `0` past the end.
    #[inline]
    pub fn nth(&self, offset: u32) -> u8 {
        self.src
            .as_bytes()
            .get((self.pos + offset) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Current byte, or `0` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.nth(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.nth(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.nth(2)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.src.len()
    }

    /// Move past the current byte. A `\n` starts a new line.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.line += 1;
            self.at = 0;
        } else {
            self.at += 1;
        }
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Move past one whole UTF-8 character.
    pub fn advance_char(&mut self) {
        let width = match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.advance_n(width);
    }

    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// The character starting at the current byte.
    pub fn current_char(&self) -> Option<char> {
        self.src.get(self.pos as usize..)?.chars().next()
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.pos
    }

    /// Position of the current byte with the given lexeme length.
    #[inline]
    pub fn pos_here(&self, len: u32) -> Pos {
        Pos::new(self.line, self.at, self.pos, len)
    }

    /// Source text between `start` and the current byte.
    ///
    /// Returns an empty string if `start..pos` does not fall on character
    /// boundaries, which cannot happen for offsets taken at ASCII delimiters.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.src
            .get(start as usize..self.pos as usize)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
