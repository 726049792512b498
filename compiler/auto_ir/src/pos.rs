//! Source positions.

use std::fmt;

/// Location of a token or AST node in the source text.
///
/// `line` is 1-based, `at` is the 0-based column within the line, `pos` is
/// the absolute byte offset and `len` the byte length of the lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Pos {
    pub line: u32,
    pub at: u32,
    pub pos: u32,
    pub len: u32,
}

impl Pos {
    /// Position used for synthesized nodes that have no source text.
    pub const DUMMY: Pos = Pos {
        line: 0,
        at: 0,
        pos: 0,
        len: 0,
    };

    #[inline]
    pub const fn new(line: u32, at: u32, pos: u32, len: u32) -> Self {
        Pos { line, at, pos, len }
    }

    /// Byte offset one past the end of the lexeme.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.pos + self.len
    }

    /// Span covering both positions, keeping the line/column of the earlier one.
    #[must_use]
    pub fn merge(self, other: Pos) -> Pos {
        let (first, _) = if self.pos <= other.pos {
            (self, other)
        } else {
            (other, self)
        };
        let end = self.end().max(other.end());
        Pos {
            line: first.line,
            at: first.at,
            pos: first.pos,
            len: end - first.pos,
        }
    }

    /// Byte range of the lexeme, for slicing the source.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.pos as usize..self.end() as usize
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}+{}", self.line, self.at, self.pos, self.len)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.at + 1)
    }
}
