//! Error codes for every front-end diagnostic.
//!
//! The first digit names the phase that reported it.

use std::fmt;

/// Error codes.
///
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E6xxx: evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0002,
    /// Unterminated block comment
    E0006,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Missing statement body
    E1007,

    // Evaluation Errors (E6xxx)
    /// Program evaluated to an error value
    E6001,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E6001 => "E6001",
        }
    }

    #[inline]
    pub fn is_parser_error(self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
