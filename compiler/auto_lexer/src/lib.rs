//! Lexer for auto-lang.
//!
//! Turns source text into [`Token`](auto_ir::Token)s on demand. The scanner
//! never fails: a byte it has no rule for (or an unterminated block comment)
//! records a diagnostic and ends the stream with `Eof`.
//!
//! ```text
//! let out = auto_lexer::tokenize("var a = 1");
//! // <var><identifier:a><=><int:1><eof>
//! ```

mod cursor;
mod lexer;

pub use lexer::{tokenize, LexOutput, Lexer, DEFAULT_INTERPOLATION_MARKER};
