//! Parser tests.
//!
//! - `parser`: literals, precedence, postfix operators and statements
//! - `recovery`: diagnostics and progress on malformed input

mod recovery;
