//! Diagnostics for the auto-lang front-end.
//!
//! The lexer and parser never abort: they record a [`Diagnostic`] and keep
//! going. Each diagnostic carries an [`ErrorCode`], a message, and labels
//! pointing at source [`Pos`](auto_ir::Pos)itions. A [`DiagnosticQueue`]
//! collects them per phase, and an [`emitter`] renders them for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{
    expected_expression, expected_token, invalid_character, unclosed_delimiter,
    unterminated_comment, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
