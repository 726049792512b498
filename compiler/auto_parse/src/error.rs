//! Parser-specific diagnostics.

use auto_diagnostic::{Diagnostic, ErrorCode};
use auto_ir::Pos;

/// A name was required (variable, loop variable, function, parameter, key).
#[cold]
pub fn expected_identifier(pos: Pos, what: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004)
        .with_message(format!("expected {what}, found `{found}`"))
        .with_label(pos, format!("expected {what}"))
}

/// A statement header with no body after it.
#[cold]
pub fn missing_body(pos: Pos, construct: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1007)
        .with_message(format!("`{construct}` has no body"))
        .with_label(pos, "statement expected after this")
}

/// Postfix `[...]` that is not a single index expression.
#[cold]
pub fn malformed_index(pos: Pos) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("an index takes exactly one expression")
        .with_label(pos, "in this index")
        .with_note("write `a[i]`; array literals cannot follow an expression")
}
