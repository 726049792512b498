use pretty_assertions::assert_eq;

use super::*;

fn at(line: u32, at: u32) -> Pos {
    Pos::new(line, at, 0, 1)
}

#[test]
fn builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("boom")
        .with_label(at(1, 2), "here")
        .with_secondary_label(at(1, 0), "started here")
        .with_note("try again");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_pos(), Some(at(1, 2)));
    assert_eq!(diag.notes, vec!["try again".to_string()]);
}

#[test]
fn warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E1001);
    assert!(!diag.is_error());
    assert_eq!(diag.primary_pos(), None);
}

#[test]
fn display_lists_labels_and_notes() {
    let diag = unterminated_comment(at(2, 4));
    assert_eq!(
        diag.to_string(),
        "error [E0006]: unterminated block comment\n  \
         --> 2:5: comment starts here\n  \
         = note: block comments end with `*/`"
    );
}

#[test]
fn unclosed_delimiter_points_at_both_ends() {
    let diag = unclosed_delimiter(at(1, 0), at(1, 9), '[');
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.message, "unclosed delimiter `[`");
    assert_eq!(diag.labels[0].message, "expected `]`");
    assert!(!diag.labels[1].is_primary);
}

#[test]
fn invalid_character_escapes_control_bytes() {
    let diag = invalid_character(at(1, 0), '\u{7}');
    assert_eq!(diag.message, "invalid character `\\u{7}`");
    let diag = invalid_character(at(1, 0), '$');
    assert_eq!(diag.message, "invalid character `$`");
}

#[test]
fn expected_token_message() {
    let diag = expected_token(at(3, 1), "`)`", "]");
    assert_eq!(diag.message, "unexpected token: expected `)`, found `]`");
    let diag = expected_expression(at(3, 1), ")");
    assert_eq!(diag.code, ErrorCode::E1002);
}
