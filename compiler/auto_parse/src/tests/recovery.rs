//! Malformed input: every problem is reported and parsing still consumes
//! the whole input.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use auto_diagnostic::ErrorCode;
use auto_ir::StmtKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::parse;

fn error_codes(source: &str) -> Vec<ErrorCode> {
    parse(source).errors.iter().map(|d| d.code).collect()
}

#[test]
fn test_stray_token_is_reported_and_skipped() {
    let output = parse("var a = 1\n)\nvar b = 2");
    assert_eq!(output.code.len(), 3);
    assert_eq!(
        output.errors.iter().map(|d| d.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1002]
    );
    assert!(matches!(
        &output.code.stmts[2].kind,
        StmtKind::Store { name, .. } if name == "b"
    ));
}

#[test]
fn test_unclosed_group() {
    assert_eq!(error_codes("(1 + 2"), vec![ErrorCode::E1003]);
}

#[test]
fn test_unclosed_array() {
    assert_eq!(error_codes("[1, 2"), vec![ErrorCode::E1003]);
}

#[test]
fn test_unclosed_block() {
    let output = parse("{ var a = 1");
    assert_eq!(
        output.errors.iter().map(|d| d.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1003]
    );
    assert_eq!(output.code.len(), 1);
}

#[test]
fn test_missing_variable_name() {
    let output = parse("var = 1");
    assert_eq!(
        output.errors.iter().map(|d| d.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1004]
    );
    assert_eq!(
        output.code.to_string(),
        "Code(count: 1) { stmt.store(name: ) { expr.int(value: 1) } }"
    );
}

#[test]
fn test_missing_assignment() {
    let output = parse("var a\nvar b = 2");
    assert_eq!(
        output.errors.iter().map(|d| d.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1001]
    );
    assert_eq!(output.code.len(), 2);
}

#[test]
fn test_index_takes_one_expression() {
    assert_eq!(error_codes("a[1, 2]"), vec![ErrorCode::E1001]);
    assert_eq!(error_codes("a[]"), vec![ErrorCode::E1001]);
}

#[test]
fn test_missing_if_body() {
    assert_eq!(error_codes("if x"), vec![ErrorCode::E1007]);
    assert_eq!(error_codes("{ if x }"), vec![ErrorCode::E1007]);
}

#[test]
fn test_missing_for_parts() {
    assert_eq!(error_codes("for in a { }"), vec![ErrorCode::E1004]);
    assert_eq!(error_codes("for i a { }"), vec![ErrorCode::E1001]);
}

#[test]
fn test_errors_on_separate_lines_are_all_reported() {
    let codes = error_codes(")\n]\nvar = 1");
    assert_eq!(
        codes,
        vec![ErrorCode::E1002, ErrorCode::E1002, ErrorCode::E1004]
    );
}

#[test]
fn test_one_error_per_line() {
    assert_eq!(error_codes(") ] )"), vec![ErrorCode::E1002]);
}

#[test]
fn test_lexer_errors_are_kept_apart() {
    let output = parse("1 ~ 2");
    assert!(output.has_lex_errors());
    assert!(!output.has_parse_errors());
    assert_eq!(output.lex_errors[0].code, ErrorCode::E0002);
    // The lexer ends the stream at the bad byte.
    assert_eq!(output.code.to_string(), "Code(count: 1) { stmt.expr { expr.int(value: 1) } }");
}

#[test]
fn test_unterminated_format_string_is_not_an_error() {
    let output = parse("`abc");
    assert!(!output.has_errors());
    assert_eq!(
        output.code.to_string(),
        "Code(count: 1) { stmt.expr { expr.fstr(count: 1) { expr.str(value: \"abc\") } } }"
    );
}

#[test]
fn test_empty_input() {
    let output = parse("");
    assert!(!output.has_errors());
    assert!(output.code.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn arbitrary_input_terminates(source in "\\PC{0,64}") {
        let output = parse(&source);
        prop_assert!(output.code.len() <= source.len() + 1);
    }

    #[test]
    fn token_soup_terminates(parts in prop::collection::vec(
        prop::sample::select(vec![
            "(", ")", "[", "]", "{", "}", ",", ";", "\n", "=", "+", "..", ".",
            "var", "if", "else", "for", "in", "fn", "break", "x", "1", "\"s\"", "`a${b}`",
        ]),
        0..40,
    )) {
        let source = parts.join(" ");
        let _ = parse(&source);
    }
}
