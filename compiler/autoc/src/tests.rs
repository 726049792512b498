#![allow(clippy::unwrap_used, clippy::expect_used)]

use auto_eval::{buffer_handler, silent_handler, EvalMode, Value};
use auto_trans::CStyle;
use pretty_assertions::assert_eq;

use super::*;

fn captured() -> (RunOptions, SharedPrintHandler) {
    let print = buffer_handler();
    let options = RunOptions {
        print: print.clone(),
        ..RunOptions::default()
    };
    (options, print)
}

#[test]
fn status_names() {
    assert_eq!(Status::Ok.name(), "ok");
    assert_eq!(Status::LexError.name(), "lex_error");
    assert_eq!(Status::ParseError.name(), "parse_error");
    assert_eq!(Status::EvalError.name(), "eval_error");
    assert!(Status::Ok.is_ok());
    assert!(!Status::EvalError.is_ok());
}

#[test]
fn ok_run_returns_value() {
    let (options, _) = captured();
    let result = run_with("1+2*3", &options);
    assert_eq!(
        result,
        RunResult {
            status: Status::Ok,
            value: Some(Value::Int(7)),
            error_message: None,
        }
    );
    assert!(result.is_ok());
}

#[test]
fn lexer_errors_win() {
    let result = run_with("1 ~ 2", &captured().0);
    assert_eq!(result.status, Status::LexError);
    assert_eq!(result.value, None);
    let message = result.error_message.unwrap();
    assert!(message.starts_with("error [E0002]: invalid character `~`"), "{message}");
}

#[test]
fn parser_errors_stop_evaluation() {
    let (options, print) = captured();
    let result = run_with("print(1)\n)", &options);
    assert_eq!(result.status, Status::ParseError);
    assert_eq!(result.value, None);
    assert!(result
        .error_message
        .unwrap()
        .starts_with("error [E1002]: expected expression, found `)`"));
    assert_eq!(print.output(), "");
}

#[test]
fn error_value_is_eval_error() {
    let result = run_with("var a = [1, 2, 3]; a[5]", &captured().0);
    assert_eq!(result.status, Status::EvalError);
    assert_eq!(result.error_message.as_deref(), Some("index out of bounds"));
    assert_eq!(result.value, Some(Value::error("index out of bounds")));
}

#[test]
fn print_goes_to_the_handler() {
    let (options, print) = captured();
    let result = run_with("print(\"sum\", 1 + 1)", &options);
    assert_eq!(result.value, Some(Value::Void));
    assert_eq!(print.output(), "sum 2\n");
}

#[test]
fn silent_handler_swallows_print() {
    let options = RunOptions {
        print: silent_handler(),
        ..RunOptions::default()
    };
    assert_eq!(run_with("print(1); 2", &options).value, Some(Value::Int(2)));
}

#[test]
fn mode_does_not_change_results() {
    let (options, _) = captured();
    let options = RunOptions {
        mode: EvalMode::Template,
        skip_check: true,
        ..options
    };
    assert_eq!(run_with("2 * 21", &options).value, Some(Value::Int(42)));
}

#[test]
fn runs_are_independent() {
    let (options, _) = captured();
    run_with("var leaked = 1", &options);
    assert_eq!(run_with("leaked", &options).value, Some(Value::Nil));
}

#[test]
fn transpile_ok() {
    let result = transpile("print(1)", "demo");
    assert!(result.is_ok());
    assert_eq!(
        result.header.as_deref(),
        Some("#pragma once\n\n#include <stdio.h>\n\nint main(void);\n")
    );
    assert!(result
        .source
        .unwrap()
        .starts_with("#include \"demo.h\"\n\nint main(void) {\n"));
}

#[test]
fn transpile_with_guard() {
    let result = transpile_with("var x = 1", "my-mod", CStyle::Traditional);
    assert!(result
        .header
        .unwrap()
        .starts_with("#ifndef MY_MOD_H\n#define MY_MOD_H\n"));
}

#[test]
fn transpile_failures() {
    let result = transpile("1 ~ 2", "demo");
    assert_eq!(result.status, Status::LexError);
    assert_eq!(result.header, None);

    let result = transpile("for x in [1] { }", "demo");
    assert_eq!(result.status, Status::EvalError);
    assert_eq!(result.source, None);
    assert_eq!(
        result.error_message.as_deref(),
        Some("for over a non-range iterable is not supported by the c backend (at 1:10)")
    );
}
