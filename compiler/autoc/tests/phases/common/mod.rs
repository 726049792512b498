//! Shared helpers for phase tests.

use auto_eval::{buffer_handler, Value};
use autoc::{run_with, RunOptions, RunResult, Status};

/// A finished run with its captured `print` output.
pub struct Captured {
    pub result: RunResult,
    pub output: String,
}

pub fn run_captured(source: &str) -> Captured {
    let print = buffer_handler();
    let options = RunOptions {
        print: print.clone(),
        ..RunOptions::default()
    };
    let result = run_with(source, &options);
    Captured {
        result,
        output: print.output(),
    }
}

/// Run `source`, which must succeed, and return its value.
pub fn eval_ok(source: &str) -> Value {
    let Captured { result, .. } = run_captured(source);
    assert_eq!(result.status, Status::Ok, "{source:?}: {:?}", result.error_message);
    result.value.expect("ok runs carry a value")
}

/// Repr of the final value, whatever the status.
pub fn repr(source: &str) -> String {
    run_captured(source)
        .result
        .value
        .map(|value| value.repr())
        .unwrap_or_default()
}
