//! autoc - the auto-lang compiler driver.
//!
//! Ties the pipeline together: source text is lexed and parsed into a
//! [`Code`] tree, then either evaluated over a fresh [`Universe`] ([`run`])
//! or handed to the C backend ([`transpile`]). Both report a coarse
//! [`Status`] plus an optional message, and never panic on bad input.
//!
//! The `autoc` binary is a thin layer over this crate; see [`commands`].

pub mod commands;
mod tracing_setup;

use auto_eval::{stdout_handler, EvalMode, Evaluator, SharedPrintHandler, Universe, Value};
use auto_ir::Code;
use auto_parse::ParseOutput;
use auto_trans::{Backend, CStyle, CTrans};
use tracing::debug;

pub use tracing_setup::init_tracing;

/// Outcome class of a run or a transpilation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    LexError,
    ParseError,
    /// Evaluation produced an error value, or the backend rejected the
    /// program.
    EvalError,
}

impl Status {
    pub const fn name(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::LexError => "lex_error",
            Status::ParseError => "parse_error",
            Status::EvalError => "eval_error",
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

/// How a program is run.
#[derive(Clone)]
pub struct RunOptions {
    pub mode: EvalMode,
    pub skip_check: bool,
    /// Destination of the `print` builtin.
    pub print: SharedPrintHandler,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            mode: EvalMode::default(),
            skip_check: false,
            print: stdout_handler(),
        }
    }
}

/// Result of [`run`].
///
/// `value` is present whenever evaluation happened, including when it ended
/// in an error value.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    pub status: Status,
    pub value: Option<Value>,
    pub error_message: Option<String>,
}

impl RunResult {
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    #[cold]
    fn failed(status: Status, message: String) -> Self {
        RunResult {
            status,
            value: None,
            error_message: Some(message),
        }
    }
}

/// Result of [`transpile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransResult {
    pub status: Status,
    pub header: Option<String>,
    pub source: Option<String>,
    pub error_message: Option<String>,
}

impl TransResult {
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    #[cold]
    fn failed(status: Status, message: String) -> Self {
        TransResult {
            status,
            header: None,
            source: None,
            error_message: Some(message),
        }
    }
}

/// Lex, parse and evaluate `source`, printing to stdout.
pub fn run(source: &str) -> RunResult {
    run_with(source, &RunOptions::default())
}

pub fn run_with(source: &str, options: &RunOptions) -> RunResult {
    let parsed = auto_parse::parse(source);
    run_parsed(&parsed, options)
}

/// Evaluate an already parsed program.
///
/// Lexer diagnostics take priority over parser diagnostics; in either case
/// nothing is evaluated and the message is the first diagnostic.
pub fn run_parsed(parsed: &ParseOutput, options: &RunOptions) -> RunResult {
    if let Some((status, message)) = frontend_failure(parsed) {
        return RunResult::failed(status, message);
    }
    let value = evaluate(&parsed.code, options);
    debug!(kind = value.type_name(), "run finished");
    let (status, error_message) = match &value {
        Value::Error(message) => (Status::EvalError, Some(message.clone())),
        _ => (Status::Ok, None),
    };
    RunResult {
        status,
        value: Some(value),
        error_message,
    }
}

fn evaluate(code: &Code, options: &RunOptions) -> Value {
    let mut universe = Universe::new();
    Evaluator::new(&mut universe)
        .with_mode(options.mode)
        .with_skip_check(options.skip_check)
        .with_print_handler(options.print.clone())
        .eval(code)
}

/// Lex, parse and translate `source` to C. `name` is the module name used
/// for the header guard and the source's `#include`.
pub fn transpile(source: &str, name: &str) -> TransResult {
    transpile_with(source, name, CStyle::default())
}

pub fn transpile_with(source: &str, name: &str, style: CStyle) -> TransResult {
    let parsed = auto_parse::parse(source);
    transpile_parsed(&parsed, name, style)
}

/// Translate an already parsed program.
pub fn transpile_parsed(parsed: &ParseOutput, name: &str, style: CStyle) -> TransResult {
    if let Some((status, message)) = frontend_failure(parsed) {
        return TransResult::failed(status, message);
    }
    let mut universe = Universe::new();
    let mut backend = CTrans::new(name).with_style(style);
    match backend.transpile(&parsed.code, &mut universe) {
        Ok(output) => TransResult {
            status: Status::Ok,
            header: Some(output.header),
            source: Some(output.source),
            error_message: None,
        },
        Err(err) => {
            debug!(backend = backend.name(), error = %err, "transpile failed");
            TransResult::failed(Status::EvalError, err.to_string())
        }
    }
}

fn frontend_failure(parsed: &ParseOutput) -> Option<(Status, String)> {
    if let Some(diag) = parsed.lex_errors.first() {
        return Some((Status::LexError, diag.to_string()));
    }
    parsed
        .errors
        .first()
        .map(|diag| (Status::ParseError, diag.to_string()))
}

#[cfg(test)]
mod tests;
