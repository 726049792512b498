//! Evaluation: `-e`, file arguments and the REPL.

use std::io::{self, BufRead, Write};

use auto_diagnostic::{Diagnostic, ErrorCode};
use auto_eval::Value;
use tracing::debug;

use super::{read_file, report_diagnostics, CliError};
use crate::{run_parsed, run_with, RunOptions};

/// Evaluate `source` and print the final value's repr.
///
/// An error value at the end of the program is reported as `E6001`.
///
/// A program whose last statement produces nothing (`void`) prints nothing,
/// so `print(1)` shows `1` once.
pub fn eval_source(source: &str, options: &RunOptions) -> Result<(), CliError> {
    let parsed = auto_parse::parse(source);
    report_diagnostics(source, parsed.diagnostics())?;

    let result = run_parsed(&parsed, options);
    if let Some(message) = result.error_message {
        let diag = Diagnostic::error(ErrorCode::E6001)
            .with_message(format!("runtime error: {message}"));
        return report_diagnostics(source, [&diag]);
    }
    if let Some(value) = result.value.filter(|value| !value.is_void()) {
        println!("{value}");
    }
    Ok(())
}

pub fn run_file(path: &str, options: &RunOptions) -> Result<(), CliError> {
    let source = read_file(path)?;
    debug!(path, bytes = source.len(), "run file");
    eval_source(&source, options)
}

/// Read-eval-print loop over stdin.
///
/// Every line is an independent program with its own universe. `exit` or
/// `quit` ends the session, as does end of input.
pub fn run_repl(options: &RunOptions) -> Result<(), CliError> {
    println!("auto-lang REPL (type `exit` to leave)");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|source| CliError::Read {
            path: "<stdin>".to_string(),
            source,
        })?;
        let line = line.trim();
        match line {
            "exit" | "quit" => break,
            "" => continue,
            _ => {}
        }
        let result = run_with(line, options);
        match (result.value, result.error_message) {
            (_, Some(message)) => eprintln!("Error: {message}"),
            (Some(Value::Void) | None, None) => {}
            (Some(value), None) => println!("{value}"),
        }
    }
    println!();
    println!("Goodbye!");
    Ok(())
}
