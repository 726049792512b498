//! Command handlers for the `autoc` CLI.
//!
//! `main.rs` only parses arguments ([`parse_args`]) and maps a returned
//! [`CliError`] to an exit code. Each submodule handles one action. Shared
//! helpers (file reading, diagnostic reporting) live here.

mod args;
mod debug;
mod run;
mod trans;

use std::io::{self, IsTerminal};
use std::path::Path;

use auto_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use auto_diagnostic::Diagnostic;
use thiserror::Error;

pub use args::{parse_args, Action, Dump, Invocation};
pub use debug::{dump_ast, dump_tokens};
pub use run::{eval_source, run_file, run_repl};
pub use trans::{module_name, transpile_target};

/// Failure of a CLI action. Every variant means exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{0} requires an argument")]
    MissingArgument(&'static str),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("unknown eval mode '{0}' (expected script, config or template)")]
    UnknownMode(String),
    #[error("nothing to do; pass a file, -e <code>, -t <code> or --repl")]
    NothingToDo,
    /// The backend rejected the program.
    #[error("{0}")]
    Failed(String),
    /// Diagnostics were already written to stderr.
    #[error("aborting due to previous errors")]
    Reported,
}

impl CliError {
    /// Whether `main` still has to print this error.
    pub fn needs_report(&self) -> bool {
        !matches!(self, CliError::Reported)
    }
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Render `diagnostics` to stderr, quoting lines of `source`.
///
/// Returns `Err(CliError::Reported)` when there was anything to render.
pub(crate) fn report_diagnostics<'a>(
    source: &str,
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
) -> Result<(), CliError> {
    let mut diagnostics = diagnostics.into_iter().peekable();
    if diagnostics.peek().is_none() {
        return Ok(());
    }
    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(source);
    let mut errors = 0;
    let mut warnings = 0;
    for diag in diagnostics {
        emitter.emit(diag);
        if diag.is_error() {
            errors += 1;
        } else {
            warnings += 1;
        }
    }
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    Err(CliError::Reported)
}
