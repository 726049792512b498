//! Per-phase diagnostic collection.
//!
//! The parser recovers by skipping a token and trying again, which can
//! report the same mistake several times on one line. The queue keeps the
//! first parser error per line, stops accepting errors past a limit, and
//! hands diagnostics back sorted by position.

use crate::Diagnostic;

/// Default cap on collected errors.
pub const DEFAULT_ERROR_LIMIT: usize = 32;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    /// Line of the last parser error, for same-line dedup.
    last_syntax_line: Option<u32>,
    /// Maximum number of errors kept (0 = unlimited).
    error_limit: usize,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_ERROR_LIMIT)
    }

    pub fn with_limit(error_limit: usize) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            last_syntax_line: None,
            error_limit,
        }
    }

    /// Record a diagnostic. Returns `false` if it was filtered out.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if !diag.is_error() {
            self.diagnostics.push(diag);
            return true;
        }
        if self.limit_reached() {
            return false;
        }

        let line = diag.primary_pos().map(|p| p.line);
        if diag.code.is_parser_error() {
            if line.is_some() && line == self.last_syntax_line {
                return false;
            }
            self.last_syntax_line = line;
        }

        self.diagnostics.push(diag);
        self.error_count += 1;
        true
    }

    pub fn limit_reached(&self) -> bool {
        self.error_limit > 0 && self.error_count >= self.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Drain the queue, sorted by line then column.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result = std::mem::take(&mut self.diagnostics);
        result.sort_by_key(|d| d.primary_pos().map(|p| (p.line, p.at)));
        self.error_count = 0;
        self.last_syntax_line = None;
        result
    }
}

#[cfg(test)]
mod tests;
