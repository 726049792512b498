//! Human-readable output with optional ANSI colors and source snippets.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Renders diagnostics as
///
/// ```text
/// error[E1002]: expected expression, found `)`
///   --> 1:4
///    |
///  1 | 1 + )
///    |     ^ expected expression here
/// ```
///
/// The snippet lines are only drawn when the source text was supplied.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<&'src str>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the program text so labels can quote the offending line.
    #[must_use]
    pub fn with_source<'a>(self, source: &'a str) -> TerminalEmitter<'a, W> {
        TerminalEmitter {
            writer: self.writer,
            colors: self.colors,
            source: Some(source),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    /// Source line `line` (1-based), without its terminator.
    fn source_line(&self, line: u32) -> Option<&'src str> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.source?.lines().nth(index)
    }

    fn write_snippet(&mut self, line: u32, at: u32, len: u32, message: &str, primary: bool) {
        let Some(text) = self.source_line(line) else {
            return;
        };
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);
        let _ = writeln!(self.writer, " {pad} |");
        let _ = writeln!(self.writer, " {line} | {text}");

        let marker = if primary { "^" } else { "-" };
        let underline = marker.repeat(len.max(1) as usize);
        let _ = write!(self.writer, " {pad} | {}", " ".repeat(at as usize));
        let color = if primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&format!("{underline} {message}"), color);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'static, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let pos = label.pos;
            if self.source.is_some() {
                if label.is_primary {
                    let _ = writeln!(self.writer, "  --> {pos}");
                }
                self.write_snippet(pos.line, pos.at, pos.len, &label.message, label.is_primary);
            } else {
                let marker = if label.is_primary { "-->" } else { "   " };
                let _ = write!(self.writer, "  {marker} {pos}: ");
                let color = if label.is_primary {
                    colors::ERROR
                } else {
                    colors::SECONDARY
                };
                self.write_colored(&label.message, color);
                let _ = writeln!(self.writer);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
