//! Core diagnostic types.

use std::fmt;

use auto_ir::Pos;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A source position with a message attached.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub pos: Pos,
    pub message: String,
    /// Whether this is the main error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(pos: Pos, message: impl Into<String>) -> Self {
        Label {
            pos,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(pos: Pos, message: impl Into<String>) -> Self {
        Label {
            pos,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A reported problem: code, severity, message, labeled positions and notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, pos: Pos, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(pos, message));
        self
    }

    pub fn with_secondary_label(mut self, pos: Pos, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(pos, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Position of the first primary label.
    pub fn primary_pos(&self) -> Option<Pos> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.pos)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {}: {}", label.pos, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

/// A byte the lexer has no rule for.
pub fn invalid_character(pos: Pos, ch: char) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message(format!("invalid character `{}`", ch.escape_default()))
        .with_label(pos, "not valid here")
}

/// A `/*` with no matching `*/`.
pub fn unterminated_comment(pos: Pos) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0006)
        .with_message("unterminated block comment")
        .with_label(pos, "comment starts here")
        .with_note("block comments end with `*/`")
}

/// A specific token was required but something else was found.
pub fn expected_token(pos: Pos, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("unexpected token: expected {expected}, found `{found}`"))
        .with_label(pos, format!("expected {expected}"))
}

pub fn expected_expression(pos: Pos, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("expected expression, found `{found}`"))
        .with_label(pos, "expected expression here")
}

pub fn unclosed_delimiter(open: Pos, close: Pos, delimiter: char) -> Diagnostic {
    let expected = match delimiter {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => delimiter,
    };
    Diagnostic::error(ErrorCode::E1003)
        .with_message(format!("unclosed delimiter `{delimiter}`"))
        .with_label(close, format!("expected `{expected}`"))
        .with_secondary_label(open, "unclosed delimiter opened here")
}

#[cfg(test)]
mod tests;
