//! Evaluation modes.
//!
//! A run is tagged as a script, a config file or a template. The tag does
//! not change evaluation yet; it is carried so that future static checking
//! can specialise on it, and it shows up in tracing spans.

use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Plain program text, as given to `autoc -e` or a source file.
    #[default]
    Script,
    Config,
    Template,
}

impl EvalMode {
    pub const fn name(self) -> &'static str {
        match self {
            EvalMode::Script => "script",
            EvalMode::Config => "config",
            EvalMode::Template => "template",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "script" => Some(EvalMode::Script),
            "config" => Some(EvalMode::Config),
            "template" => Some(EvalMode::Template),
            _ => None,
        }
    }
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
