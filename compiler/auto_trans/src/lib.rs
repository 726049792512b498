//! Transpiler backends for auto-lang.
//!
//! A [`Backend`] turns a parsed [`Code`] tree into target-language text.
//! Backends read the AST only; the [`Universe`] they are handed is used to
//! record and look up the declared type of each name.
//!
//! # Architecture
//!
//! ```text
//!   Code + Universe
//!        ↓
//!     CTrans         (walks statements, emits C into a TransContext)
//!        ↓
//!   TransOutput      (header text + source text)
//! ```

pub mod c;
mod context;

use auto_eval::Universe;
use auto_ir::{Code, Pos};
use thiserror::Error;

pub use c::{CStyle, CTrans};
pub use context::TransContext;

/// Text produced by one transpilation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransOutput {
    pub header: String,
    pub source: String,
}

/// Why a program could not be transpiled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransError {
    /// A construct the backend has no translation for.
    #[error("{construct} is not supported by the {backend} backend (at {pos})")]
    Unsupported {
        backend: &'static str,
        construct: String,
        pos: Pos,
    },
}

/// A transpiler target.
pub trait Backend {
    /// Short name used in diagnostics, e.g. `c`.
    fn name(&self) -> &'static str;

    fn transpile(&mut self, code: &Code, universe: &mut Universe)
        -> Result<TransOutput, TransError>;
}
