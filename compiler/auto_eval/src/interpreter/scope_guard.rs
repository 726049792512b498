//! RAII scope guard for the evaluator.
//!
//! [`ScopedEvaluator`] enters a scope when created and exits it when
//! dropped, so every return path out of a block or loop leaves the universe
//! at the scope it started in.

use std::ops::{Deref, DerefMut};

use super::Evaluator;
use crate::universe::ScopeKind;

/// Access the evaluator through this guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedEvaluator<'guard, 'u> {
    evaluator: &'guard mut Evaluator<'u>,
}

impl Drop for ScopedEvaluator<'_, '_> {
    fn drop(&mut self) {
        self.evaluator.universe.exit_scope();
    }
}

impl<'u> Deref for ScopedEvaluator<'_, 'u> {
    type Target = Evaluator<'u>;

    fn deref(&self) -> &Self::Target {
        self.evaluator
    }
}

impl DerefMut for ScopedEvaluator<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.evaluator
    }
}

impl<'u> Evaluator<'u> {
    /// Enter a scope of `kind` that is exited when the guard drops.
    pub fn scoped(&mut self, kind: ScopeKind) -> ScopedEvaluator<'_, 'u> {
        self.universe.enter_scope(kind);
        ScopedEvaluator { evaluator: self }
    }
}
