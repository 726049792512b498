//! Tree-walking evaluator.
//!
//! An [`Evaluator`] borrows a [`Universe`] for the duration of a run and
//! reads and writes bindings through it. Every evaluation returns a
//! [`Value`]; runtime errors are error values, never early returns.

mod expr;
mod scope_guard;

pub use scope_guard::ScopedEvaluator;

use auto_ir::{Code, Expr, Stmt, StmtKind};
use auto_stack::ensure_sufficient_stack;
use tracing::{debug_span, trace};

use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::universe::{ScopeKind, Universe};
use crate::{EvalMode, Value};

pub struct Evaluator<'u> {
    universe: &'u mut Universe,
    mode: EvalMode,
    /// Reserved for static checking; evaluation ignores it.
    skip_check: bool,
    print: SharedPrintHandler,
    /// Set by `break` until the enclosing loop or sequence consumes it.
    breaking: bool,
}

impl<'u> Evaluator<'u> {
    /// An evaluator in script mode printing to stdout.
    pub fn new(universe: &'u mut Universe) -> Self {
        Evaluator {
            universe,
            mode: EvalMode::default(),
            skip_check: false,
            print: stdout_handler(),
            breaking: false,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_skip_check(mut self, skip_check: bool) -> Self {
        self.skip_check = skip_check;
        self
    }

    #[must_use]
    pub fn with_print_handler(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    pub fn skip_check(&self) -> bool {
        self.skip_check
    }

    pub fn universe(&self) -> &Universe {
        self.universe
    }

    /// Evaluate a whole program. The result is the last statement's value,
    /// or void for an empty program.
    pub fn eval(&mut self, code: &Code) -> Value {
        let _span = debug_span!(
            "eval",
            mode = %self.mode,
            skip_check = self.skip_check,
            stmts = code.len()
        )
        .entered();
        let result = self.eval_sequence(&code.stmts, Value::Void);
        self.breaking = false;
        result
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> Value {
        trace!(kind = stmt.kind.name(), "eval stmt");
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Expr(expr) => self.eval_expr(expr),
            StmtKind::Store { name, ty, expr } => {
                let value = self.eval_expr(expr);
                if let Some(ty) = ty {
                    self.universe.declare_type(name, ty.clone());
                }
                self.universe.define(name, value.clone());
                value
            }
            StmtKind::Block(stmts) => {
                let mut scoped = self.scoped(ScopeKind::Block);
                scoped.eval_sequence(stmts, Value::Void)
            }
            StmtKind::If { cond, then, els } => {
                if self.eval_expr(cond).is_true() {
                    self.eval_stmt(then)
                } else if let Some(els) = els {
                    self.eval_stmt(els)
                } else {
                    Value::Void
                }
            }
            StmtKind::For { var, iter, body } => self.eval_for(var, iter, body),
            StmtKind::Break => {
                self.breaking = true;
                Value::Void
            }
            StmtKind::Fn { .. } | StmtKind::EmptyLine => Value::Void,
        })
    }

    /// Evaluate statements in order, keeping only the last result. Stops
    /// early when a `break` is pending.
    fn eval_sequence(&mut self, stmts: &[Stmt], initial: Value) -> Value {
        let mut result = initial;
        for stmt in stmts {
            result = self.eval_stmt(stmt);
            if self.breaking {
                break;
            }
        }
        result
    }

    /// `for var in iter body`. The loop runs in one block scope; the loop
    /// variable is written with `set`, so an outer binding of the same name
    /// is overwritten.
    fn eval_for(&mut self, var: &str, iter: &Expr, body: &Stmt) -> Value {
        let mut iterable = self.eval_expr(iter);
        let mut scoped = self.scoped(ScopeKind::Block);
        let mut result = Value::Void;
        match &mut iterable {
            Value::Range(range) => {
                for i in range.iter() {
                    scoped.universe.set(var, Value::Int(i));
                    result = scoped.eval_stmt(body);
                    if scoped.take_break() {
                        break;
                    }
                }
            }
            Value::Array(items) => {
                for item in std::mem::take(items) {
                    scoped.universe.set(var, item);
                    result = scoped.eval_stmt(body);
                    if scoped.take_break() {
                        break;
                    }
                }
            }
            other => trace!(kind = other.type_name(), "for over non-iterable"),
        }
        result
    }

    fn take_break(&mut self) -> bool {
        std::mem::take(&mut self.breaking)
    }
}

#[cfg(test)]
mod tests;
