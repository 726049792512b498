//! Auto Eval - tree-walking evaluator for auto-lang.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime value, a closed sum type that owns its payload
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch over values
//! - [`Universe`]: the scope tree, a flat arena of [`Scope`]s addressed by
//!   [`ScopeId`] and by dot-joined path
//! - [`Evaluator`]: walks `Code`, reading and writing bindings through the
//!   universe
//!
//! Type errors, division by zero and bad indexes never fault. They produce
//! [`Value::Error`] values that flow through evaluation like any other value.

pub mod errors;
mod eval_mode;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod universe;
mod value;

pub use errors::EvalErrorKind;
pub use eval_mode::EvalMode;
pub use interpreter::{Evaluator, ScopedEvaluator};
pub use operators::{
    add, div, eq, evaluate_binary, ge, gt, le, lt, mul, neq, sub, values_equal,
};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use unary_operators::{evaluate_unary, neg, not, plus};
pub use universe::{Scope, ScopeId, ScopeKind, Universe};
pub use value::{RangeValue, Value};
