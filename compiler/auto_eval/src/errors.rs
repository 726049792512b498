//! Centralized error constructors for the evaluator.
//!
//! Runtime errors are values: each constructor returns a [`Value::Error`]
//! carrying the message of an [`EvalErrorKind`]. Keeping every message here
//! means the wording lives in one place.

use thiserror::Error;

use crate::Value;

/// Every runtime error the evaluator produces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum EvalErrorKind {
    /// Operand kinds the operator is not defined for. Carries the operator,
    /// e.g. `+`, `unary -` or `range`.
    #[error("type error in {0}")]
    TypeError(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("index out of bounds")]
    IndexOutOfBounds,
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    /// Evaluating the `null` literal.
    #[error("null")]
    Null,
}

impl EvalErrorKind {
    pub fn into_value(self) -> Value {
        Value::Error(self.to_string())
    }
}

#[cold]
pub fn type_error(op: &'static str) -> Value {
    EvalErrorKind::TypeError(op).into_value()
}

#[cold]
pub fn division_by_zero() -> Value {
    EvalErrorKind::DivisionByZero.into_value()
}

#[cold]
pub fn index_out_of_bounds() -> Value {
    EvalErrorKind::IndexOutOfBounds.into_value()
}

#[cold]
pub fn invalid_assignment_target() -> Value {
    EvalErrorKind::InvalidAssignmentTarget.into_value()
}

#[cold]
pub fn null_value() -> Value {
    EvalErrorKind::Null.into_value()
}
