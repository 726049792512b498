//! Unary operator implementations.

use auto_ir::UnaryOp;

use crate::errors::type_error;
use crate::Value;

/// Evaluate a unary operation on a value.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Value {
    match op {
        UnaryOp::Neg => neg(value),
        UnaryOp::Not => not(value),
        UnaryOp::Plus => plus(value),
    }
}

/// `-x` on `int` (wrapping) or `double`.
pub fn neg(value: &Value) -> Value {
    match value {
        Value::Int(n) => Value::Int(n.wrapping_neg()),
        Value::Double(d) => Value::Double(-d),
        _ => type_error("unary -"),
    }
}

/// `!x`: the negated truthiness of any value.
pub fn not(value: &Value) -> Value {
    Value::Bool(!value.is_true())
}

/// `+x` is the identity on numbers.
pub fn plus(value: &Value) -> Value {
    match value {
        Value::Int(_) | Value::Uint(_) | Value::Byte(_) | Value::Double(_) => value.clone(),
        _ => type_error("unary +"),
    }
}
