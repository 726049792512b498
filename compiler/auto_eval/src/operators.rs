//! Binary operator implementations.
//!
//! Numeric operators accept `int`/`int`, `uint`/`uint` and `double`/`double`,
//! and promote a mixed `int`/`double` pair to `double`. Integer arithmetic
//! wraps. Any other operand pairing produces an error value.

use std::cmp::Ordering;

use auto_ir::BinaryOp;

use crate::errors::{division_by_zero, type_error};
use crate::Value;

/// Evaluate a binary operation on two values.
///
/// Assignment and member access depend on the left operand's syntax, not
/// its value, so they are resolved by the evaluator and yield `nil` here.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => sub(left, right),
        BinaryOp::Mul => mul(left, right),
        BinaryOp::Div => div(left, right),
        BinaryOp::Eq => eq(left, right),
        BinaryOp::NotEq => neq(left, right),
        BinaryOp::Lt => lt(left, right),
        BinaryOp::Gt => gt(left, right),
        BinaryOp::LtEq => le(left, right),
        BinaryOp::GtEq => ge(left, right),
        BinaryOp::Assign
        | BinaryOp::AddAssign
        | BinaryOp::SubAssign
        | BinaryOp::MulAssign
        | BinaryOp::DivAssign
        | BinaryOp::Dot => Value::Nil,
    }
}

fn arith(
    left: &Value,
    right: &Value,
    symbol: &'static str,
    int_op: fn(i32, i32) -> i32,
    uint_op: fn(u32, u32) -> u32,
    float_op: fn(f64, f64) -> f64,
) -> Value {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Value::Int(int_op(*a, *b)),
        (Value::Uint(a), Value::Uint(b)) => Value::Uint(uint_op(*a, *b)),
        (Value::Double(a), Value::Double(b)) => Value::Double(float_op(*a, *b)),
        (Value::Int(a), Value::Double(b)) => Value::Double(float_op(f64::from(*a), *b)),
        (Value::Double(a), Value::Int(b)) => Value::Double(float_op(*a, f64::from(*b))),
        _ => type_error(symbol),
    }
}

/// `+`. Two strings concatenate.
pub fn add(left: &Value, right: &Value) -> Value {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        let mut joined = String::with_capacity(a.len() + b.len());
        joined.push_str(a);
        joined.push_str(b);
        return Value::Str(joined);
    }
    arith(
        left,
        right,
        "+",
        i32::wrapping_add,
        u32::wrapping_add,
        |a, b| a + b,
    )
}

pub fn sub(left: &Value, right: &Value) -> Value {
    arith(
        left,
        right,
        "-",
        i32::wrapping_sub,
        u32::wrapping_sub,
        |a, b| a - b,
    )
}

pub fn mul(left: &Value, right: &Value) -> Value {
    arith(
        left,
        right,
        "*",
        i32::wrapping_mul,
        u32::wrapping_mul,
        |a, b| a * b,
    )
}

/// `/`. A zero divisor is an error for every numeric pairing, `double`
/// included.
#[allow(clippy::float_cmp)]
pub fn div(left: &Value, right: &Value) -> Value {
    let numeric = matches!(
        (left, right),
        (Value::Int(_), Value::Int(_) | Value::Double(_))
            | (Value::Double(_), Value::Int(_) | Value::Double(_))
            | (Value::Uint(_), Value::Uint(_))
    );
    let zero = match right {
        Value::Int(b) => *b == 0,
        Value::Uint(b) => *b == 0,
        Value::Double(b) => *b == 0.0,
        _ => false,
    };
    if numeric && zero {
        return division_by_zero();
    }
    arith(
        left,
        right,
        "/",
        i32::wrapping_div,
        u32::wrapping_div,
        |a, b| a / b,
    )
}

/// Structural equality. `int` and `double` compare numerically; any other
/// mix of kinds is unequal.
#[allow(clippy::float_cmp)]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Double(b)) => f64::from(*a) == *b,
        (Value::Double(a), Value::Int(b)) => *a == f64::from(*b),
        _ => left == right,
    }
}

pub fn eq(left: &Value, right: &Value) -> Value {
    Value::Bool(values_equal(left, right))
}

pub fn neq(left: &Value, right: &Value) -> Value {
    Value::Bool(!values_equal(left, right))
}

/// Ordering comparison. Only same-kind numeric pairs are ordered; a NaN
/// operand compares false.
fn compare(left: &Value, right: &Value, symbol: &'static str, test: fn(Ordering) -> bool) -> Value {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Double(a), Value::Double(b)) => a.partial_cmp(b),
        _ => return type_error(symbol),
    };
    Value::Bool(ordering.is_some_and(test))
}

pub fn lt(left: &Value, right: &Value) -> Value {
    compare(left, right, "<", Ordering::is_lt)
}

pub fn gt(left: &Value, right: &Value) -> Value {
    compare(left, right, ">", Ordering::is_gt)
}

pub fn le(left: &Value, right: &Value) -> Value {
    compare(left, right, "<=", Ordering::is_le)
}

pub fn ge(left: &Value, right: &Value) -> Value {
    compare(left, right, ">=", Ordering::is_ge)
}
