//! Runtime values.
//!
//! A [`Value`] exclusively owns its payload: strings, array elements and
//! object fields are never shared, so `clone` is a deep copy and dropping a
//! value releases everything under it.
//!
//! Arrays and objects nest as deep as the program builds them. Cloning,
//! comparing, printing and dropping recurse through `ensure_sufficient_stack`
//! so a deeply nested value never exhausts the thread stack.

use std::fmt;
use std::ops::RangeInclusive;

use auto_ir::fmt_double;
use auto_stack::ensure_sufficient_stack;

/// An integer range produced by `a..b` or `a..=b`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RangeValue {
    pub start: i32,
    pub end: i32,
    /// Inclusive of `end`.
    pub eq: bool,
}

impl RangeValue {
    pub const fn new(start: i32, end: i32, eq: bool) -> Self {
        RangeValue { start, end, eq }
    }

    /// The integers the range covers, in order.
    #[allow(clippy::reversed_empty_ranges)]
    pub fn iter(self) -> RangeInclusive<i32> {
        if self.eq {
            self.start..=self.end
        } else if self.end > self.start {
            self.start..=self.end - 1
        } else {
            1..=0
        }
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.eq { "..=" } else { ".." };
        write!(f, "{}{op}{}", self.start, self.end)
    }
}

/// A runtime value.
#[derive(Debug)]
pub enum Value {
    Nil,
    /// Result of statements and calls that produce nothing.
    Void,
    Bool(bool),
    Byte(u8),
    Int(i32),
    Uint(u32),
    Double(f64),
    Char(char),
    Str(String),
    Array(Vec<Value>),
    /// Fields in declaration order.
    Object(Vec<(String, Value)>),
    Range(RangeValue),
    Error(String),
}

impl Value {
    pub fn str(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub const fn range(start: i32, end: i32, eq: bool) -> Self {
        Value::Range(RangeValue::new(start, end, eq))
    }

    /// Truthiness for `if`: `false`, `nil`, numeric zero and the empty
    /// string are false; everything else is true.
    #[allow(clippy::float_cmp)]
    pub fn is_true(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Nil => false,
            Value::Int(n) => *n != 0,
            Value::Uint(n) => *n != 0,
            Value::Double(d) => *d != 0.0,
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Field of an object value.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Byte(_) => "byte",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Double(_) => "double",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Range(_) => "range",
            Value::Error(_) => "error",
        }
    }

    /// Human-readable rendering, as printed by `print` and the REPL.
    pub fn repr(&self) -> String {
        self.to_string()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Nil => Value::Nil,
            Value::Void => Value::Void,
            Value::Bool(b) => Value::Bool(*b),
            Value::Byte(b) => Value::Byte(*b),
            Value::Int(n) => Value::Int(*n),
            Value::Uint(n) => Value::Uint(*n),
            Value::Double(d) => Value::Double(*d),
            Value::Char(c) => Value::Char(*c),
            Value::Str(s) => Value::Str(s.clone()),
            Value::Array(items) => ensure_sufficient_stack(|| Value::Array(items.clone())),
            Value::Object(fields) => ensure_sufficient_stack(|| Value::Object(fields.clone())),
            Value::Range(range) => Value::Range(*range),
            Value::Error(message) => Value::Error(message.clone()),
        }
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) | (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => ensure_sufficient_stack(|| a == b),
            (Value::Object(a), Value::Object(b)) => ensure_sufficient_stack(|| a == b),
            (Value::Range(a), Value::Range(b)) => a == b,
            _ => false,
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        match self {
            Value::Array(items) if !items.is_empty() => {
                let items = std::mem::take(items);
                ensure_sufficient_stack(move || drop(items));
            }
            Value::Object(fields) if !fields.is_empty() => {
                let fields = std::mem::take(fields);
                ensure_sufficient_stack(move || drop(fields));
            }
            _ => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_repr(f))
    }
}

impl Value {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Void => f.write_str("void"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Byte(b) => write!(f, "0x{b:02X}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}u"),
            Value::Double(d) => f.write_str(&fmt_double(*d)),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Str(s) | Value::Error(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Range(range) => write!(f, "{range}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
