//! Expression nodes.

use auto_stack::ensure_sufficient_stack;

use super::{BinaryOp, Stmt, UnaryOp};
use crate::Pos;

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Pos,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, pos: Pos) -> Self {
        Expr { kind, pos }
    }

    /// Placeholder used when a term is missing.
    pub fn nil(pos: Pos) -> Self {
        Expr::new(ExprKind::Nil, pos)
    }

    /// Name of an identifier expression.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

// Nesting is as deep as the source, so children are released with the same
// stack growth the parser used to build them.
impl Drop for Expr {
    fn drop(&mut self) {
        if self.kind.has_children() {
            let kind = std::mem::replace(&mut self.kind, ExprKind::Nil);
            ensure_sufficient_stack(move || drop(kind));
        }
    }
}

/// A `key: value` entry of an object literal.
#[derive(Clone, PartialEq, Debug)]
pub struct Pair {
    pub key: String,
    pub value: Expr,
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    // Literals
    Byte(u8),
    Int(i32),
    Uint(u32),
    I8(i8),
    U8(u8),
    I64(i64),
    /// Every floating literal: dotted, `f`-suffixed and `d`-suffixed.
    Double(f64),
    Bool(bool),
    Char(char),
    Str(String),
    CStr(String),
    Nil,
    Null,

    // Names
    Ident(String),
    Ref(String),

    // Operators
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Range {
        start: Box<Expr>,
        end: Box<Expr>,
        eq: bool,
    },

    // Composites
    Array(Vec<Expr>),
    Pair(Box<Pair>),
    Object(Vec<Pair>),
    Block(Vec<Stmt>),
    /// Interpolated string: literal text parts and embedded expressions.
    FStr(Vec<Expr>),

    // Postfix
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Index {
        array: Box<Expr>,
        index: Box<Expr>,
    },

    If {
        cond: Box<Expr>,
        then: Box<Expr>,
        els: Option<Box<Expr>>,
    },
}

impl ExprKind {
    /// Whether the node owns nested expressions or statements.
    pub const fn has_children(&self) -> bool {
        matches!(
            self,
            ExprKind::Unary { .. }
                | ExprKind::Binary { .. }
                | ExprKind::Range { .. }
                | ExprKind::Array(_)
                | ExprKind::Pair(_)
                | ExprKind::Object(_)
                | ExprKind::Block(_)
                | ExprKind::FStr(_)
                | ExprKind::Call { .. }
                | ExprKind::Index { .. }
                | ExprKind::If { .. }
        )
    }

    /// Atom-style node name, e.g. `expr.binary`.
    pub const fn name(&self) -> &'static str {
        match self {
            ExprKind::Byte(_) => "expr.byte",
            ExprKind::Int(_) => "expr.int",
            ExprKind::Uint(_) => "expr.uint",
            ExprKind::I8(_) => "expr.i8",
            ExprKind::U8(_) => "expr.u8",
            ExprKind::I64(_) => "expr.i64",
            ExprKind::Double(_) => "expr.double",
            ExprKind::Bool(_) => "expr.bool",
            ExprKind::Char(_) => "expr.char",
            ExprKind::Str(_) => "expr.str",
            ExprKind::CStr(_) => "expr.cstr",
            ExprKind::Nil => "expr.nil",
            ExprKind::Null => "expr.null",
            ExprKind::Ident(_) => "expr.ident",
            ExprKind::Ref(_) => "expr.ref",
            ExprKind::Unary { .. } => "expr.unary",
            ExprKind::Binary { .. } => "expr.binary",
            ExprKind::Range { .. } => "expr.range",
            ExprKind::Array(_) => "expr.array",
            ExprKind::Pair(_) => "expr.pair",
            ExprKind::Object(_) => "expr.object",
            ExprKind::Block(_) => "expr.block",
            ExprKind::FStr(_) => "expr.fstr",
            ExprKind::Call { .. } => "expr.call",
            ExprKind::Index { .. } => "expr.index",
            ExprKind::If { .. } => "expr.if",
        }
    }
}
