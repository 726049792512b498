//! Statement nodes and the top-level `Code` unit.

use auto_stack::ensure_sufficient_stack;

use super::{Expr, Type};
use crate::Pos;

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Pos,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, pos: Pos) -> Self {
        Stmt { kind, pos }
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        if !matches!(self.kind, StmtKind::EmptyLine | StmtKind::Break) {
            let kind = std::mem::replace(&mut self.kind, StmtKind::EmptyLine);
            ensure_sufficient_stack(move || drop(kind));
        }
    }
}

/// A function parameter: name plus optional declared type.
#[derive(Clone, PartialEq, Debug)]
pub struct Param {
    pub name: String,
    pub ty: Option<Type>,
}

/// Statement variants.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    Expr(Expr),
    If {
        cond: Expr,
        then: Box<Stmt>,
        els: Option<Box<Stmt>>,
    },
    For {
        var: String,
        iter: Expr,
        body: Box<Stmt>,
    },
    /// `var|let|mut name [type] = expr`
    Store {
        name: String,
        ty: Option<Type>,
        expr: Expr,
    },
    Block(Vec<Stmt>),
    /// Function declaration. Not bound by the evaluator.
    Fn {
        name: String,
        params: Vec<Param>,
        ret: Option<Type>,
        body: Vec<Stmt>,
    },
    EmptyLine,
    Break,
}

impl StmtKind {
    pub const fn name(&self) -> &'static str {
        match self {
            StmtKind::Expr(_) => "stmt.expr",
            StmtKind::If { .. } => "stmt.if",
            StmtKind::For { .. } => "stmt.for",
            StmtKind::Store { .. } => "stmt.store",
            StmtKind::Block(_) => "stmt.block",
            StmtKind::Fn { .. } => "stmt.fn",
            StmtKind::EmptyLine => "stmt.empty_line",
            StmtKind::Break => "stmt.break",
        }
    }
}

/// One parsed translation unit.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Code {
    pub stmts: Vec<Stmt>,
}

impl Code {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Code { stmts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
