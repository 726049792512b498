//! Abstract syntax tree.
//!
//! `Code` is a list of `Stmt`; statements own their `Expr` children. Nodes
//! carry the `Pos` of the token that started them.

mod expr;
mod operators;
mod repr;
mod stmt;
mod ty;

pub use expr::{Expr, ExprKind, Pair};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Code, Param, Stmt, StmtKind};
pub use ty::{Type, TypeKind};
