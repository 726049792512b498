//! Auto IR - shared data model for the auto-lang front-end.
//!
//! This crate holds everything the lexer, parser, evaluator and transpiler
//! backends agree on:
//!
//! - [`Pos`]: source positions (line, column, byte offset, length)
//! - [`Token`] / [`TokenKind`]: the lexer's output
//! - [`Expr`], [`Stmt`], [`Code`], [`Type`]: the owned AST
//!
//! The AST is a plain owned tree. Every node exclusively owns its children;
//! there is no sharing and no cycles, so `Clone` is a deep copy.
//!
//! Every AST node implements `Display` with an atom-style representation
//! (`expr.binary(op: +) { expr.int(value: 1), expr.int(value: 2) }`) used by
//! tests and by `autoc --ast`.

pub mod ast;
mod num;
mod pos;
pub mod token;

pub use ast::{
    BinaryOp, Code, Expr, ExprKind, Param, Pair, Stmt, StmtKind, Type, TypeKind, UnaryOp,
};
pub use num::fmt_double;
pub use pos::Pos;
pub use token::{Token, TokenKind};
