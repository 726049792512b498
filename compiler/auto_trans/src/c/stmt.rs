//! Statement code generation.

use auto_eval::{ScopeKind, Universe};
use auto_ir::{Expr, ExprKind, Param, Stmt, StmtKind, Type, TypeKind};
use auto_stack::ensure_sufficient_stack;
use tracing::trace;

use super::expr::emit_expr;
use super::types::{c_declaration, c_type_name, infer_type};
use super::unsupported;
use crate::{TransContext, TransError};

pub fn emit_stmt(
    ctx: &mut TransContext,
    universe: &mut Universe,
    stmt: &Stmt,
) -> Result<(), TransError> {
    ensure_sufficient_stack(|| emit_stmt_kind(ctx, universe, stmt))
}

fn emit_stmt_kind(
    ctx: &mut TransContext,
    universe: &mut Universe,
    stmt: &Stmt,
) -> Result<(), TransError> {
    trace!(kind = stmt.kind.name(), "emit stmt");
    match &stmt.kind {
        StmtKind::Expr(expr) => {
            let text = emit_expr(ctx, universe, expr)?;
            ctx.writeln(&format!("{text};"));
        }
        StmtKind::Store { name, ty, expr } => {
            let ty = ty
                .clone()
                .or_else(|| infer_type(expr, universe))
                .unwrap_or_else(|| Type::new(TypeKind::Int));
            let value = emit_expr(ctx, universe, expr)?;
            let decl = c_declaration(ctx, &ty, name);
            universe.declare_type(name, ty);
            ctx.writeln(&format!("{decl} = {value};"));
        }
        StmtKind::Block(stmts) => {
            ctx.writeln("{");
            emit_scoped_body(ctx, universe, stmts)?;
            ctx.writeln("}");
        }
        StmtKind::If { cond, then, els } => emit_if(ctx, universe, cond, then, els.as_deref())?,
        StmtKind::For { var, iter, body } => {
            let ExprKind::Range { start, end, eq } = &iter.kind else {
                return Err(unsupported("for over a non-range iterable", iter.pos));
            };
            let start = emit_expr(ctx, universe, start)?;
            let end = emit_expr(ctx, universe, end)?;
            let cmp = if *eq { "<=" } else { "<" };
            ctx.writeln(&format!(
                "for (int {var} = {start}; {var} {cmp} {end}; {var}++) {{"
            ));
            universe.enter_scope(ScopeKind::Block);
            universe.declare_type(var, Type::new(TypeKind::Int));
            let result = emit_body(ctx, universe, body);
            universe.exit_scope();
            result?;
            ctx.writeln("}");
        }
        StmtKind::Fn { .. } => return Err(unsupported("nested function", stmt.pos)),
        StmtKind::Break => ctx.writeln("break;"),
        StmtKind::EmptyLine => {}
    }
    Ok(())
}

/// `if (c) { ... } else if (d) { ... } else { ... }`
fn emit_if(
    ctx: &mut TransContext,
    universe: &mut Universe,
    cond: &Expr,
    then: &Stmt,
    els: Option<&Stmt>,
) -> Result<(), TransError> {
    let cond = emit_expr(ctx, universe, cond)?;
    ctx.writeln(&format!("if ({cond}) {{"));
    emit_branch(ctx, universe, then)?;

    let mut els = els;
    while let Some(branch) = els {
        match &branch.kind {
            StmtKind::If { cond, then, els: next } => {
                let cond = emit_expr(ctx, universe, cond)?;
                ctx.writeln(&format!("}} else if ({cond}) {{"));
                emit_branch(ctx, universe, then)?;
                els = next.as_deref();
            }
            _ => {
                ctx.writeln("} else {");
                emit_branch(ctx, universe, branch)?;
                els = None;
            }
        }
    }
    ctx.writeln("}");
    Ok(())
}

fn emit_branch(
    ctx: &mut TransContext,
    universe: &mut Universe,
    stmt: &Stmt,
) -> Result<(), TransError> {
    universe.enter_scope(ScopeKind::Block);
    let result = emit_body(ctx, universe, stmt);
    universe.exit_scope();
    result
}

/// The body of a braced construct, one level in. A block body is
/// flattened into the surrounding braces.
fn emit_body(
    ctx: &mut TransContext,
    universe: &mut Universe,
    stmt: &Stmt,
) -> Result<(), TransError> {
    ctx.indent();
    let result = match &stmt.kind {
        StmtKind::Block(stmts) => stmts
            .iter()
            .try_for_each(|stmt| emit_stmt(ctx, universe, stmt)),
        _ => emit_stmt(ctx, universe, stmt),
    };
    ctx.dedent();
    result
}

fn emit_scoped_body(
    ctx: &mut TransContext,
    universe: &mut Universe,
    stmts: &[Stmt],
) -> Result<(), TransError> {
    universe.enter_scope(ScopeKind::Block);
    ctx.indent();
    let result = stmts
        .iter()
        .try_for_each(|stmt| emit_stmt(ctx, universe, stmt));
    ctx.dedent();
    universe.exit_scope();
    result
}

/// Emit a function definition and return its prototype (without `;`).
///
/// Untyped parameters are `int`. When a return type is declared, a trailing
/// expression statement becomes the return value.
pub fn emit_fn(
    ctx: &mut TransContext,
    universe: &mut Universe,
    name: &str,
    params: &[Param],
    ret: Option<&Type>,
    body: &[Stmt],
) -> Result<String, TransError> {
    let ret_name = ret.map_or_else(|| "void".to_string(), |ty| c_type_name(ctx, ty));
    let returns = ret.is_some_and(|ty| ty.kind != TypeKind::Void);

    let param_types: Vec<Type> = params
        .iter()
        .map(|param| param.ty.clone().unwrap_or_else(|| Type::new(TypeKind::Int)))
        .collect();
    let param_list = if params.is_empty() {
        "void".to_string()
    } else {
        params
            .iter()
            .zip(&param_types)
            .map(|(param, ty)| c_declaration(ctx, ty, &param.name))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let prototype = format!("{ret_name} {name}({param_list})");

    ctx.writeln(&format!("{prototype} {{"));
    universe.enter_scope(ScopeKind::Fn);
    for (param, ty) in params.iter().zip(param_types) {
        universe.declare_type(&param.name, ty);
    }
    ctx.indent();
    let result = emit_fn_body(ctx, universe, body, returns);
    ctx.dedent();
    universe.exit_scope();
    result?;
    ctx.writeln("}");
    Ok(prototype)
}

fn emit_fn_body(
    ctx: &mut TransContext,
    universe: &mut Universe,
    body: &[Stmt],
    returns: bool,
) -> Result<(), TransError> {
    let Some((last, init)) = body.split_last() else {
        return Ok(());
    };
    for stmt in init {
        emit_stmt(ctx, universe, stmt)?;
    }
    match &last.kind {
        StmtKind::Expr(expr) if returns => {
            let value = emit_expr(ctx, universe, expr)?;
            ctx.writeln(&format!("return {value};"));
            Ok(())
        }
        _ => emit_stmt(ctx, universe, last),
    }
}
