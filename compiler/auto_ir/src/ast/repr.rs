//! Atom-style text representation of AST nodes.
//!
//! Every node prints as `name(field: value, ...) { child, ... }`, omitting
//! the parentheses when a node has no fields and the braces when it has no
//! children:
//!
//! ```text
//! expr.int(value: 42)
//! expr.binary(op: +) { expr.int(value: 1), expr.int(value: 2) }
//! stmt.store(name: x) { expr.int(value: 42) }
//! Code(count: 1) { stmt.expr { expr.nil } }
//! ```

use std::fmt::{self, Display};

use auto_stack::ensure_sufficient_stack;

use super::{Code, Expr, ExprKind, Pair, Param, Stmt, StmtKind, Type, TypeKind};
use crate::fmt_double;

fn write_list(f: &mut fmt::Formatter<'_>, items: &[&dyn Display]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_node(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    fields: &[(&str, &dyn Display)],
    children: &[&dyn Display],
) -> fmt::Result {
    f.write_str(name)?;
    if !fields.is_empty() {
        f.write_str("(")?;
        for (i, (key, value)) in fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str(")")?;
    }
    if !children.is_empty() {
        f.write_str(" { ")?;
        write_list(f, children)?;
        f.write_str(" }")?;
    }
    Ok(())
}

/// `label: value` inside a child list.
struct Labeled<'a>(&'a dyn Display, &'a dyn Display);

impl Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.1)
    }
}

struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

/// `[a, b, c]` over any displayable slice.
struct Bracketed<'a, T>(&'a [T]);

impl<T: Display> Display for Bracketed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let items: Vec<&dyn Display> = self.0.iter().map(|item| item as &dyn Display).collect();
        write_list(f, &items)?;
        f.write_str("]")
    }
}

fn as_display<T: Display>(items: &[T]) -> Vec<&dyn Display> {
    items.iter().map(|item| item as &dyn Display).collect()
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_node(f))
    }
}

impl Expr {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match &self.kind {
            ExprKind::Byte(v) => write_node(f, name, &[("value", v)], &[]),
            ExprKind::Int(v) => write_node(f, name, &[("value", v)], &[]),
            ExprKind::Uint(v) => write_node(f, name, &[("value", v)], &[]),
            ExprKind::I8(v) => write_node(f, name, &[("value", v)], &[]),
            ExprKind::U8(v) => write_node(f, name, &[("value", v)], &[]),
            ExprKind::I64(v) => write_node(f, name, &[("value", v)], &[]),
            ExprKind::Double(v) => {
                write_node(f, name, &[("value", &fmt_double(*v))], &[])
            }
            ExprKind::Bool(v) => write_node(f, name, &[("value", v)], &[]),
            ExprKind::Char(c) => write_node(f, name, &[("value", &format!("'{c}'"))], &[]),
            ExprKind::Str(s) | ExprKind::CStr(s) => {
                write_node(f, name, &[("value", &Quoted(s))], &[])
            }
            ExprKind::Nil | ExprKind::Null => f.write_str(name),
            ExprKind::Ident(n) | ExprKind::Ref(n) => write_node(f, name, &[("name", n)], &[]),
            ExprKind::Unary { op, expr } => {
                write_node(f, name, &[("op", &op.as_symbol())], &[&**expr])
            }
            ExprKind::Binary { left, op, right } => write_node(
                f,
                name,
                &[("op", &op.as_symbol())],
                &[&**left, &**right],
            ),
            ExprKind::Range { start, end, eq } => write_node(
                f,
                name,
                &[("eq", eq)],
                &[
                    &Labeled(&"start", &**start),
                    &Labeled(&"end", &**end),
                ],
            ),
            ExprKind::Array(elems) => {
                write_node(f, name, &[("count", &elems.len())], &as_display(elems))
            }
            ExprKind::Pair(pair) => write!(f, "{pair}"),
            ExprKind::Object(pairs) => {
                let keys: Vec<Quoted<'_>> = pairs.iter().map(|p| Quoted(&p.key)).collect();
                let entries: Vec<Labeled<'_>> = keys
                    .iter()
                    .zip(pairs)
                    .map(|(key, pair)| Labeled(key, &pair.value))
                    .collect();
                write_node(f, name, &[("count", &pairs.len())], &as_display(&entries))
            }
            ExprKind::Block(stmts) => {
                write_node(f, name, &[("count", &stmts.len())], &as_display(stmts))
            }
            ExprKind::FStr(parts) => {
                write_node(f, name, &[("count", &parts.len())], &as_display(parts))
            }
            ExprKind::Call { callee, args } => {
                let callee = Labeled(&"callee", &**callee);
                let mut children: Vec<&dyn Display> = vec![&callee];
                children.extend(as_display(args));
                write_node(f, name, &[("args", &args.len())], &children)
            }
            ExprKind::Index { array, index } => write_node(
                f,
                name,
                &[],
                &[
                    &Labeled(&"array", &**array),
                    &Labeled(&"index", &**index),
                ],
            ),
            ExprKind::If { cond, then, els } => {
                let cond = Labeled(&"cond", &**cond);
                let then = Labeled(&"then", &**then);
                let mut children: Vec<&dyn Display> = vec![&cond, &then];
                let els = els.as_deref().map(|e| Labeled(&"else", e));
                if let Some(els) = &els {
                    children.push(els);
                }
                write_node(f, name, &[], &children)
            }
        }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, "expr.pair", &[("key", &Quoted(&self.key))], &[&self.value])
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "{}: {ty}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_node(f))
    }
}

impl Stmt {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match &self.kind {
            StmtKind::Expr(expr) => write_node(f, name, &[], &[expr]),
            StmtKind::If { cond, then, els } => {
                let cond = Labeled(&"cond", cond);
                let then = Labeled(&"then", &**then);
                let mut children: Vec<&dyn Display> = vec![&cond, &then];
                let els = els.as_deref().map(|s| Labeled(&"else", s));
                if let Some(els) = &els {
                    children.push(els);
                }
                write_node(f, name, &[], &children)
            }
            StmtKind::For { var, iter, body } => write_node(
                f,
                name,
                &[("var", var)],
                &[&Labeled(&"iter", iter), &Labeled(&"body", &**body)],
            ),
            StmtKind::Store { name: var, ty, expr } => match ty {
                Some(ty) => write_node(f, name, &[("name", var), ("type", ty)], &[expr]),
                None => write_node(f, name, &[("name", var)], &[expr]),
            },
            StmtKind::Block(stmts) => {
                write_node(f, name, &[("count", &stmts.len())], &as_display(stmts))
            }
            StmtKind::Fn {
                name: fn_name,
                params,
                ret,
                body,
            } => {
                let params = Bracketed(params);
                let mut fields: Vec<(&str, &dyn Display)> =
                    vec![("name", fn_name), ("params", &params)];
                if let Some(ret) = ret {
                    fields.push(("ret", ret as &dyn Display));
                }
                write_node(f, name, &fields, &as_display(body))
            }
            StmtKind::EmptyLine | StmtKind::Break => f.write_str(name),
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(
            f,
            "Code",
            &[("count", &self.stmts.len())],
            &as_display(&self.stmts),
        )
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type(kind: {}", self.kind.name())?;
        if self.kind == TypeKind::User {
            if let Some(name) = &self.name {
                write!(f, ", name: {name}")?;
            }
        }
        if let Some(elem) = &self.elem {
            ensure_sufficient_stack(|| write!(f, ", elem: {elem}"))?;
        }
        f.write_str(")")
    }
}
