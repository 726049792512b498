//! Expression code generation.
//!
//! Every function returns the C expression text; nothing is written to the
//! context except required includes.

use auto_eval::Universe;
use auto_ir::{fmt_double, BinaryOp, Expr, ExprKind, Pair, StmtKind};
use auto_stack::ensure_sufficient_stack;

use super::types::{infer_type, printf_format};
use super::unsupported;
use crate::{TransContext, TransError};

pub fn emit_expr(
    ctx: &mut TransContext,
    universe: &Universe,
    expr: &Expr,
) -> Result<String, TransError> {
    ensure_sufficient_stack(|| emit_expr_kind(ctx, universe, expr))
}

fn emit_expr_kind(
    ctx: &mut TransContext,
    universe: &Universe,
    expr: &Expr,
) -> Result<String, TransError> {
    let text = match &expr.kind {
        // Literals
        ExprKind::Byte(b) | ExprKind::U8(b) => format!("0x{b:02X}"),
        ExprKind::Int(n) => n.to_string(),
        ExprKind::I8(n) => n.to_string(),
        ExprKind::I64(n) => n.to_string(),
        ExprKind::Uint(n) => format!("{n}u"),
        ExprKind::Double(d) => emit_double(*d),
        ExprKind::Bool(b) => {
            ctx.add_include("<stdbool.h>");
            let text = if *b { "true" } else { "false" };
            text.to_string()
        }
        ExprKind::Char(c) => emit_char_literal(*c),
        ExprKind::Str(s) | ExprKind::CStr(s) => emit_string_literal(s),
        ExprKind::Nil | ExprKind::Null => {
            ctx.add_include("<stddef.h>");
            "NULL".to_string()
        }

        ExprKind::Ident(name) | ExprKind::Ref(name) => name.clone(),

        ExprKind::Unary { op, expr } => {
            format!("{}{}", op.as_symbol(), emit_operand(ctx, universe, expr)?)
        }
        ExprKind::Binary {
            left,
            op: BinaryOp::Dot,
            right,
        } => {
            let left = emit_operand(ctx, universe, left)?;
            let right = emit_expr(ctx, universe, right)?;
            format!("{left}.{right}")
        }
        ExprKind::Binary { left, op, right } => {
            let left = emit_operand(ctx, universe, left)?;
            let right = emit_operand(ctx, universe, right)?;
            format!("{left} {} {right}", op.as_symbol())
        }

        ExprKind::Array(elems) => format!("{{{}}}", emit_list(ctx, universe, elems)?),
        ExprKind::Pair(pair) => format!("{{{}}}", emit_pair(ctx, universe, pair)?),
        ExprKind::Object(pairs) => {
            let fields = pairs
                .iter()
                .map(|pair| emit_pair(ctx, universe, pair))
                .collect::<Result<Vec<_>, _>>()?;
            format!("{{{}}}", fields.join(", "))
        }

        ExprKind::Call { callee, args } => match callee.as_ident() {
            Some("print") => emit_print(ctx, universe, args)?,
            _ => {
                let callee = emit_operand(ctx, universe, callee)?;
                format!("{callee}({})", emit_list(ctx, universe, args)?)
            }
        },
        ExprKind::Index { array, index } => {
            let array = emit_operand(ctx, universe, array)?;
            let index = emit_expr(ctx, universe, index)?;
            format!("{array}[{index}]")
        }

        // Conditional expressions become the ternary operator.
        ExprKind::If { cond, then, els } => {
            let cond = emit_expr(ctx, universe, cond)?;
            let then = emit_expr(ctx, universe, then)?;
            let els = match els {
                Some(els) => emit_expr(ctx, universe, els)?,
                None => {
                    ctx.add_include("<stddef.h>");
                    "NULL".to_string()
                }
            };
            format!("({cond}) ? ({then}) : ({els})")
        }
        ExprKind::Block(stmts) => match stmts.as_slice() {
            [only] => match &only.kind {
                StmtKind::Expr(inner) => emit_expr(ctx, universe, inner)?,
                _ => return Err(unsupported("statement block in expression position", expr.pos)),
            },
            _ => return Err(unsupported("multi-statement block expression", expr.pos)),
        },

        ExprKind::Range { .. } => return Err(unsupported("range outside a for loop", expr.pos)),
        ExprKind::FStr(_) => return Err(unsupported("format string", expr.pos)),
    };
    Ok(text)
}

/// An operand of an operator, parenthesized when it is itself an operation.
fn emit_operand(
    ctx: &mut TransContext,
    universe: &Universe,
    expr: &Expr,
) -> Result<String, TransError> {
    let text = emit_expr(ctx, universe, expr)?;
    let nested = match &expr.kind {
        ExprKind::Binary { op, .. } => *op != BinaryOp::Dot,
        ExprKind::If { .. } => true,
        _ => false,
    };
    Ok(if nested { format!("({text})") } else { text })
}

fn emit_list(
    ctx: &mut TransContext,
    universe: &Universe,
    exprs: &[Expr],
) -> Result<String, TransError> {
    let items = exprs
        .iter()
        .map(|expr| emit_expr(ctx, universe, expr))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items.join(", "))
}

fn emit_pair(
    ctx: &mut TransContext,
    universe: &Universe,
    pair: &Pair,
) -> Result<String, TransError> {
    Ok(format!(".{} = {}", pair.key, emit_expr(ctx, universe, &pair.value)?))
}

/// `print(a, b)` becomes `printf("%d %s\n", a, b)`, with each conversion
/// chosen from the argument's inferred type.
fn emit_print(
    ctx: &mut TransContext,
    universe: &Universe,
    args: &[Expr],
) -> Result<String, TransError> {
    ctx.add_include("<stdio.h>");
    let format = args
        .iter()
        .map(|arg| printf_format(infer_type(arg, universe).as_ref()))
        .collect::<Vec<_>>()
        .join(" ");
    let mut call = format!("printf(\"{format}\\n\"");
    for arg in args {
        call.push_str(", ");
        call.push_str(&emit_expr(ctx, universe, arg)?);
    }
    call.push(')');
    Ok(call)
}

/// A double literal that C reads as a double, never as an int.
fn emit_double(value: f64) -> String {
    let text = fmt_double(value);
    if text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        format!("{text}.0")
    } else {
        text
    }
}

fn emit_char_literal(c: char) -> String {
    match c {
        '\'' => "'\\''".to_string(),
        '\\' => "'\\\\'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\t' => "'\\t'".to_string(),
        '\0' => "'\\0'".to_string(),
        c => format!("'{c}'"),
    }
}

/// String bodies keep their source escapes, so only raw control characters
/// need escaping here.
fn emit_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_literals_stay_doubles() {
        assert_eq!(emit_double(27.5), "27.5");
        assert_eq!(emit_double(3.0), "3.0");
        assert_eq!(emit_double(-2.0), "-2.0");
        assert_eq!(emit_double(1.0e10), "1e+10");
    }

    #[test]
    fn char_literals_escape() {
        assert_eq!(emit_char_literal('a'), "'a'");
        assert_eq!(emit_char_literal('\''), "'\\''");
        assert_eq!(emit_char_literal('\n'), "'\\n'");
    }

    #[test]
    fn string_literals_keep_source_escapes() {
        assert_eq!(emit_string_literal("hi"), "\"hi\"");
        assert_eq!(emit_string_literal("a\\n"), "\"a\\n\"");
        assert_eq!(emit_string_literal("tab\there"), "\"tab\\there\"");
    }
}
