//! Mapping from declared and inferred types to C.

use auto_eval::Universe;
use auto_ir::{BinaryOp, Expr, ExprKind, StmtKind, Type, TypeKind, UnaryOp};
use auto_stack::ensure_sufficient_stack;

use crate::TransContext;

/// C spelling of `ty`, registering any header it depends on.
pub fn c_type_name(ctx: &mut TransContext, ty: &Type) -> String {
    ensure_sufficient_stack(|| c_type_spelling(ctx, ty))
}

fn c_type_spelling(ctx: &mut TransContext, ty: &Type) -> String {
    match ty.kind {
        TypeKind::Byte => {
            ctx.add_include("<stdint.h>");
            "uint8_t".to_string()
        }
        TypeKind::Int => "int".to_string(),
        TypeKind::Uint => "unsigned int".to_string(),
        TypeKind::Float => "float".to_string(),
        TypeKind::Double => "double".to_string(),
        TypeKind::Bool => {
            ctx.add_include("<stdbool.h>");
            "bool".to_string()
        }
        TypeKind::Char => "char".to_string(),
        TypeKind::Str | TypeKind::CStr => "char*".to_string(),
        TypeKind::Array | TypeKind::Ptr => {
            let elem = ty
                .elem
                .as_deref()
                .map_or_else(|| "void".to_string(), |elem| c_type_name(ctx, elem));
            format!("{elem}*")
        }
        TypeKind::Void | TypeKind::Unknown => "void".to_string(),
        TypeKind::User => ty.name.clone().unwrap_or_else(|| "void".to_string()),
    }
}

/// Declarator for a variable: `int x`, or `int xs[]` for arrays.
pub fn c_declaration(ctx: &mut TransContext, ty: &Type, name: &str) -> String {
    match (ty.kind, ty.elem.as_deref()) {
        (TypeKind::Array, Some(elem)) => format!("{} {name}[]", c_type_name(ctx, elem)),
        _ => format!("{} {name}", c_type_name(ctx, ty)),
    }
}

/// `printf` conversion for a value of type `ty`.
pub fn printf_format(ty: Option<&Type>) -> &'static str {
    match ty.map(|ty| ty.kind) {
        Some(TypeKind::Str | TypeKind::CStr) => "%s",
        Some(TypeKind::Float | TypeKind::Double) => "%g",
        Some(TypeKind::Uint) => "%u",
        Some(TypeKind::Char) => "%c",
        _ => "%d",
    }
}

/// Best-effort static type of `expr`. Names resolve through the types
/// declared in `universe`.
pub fn infer_type(expr: &Expr, universe: &Universe) -> Option<Type> {
    ensure_sufficient_stack(|| infer_kind(expr, universe))
}

fn infer_kind(expr: &Expr, universe: &Universe) -> Option<Type> {
    let kind = match &expr.kind {
        ExprKind::Int(_) | ExprKind::I8(_) | ExprKind::I64(_) => TypeKind::Int,
        ExprKind::Uint(_) => TypeKind::Uint,
        ExprKind::Byte(_) | ExprKind::U8(_) => TypeKind::Byte,
        ExprKind::Double(_) => TypeKind::Double,
        ExprKind::Bool(_)
        | ExprKind::Unary {
            op: UnaryOp::Not, ..
        } => TypeKind::Bool,
        ExprKind::Char(_) => TypeKind::Char,
        ExprKind::Str(_) | ExprKind::FStr(_) => TypeKind::Str,
        ExprKind::CStr(_) => TypeKind::CStr,
        ExprKind::Nil | ExprKind::Null => return Some(Type::ptr_to(Type::new(TypeKind::Void))),

        ExprKind::Ident(name) | ExprKind::Ref(name) => return universe.type_of(name).cloned(),
        ExprKind::Unary { expr, .. } => return infer_type(expr, universe),
        ExprKind::Binary { left, op, right } => return infer_binary(left, *op, right, universe),
        ExprKind::Array(elems) => {
            let elem = elems
                .first()
                .and_then(|first| infer_type(first, universe))
                .unwrap_or_else(|| Type::new(TypeKind::Int));
            return Some(Type::array_of(elem));
        }
        ExprKind::Index { array, .. } => {
            return infer_type(array, universe).and_then(|ty| ty.elem.as_deref().cloned());
        }
        ExprKind::If { then, .. } => return infer_type(then, universe),
        ExprKind::Block(stmts) => {
            return match stmts.as_slice() {
                [only] => match &only.kind {
                    StmtKind::Expr(expr) => infer_type(expr, universe),
                    _ => None,
                },
                _ => None,
            };
        }
        ExprKind::Range { .. }
        | ExprKind::Pair(_)
        | ExprKind::Object(_)
        | ExprKind::Call { .. } => return None,
    };
    Some(Type::new(kind))
}

fn infer_binary(left: &Expr, op: BinaryOp, right: &Expr, universe: &Universe) -> Option<Type> {
    match op {
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::Gt
        | BinaryOp::LtEq
        | BinaryOp::GtEq => Some(Type::new(TypeKind::Bool)),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            let left = infer_type(left, universe);
            let right = infer_type(right, universe);
            let is_double = |ty: &Option<Type>| {
                matches!(ty.as_ref().map(|ty| ty.kind), Some(TypeKind::Double))
            };
            if is_double(&left) || is_double(&right) {
                Some(Type::new(TypeKind::Double))
            } else {
                left.or(right)
            }
        }
        BinaryOp::Assign
        | BinaryOp::AddAssign
        | BinaryOp::SubAssign
        | BinaryOp::MulAssign
        | BinaryOp::DivAssign => infer_type(left, universe).or_else(|| infer_type(right, universe)),
        BinaryOp::Dot => None,
    }
}
