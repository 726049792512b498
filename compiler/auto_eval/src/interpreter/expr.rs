//! Expression evaluation.

use auto_ir::{BinaryOp, Expr, ExprKind, Stmt};
use auto_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Evaluator;
use crate::errors::{index_out_of_bounds, invalid_assignment_target, null_value, type_error};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

/// Name of the one builtin callee.
const PRINT: &str = "print";

impl Evaluator<'_> {
    pub fn eval_expr(&mut self, expr: &Expr) -> Value {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn eval_expr_inner(&mut self, expr: &Expr) -> Value {
        match &expr.kind {
            ExprKind::Byte(b) | ExprKind::U8(b) => Value::Byte(*b),
            ExprKind::Int(n) => Value::Int(*n),
            ExprKind::Uint(n) => Value::Uint(*n),
            ExprKind::I8(n) => Value::Int(i32::from(*n)),
            ExprKind::I64(n) => Value::Int(*n as i32),
            ExprKind::Double(d) => Value::Double(*d),
            ExprKind::Bool(b) => Value::Bool(*b),
            ExprKind::Char(c) => Value::Char(*c),
            ExprKind::Str(s) | ExprKind::CStr(s) => Value::Str(s.clone()),
            ExprKind::Nil => Value::Nil,
            ExprKind::Null => null_value(),

            // Unbound names read as nil.
            ExprKind::Ident(name) | ExprKind::Ref(name) => {
                self.universe.get(name).cloned().unwrap_or(Value::Nil)
            }

            ExprKind::Unary { op, expr } => {
                let value = self.eval_expr(expr);
                evaluate_unary(&value, *op)
            }
            ExprKind::Binary { left, op, right } => self.eval_binary(left, *op, right),
            ExprKind::Range { start, end, eq } => {
                let start = self.eval_expr(start);
                let end = self.eval_expr(end);
                match (&start, &end) {
                    (Value::Int(start), Value::Int(end)) => Value::range(*start, *end, *eq),
                    _ => type_error("range"),
                }
            }

            ExprKind::Array(elems) => {
                Value::Array(elems.iter().map(|elem| self.eval_expr(elem)).collect())
            }
            ExprKind::Pair(pair) => {
                Value::Object(vec![(pair.key.clone(), self.eval_expr(&pair.value))])
            }
            ExprKind::Object(pairs) => Value::Object(
                pairs
                    .iter()
                    .map(|pair| (pair.key.clone(), self.eval_expr(&pair.value)))
                    .collect(),
            ),
            ExprKind::Block(stmts) => self.eval_block_expr(stmts),
            ExprKind::FStr(parts) => {
                let mut text = String::new();
                for part in parts {
                    text.push_str(&self.eval_expr(part).repr());
                }
                Value::Str(text)
            }

            ExprKind::Call { callee, args } => self.eval_call(callee, args),
            ExprKind::Index { array, index } => {
                let array = self.eval_expr(array);
                let index = self.eval_expr(index);
                match (&array, &index) {
                    (Value::Array(items), Value::Int(i)) => usize::try_from(*i)
                        .ok()
                        .and_then(|i| items.get(i))
                        .cloned()
                        .unwrap_or_else(index_out_of_bounds),
                    _ => Value::Nil,
                }
            }

            ExprKind::If { cond, then, els } => {
                if self.eval_expr(cond).is_true() {
                    self.eval_expr(then)
                } else if let Some(els) = els {
                    self.eval_expr(els)
                } else {
                    Value::Void
                }
            }
        }
    }

    /// A block in expression position: no new scope, nil when empty.
    fn eval_block_expr(&mut self, stmts: &[Stmt]) -> Value {
        self.eval_sequence(stmts, Value::Nil)
    }

    fn eval_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> Value {
        match op {
            BinaryOp::Assign => self.eval_assign(left, right),
            BinaryOp::AddAssign | BinaryOp::SubAssign | BinaryOp::MulAssign | BinaryOp::DivAssign => {
                self.eval_compound_assign(left, op, right)
            }
            BinaryOp::Dot => self.eval_member(left, right),
            _ => {
                let left = self.eval_expr(left);
                let right = self.eval_expr(right);
                evaluate_binary(&left, &right, op)
            }
        }
    }

    /// `name = value`. The result is the assigned value.
    fn eval_assign(&mut self, target: &Expr, value: &Expr) -> Value {
        let value = self.eval_expr(value);
        match target.as_ident() {
            Some(name) => {
                self.universe.set(name, value.clone());
                value
            }
            None => invalid_assignment_target(),
        }
    }

    /// `name op= value`, i.e. `name = name op value`.
    fn eval_compound_assign(&mut self, target: &Expr, op: BinaryOp, value: &Expr) -> Value {
        let Some(name) = target.as_ident() else {
            return invalid_assignment_target();
        };
        let Some(base) = op.compound_base() else {
            return invalid_assignment_target();
        };
        let rhs = self.eval_expr(value);
        let current = self.universe.get(name).cloned().unwrap_or(Value::Nil);
        let result = evaluate_binary(&current, &rhs, base);
        self.universe.set(name, result.clone());
        result
    }

    /// `object.field`. Anything other than a field read of an object is nil.
    fn eval_member(&mut self, object: &Expr, field: &Expr) -> Value {
        let object = self.eval_expr(object);
        field
            .as_ident()
            .and_then(|key| object.field(key))
            .cloned()
            .unwrap_or(Value::Nil)
    }

    /// Calls. The only callee is the `print` builtin, reached either through
    /// a value equal to the string `"print"` or through the unbound name
    /// `print`. Every other call yields nil.
    fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> Value {
        let unbound_print =
            callee.as_ident() == Some(PRINT) && self.universe.get(PRINT).is_none();
        let callee = self.eval_expr(callee);
        let args: Vec<Value> = args.iter().map(|arg| self.eval_expr(arg)).collect();

        let is_print = unbound_print || matches!(&callee, Value::Str(s) if s == PRINT);
        if !is_print {
            trace!(callee = %callee, "call to non-function");
            return Value::Nil;
        }

        let line = args
            .iter()
            .map(Value::repr)
            .collect::<Vec<_>>()
            .join(" ");
        self.print.println(&line);
        Value::Void
    }
}
