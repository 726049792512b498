#![allow(clippy::unwrap_used, clippy::expect_used)]

use auto_ir::{Expr, ExprKind, Pos, Stmt, StmtKind};
use pretty_assertions::assert_eq;

use crate::print_handler::buffer_handler;
use crate::universe::{ScopeKind, Universe};
use crate::{EvalMode, Evaluator, Value};

/// Parse and evaluate `source`, returning the result and printed output.
fn eval_with_output(source: &str) -> (Value, String) {
    let output = auto_parse::parse(source);
    assert!(!output.has_errors(), "{source:?}: {:?}", output.errors);
    let mut universe = Universe::new();
    let print = buffer_handler();
    let mut evaluator = Evaluator::new(&mut universe).with_print_handler(print.clone());
    let value = evaluator.eval(&output.code);
    (value, print.output())
}

fn eval(source: &str) -> Value {
    eval_with_output(source).0
}

fn repr(source: &str) -> String {
    eval(source).repr()
}

#[test]
fn arithmetic() {
    assert_eq!(eval("1+2*3"), Value::Int(7));
    assert_eq!(eval("(2+3.5)*5"), Value::Double(27.5));
    assert_eq!(eval("10 - 4 - 3"), Value::Int(3));
    assert_eq!(eval("7 / 2"), Value::Int(3));
    assert_eq!(repr("1 / 0"), "division by zero");
    assert_eq!(repr("\"a\" - 1"), "type error in -");
}

#[test]
fn literals() {
    assert_eq!(repr("nil"), "nil");
    assert_eq!(repr("true"), "true");
    assert_eq!(repr("3u"), "3u");
    assert_eq!(repr("'c'"), "'c'");
    assert_eq!(repr("\"text\""), "text");
    assert_eq!(repr("null"), "null");
    assert!(eval("null").is_error());
}

#[test]
fn empty_program_is_void() {
    assert_eq!(eval(""), Value::Void);
}

#[test]
fn variables() {
    assert_eq!(eval("var a = 1; a = 2; a"), Value::Int(2));
    assert_eq!(eval("var a = 1\na += 4\na"), Value::Int(5));
    assert_eq!(eval("undefined"), Value::Nil);
    assert_eq!(eval("var s = \"ab\"\ns += \"c\"\ns"), Value::str("abc"));
}

#[test]
fn assignment_yields_value() {
    assert_eq!(eval("var a = 0\na = 9"), Value::Int(9));
    assert_eq!(repr("1 = 2"), "invalid assignment target");
    assert_eq!(repr("1 += 2"), "invalid assignment target");
}

#[test]
fn store_yields_value() {
    assert_eq!(eval("var x = 3"), Value::Int(3));
}

#[test]
fn comparison_and_logic() {
    assert_eq!(eval("1 < 2"), Value::Bool(true));
    assert_eq!(eval("2 >= 3"), Value::Bool(false));
    assert_eq!(eval("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval("1 != 2"), Value::Bool(true));
    assert_eq!(eval("!true"), Value::Bool(false));
    assert_eq!(eval("-5"), Value::Int(-5));
    assert_eq!(eval("+5"), Value::Int(5));
    assert_eq!(repr("1 < \"a\""), "type error in <");
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(repr("[1, 2, 3]"), "[1, 2, 3]");
    assert_eq!(eval("var a = [1, 2, 3]; a[1]"), Value::Int(2));
    assert_eq!(repr("var a = [1, 2, 3]; a[5]"), "index out of bounds");
    assert_eq!(repr("var a = [1, 2, 3]; a[-1]"), "index out of bounds");
    assert_eq!(eval("var a = 5; a[0]"), Value::Nil);
    assert_eq!(eval("[1, 2][\"0\"]"), Value::Nil);
}

#[test]
fn objects_and_members() {
    assert_eq!(repr("var o = {a: 1, b: \"x\"}\no"), "{a: 1, b: x}");
    assert_eq!(eval("var o = {a: 1, b: 2}; o.b"), Value::Int(2));
    assert_eq!(eval("var o = {a: 1}; o.c"), Value::Nil);
}

#[test]
fn ranges() {
    assert_eq!(repr("0..3"), "0..3");
    assert_eq!(repr("1..=4"), "1..=4");
    assert_eq!(repr("1..2.5"), "type error in range");
}

#[test]
fn for_sums() {
    let source = "var sum = 0\nfor i in 0..=10 { sum = sum + i }\nsum";
    assert_eq!(eval(source), Value::Int(55));
    assert_eq!(
        eval("var sum = 0\nfor i in 0..5 { sum = sum + i }\nsum"),
        Value::Int(10)
    );
    assert_eq!(
        eval("var sum = 0\nfor i in 0..=5 { sum = sum + i }\nsum"),
        Value::Int(15)
    );
}

#[test]
fn for_over_array() {
    let source = "var total = 0\nfor x in [4, 5, 6] { total += x }\ntotal";
    assert_eq!(eval(source), Value::Int(15));
}

#[test]
fn for_over_non_iterable_is_void() {
    assert_eq!(eval("for i in 3 { print(i) }"), Value::Void);
}

#[test]
fn for_variable_overwrites_outer_binding() {
    assert_eq!(eval("var i = 100\nfor i in 0..3 { }\ni"), Value::Int(2));
}

#[test]
fn break_stops_innermost_loop() {
    let source = "var n = 0\nfor i in 0..10 {\n  if i == 3 { break }\n  n += 1\n}\nn";
    assert_eq!(eval(source), Value::Int(3));
}

#[test]
fn break_at_top_level_stops_program() {
    let (_, output) = eval_with_output("print(1)\nbreak\nprint(2)");
    assert_eq!(output, "1\n");
}

#[test]
fn block_statement_scopes() {
    // Writes inside a block reach the outer binding.
    assert_eq!(eval("var a = 1\n{ a = 2 }\na"), Value::Int(2));
    // New names stay inside the block.
    assert_eq!(eval("{ var inner = 1 }\ninner"), Value::Nil);
    // A fresh declaration shadows instead of writing through.
    assert_eq!(eval("var x = 1\n{ var x = 2 }\nx"), Value::Int(1));
    assert_eq!(eval("var x = 1\nvar x = 3\nx"), Value::Int(3));
}

#[test]
fn if_statement_and_expression() {
    assert_eq!(eval("var x = 0\nif 1 < 2 { x = 1 } else { x = 2 }\nx"), Value::Int(1));
    assert_eq!(eval("if false { 1 }"), Value::Void);
    assert_eq!(eval("var v = if false { 1 } else { 2 }\nv"), Value::Int(2));
    assert_eq!(eval("var v = if false { 1 }\nv"), Value::Void);
}

#[test]
fn print_builtin() {
    let (value, output) = eval_with_output("print(1, \"two\", [3], 4.5)");
    assert_eq!(value, Value::Void);
    assert_eq!(output, "1 two [3] 4.5\n");
}

#[test]
fn print_through_string_value() {
    let (value, output) = eval_with_output("var p = \"print\"\np(\"hi\")");
    assert_eq!(value, Value::Void);
    assert_eq!(output, "hi\n");
}

#[test]
fn shadowed_print_is_not_builtin() {
    let (value, output) = eval_with_output("var print = 1\nprint(2)");
    assert_eq!(value, Value::Nil);
    assert_eq!(output, "");
}

#[test]
fn other_calls_yield_nil() {
    let (value, output) = eval_with_output("foo(print(1))");
    assert_eq!(value, Value::Nil);
    assert_eq!(output, "1\n");
}

#[test]
fn fstrings_join_reprs() {
    let source = "var name = \"auto\"\nvar n = 2\nf\"hi $name, ${n + 1}!\"";
    assert_eq!(eval(source), Value::str("hi auto, 3!"));
}

#[test]
fn fn_declarations_are_inert() {
    assert_eq!(eval("fn add(a int, b int) int { a + b }"), Value::Void);
    assert_eq!(eval("fn add(a int, b int) int { a + b }\nadd(1, 2)"), Value::Nil);
}

#[test]
fn store_records_declared_type() {
    let output = auto_parse::parse("var n int = 1");
    let mut universe = Universe::new();
    Evaluator::new(&mut universe).eval(&output.code);
    assert_eq!(universe.type_of("n").unwrap().kind, auto_ir::TypeKind::Int);
}

#[test]
fn scopes_survive_evaluation() {
    let output = auto_parse::parse("{ var a = 1 }\nfor i in 0..2 { }");
    let mut universe = Universe::new();
    Evaluator::new(&mut universe).eval(&output.code);
    assert_eq!(universe.current(), universe.global());
    // The block, the loop scope, and one body block per iteration.
    assert_eq!(universe.scope_count(), 5);
    let block = universe.scope_by_path("block_0").unwrap();
    assert_eq!(universe.scope(block).get("a"), Some(&Value::Int(1)));
    let loop_scope = universe.scope_by_path("block_1").unwrap();
    assert_eq!(universe.scope(loop_scope).get("i"), Some(&Value::Int(1)));
    assert_eq!(universe.scope(loop_scope).kids().len(), 2);
    assert!(universe.scope_by_path("block_1.block_3").is_some());
}

#[test]
fn scoped_guard_exits_on_drop() {
    let mut universe = Universe::new();
    let mut evaluator = Evaluator::new(&mut universe);
    {
        let scoped = evaluator.scoped(ScopeKind::Fn);
        assert_eq!(scoped.universe().current_path(), "scope_0");
    }
    assert_eq!(evaluator.universe().current_path(), "");
}

#[test]
fn configuration_is_carried() {
    let mut universe = Universe::new();
    let evaluator = Evaluator::new(&mut universe)
        .with_mode(EvalMode::Config)
        .with_skip_check(true);
    assert_eq!(evaluator.mode(), EvalMode::Config);
    assert!(evaluator.skip_check());
}

#[test]
fn eval_expr_directly() {
    let mut universe = Universe::new();
    let mut evaluator = Evaluator::new(&mut universe);
    let expr = Expr::new(ExprKind::Int(4), Pos::DUMMY);
    assert_eq!(evaluator.eval_expr(&expr), Value::Int(4));
    let stmt = Stmt::new(StmtKind::EmptyLine, Pos::DUMMY);
    assert_eq!(evaluator.eval_stmt(&stmt), Value::Void);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 5000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&source), Value::Int(1));
}

#[test]
fn deep_unary_chain_evaluates() {
    assert_eq!(eval(&format!("{}1", "-".repeat(200_000))), Value::Int(1));
    assert_eq!(eval(&format!("{}1", "-".repeat(200_001))), Value::Int(-1));
}

#[test]
fn deeply_nested_arrays_copy_compare_and_print() {
    let depth = 100_000;
    let nested = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(
        eval(&format!("var a = {nested}\nvar b = a\nb == a")),
        Value::Bool(true)
    );
    assert_eq!(repr(&nested).len(), 2 * depth + 1);
}
