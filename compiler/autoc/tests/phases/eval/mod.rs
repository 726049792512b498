//! Programs run end to end.

use auto_eval::Value;
use autoc::Status;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::{eval_ok, repr, run_captured};

#[test]
fn deeply_nested_programs_run_and_release() {
    let depth = 100_000;
    let nested = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    let captured = run_captured(&nested);
    assert_eq!(captured.result.status, Status::Ok);
    drop(captured);

    assert_eq!(eval_ok(&format!("{}1", "-".repeat(200_000))), Value::Int(1));
}

#[test]
fn precedence() {
    assert_eq!(eval_ok("1+2*3"), Value::Int(7));
}

#[test]
fn grouping_and_promotion() {
    assert_eq!(eval_ok("(2+3.5)*5"), Value::Double(27.5));
}

#[test]
fn reassignment() {
    assert_eq!(eval_ok("var a = 1; a = 2; a"), Value::Int(2));
}

#[test]
fn inclusive_range_sum() {
    assert_eq!(
        eval_ok("var sum = 0; for i in 0..=10 { sum = sum + i }; sum"),
        Value::Int(55)
    );
}

#[test]
fn range_inclusivity() {
    assert_eq!(
        eval_ok("var sum = 0\nfor i in 0..5 { sum = sum + i }\nsum"),
        Value::Int(10)
    );
    assert_eq!(
        eval_ok("var sum = 0\nfor i in 0..=5 { sum = sum + i }\nsum"),
        Value::Int(15)
    );
}

#[test]
fn array_repr() {
    assert_eq!(repr("[1, 2, 3]"), "[1, 2, 3]");
}

#[test]
fn out_of_bounds_is_an_error_value() {
    let run = run_captured("var a = [1, 2, 3]; a[5]");
    assert_eq!(run.result.status, Status::EvalError);
    assert_eq!(run.result.value, Some(Value::error("index out of bounds")));
}

#[test]
fn scope_writes() {
    assert_eq!(eval_ok("var x = 1\n{ x = 2 }\nx"), Value::Int(2));
    assert_eq!(eval_ok("var x = 1\n{ var x = 2 }\nx"), Value::Int(1));
}

#[test]
fn error_values_flow_through() {
    let run = run_captured("var e = 1 / 0\nprint(e)\n7");
    assert_eq!(run.result.status, Status::Ok);
    assert_eq!(run.result.value, Some(Value::Int(7)));
    assert_eq!(run.output, "division by zero\n");
}

#[test]
fn printing_program() {
    let source = "var names = [\"a\", \"b\"]\n\
                  for n in names {\n\
                  \x20   print(f\"name: $n\")\n\
                  }";
    let run = run_captured(source);
    assert_eq!(run.result.status, Status::Ok);
    assert_eq!(run.output, "name: a\nname: b\n");
}

#[test]
fn comments_are_ignored() {
    assert_eq!(eval_ok("// leading\nvar a = 2 /* inline */ * 4\na"), Value::Int(8));
}

#[test]
fn unbound_names_read_as_nil() {
    assert_eq!(eval_ok("missing"), Value::Nil);
}

proptest! {
    #[test]
    fn int_literals_evaluate_to_themselves(n in 0i32..1_000_000) {
        prop_assert_eq!(eval_ok(&n.to_string()), Value::Int(n));
    }

    #[test]
    fn addition_matches_wrapping_add(a in 0i32..100_000, b in 0i32..100_000) {
        prop_assert_eq!(eval_ok(&format!("{a} + {b}")), Value::Int(a.wrapping_add(b)));
    }

    #[test]
    fn exclusive_range_sums(n in 0i32..200) {
        let source = format!("var sum = 0\nfor i in 0..{n} {{ sum = sum + i }}\nsum");
        prop_assert_eq!(eval_ok(&source), Value::Int(n * (n - 1).max(0) / 2));
    }

    #[test]
    fn indexing_past_the_end_never_faults(len in 0usize..8, extra in 0usize..8) {
        let elems: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        let source = format!("var a = [{}]\na[{}]", elems.join(", "), len + extra);
        let run = run_captured(&source);
        prop_assert_eq!(run.result.status, Status::EvalError);
        prop_assert_eq!(run.result.error_message.as_deref(), Some("index out of bounds"));
    }
}
