use pretty_assertions::assert_eq;

use super::*;
use crate::{expected_expression, invalid_character, ErrorCode};
use auto_ir::Pos;

fn pos(line: u32, at: u32) -> Pos {
    Pos::new(line, at, 0, 1)
}

#[test]
fn parser_errors_dedupe_per_line() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.push(expected_expression(pos(1, 0), ")")));
    assert!(!queue.push(expected_expression(pos(1, 3), "]")));
    assert!(queue.push(expected_expression(pos(2, 0), ")")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn lexer_errors_are_not_deduped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.push(invalid_character(pos(1, 0), '$')));
    assert!(queue.push(invalid_character(pos(1, 2), '$')));
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.flush().len(), 2);
}

#[test]
fn limit_stops_errors() {
    let mut queue = DiagnosticQueue::with_limit(2);
    for line in 1..=5 {
        queue.push(expected_expression(pos(line, 0), "x"));
    }
    assert_eq!(queue.error_count(), 2);
    assert!(queue.limit_reached());
}

#[test]
fn warnings_bypass_counting() {
    let mut queue = DiagnosticQueue::with_limit(1);
    queue.push(expected_expression(pos(1, 0), "x"));
    assert!(queue.push(Diagnostic::warning(ErrorCode::E1001).with_message("w")));
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.flush().len(), 2);
}

#[test]
fn flush_sorts_and_resets() {
    let mut queue = DiagnosticQueue::new();
    queue.push(expected_expression(pos(3, 0), "c"));
    queue.push(expected_expression(pos(1, 0), "a"));
    queue.push(invalid_character(pos(2, 5), '$'));

    let lines: Vec<u32> = queue
        .flush()
        .iter()
        .filter_map(|d| d.primary_pos())
        .map(|p| p.line)
        .collect();
    assert_eq!(lines, vec![1, 2, 3]);
    assert_eq!(queue.error_count(), 0);
    assert!(queue.flush().is_empty());
}
