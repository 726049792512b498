#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::{expected_expression, unclosed_delimiter};
use auto_ir::Pos;

fn render(diags: &[Diagnostic], source: Option<&str>, mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    if let Some(source) = source {
        emitter = emitter.with_source(source);
    }
    emitter.emit_all(diags);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn plain_label_without_source() {
    let diag = expected_expression(Pos::new(1, 4, 4, 1), ")");
    let out = render(&[diag], None, ColorMode::Never);
    assert_eq!(
        out,
        "error[E1002]: expected expression, found `)`\n  \
         --> 1:5: expected expression here\n\n"
    );
}

#[test]
fn snippet_underlines_the_token() {
    let diag = expected_expression(Pos::new(1, 4, 4, 1), ")");
    let out = render(&[diag], Some("1 + )"), ColorMode::Never);
    assert_eq!(
        out,
        "error[E1002]: expected expression, found `)`\n\
         \x20 --> 1:5\n\
         \x20  |\n\
         \x201 | 1 + )\n\
         \x20  |     ^ expected expression here\n\n"
    );
}

#[test]
fn secondary_labels_use_dashes() {
    let diag = unclosed_delimiter(Pos::new(1, 0, 0, 1), Pos::new(1, 3, 3, 1), '(');
    let out = render(&[diag], Some("(1 2"), ColorMode::Never);
    assert!(out.contains("   |    ^ expected `)`"), "{out}");
    assert!(out.contains("   | - unclosed delimiter opened here"), "{out}");
}

#[test]
fn colors_only_when_enabled() {
    let diag = expected_expression(Pos::new(1, 0, 0, 1), ")");
    let plain = render(std::slice::from_ref(&diag), None, ColorMode::Never);
    let colored = render(&[diag], None, ColorMode::Always);
    assert!(!plain.contains('\x1b'));
    assert!(colored.contains("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn summary_counts() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(1, 0);
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        out,
        "error: aborting due to 2 previous errors; 1 warning emitted\n\
         error: aborting due to previous error\n"
    );
}

#[test]
fn auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
