use super::*;

#[test]
fn script_is_default() {
    assert_eq!(EvalMode::default(), EvalMode::Script);
}

#[test]
fn names_round_trip() {
    for mode in [EvalMode::Script, EvalMode::Config, EvalMode::Template] {
        assert_eq!(EvalMode::from_name(mode.name()), Some(mode));
        assert_eq!(mode.to_string(), mode.name());
    }
}

#[test]
fn unknown_name() {
    assert_eq!(EvalMode::from_name("module"), None);
}
