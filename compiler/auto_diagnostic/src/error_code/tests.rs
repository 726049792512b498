use super::*;

const ALL: [ErrorCode; 8] = [
    ErrorCode::E0002,
    ErrorCode::E0006,
    ErrorCode::E1001,
    ErrorCode::E1002,
    ErrorCode::E1003,
    ErrorCode::E1004,
    ErrorCode::E1007,
    ErrorCode::E6001,
];

#[test]
fn display_matches_variant_name() {
    for code in ALL {
        assert_eq!(code.to_string(), format!("{code:?}"));
    }
}

#[test]
fn only_e1_codes_are_parser_errors() {
    let parser: Vec<ErrorCode> = ALL.into_iter().filter(|code| code.is_parser_error()).collect();
    assert_eq!(
        parser,
        vec![
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E1003,
            ErrorCode::E1004,
            ErrorCode::E1007,
        ]
    );
}
