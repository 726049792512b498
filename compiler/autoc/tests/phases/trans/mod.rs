//! Programs translated to C.

use auto_trans::CStyle;
use autoc::{transpile, transpile_with, Status};
use pretty_assertions::assert_eq;

#[test]
fn program_with_loop_and_function() {
    let source = "fn square(x int) int { x * x }\n\
                  var total = 0\n\
                  for i in 1..=3 { total += square(i) }\n\
                  print(total)";
    let result = transpile(source, "squares");
    assert_eq!(result.status, Status::Ok, "{:?}", result.error_message);
    assert_eq!(
        result.header.as_deref(),
        Some("#pragma once\n\n#include <stdio.h>\n\nint square(int x);\nint main(void);\n")
    );
    assert_eq!(
        result.source.as_deref(),
        Some(
            "#include \"squares.h\"\n\n\
             int square(int x) {\n    return x * x;\n}\n\n\
             int main(void) {\n    int total = 0;\n    \
             for (int i = 1; i <= 3; i++) {\n        total += square(i);\n    }\n    \
             printf(\"%d\\n\", total);\n    return 0;\n}\n"
        )
    );
}

#[test]
fn traditional_header() {
    let result = transpile_with("var pi = 3.14\nprint(pi)", "consts", CStyle::Traditional);
    assert_eq!(
        result.header.as_deref(),
        Some("#ifndef CONSTS_H\n#define CONSTS_H\n\n#include <stdio.h>\n\nint main(void);\n\n#endif // CONSTS_H\n")
    );
    assert!(result.source.unwrap().contains("    double pi = 3.14;\n    printf(\"%g\\n\", pi);\n"));
}

#[test]
fn parse_errors_are_reported() {
    let result = transpile("var = 1", "bad");
    assert_eq!(result.status, Status::ParseError);
    assert!(result.error_message.is_some());
    assert_eq!(result.source, None);
}
