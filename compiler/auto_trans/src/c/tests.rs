#![allow(clippy::unwrap_used, clippy::expect_used)]

use auto_eval::Universe;
use auto_ir::TypeKind;
use pretty_assertions::assert_eq;

use super::*;

fn transpile_with(source: &str, style: CStyle) -> Result<TransOutput, TransError> {
    let output = auto_parse::parse(source);
    assert!(!output.has_errors(), "{source:?}: {:?}", output.errors);
    let mut universe = Universe::new();
    CTrans::new("demo")
        .with_style(style)
        .transpile(&output.code, &mut universe)
}

fn transpile(source: &str) -> TransOutput {
    transpile_with(source, CStyle::Modern).unwrap()
}

/// The body of `main`, without the wrapper lines.
fn main_body(source: &str) -> String {
    let output = transpile(source);
    let start = output.source.find("int main(void) {\n").unwrap() + "int main(void) {\n".len();
    let end = output.source.find("    return 0;\n").unwrap();
    output.source[start..end].to_string()
}

#[test]
fn print_becomes_printf() {
    let output = transpile("print(1 + 2)");
    assert_eq!(
        output.source,
        "#include \"demo.h\"\n\nint main(void) {\n    printf(\"%d\\n\", 1 + 2);\n    return 0;\n}\n"
    );
    assert_eq!(
        output.header,
        "#pragma once\n\n#include <stdio.h>\n\nint main(void);\n"
    );
}

#[test]
fn traditional_guard() {
    let output = transpile_with("print(1)", CStyle::Traditional).unwrap();
    assert_eq!(
        output.header,
        "#ifndef DEMO_H\n#define DEMO_H\n\n#include <stdio.h>\n\nint main(void);\n\n#endif // DEMO_H\n"
    );
}

#[test]
fn guard_sanitizes_name() {
    assert_eq!(CTrans::new("demo-app").guard(), "DEMO_APP_H");
}

#[test]
fn stores_infer_types() {
    assert_eq!(
        main_body("var x = 2.5\nvar s = \"hi\"\nprint(x, s)"),
        "    double x = 2.5;\n    char* s = \"hi\";\n    printf(\"%g %s\\n\", x, s);\n"
    );
}

#[test]
fn deep_expressions_transpile() {
    let source = transpile(&format!("var x = {}1", "-".repeat(100_000))).source;
    assert!(source.contains("    int x = "));
}

#[test]
fn deep_pointer_annotations_transpile() {
    let source = transpile(&format!("var p *{}int = nil", "*".repeat(20_000))).source;
    assert!(source.contains(&format!("    int{} p = NULL;", "*".repeat(20_001))));
}

#[test]
fn declared_type_wins() {
    assert_eq!(main_body("var n uint = 3u"), "    unsigned int n = 3u;\n");
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(
        main_body("var a = [1, 2, 3]\nprint(a[0])"),
        "    int a[] = {1, 2, 3};\n    printf(\"%d\\n\", a[0]);\n"
    );
}

#[test]
fn nested_operations_are_parenthesized() {
    assert_eq!(main_body("var y = (1 + 2) * 3"), "    int y = (1 + 2) * 3;\n");
    assert_eq!(main_body("var z = -(4 - 1)"), "    int z = -(4 - 1);\n");
}

#[test]
fn for_over_range() {
    assert_eq!(
        main_body("for i in 0..=3 { print(i) }"),
        "    for (int i = 0; i <= 3; i++) {\n        printf(\"%d\\n\", i);\n    }\n"
    );
    assert_eq!(
        main_body("for i in 0..n { }"),
        "    for (int i = 0; i < n; i++) {\n    }\n"
    );
}

#[test]
fn if_chain() {
    let source = "var n = 5\nif n < 3 { print(1) } else if n < 6 { print(2) } else { print(3) }";
    assert_eq!(
        main_body(source),
        "    int n = 5;\n    if (n < 3) {\n        printf(\"%d\\n\", 1);\n    } else if (n < 6) {\n        \
         printf(\"%d\\n\", 2);\n    } else {\n        printf(\"%d\\n\", 3);\n    }\n"
    );
}

#[test]
fn blocks_and_break() {
    assert_eq!(
        main_body("{ var a = 1\nbreak }"),
        "    {\n        int a = 1;\n        break;\n    }\n"
    );
}

#[test]
fn functions_get_prototypes() {
    let output = transpile("fn add(a int, b int) int { a + b }\nprint(add(1, 2))");
    assert_eq!(
        output.source,
        "#include \"demo.h\"\n\nint add(int a, int b) {\n    return a + b;\n}\n\n\
         int main(void) {\n    printf(\"%d\\n\", add(1, 2));\n    return 0;\n}\n"
    );
    assert_eq!(
        output.header,
        "#pragma once\n\n#include <stdio.h>\n\nint add(int a, int b);\nint main(void);\n"
    );
}

#[test]
fn void_function_without_main() {
    let output = transpile("fn hello() { print(\"hi\") }");
    assert_eq!(
        output.source,
        "#include \"demo.h\"\n\nvoid hello(void) {\n    printf(\"%s\\n\", \"hi\");\n}\n\n"
    );
    assert_eq!(
        output.header,
        "#pragma once\n\n#include <stdio.h>\n\nvoid hello(void);\n"
    );
}

#[test]
fn bool_pulls_in_stdbool() {
    let output = transpile("var ok = true");
    assert!(output.header.contains("#include <stdbool.h>\n"));
    assert!(output.source.contains("    bool ok = true;\n"));
}

#[test]
fn objects_use_designated_initializers() {
    assert_eq!(
        main_body("var p Point = {x: 1, y: 2}"),
        "    Point p = {.x = 1, .y = 2};\n"
    );
}

#[test]
fn if_expression_is_ternary() {
    assert_eq!(
        main_body("var m = if 1 < 2 { 3 } else { 4 }"),
        "    int m = (1 < 2) ? (3) : (4);\n"
    );
}

#[test]
fn records_declared_types() {
    let output = auto_parse::parse("var x = 1.5");
    let mut universe = Universe::new();
    CTrans::new("demo")
        .transpile(&output.code, &mut universe)
        .unwrap();
    assert_eq!(universe.type_of("x").unwrap().kind, TypeKind::Double);
}

#[test]
fn unsupported_constructs() {
    let err = transpile_with("for x in [1, 2] { }", CStyle::Modern).unwrap_err();
    assert!(matches!(
        &err,
        TransError::Unsupported { construct, .. } if construct == "for over a non-range iterable"
    ));
    assert_eq!(
        err.to_string(),
        "for over a non-range iterable is not supported by the c backend (at 1:10)"
    );

    let err = transpile_with("var x = 1\nf\"x=$x\"", CStyle::Modern).unwrap_err();
    assert!(matches!(err, TransError::Unsupported { ref construct, .. } if construct == "format string"));
}

#[test]
fn backend_name() {
    assert_eq!(CTrans::new("demo").name(), "c");
}
