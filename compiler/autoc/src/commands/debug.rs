//! `--tokens` and `--ast`: inspect the front-end's output.

use super::{report_diagnostics, CliError};

/// Print every token, one per line, as `line:col  <kind:text>`.
pub fn dump_tokens(source: &str) -> Result<(), CliError> {
    let lexed = auto_lexer::tokenize(source);
    println!("Tokens ({}):", lexed.tokens.len());
    for token in &lexed.tokens {
        println!("  {:<8} {token}", token.pos.to_string());
    }
    report_diagnostics(source, &lexed.errors)
}

/// Print the program tree in its atom-style form.
pub fn dump_ast(source: &str) -> Result<(), CliError> {
    let parsed = auto_parse::parse(source);
    println!("{}", parsed.code);
    report_diagnostics(source, parsed.diagnostics())
}
