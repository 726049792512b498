//! autoc - auto-lang compiler CLI.

use autoc::commands::{
    dump_ast, dump_tokens, eval_source, parse_args, read_file, run_file, run_repl, transpile_target,
    Action, CliError, Dump, Invocation,
};
use autoc::RunOptions;

fn main() {
    autoc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let result = parse_args(&args).and_then(|invocation| dispatch(&invocation));
    if let Err(err) = result {
        if err.needs_report() {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }
}

fn dispatch(invocation: &Invocation) -> Result<(), CliError> {
    let options = RunOptions {
        mode: invocation.mode,
        ..RunOptions::default()
    };

    match &invocation.action {
        Action::Version => {
            print_version();
            Ok(())
        }
        Action::Help => {
            print_usage();
            Ok(())
        }
        Action::Repl => run_repl(&options),
        Action::Transpile(target) => {
            transpile_target(target, invocation.output.as_deref(), invocation.style)
        }
        Action::Eval(code) => match invocation.dump {
            Some(Dump::Tokens) => dump_tokens(code),
            Some(Dump::Ast) => dump_ast(code),
            None => eval_source(code, &options),
        },
        Action::RunFile(path) => match invocation.dump {
            Some(dump) => {
                let source = read_file(path)?;
                match dump {
                    Dump::Tokens => dump_tokens(&source),
                    Dump::Ast => dump_ast(&source),
                }
            }
            None => run_file(path, &options),
        },
    }
}

fn print_version() {
    println!("autoc {}", env!("CARGO_PKG_VERSION"));
    println!("Compiler and interpreter for auto-lang");
}

fn print_usage() {
    println!("auto-lang compiler");
    println!();
    println!("Usage: autoc [options] [file]");
    println!();
    println!("Options:");
    println!("  -e <code>          Evaluate code and print the result");
    println!("  -t <code|file>     Transpile to C");
    println!("  -o <name>          Output base name for -t (writes <name>.h and <name>.c)");
    println!("  --include-guard    Use #ifndef guards instead of #pragma once");
    println!("  --mode <mode>      Evaluation mode: script (default), config, template");
    println!("  --repl             Start the interactive REPL");
    println!("  --tokens           Print the token stream instead of running");
    println!("  --ast              Print the syntax tree instead of running");
    println!("  -v, --version      Show version");
    println!("  -h, --help         Show this help");
    println!();
    println!("Environment:");
    println!("  AUTOC_LOG=<filter> Enable tracing output on stderr (e.g. AUTOC_LOG=debug)");
}
