//! Command-line parsing.

use auto_eval::EvalMode;
use auto_trans::CStyle;

use super::CliError;

/// What the invocation asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// `-e <code>`
    Eval(String),
    /// A bare file argument.
    RunFile(String),
    /// `-t <code|file>`
    Transpile(String),
    Repl,
    Version,
    Help,
}

/// Inspect the front-end instead of running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dump {
    Tokens,
    Ast,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    /// `-o <name>`: base name of the transpiler's output files.
    pub output: Option<String>,
    pub mode: EvalMode,
    pub style: CStyle,
    pub dump: Option<Dump>,
}

impl Invocation {
    fn new(action: Action) -> Self {
        Invocation {
            action,
            output: None,
            mode: EvalMode::default(),
            style: CStyle::default(),
            dump: None,
        }
    }
}

/// Parse the arguments after the program name.
///
/// `-v` and `-h` win as soon as they are seen. Otherwise the last action
/// flag decides, and at most one file argument is accepted.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut invocation = Invocation::new(Action::Help);
    let mut action = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--version" => return Ok(Invocation::new(Action::Version)),
            "-h" | "--help" => return Ok(Invocation::new(Action::Help)),
            "-e" => action = Some(Action::Eval(flag_value(&mut iter, "-e")?)),
            "-t" => action = Some(Action::Transpile(flag_value(&mut iter, "-t")?)),
            "-o" => invocation.output = Some(flag_value(&mut iter, "-o")?),
            "--mode" => {
                let name = flag_value(&mut iter, "--mode")?;
                invocation.mode = EvalMode::from_name(&name).ok_or(CliError::UnknownMode(name))?;
            }
            "--include-guard" => invocation.style = CStyle::Traditional,
            "--repl" => action = Some(Action::Repl),
            "--ast" => invocation.dump = Some(Dump::Ast),
            "--tokens" => invocation.dump = Some(Dump::Tokens),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(CliError::UnknownOption(other.to_string()));
            }
            path => match action {
                None => action = Some(Action::RunFile(path.to_string())),
                Some(_) => return Err(CliError::UnexpectedArgument(path.to_string())),
            },
        }
    }

    invocation.action = action.ok_or(CliError::NothingToDo)?;
    Ok(invocation)
}

fn flag_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &'static str,
) -> Result<String, CliError> {
    iter.next().cloned().ok_or(CliError::MissingArgument(flag))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, CliError> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        parse_args(&args)
    }

    #[test]
    fn eval_flag() {
        let invocation = parse(&["-e", "1 + 2"]).unwrap();
        assert_eq!(invocation.action, Action::Eval("1 + 2".to_string()));
        assert_eq!(invocation.mode, EvalMode::Script);
        assert_eq!(invocation.dump, None);
    }

    #[test]
    fn file_argument() {
        let invocation = parse(&["prog.at", "--ast"]).unwrap();
        assert_eq!(invocation.action, Action::RunFile("prog.at".to_string()));
        assert_eq!(invocation.dump, Some(Dump::Ast));
    }

    #[test]
    fn transpile_with_output() {
        let invocation = parse(&["-t", "print(1)", "-o", "demo", "--include-guard"]).unwrap();
        assert_eq!(invocation.action, Action::Transpile("print(1)".to_string()));
        assert_eq!(invocation.output.as_deref(), Some("demo"));
        assert_eq!(invocation.style, CStyle::Traditional);
    }

    #[test]
    fn version_and_help_win() {
        assert_eq!(parse(&["-e", "1", "-v"]).unwrap().action, Action::Version);
        assert_eq!(parse(&["--help", "--bogus"]).unwrap().action, Action::Help);
    }

    #[test]
    fn mode_by_name() {
        let invocation = parse(&["--mode", "config", "-e", "1"]).unwrap();
        assert_eq!(invocation.mode, EvalMode::Config);
        assert!(matches!(
            parse(&["--mode", "yaml", "-e", "1"]),
            Err(CliError::UnknownMode(name)) if name == "yaml"
        ));
    }

    #[test]
    fn errors() {
        assert!(matches!(parse(&["-e"]), Err(CliError::MissingArgument("-e"))));
        assert!(matches!(parse(&["--bogus"]), Err(CliError::UnknownOption(_))));
        assert!(matches!(parse(&["a.at", "b.at"]), Err(CliError::UnexpectedArgument(_))));
        assert!(matches!(parse(&[]), Err(CliError::NothingToDo)));
        assert_eq!(
            parse(&["-o"]).unwrap_err().to_string(),
            "-o requires an argument"
        );
    }
}
