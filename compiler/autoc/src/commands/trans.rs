//! `-t`: translation to C.

use std::path::{Path, PathBuf};

use auto_trans::CStyle;
use tracing::debug;

use super::{read_file, report_diagnostics, write_file, CliError};
use crate::{transpile_parsed, TransResult};

/// Module name used when neither `-o` nor an input file gives one.
const DEFAULT_NAME: &str = "out";

/// Transpile `target`, which is either a path to an existing file or
/// program text.
///
/// Files, and code given with `-o`, are written to `<base>.h` and
/// `<base>.c`. Code without `-o` is printed to stdout.
pub fn transpile_target(
    target: &str,
    output: Option<&str>,
    style: CStyle,
) -> Result<(), CliError> {
    let is_file = Path::new(target).is_file();
    let source = if is_file {
        read_file(target)?
    } else {
        target.to_string()
    };

    let base = match (output, is_file) {
        (Some(output), _) => Some(PathBuf::from(output)),
        (None, true) => Some(PathBuf::from(target)),
        (None, false) => None,
    }
    .map(|base| base.with_extension(""));
    let name = base
        .as_deref()
        .map_or_else(|| DEFAULT_NAME.to_string(), module_name);
    debug!(name, is_file, "transpile");

    let parsed = auto_parse::parse(&source);
    report_diagnostics(&source, parsed.diagnostics())?;

    let TransResult {
        header,
        source: c_source,
        error_message,
        ..
    } = transpile_parsed(&parsed, &name, style);
    if let Some(message) = error_message {
        return Err(CliError::Failed(message));
    }
    let header = header.unwrap_or_default();
    let c_source = c_source.unwrap_or_default();

    match base {
        Some(base) => {
            for (extension, contents) in [("h", &header), ("c", &c_source)] {
                let path = base.with_extension(extension);
                write_file(&path, contents)?;
                println!("Generated: {}", path.display());
            }
        }
        None => {
            println!("=== Generated C Code ===");
            println!();
            println!("--- Header (.h) ---");
            println!("{header}");
            println!("--- Source (.c) ---");
            println!("{c_source}");
        }
    }
    Ok(())
}

/// Module name for output files: the file name without directory or
/// extension.
pub fn module_name(path: &Path) -> String {
    path.file_stem().map_or_else(
        || DEFAULT_NAME.to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names() {
        assert_eq!(module_name(Path::new("demo.at")), "demo");
        assert_eq!(module_name(Path::new("build/out/app")), "app");
        assert_eq!(module_name(Path::new("")), "out");
    }
}
