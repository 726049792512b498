//! C backend.
//!
//! Produces a header and a source file. Function declarations become C
//! functions with prototypes in the header; every other top-level statement
//! goes into `int main(void)`.

mod expr;
mod stmt;
mod types;

use auto_eval::Universe;
use auto_ir::{Code, Pos, StmtKind};
use tracing::debug;

use crate::{Backend, TransContext, TransError, TransOutput};

use self::stmt::{emit_fn, emit_stmt};

/// How the header guards against double inclusion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CStyle {
    /// `#pragma once`
    #[default]
    Modern,
    /// `#ifndef NAME_H` / `#define NAME_H` / `#endif`
    Traditional,
}

/// Transpiles to C. `name` is the output's base name: the source includes
/// `"<name>.h"` and the traditional guard is derived from it.
#[derive(Clone, Debug)]
pub struct CTrans {
    name: String,
    style: CStyle,
}

impl CTrans {
    pub fn new(name: impl Into<String>) -> Self {
        CTrans {
            name: name.into(),
            style: CStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: CStyle) -> Self {
        self.style = style;
        self
    }

    /// `demo-app` becomes `DEMO_APP_H`.
    fn guard(&self) -> String {
        let mut guard: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        guard.push_str("_H");
        guard
    }

    fn header(&self, includes: &[&'static str], prototypes: &[String]) -> String {
        let guard = self.guard();
        let mut header = String::new();
        match self.style {
            CStyle::Modern => header.push_str("#pragma once\n\n"),
            CStyle::Traditional => {
                header.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
            }
        }
        for include in includes {
            header.push_str(&format!("#include {include}\n"));
        }
        if !includes.is_empty() {
            header.push('\n');
        }
        for prototype in prototypes {
            header.push_str(&format!("{prototype};\n"));
        }
        if self.style == CStyle::Traditional {
            if !prototypes.is_empty() {
                header.push('\n');
            }
            header.push_str(&format!("#endif // {guard}\n"));
        }
        header
    }
}

impl Backend for CTrans {
    fn name(&self) -> &'static str {
        "c"
    }

    fn transpile(
        &mut self,
        code: &Code,
        universe: &mut Universe,
    ) -> Result<TransOutput, TransError> {
        let (fns, main): (Vec<_>, Vec<_>) = code
            .stmts
            .iter()
            .partition(|stmt| matches!(stmt.kind, StmtKind::Fn { .. }));
        debug!(
            name = %self.name,
            style = ?self.style,
            fns = fns.len(),
            stmts = main.len(),
            "transpile to c"
        );

        let mut ctx = TransContext::new();
        let mut prototypes = Vec::with_capacity(fns.len() + 1);
        for stmt in fns {
            if let StmtKind::Fn {
                name,
                params,
                ret,
                body,
            } = &stmt.kind
            {
                prototypes.push(emit_fn(&mut ctx, universe, name, params, ret.as_ref(), body)?);
                ctx.newline();
            }
        }

        if !main.is_empty() {
            ctx.writeln("int main(void) {");
            ctx.indent();
            for stmt in main {
                emit_stmt(&mut ctx, universe, stmt)?;
            }
            ctx.writeln("return 0;");
            ctx.dedent();
            ctx.writeln("}");
            prototypes.push("int main(void)".to_string());
        }

        let body = ctx.take_output();
        Ok(TransOutput {
            header: self.header(ctx.includes(), &prototypes),
            source: format!("#include \"{}.h\"\n\n{body}", self.name),
        })
    }
}

#[cold]
pub(crate) fn unsupported(construct: &str, pos: Pos) -> TransError {
    TransError::Unsupported {
        backend: "c",
        construct: construct.to_string(),
        pos,
    }
}

#[cfg(test)]
mod tests;
