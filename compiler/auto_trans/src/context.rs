//! Output buffer and include tracking shared by the emitters.

use rustc_hash::FxHashSet;

/// Indented text output plus the system headers the emitted code needs.
#[derive(Debug, Default)]
pub struct TransContext {
    indent: usize,
    output: String,
    /// Headers in first-use order.
    includes: Vec<&'static str>,
    seen: FxHashSet<&'static str>,
}

impl TransContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a line with indentation and newline.
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Require a system header, e.g. `<stdio.h>`. Duplicates are ignored.
    pub fn add_include(&mut self, header: &'static str) {
        if self.seen.insert(header) {
            self.includes.push(header);
        }
    }

    pub fn includes(&self) -> &[&'static str] {
        &self.includes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_dedent() {
        let mut ctx = TransContext::new();
        ctx.writeln("line1");
        ctx.indent();
        ctx.writeln("line2");
        ctx.indent();
        ctx.writeln("line3");
        ctx.dedent();
        ctx.writeln("line4");
        ctx.dedent();
        ctx.writeln("line5");
        assert_eq!(
            ctx.take_output(),
            "line1\n    line2\n        line3\n    line4\nline5\n"
        );
    }

    #[test]
    fn includes_are_deduplicated_in_order() {
        let mut ctx = TransContext::new();
        ctx.add_include("<stdio.h>");
        ctx.add_include("<stdbool.h>");
        ctx.add_include("<stdio.h>");
        assert_eq!(ctx.includes(), &["<stdio.h>", "<stdbool.h>"]);
    }
}
