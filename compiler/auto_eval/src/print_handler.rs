//! Destination of the `print` builtin.
//!
//! An evaluator holds a [`SharedPrintHandler`]. The CLI leaves it on stdout;
//! tests and embedders pass a buffer and read the transcript back after the
//! run.

use std::sync::Arc;

use parking_lot::Mutex;

/// Where `print` lines go.
pub enum PrintHandler {
    Stdout,
    /// In-memory transcript, one `\n`-terminated line per `print` call.
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Emit one line of `print` output.
    pub fn println(&self, line: &str) {
        match self {
            PrintHandler::Stdout => println!("{line}"),
            PrintHandler::Buffer(transcript) => {
                let mut transcript = transcript.lock();
                transcript.push_str(line);
                transcript.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Transcript of a buffer handler; empty for stdout and silent.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(transcript) => transcript.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// A handler that records every line; read it back with
/// [`PrintHandler::output`].
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn buffer_keeps_lines_in_order() {
        let print = buffer_handler();
        print.println("sum 2");
        print.println("");
        print.println("[1, 2]");
        assert_eq!(print.output(), "sum 2\n\n[1, 2]\n");
    }

    #[test]
    fn clones_share_one_transcript() {
        let print = buffer_handler();
        let evaluator_side = Arc::clone(&print);
        evaluator_side.println("from the run");
        assert_eq!(print.output(), "from the run\n");
    }

    #[test]
    fn only_buffers_capture() {
        silent_handler().println("dropped");
        assert_eq!(silent_handler().output(), "");
        assert_eq!(stdout_handler().output(), "");
    }
}
