//! Tracing subscriber for the `autoc` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `AUTOC_LOG` or `RUST_LOG` is set, so normal runs pay
/// no cost. The variable's value is the filter, e.g.
/// `AUTOC_LOG=auto_eval=trace`. Output is an indented span tree on stderr,
/// kept apart from program output on stdout.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = match (std::env::var("AUTOC_LOG"), std::env::var("RUST_LOG")) {
            (Ok(directives), _) => EnvFilter::new(directives),
            (Err(_), Ok(_)) => EnvFilter::from_default_env(),
            (Err(_), Err(_)) => return,
        };
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_indent_lines(true);
        tracing_subscriber::registry().with(layer).with(filter).init();
    });
}
