// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole-pipeline tests: source text in, value or C text out.
//!
//! - `eval/` - programs run through `autoc::run_with`
//! - `trans/` - programs translated through `autoc::transpile`
//! - `common/` - shared helpers
//!
//! ```bash
//! cargo test -p autoc --test phases
//! cargo test -p autoc --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/eval/mod.rs"]
mod eval;

#[path = "phases/trans/mod.rs"]
mod trans;
