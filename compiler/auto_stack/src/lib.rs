//! Stack growth for recursive descent.
//!
//! The parser, evaluator and transpiler all recurse once per nesting level
//! of the source program. `((((1))))` nested a few thousand levels deep is
//! enough to exhaust a default thread stack, so each recursive entry point
//! runs its body through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended on demand with `stacker`. On
//! `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
