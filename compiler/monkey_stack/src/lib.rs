//! Host stack growth for the recursive parser and evaluator.
//!
//! Both the Pratt parser and the tree-walking evaluator recurse once per
//! nesting level of the input. A program like `((((...1...))))` or a deep
//! chain of Monkey function calls would otherwise overflow the native stack
//! long before any configured depth limit trips. Recursive entry points wrap
//! their bodies in [`ensure_sufficient_stack`].
//!
//! On wasm32 the call is a passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
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
