//! Stack growth for recursive descent and tree walking.
//!
//! `((((...))))` nested a few thousand levels deep recurses once per level in
//! both the parser and the interpreter. Wrapping each recursive entry point in
//! [`ensure_sufficient_stack`] moves onto a freshly allocated segment when the
//! current one runs low, instead of overflowing.

/// Grow when less than this much stack remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if fewer than 100 KiB remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
