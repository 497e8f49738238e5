//! Stack growth for the recursive interpolation scan.
//!
//! Each nested `#{ ... }` re-enters the tokenizer. The depth limit keeps the
//! recursion finite; growing the stack on demand keeps a raised limit from
//! overflowing the native stack. WASM targets manage their own stack, so
//! there the guard is a passthrough.

/// If less than this remains, grow the stack before recursing.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is nearly exhausted.
#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
