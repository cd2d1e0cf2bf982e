//! Stack growth for the recursive-descent parser.
//!
//! Every nesting level of an expression (`(((...)))`, `- - - x`, `not not x`,
//! right-associative `^` chains) costs a few parser frames. Input nested
//! 100k deep would overflow a default thread stack, so the recursion points
//! run through [`ensure_sufficient_stack`], which moves onto a freshly
//! allocated segment when the current one runs low.
//!
//! On `wasm32` the call is a plain passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if fewer than
/// [`RED_ZONE`] bytes remain on the current one.
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

#[cfg(test)]
mod tests;
