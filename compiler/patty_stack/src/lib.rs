//! Stack safety for the Patty evaluator.
//!
//! Patty evaluates expressions by direct recursion: nested lists, user
//! function calls, and sequence sampling all recurse through `eval`. Deeply
//! nested or deeply recursive programs would overflow a fixed-size native
//! stack, so every recursive entry point goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.
//!
//! Red zone is 100KB; each growth segment is 1MB.

/// Minimum stack space to keep available before recursing further.
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated per growth segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, expr: Value) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(expr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version, calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
