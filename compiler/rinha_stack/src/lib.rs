//! Stack safety utilities for deep recursion.
//!
//! Rinha programs recurse freely (there are no loops), and both loading a
//! nested AST and evaluating it are recursive. Wrapping each recursive step
//! in [`ensure_sufficient_stack`] grows the native stack on demand instead
//! of overflowing it.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 128KB - If less than this remains, we grow the stack
//! - **Growth size**: 2MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (128KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, a new stack segment is
/// allocated and `f` runs on it.
///
/// ```text
/// fn eval(&mut self, id: ExprId, env: &mut Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Run `f` on a fresh stack segment of at least `size` bytes.
///
/// For recursive code that cannot be instrumented step by step, such as a
/// derived deserializer walking a deeply nested document.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_size<R>(size: usize, f: impl FnOnce() -> R) -> R {
    stacker::grow(size, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_size<R>(_size: usize, f: impl FnOnce() -> R) -> R {
    f()
}
