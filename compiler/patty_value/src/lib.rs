#![allow(
    clippy::result_large_err,
    reason = "EngineError is the single abort channel, boxing it buys nothing here"
)]
//! Patty Value - runtime data model for the Patty interpreter.
//!
//! This crate provides:
//! - `Value`, the single runtime datum (also the expression tree the reader
//!   produces)
//! - `EngineError` / `EvalResult`, the error taxonomy every layer propagates
//! - `Executor`, the seam through which native functions and sequence
//!   generators drive evaluation without depending on the interpreter crate
//! - `ScopedExecutor`, the scope guard used for every call frame
//! - the sequence engine (`Generator` and its three strategies)
//!
//! # Architecture
//!
//! `patty_eval` implements `Executor` for its `Interpreter`. Native functions
//! and generators only ever see `&mut dyn Executor`, which keeps this crate at
//! the bottom of the dependency graph.

mod errors;
mod executor;
mod scope_guard;
pub mod sequence;
mod value;

#[cfg(test)]
mod test_helpers;

pub use errors::{EngineError, EvalResult};
pub use executor::Executor;
pub use scope_guard::ScopedExecutor;
pub use sequence::{CircularGenerator, ComposedGenerator, DynamicGenerator, Generator, Sequence};
pub use value::{List, NativeFn, NativeFunction, Quoted, Value};
