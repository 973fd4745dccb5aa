#![allow(
    clippy::result_large_err,
    reason = "EngineError is the single abort channel, boxing it buys nothing here"
)]
//! Patty Eval - tree-walking evaluator for Patty programs.
//!
//! # Architecture
//!
//! - `Environment`: dynamic scope stack, global scope at the bottom
//! - `Interpreter`: implements `patty_value::Executor`; evaluates symbols,
//!   dispatches call lists to native functions or `[formals, body]` user
//!   functions
//! - `intrinsics`: the native function library registered into the global
//!   scope
//! - print and input handlers: where `print` writes and `read` reads
//!
//! # Re-exports
//!
//! `Value`, `EngineError`, `EvalResult`, and `Executor` come from
//! `patty_value` and are re-exported for convenience.

mod environment;
mod input_handler;
pub mod interpreter;
pub mod intrinsics;
mod print_handler;

pub use environment::{Environment, Scope};
pub use input_handler::{
    buffer_input, stdin_input, BufferInputHandler, InputHandlerImpl, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use patty_value::{EngineError, EvalResult, Executor, ScopedExecutor, Value};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
