//! The evaluation seam shared by native functions and sequence generators.

use crate::errors::{EngineError, EvalResult};
use crate::value::Value;

/// Interface to the running interpreter.
///
/// Native functions receive `&mut dyn Executor` together with their
/// unevaluated arguments and decide for themselves what to evaluate, in
/// which order, and under which scopes. Generators use it to sample their
/// stored expressions.
pub trait Executor {
    /// Evaluate an expression against the current scope stack.
    fn eval(&mut self, expr: Value) -> EvalResult;

    /// Resolve a name, innermost scope first.
    fn lookup(&self, name: &str) -> Option<&Value>;

    /// Resolve a name in the permanent global scope only.
    fn lookup_global(&self, name: &str) -> Option<&Value>;

    /// Bind `name` in the innermost scope, shadowing any outer binding.
    fn assign(&mut self, name: &str, value: Value);

    /// Push an empty scope. Prefer [`ScopedExecutor`](crate::ScopedExecutor).
    fn push_scope(&mut self);

    /// Pop the innermost scope. The global scope is never popped.
    fn pop_scope(&mut self);

    /// Emit one line of program output.
    fn print_line(&mut self, line: &str);

    /// Read one integer token from program input.
    fn read_int(&mut self) -> Result<i64, EngineError>;
}
