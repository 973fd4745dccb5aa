//! The native function library.
//!
//! Every intrinsic is a [`NativeFunction`](patty_value::NativeFunction)
//! bound in the global scope. Natives receive their arguments unevaluated and
//! evaluate them as their own contract requires; `fun`, `list` and `def`'s
//! name are never evaluated.

mod arithmetic;
mod collections;
mod comparison;
mod control;
mod io;
mod sequence;

use patty_value::{EngineError, EvalResult, Executor, Value};

use crate::environment::Environment;

/// Bind every intrinsic in the global scope of `env`.
pub fn register_all(env: &mut Environment) {
    arithmetic::register(env);
    comparison::register(env);
    control::register(env);
    collections::register(env);
    io::register(env);
    sequence::register(env);
}

fn define(
    env: &mut Environment,
    name: &str,
    func: impl Fn(&mut dyn Executor, Vec<Value>) -> EvalResult + 'static,
) {
    tracing::trace!(name, "registering intrinsic");
    env.define_global(name, Value::native(name, func));
}

/// Destructure an exact argument count.
fn args_array<const N: usize>(args: Vec<Value>, name: &str) -> Result<[Value; N], EngineError> {
    let got = args.len();
    <[Value; N]>::try_from(args).map_err(|_| EngineError::arity(name, N.to_string(), got))
}

fn eval_int(exec: &mut dyn Executor, expr: Value, context: &str) -> Result<i64, EngineError> {
    exec.eval(expr)?.expect_int(context)
}

fn eval_list(
    exec: &mut dyn Executor,
    expr: Value,
    context: &str,
) -> Result<Vec<Value>, EngineError> {
    exec.eval(expr)?.into_list(context)
}

/// An element count: an integer that must not be negative.
fn eval_count(exec: &mut dyn Executor, expr: Value, context: &str) -> Result<usize, EngineError> {
    let count = eval_int(exec, expr, context)?;
    usize::try_from(count).map_err(|_| {
        EngineError::unsupported(format!("{context} count must not be negative, got {count}"))
    })
}

/// Evaluate the call form `(callable args...)`.
fn call(
    exec: &mut dyn Executor,
    callable: Value,
    args: impl IntoIterator<Item = Value>,
) -> EvalResult {
    let mut form = vec![callable];
    form.extend(args);
    exec.eval(Value::list(form))
}
