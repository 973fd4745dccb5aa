//! `<`, `<=`, `!=`, `=`: chained integer comparisons.
//!
//! Operands are evaluated left to right and evaluation stops at the first
//! failing pair, so later operands may never run.

use patty_value::{check_arity, EvalResult, Executor, Value};

use super::{define, eval_int};
use crate::environment::Environment;

pub(super) fn register(env: &mut Environment) {
    define(env, "<", comparison("<", |a, b| a < b));
    define(env, "<=", comparison("<=", |a, b| a <= b));
    define(env, "!=", comparison("!=", |a, b| a != b));
    define(env, "=", comparison("=", |a, b| a == b));
}

fn comparison(
    name: &'static str,
    op: fn(i64, i64) -> bool,
) -> impl Fn(&mut dyn Executor, Vec<Value>) -> EvalResult {
    move |exec, args| {
        check_arity!(args, name, 1..);
        let mut prev: Option<i64> = None;
        for arg in args {
            let curr = eval_int(exec, arg, name)?;
            if prev.is_some_and(|prev| !op(prev, curr)) {
                return Ok(Value::from_bool(false));
            }
            prev = Some(curr);
        }
        Ok(Value::from_bool(true))
    }
}
