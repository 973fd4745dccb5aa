//! `+`, `-`, `*`: left folds over integers with overflow checks.

use patty_value::{check_arity, EngineError, EvalResult, Executor, Value};

use super::{define, eval_int};
use crate::environment::Environment;

pub(super) fn register(env: &mut Environment) {
    define(env, "+", arithmetic("+", i64::checked_add));
    define(env, "-", arithmetic("-", i64::checked_sub));
    define(env, "*", arithmetic("*", i64::checked_mul));
}

/// `(op a b c)` is `(a op b) op c`; a single operand is returned as is.
fn arithmetic(
    name: &'static str,
    op: fn(i64, i64) -> Option<i64>,
) -> impl Fn(&mut dyn Executor, Vec<Value>) -> EvalResult {
    move |exec, args| {
        check_arity!(args, name, 1..);
        let mut acc: Option<i64> = None;
        for arg in args {
            let operand = eval_int(exec, arg, name)?;
            acc = Some(match acc {
                None => operand,
                Some(acc) => op(acc, operand).ok_or(EngineError::IntegerOverflow(name))?,
            });
        }
        Ok(acc.map_or(Value::Nil, Value::int))
    }
}
