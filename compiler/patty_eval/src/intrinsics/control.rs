//! Sequencing, binding, branching and looping: `do`, `def`, `fun`, `list`,
//! `if`, `loop`.

use patty_value::{check_arity, EngineError, Value};

use super::{args_array, define};
use crate::environment::Environment;

pub(super) fn register(env: &mut Environment) {
    define(env, "do", |exec, args| {
        let mut result = Value::Nil;
        for arg in args {
            result = exec.eval(arg)?;
        }
        Ok(result)
    });

    define(env, "def", |exec, args| {
        let [name, value] = args_array(args, "def")?;
        let Value::Symbol(name) = name else {
            return Err(EngineError::type_mismatch("def", "symbol", &name));
        };
        let value = exec.eval(value)?;
        exec.assign(&name, value);
        Ok(Value::Nil)
    });

    // Both return their argument list untouched: `fun` for the
    // `(formals body)` pair, `list` for data.
    define(env, "fun", |_, args| Ok(Value::list(args)));
    define(env, "list", |_, args| Ok(Value::list(args)));

    define(env, "if", |exec, args| {
        let got = args.len();
        let mut args = args.into_iter();
        let (Some(condition), Some(then), otherwise, None) =
            (args.next(), args.next(), args.next(), args.next())
        else {
            return Err(EngineError::arity("if", "2-3", got));
        };
        if exec.eval(condition)?.is_truthy() {
            exec.eval(then)
        } else {
            otherwise.map_or(Ok(Value::Nil), |otherwise| exec.eval(otherwise))
        }
    });

    // Only an error ends the loop.
    define(env, "loop", |exec, args| {
        check_arity!(args, "loop", 1..);
        loop {
            for arg in &args {
                exec.eval(arg.clone())?;
            }
        }
    });
}
