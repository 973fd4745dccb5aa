//! `print` and `read`, routed through the interpreter's handlers.

use patty_value::{check_arity, EngineError, Value};

use super::define;
use crate::environment::Environment;

pub(super) fn register(env: &mut Environment) {
    // Arguments are rendered top-level and joined without separators.
    define(env, "print", |exec, args| {
        let mut line = String::new();
        for arg in args {
            line.push_str(&exec.eval(arg)?.to_string());
        }
        exec.print_line(&line);
        Ok(Value::Nil)
    });

    // `(read int)`: the type name is a bare symbol, never evaluated.
    define(env, "read", |exec, args| {
        check_arity!(args, "read", 1);
        match args[0].as_symbol() {
            Some("int") => exec.read_int().map(Value::int),
            Some(other) => Err(EngineError::unsupported(format!(
                "read does not support type {other}"
            ))),
            None => Err(EngineError::type_mismatch("read", "symbol", &args[0])),
        }
    });
}
