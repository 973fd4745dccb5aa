//! `seq` and `seq!`.
//!
//! `seq` hands its unevaluated arguments to
//! [`Sequence::from_expressions`]. `seq!` first substitutes the current
//! values of bound free symbols into the argument tree, so the sequence
//! remembers them even after the bindings go out of scope, then calls
//! whatever `seq` is in the global scope.

use patty_stack::ensure_sufficient_stack;
use patty_value::sequence::INDEX_SYMBOL;
use patty_value::{EngineError, Executor, Sequence, Value};

use super::define;
use crate::environment::Environment;

pub(super) fn register(env: &mut Environment) {
    define(env, "seq", |_, args| {
        Ok(Value::Sequence(Sequence::from_expressions(args)))
    });

    define(env, "seq!", |exec, args| {
        let args = args
            .into_iter()
            .map(|arg| substitute(exec, arg))
            .collect();
        match exec.lookup_global("seq").cloned() {
            Some(Value::NativeFunction(seq)) => seq.call(exec, args),
            Some(other) => Err(EngineError::type_mismatch("seq!", "native function", &other)),
            None => Err(EngineError::UnresolvedSymbol("seq".to_string())),
        }
    });
}

/// Replace bound symbols other than `n` by an expression that evaluates to
/// their current value.
///
/// Self-evaluating values are inlined. A list value becomes a call to the
/// global `list` over its elements. Symbol values and unbound symbols stay.
fn substitute(exec: &dyn Executor, expr: Value) -> Value {
    ensure_sufficient_stack(|| match expr {
        Value::Symbol(name) if name != INDEX_SYMBOL => match exec.lookup(&name) {
            Some(
                value @ (Value::Nil
                | Value::Int(_)
                | Value::String(_)
                | Value::NativeFunction(_)
                | Value::Sequence(_)),
            ) => value.clone(),
            Some(Value::List(items)) => {
                let list = exec
                    .lookup_global("list")
                    .cloned()
                    .unwrap_or_else(|| Value::symbol("list"));
                let mut form = Vec::with_capacity(items.len() + 1);
                form.push(list);
                form.extend(items.iter().cloned());
                Value::list(form)
            }
            Some(Value::Symbol(_)) | None => Value::Symbol(name),
        },
        Value::List(items) => Value::list(
            items
                .into_iter()
                .map(|item| substitute(exec, item))
                .collect(),
        ),
        other => other,
    })
}
