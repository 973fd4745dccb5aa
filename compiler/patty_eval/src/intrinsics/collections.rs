//! List and collection natives: `++`, `index`, `for`, `zip`, `zip-with`,
//! `take`, `tail`, `fold`, `pop`.

use patty_value::{check_arity, EngineError, Executor, ScopedExecutor, Value};

use super::{args_array, call, define, eval_count, eval_int, eval_list};
use crate::environment::Environment;

pub(super) fn register(env: &mut Environment) {
    // `nil` contributes nothing, lists are spliced, anything else is appended.
    define(env, "++", |exec, args| {
        let mut result = Vec::new();
        for arg in args {
            match exec.eval(arg)? {
                Value::Nil => {}
                Value::List(items) => result.extend(items),
                other => result.push(other),
            }
        }
        Ok(Value::list(result))
    });

    define(env, "index", |exec, args| {
        let [index, list] = args_array(args, "index")?;
        let index = eval_int(exec, index, "index")?;
        let items = eval_list(exec, list, "index")?;
        let len = items.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| items.into_iter().nth(i))
            .ok_or(EngineError::IndexOutOfBounds { index, len })
    });

    define(env, "for", |exec, args| {
        let [pattern, collection, body] = args_array(args, "for")?;
        let pattern = ForPattern::parse(pattern)?;
        for item in eval_list(exec, collection, "for")? {
            let mut scoped = ScopedExecutor::new(&mut *exec);
            pattern.bind(&mut *scoped, item)?;
            scoped.eval(body.clone())?;
        }
        Ok(Value::Nil)
    });

    define(env, "zip", |exec, args| {
        let lists = args
            .into_iter()
            .map(|arg| eval_list(exec, arg, "zip"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::list(
            transpose(lists).into_iter().map(Value::list).collect(),
        ))
    });

    define(env, "zip-with", |exec, args| {
        check_arity!(args, "zip-with", 1..);
        let mut args = args.into_iter();
        let callable = args.next().unwrap_or(Value::Nil);
        let lists = args
            .map(|arg| eval_list(exec, arg, "zip-with"))
            .collect::<Result<Vec<_>, _>>()?;
        transpose(lists)
            .into_iter()
            .map(|row| call(exec, callable.clone(), row))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::list)
    });

    define(env, "take", |exec, args| {
        let [count, source] = args_array(args, "take")?;
        let count = eval_count(exec, count, "take")?;
        exec.eval(source)?.take(exec, count)
    });

    define(env, "tail", |exec, args| {
        let [list] = args_array(args, "tail")?;
        let mut items = eval_list(exec, list, "tail")?;
        if !items.is_empty() {
            items.remove(0);
        }
        Ok(Value::list(items))
    });

    // The first element seeds the accumulator as is; `(f acc el)` is
    // evaluated for each of the rest.
    define(env, "fold", |exec, args| {
        let [callable, collection] = args_array(args, "fold")?;
        let mut items = eval_list(exec, collection, "fold")?.into_iter();
        let Some(mut acc) = items.next() else {
            return Ok(Value::Nil);
        };
        for item in items {
            acc = call(exec, callable.clone(), [acc, item])?;
        }
        Ok(acc)
    });

    define(env, "pop", |exec, args| {
        let [count, collection] = args_array(args, "pop")?;
        let count = eval_count(exec, count, "pop")?;
        match exec.eval(collection)? {
            Value::List(mut items) => {
                let popped = count.min(items.len());
                items.drain(..popped);
                Ok(Value::List(items))
            }
            Value::Sequence(seq) => seq.pop(count),
            other => Err(EngineError::unsupported(format!(
                "pop only supports lists and sequences, got {}",
                other.type_name()
            ))),
        }
    });
}

/// Loop variable(s) of a `for`.
enum ForPattern {
    Single(String),
    /// Each element must be a list of exactly this many items.
    Destructure(Vec<String>),
}

impl ForPattern {
    fn parse(pattern: Value) -> Result<Self, EngineError> {
        match pattern {
            Value::Symbol(name) => Ok(ForPattern::Single(name)),
            Value::List(names) => names
                .into_iter()
                .map(|name| match name {
                    Value::Symbol(name) => Ok(name),
                    other => Err(EngineError::type_mismatch("for pattern", "symbol", &other)),
                })
                .collect::<Result<_, _>>()
                .map(ForPattern::Destructure),
            other => Err(EngineError::type_mismatch(
                "for pattern",
                "symbol or list",
                &other,
            )),
        }
    }

    /// Bind the evaluated element (or its evaluated parts) in the current scope.
    fn bind(&self, exec: &mut dyn Executor, item: Value) -> Result<(), EngineError> {
        match self {
            ForPattern::Single(name) => {
                let value = exec.eval(item)?;
                exec.assign(name, value);
            }
            ForPattern::Destructure(names) => {
                let parts = item.into_list("for pattern")?;
                if parts.len() != names.len() {
                    return Err(EngineError::arity(
                        "for pattern",
                        names.len().to_string(),
                        parts.len(),
                    ));
                }
                for (name, part) in names.iter().zip(parts) {
                    let value = exec.eval(part)?;
                    exec.assign(name, value);
                }
            }
        }
        Ok(())
    }
}

/// Rows of the i-th elements, as many as the shortest list has. No lists,
/// no rows.
fn transpose(lists: Vec<Vec<Value>>) -> Vec<Vec<Value>> {
    let rows = lists.iter().map(Vec::len).min().unwrap_or(0);
    let mut columns: Vec<_> = lists.into_iter().map(Vec::into_iter).collect();
    (0..rows)
        .map(|_| columns.iter_mut().filter_map(Iterator::next).collect())
        .collect()
}
