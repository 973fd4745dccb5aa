//! Tree-walking interpreter.
//!
//! Evaluation rules:
//! - `Nil`, `Int`, `String`, native functions and sequences evaluate to
//!   themselves
//! - a symbol evaluates to its innermost binding
//! - a non-empty list evaluates its head, then applies it: a native function
//!   gets the remaining elements unevaluated, a `[formals, body]` list is
//!   called as a user function, and any other head leaves the whole list
//!   unevaluated (which is how data lists like `(1 2 3)` survive evaluation)

mod builder;

pub use builder::InterpreterBuilder;

use patty_stack::ensure_sufficient_stack;
use patty_value::{EngineError, EvalResult, Executor, ScopedExecutor, Value};

use crate::environment::Environment;
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;

pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input_handler: SharedInputHandler,
    /// Live user-function frames.
    pub(crate) call_depth: usize,
    pub(crate) max_call_depth: Option<usize>,
}

impl Interpreter {
    /// Interpreter with every intrinsic registered, printing to stdout and
    /// reading from stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    fn eval_inner(&mut self, expr: Value) -> EvalResult {
        match expr {
            Value::Symbol(name) => match self.env.lookup(&name) {
                Some(value) => Ok(value.clone()),
                None => Err(EngineError::UnresolvedSymbol(name)),
            },
            Value::List(items) => self.eval_list(items.into_vec()),
            Value::Nil
            | Value::Int(_)
            | Value::String(_)
            | Value::NativeFunction(_)
            | Value::Sequence(_) => Ok(expr),
        }
    }

    fn eval_list(&mut self, mut items: Vec<Value>) -> EvalResult {
        let Some(head) = items.first() else {
            return Ok(Value::Nil);
        };
        match self.eval(head.clone())? {
            Value::NativeFunction(native) => {
                items.remove(0);
                native.call(self, items)
            }
            Value::List(function) => {
                items.remove(0);
                self.apply(function.into_vec(), items)
            }
            _ => Ok(Value::list(items)),
        }
    }

    /// Call a `[formals, body]` user function.
    ///
    /// Actuals are evaluated inside the new frame, left to right, each bound
    /// before the next is evaluated.
    #[tracing::instrument(level = "debug", skip_all, fields(depth = self.call_depth))]
    fn apply(&mut self, function: Vec<Value>, args: Vec<Value>) -> EvalResult {
        let (formals, body) = split_function(function)?;
        if formals.len() != args.len() {
            return Err(EngineError::arity(
                "function",
                formals.len().to_string(),
                args.len(),
            ));
        }
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                return Err(EngineError::RecursionLimit(limit));
            }
        }

        self.call_depth += 1;
        let result = {
            let mut frame = ScopedExecutor::new(self);
            bind_formals(&mut frame, &formals, args).and_then(|()| frame.eval(body))
        };
        self.call_depth -= 1;
        tracing::debug!(depth = self.env.depth(), "returned from function");
        result
    }
}

/// Check the `[formals, body]` shape and extract the parameter names.
fn split_function(function: Vec<Value>) -> Result<(Vec<String>, Value), EngineError> {
    let got = function.len();
    let Ok([formals, body]) = <[Value; 2]>::try_from(function) else {
        return Err(EngineError::TypeMismatch {
            context: format!("function of {got} parts"),
            expected: "(formals body)",
            got: "list",
        });
    };
    let names = formals
        .into_list("function formals")?
        .into_iter()
        .map(|formal| match formal {
            Value::Symbol(name) => Ok(name),
            other => Err(EngineError::type_mismatch("function formals", "symbol", &other)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((names, body))
}

fn bind_formals(
    frame: &mut ScopedExecutor<'_, Interpreter>,
    formals: &[String],
    args: Vec<Value>,
) -> Result<(), EngineError> {
    for (name, arg) in formals.iter().zip(args) {
        let value = frame.eval(arg)?;
        frame.assign(name, value);
    }
    Ok(())
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for Interpreter {
    fn eval(&mut self, expr: Value) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        self.env.lookup(name)
    }

    fn lookup_global(&self, name: &str) -> Option<&Value> {
        self.env.lookup_global(name)
    }

    fn assign(&mut self, name: &str, value: Value) {
        self.env.assign(name, value);
    }

    fn push_scope(&mut self) {
        self.env.push_scope();
    }

    fn pop_scope(&mut self) {
        self.env.pop_scope();
    }

    fn print_line(&mut self, line: &str) {
        self.print_handler.println(line);
    }

    fn read_int(&mut self) -> Result<i64, EngineError> {
        self.input_handler.read_int()
    }
}
