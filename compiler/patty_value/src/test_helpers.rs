//! Minimal executor for exercising generators and guards without the
//! interpreter crate.
//!
//! Understands self-evaluating values, symbol lookup, and two call forms:
//! `(sq x)` squares and `(add x y ...)` sums. Every other list evaluates to
//! itself.

use std::collections::HashMap;

use crate::{EngineError, EvalResult, Executor, Value};

pub(crate) struct TestExecutor {
    scopes: Vec<HashMap<String, Value>>,
    pub(crate) evaluations: usize,
    pub(crate) output: Vec<String>,
    pub(crate) input: Vec<i64>,
}

impl TestExecutor {
    pub(crate) fn new() -> Self {
        TestExecutor {
            scopes: vec![HashMap::new()],
            evaluations: 0,
            output: Vec::new(),
            input: Vec::new(),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.scopes.len()
    }

    fn eval_int(&mut self, expr: Value) -> Result<i64, EngineError> {
        let value = self.eval(expr)?;
        value.expect_int("test executor")
    }
}

impl Executor for TestExecutor {
    fn eval(&mut self, expr: Value) -> EvalResult {
        self.evaluations += 1;
        match expr {
            Value::Symbol(name) => self
                .lookup(&name)
                .cloned()
                .ok_or(EngineError::UnresolvedSymbol(name)),
            Value::List(mut items) => match items.first().and_then(Value::as_symbol) {
                Some("sq") => {
                    let x = self.eval_int(items.remove(1))?;
                    Ok(Value::int(x * x))
                }
                Some("add") => {
                    let mut sum = 0;
                    for item in items.drain(1..) {
                        sum += self.eval_int(item)?;
                    }
                    Ok(Value::int(sum))
                }
                _ => Ok(Value::List(items)),
            },
            other => Ok(other),
        }
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    fn lookup_global(&self, name: &str) -> Option<&Value> {
        self.scopes[0].get(name)
    }

    fn assign(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    fn print_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_int(&mut self) -> Result<i64, EngineError> {
        if self.input.is_empty() {
            return Err(EngineError::Input("no input".to_string()));
        }
        Ok(self.input.remove(0))
    }
}
