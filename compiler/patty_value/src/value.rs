//! Runtime values for the Patty interpreter.
//!
//! `Value` doubles as the expression tree: the reader produces values, the
//! evaluator walks them. Lists are owned vectors, so evaluation steps own
//! their operands and may truncate or drain them in place. The only shared
//! state lives behind `Rc` in native functions and sequence generators.
//!
//! Reader input can nest lists arbitrarily deep, so every recursive walk over
//! a [`List`] (clone, comparison, rendering) runs under
//! `ensure_sufficient_stack`, and dropping one unlinks its nested lists
//! iteratively.

use std::fmt::{self, Write as _};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use patty_stack::ensure_sufficient_stack;

use crate::errors::{EngineError, EvalResult};
use crate::executor::Executor;
use crate::sequence::{Sequence, INDEX_SYMBOL};

/// Signature of a host-implemented callable.
///
/// Receives the executor and the *unevaluated* argument expressions.
pub type NativeFn = dyn Fn(&mut dyn Executor, Vec<Value>) -> EvalResult;

/// A named host callable.
#[derive(Clone)]
pub struct NativeFunction {
    name: Rc<str>,
    func: Rc<NativeFn>,
}

impl NativeFunction {
    pub fn new(
        name: &str,
        func: impl Fn(&mut dyn Executor, Vec<Value>) -> EvalResult + 'static,
    ) -> Self {
        NativeFunction {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with unevaluated arguments.
    pub fn call(&self, executor: &mut dyn Executor, args: Vec<Value>) -> EvalResult {
        (self.func)(executor, args)
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}

/// Runtime value, and the unevaluated expression tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absence of a value; the canonical false/empty result.
    Nil,
    Int(i64),
    String(String),
    /// Identifier, resolved when evaluated.
    Symbol(String),
    /// Call expression, data, or `[formals, body]` function.
    List(List),
    NativeFunction(NativeFunction),
    /// Shared handle to a lazy generator.
    Sequence(Sequence),
}

impl Value {
    #[inline]
    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    #[inline]
    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(List(items))
    }

    pub fn native(
        name: &str,
        func: impl Fn(&mut dyn Executor, Vec<Value>) -> EvalResult + 'static,
    ) -> Self {
        Value::NativeFunction(NativeFunction::new(name, func))
    }

    /// Canonical boolean encoding used by comparisons.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        Value::Int(i64::from(value))
    }

    /// Variant name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Int(_) => "int",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::NativeFunction(_) => "native function",
            Value::Sequence(_) => "sequence",
        }
    }

    /// Boolean coercion: `nil`, `0`, `""` and `()` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Int(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Symbol(_) | Value::NativeFunction(_) | Value::Sequence(_) => true,
        }
    }

    /// Whether the expression never mentions the sequence index `n`.
    pub fn is_static(&self) -> bool {
        match self {
            Value::List(items) => ensure_sufficient_stack(|| items.iter().all(Value::is_static)),
            Value::Symbol(name) => name != INDEX_SYMBOL,
            _ => true,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The integer payload, or a type mismatch attributed to `context`.
    pub fn expect_int(&self, context: &str) -> Result<i64, EngineError> {
        self.as_int()
            .ok_or_else(|| EngineError::type_mismatch(context, "int", self))
    }

    /// The list payload, or a type mismatch attributed to `context`.
    pub fn into_list(self, context: &str) -> Result<Vec<Value>, EngineError> {
        match self {
            Value::List(items) => Ok(items.into_vec()),
            other => Err(EngineError::type_mismatch(context, "list", &other)),
        }
    }

    /// Prefix of `count` elements: characters of a string, elements of a
    /// list, or samples of a sequence.
    pub fn take(self, executor: &mut dyn Executor, count: usize) -> EvalResult {
        match self {
            Value::String(text) => Ok(Value::String(text.chars().take(count).collect())),
            Value::List(mut items) => {
                items.truncate(count);
                Ok(Value::List(items))
            }
            Value::Sequence(seq) => Ok(Value::list(seq.take(executor, count)?)),
            other => Err(EngineError::unsupported(format!(
                "take only supports strings, lists and sequences, got {}",
                other.type_name()
            ))),
        }
    }

    /// Renders strings quoted at every level, the form the reader accepts back.
    pub fn quoted(&self) -> Quoted<'_> {
        Quoted(self)
    }
}

/// Elements of a [`Value::List`].
///
/// Derefs to the underlying `Vec`. Dropping moves nested lists onto a
/// worklist instead of recursing, so a tree of any depth drops in constant
/// stack.
#[derive(Default)]
pub struct List(Vec<Value>);

impl List {
    pub fn into_vec(mut self) -> Vec<Value> {
        std::mem::take(&mut self.0)
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        List(items)
    }
}

impl Deref for List {
    type Target = Vec<Value>;

    fn deref(&self) -> &Vec<Value> {
        &self.0
    }
}

impl DerefMut for List {
    fn deref_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| List(self.0.clone()))
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.0 == other.0)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| fmt::Debug::fmt(&self.0, f))
    }
}

impl Drop for List {
    fn drop(&mut self) {
        let nested = |item: &Value| matches!(item, Value::List(inner) if !inner.is_empty());
        if !self.0.iter().any(nested) {
            return;
        }
        let mut pending = std::mem::take(&mut self.0);
        while let Some(item) = pending.pop() {
            if let Value::List(mut inner) = item {
                pending.append(&mut inner.0);
            }
        }
    }
}

/// Display adapter returned by [`Value::quoted`].
pub struct Quoted<'a>(&'a Value);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.0, f, true)
    }
}

/// Top-level rendering: strings print raw, strings nested in lists print quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, false)
    }
}

fn render(value: &Value, f: &mut fmt::Formatter<'_>, nested: bool) -> fmt::Result {
    match value {
        Value::Nil => f.write_str("nil"),
        Value::Int(n) => write!(f, "{n}"),
        Value::String(text) if nested => write_quoted(f, text),
        Value::String(text) | Value::Symbol(text) => f.write_str(text),
        Value::List(items) => ensure_sufficient_stack(|| {
            f.write_char('(')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                render(item, f, true)?;
            }
            f.write_char(')')
        }),
        Value::NativeFunction(func) => write!(f, "<native-function {}>", func.name()),
        Value::Sequence(seq) => match seq.len() {
            Some(len) => write!(f, "<sequence of {len}>"),
            None => f.write_str("<sequence infinite>"),
        },
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
