//! Lazy sequences.
//!
//! A sequence stores unevaluated expressions and evaluates them only when
//! sampled by `take`. Three strategies implement [`Generator`]:
//!
//! - [`DynamicGenerator`]: one expression over the index symbol `n`,
//!   infinite.
//! - [`CircularGenerator`]: a finite list of expressions, repeated when
//!   sampled past its end.
//! - [`ComposedGenerator`]: children concatenated in order; `seq` only ever
//!   builds a circular prefix followed by a dynamic tail.
//!
//! Generators are immutable once built. `pop` returns a new sequence with
//! shifted state and leaves the original untouched, so a `Sequence` value can
//! be cloned freely.

use std::fmt;
use std::rc::Rc;

use crate::errors::EngineError;
use crate::executor::Executor;
use crate::scope_guard::ScopedExecutor;
use crate::value::Value;

/// Reserved symbol bound to the sample index inside dynamic expressions.
pub const INDEX_SYMBOL: &str = "n";

/// Capability set shared by every sequence strategy.
pub trait Generator {
    /// Realize the first `count` elements.
    fn take(&self, executor: &mut dyn Executor, count: usize) -> Result<Vec<Value>, EngineError>;

    /// Number of elements in one pass, or `None` when unbounded.
    fn len(&self) -> Option<usize>;

    /// A new sequence without the first `count` elements, or `Nil` when
    /// nothing is left.
    fn pop(&self, count: usize) -> Result<Value, EngineError>;

    /// The raw expressions of a finite generator, one pass worth.
    ///
    /// Composition copies these directly instead of going through `take`,
    /// which would wrap around.
    fn finite_values(&self) -> Option<&[Value]> {
        None
    }

    /// Strategy name for logs.
    fn kind(&self) -> &'static str;
}

/// Shared handle to a generator; the payload of `Value::Sequence`.
#[derive(Clone)]
pub struct Sequence(Rc<dyn Generator>);

impl Sequence {
    pub fn new(generator: impl Generator + 'static) -> Self {
        Sequence(Rc::new(generator))
    }

    /// Build a sequence from `seq`'s unevaluated arguments.
    ///
    /// All arguments static: circular over all of them. First argument
    /// dynamic: dynamic over that argument alone. Otherwise a circular prefix
    /// over the leading static arguments composed with a dynamic tail over
    /// the first dynamic one. Arguments after the first dynamic one are
    /// dropped.
    pub fn from_expressions(mut args: Vec<Value>) -> Self {
        let Some(first_dynamic) = args.iter().position(|arg| !arg.is_static()) else {
            tracing::trace!(len = args.len(), "seq: circular");
            return Sequence::new(CircularGenerator::new(args));
        };

        args.truncate(first_dynamic + 1);
        let tail = args.pop().unwrap_or(Value::Nil);
        let dynamic = DynamicGenerator::new(tail);

        if args.is_empty() {
            tracing::trace!("seq: dynamic");
            return Sequence::new(dynamic);
        }

        tracing::trace!(prefix = args.len(), "seq: composed");
        Sequence::new(ComposedGenerator::new(vec![
            Rc::new(CircularGenerator::new(args)),
            Rc::new(dynamic),
        ]))
    }

    pub fn generator(&self) -> &Rc<dyn Generator> {
        &self.0
    }

    pub fn take(&self, executor: &mut dyn Executor, count: usize) -> Result<Vec<Value>, EngineError> {
        self.0.take(executor, count)
    }

    pub fn len(&self) -> Option<usize> {
        self.0.len()
    }

    pub fn pop(&self, count: usize) -> Result<Value, EngineError> {
        self.0.pop(count)
    }
}

impl From<Rc<dyn Generator>> for Sequence {
    fn from(generator: Rc<dyn Generator>) -> Self {
        Sequence(generator)
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("kind", &self.0.kind())
            .field("len", &self.0.len())
            .finish()
    }
}

/// Evaluate one stored expression in a fresh scope, binding `n` when given.
fn sample(executor: &mut dyn Executor, expr: &Value, index: Option<i64>) -> Result<Value, EngineError> {
    let mut scoped = ScopedExecutor::new(executor);
    if let Some(index) = index {
        scoped.assign(INDEX_SYMBOL, Value::int(index));
    }
    scoped.eval(expr.clone())
}

/// Infinite sequence: element `i` is `expr` with `n = start + i`.
#[derive(Clone, Debug)]
pub struct DynamicGenerator {
    expr: Value,
    start: i64,
}

impl DynamicGenerator {
    pub fn new(expr: Value) -> Self {
        DynamicGenerator { expr, start: 0 }
    }
}

impl Generator for DynamicGenerator {
    fn take(&self, executor: &mut dyn Executor, count: usize) -> Result<Vec<Value>, EngineError> {
        let mut result = Vec::new();
        for i in 0..count {
            let index = i64::try_from(i)
                .ok()
                .and_then(|i| self.start.checked_add(i))
                .ok_or(EngineError::IntegerOverflow("sequence index"))?;
            result.push(sample(executor, &self.expr, Some(index))?);
        }
        Ok(result)
    }

    fn len(&self) -> Option<usize> {
        None
    }

    fn pop(&self, count: usize) -> Result<Value, EngineError> {
        let start = i64::try_from(count)
            .ok()
            .and_then(|count| self.start.checked_add(count))
            .ok_or(EngineError::IntegerOverflow("pop"))?;
        Ok(Value::Sequence(Sequence::new(DynamicGenerator {
            expr: self.expr.clone(),
            start,
        })))
    }

    fn kind(&self) -> &'static str {
        "dynamic"
    }
}

/// Finite sequence repeated when sampled past its length.
#[derive(Clone, Debug)]
pub struct CircularGenerator {
    value_set: Vec<Value>,
}

impl CircularGenerator {
    pub fn new(value_set: Vec<Value>) -> Self {
        CircularGenerator { value_set }
    }
}

impl Generator for CircularGenerator {
    fn take(&self, executor: &mut dyn Executor, count: usize) -> Result<Vec<Value>, EngineError> {
        if self.value_set.is_empty() {
            return Ok(Vec::new());
        }
        let mut result = Vec::new();
        for i in 0..count {
            result.push(sample(executor, &self.value_set[i % self.value_set.len()], None)?);
        }
        Ok(result)
    }

    fn len(&self) -> Option<usize> {
        Some(self.value_set.len())
    }

    /// Popping the whole cycle or more collapses the sequence to `Nil`.
    fn pop(&self, count: usize) -> Result<Value, EngineError> {
        if count >= self.value_set.len() {
            return Ok(Value::Nil);
        }
        Ok(Value::Sequence(Sequence::new(CircularGenerator {
            value_set: self.value_set[count..].to_vec(),
        })))
    }

    fn finite_values(&self) -> Option<&[Value]> {
        Some(&self.value_set)
    }

    fn kind(&self) -> &'static str {
        "circular"
    }
}

/// Concatenation of child generators.
///
/// Finite children (those exposing `finite_values`) contribute each of their
/// elements once per pass. The first unbounded child absorbs the rest of any
/// request, so children after it are never reached. A composition of only
/// finite children repeats as a whole.
#[derive(Clone)]
pub struct ComposedGenerator {
    children: Vec<Rc<dyn Generator>>,
}

impl ComposedGenerator {
    pub fn new(children: Vec<Rc<dyn Generator>>) -> Self {
        ComposedGenerator { children }
    }
}

impl Generator for ComposedGenerator {
    fn take(&self, executor: &mut dyn Executor, count: usize) -> Result<Vec<Value>, EngineError> {
        let mut result = Vec::new();
        let mut remaining = count;

        while remaining > 0 {
            let before = remaining;
            for child in &self.children {
                if remaining == 0 {
                    break;
                }
                let Some(values) = child.finite_values() else {
                    result.extend(child.take(executor, remaining)?);
                    return Ok(result);
                };
                let copied = values.len().min(remaining);
                for expr in &values[..copied] {
                    result.push(sample(executor, expr, None)?);
                }
                remaining -= copied;
            }
            // Every child was empty: nothing more can be produced.
            if remaining == before {
                break;
            }
        }

        Ok(result)
    }

    fn len(&self) -> Option<usize> {
        self.children
            .iter()
            .try_fold(0usize, |sum, child| Some(sum.saturating_add(child.len()?)))
    }

    fn pop(&self, count: usize) -> Result<Value, EngineError> {
        let mut remaining = count;
        let mut rest: Vec<Rc<dyn Generator>> = Vec::with_capacity(self.children.len());

        for child in &self.children {
            if remaining == 0 {
                rest.push(Rc::clone(child));
                continue;
            }
            match child.len() {
                Some(len) if remaining >= len => remaining -= len,
                _ => {
                    if let Value::Sequence(popped) = child.pop(remaining)? {
                        rest.push(Rc::clone(popped.generator()));
                    }
                    remaining = 0;
                }
            }
        }

        // Popping past every finite child leaves `rest` empty.
        Ok(match rest.len() {
            0 => Value::Nil,
            1 => Value::Sequence(Sequence::from(Rc::clone(&rest[0]))),
            _ => Value::Sequence(Sequence::new(ComposedGenerator { children: rest })),
        })
    }

    fn kind(&self) -> &'static str {
        "composed"
    }
}
