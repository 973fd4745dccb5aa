//! RAII scope guard over any [`Executor`].
//!
//! Every user-function call, `for` iteration, and sequence sample runs in its
//! own scope. The guard pushes on construction and pops on drop, so the scope
//! is released on every exit path, `?` included.
//!
//! ```text
//! let mut scoped = ScopedExecutor::new(exec);
//! scoped.assign("n", Value::int(i));
//! let value = scoped.eval(expr)?;
//! // scope popped here
//! ```

use std::ops::{Deref, DerefMut};

use crate::executor::Executor;

/// Guard holding a freshly pushed scope.
///
/// Derefs to the wrapped executor, so it is used exactly like it.
pub struct ScopedExecutor<'a, E: Executor + ?Sized> {
    executor: &'a mut E,
}

impl<'a, E: Executor + ?Sized> ScopedExecutor<'a, E> {
    /// Push a new scope and return the guard that will pop it.
    pub fn new(executor: &'a mut E) -> Self {
        executor.push_scope();
        ScopedExecutor { executor }
    }
}

impl<E: Executor + ?Sized> Drop for ScopedExecutor<'_, E> {
    fn drop(&mut self) {
        self.executor.pop_scope();
    }
}

impl<E: Executor + ?Sized> Deref for ScopedExecutor<'_, E> {
    type Target = E;

    fn deref(&self) -> &Self::Target {
        self.executor
    }
}

impl<E: Executor + ?Sized> DerefMut for ScopedExecutor<'_, E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.executor
    }
}
