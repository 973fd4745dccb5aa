//! Scope stack for variable bindings.
//!
//! Scoping is dynamic: a lookup walks the live stack from the innermost frame
//! out, so a function body sees whatever its callers have bound at the time
//! of the call. The bottom scope is the global scope. It holds every native
//! function and is never popped.

use rustc_hash::FxHashMap;

use patty_value::Value;

/// One frame of bindings.
pub type Scope = FxHashMap<String, Value>;

pub struct Environment {
    /// Never empty; index 0 is the global scope.
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// Resolve `name`, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Resolve `name` in the global scope only.
    pub fn lookup_global(&self, name: &str) -> Option<&Value> {
        self.scopes.first().and_then(|scope| scope.get(name))
    }

    /// Bind `name` in the innermost scope.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Bind `name` in the global scope regardless of the current depth.
    pub fn define_global(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.first_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Pop the innermost scope. The global scope stays.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Number of live scopes, global included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
