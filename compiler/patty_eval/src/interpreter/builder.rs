//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::environment::Environment;
use crate::input_handler::{stdin_input, SharedInputHandler};
use crate::intrinsics;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: stdout for `print`, stdin for `read`, no call depth limit.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `read` reads.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Fail with `RecursionLimit` once `depth` user-function calls are live.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Build the interpreter, registering every intrinsic in the global scope.
    pub fn build(self) -> Interpreter {
        let mut env = Environment::new();
        intrinsics::register_all(&mut env);

        Interpreter {
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_input),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}
