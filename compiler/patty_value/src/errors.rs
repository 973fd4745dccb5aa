//! Error taxonomy for evaluation.
//!
//! Every failure in the engine is fatal for the running program: there is no
//! catch form in Patty. Errors are still ordinary `Result`s so the host (the
//! CLI, or a test) decides what "fatal" means.

use crate::value::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EngineError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A symbol was evaluated but no scope binds it.
    #[error("cannot resolve symbol {0}")]
    UnresolvedSymbol(String),

    /// A value of the wrong variant reached an operation.
    #[error("type mismatch in {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        got: &'static str,
    },

    /// Formal/actual parameter counts or destructuring counts differ.
    #[error("{context} expects {expected} arguments, got {got}")]
    ArityMismatch {
        context: String,
        expected: String,
        got: usize,
    },

    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),

    /// The operation exists but not for this input.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("maximum call depth exceeded (limit: {0})")]
    RecursionLimit(usize),

    /// The input handler could not produce the requested datum.
    #[error("invalid input: {0}")]
    Input(String),
}

impl EngineError {
    /// Wrong-variant error, naming the variant actually received.
    #[cold]
    pub fn type_mismatch(context: impl Into<String>, expected: &'static str, got: &Value) -> Self {
        EngineError::TypeMismatch {
            context: context.into(),
            expected,
            got: got.type_name(),
        }
    }

    #[cold]
    pub fn arity(context: impl Into<String>, expected: impl Into<String>, got: usize) -> Self {
        EngineError::ArityMismatch {
            context: context.into(),
            expected: expected.into(),
            got,
        }
    }

    #[cold]
    pub fn unsupported(message: impl Into<String>) -> Self {
        EngineError::UnsupportedOperation(message.into())
    }
}

/// Check the argument count of a native function, returning
/// `EngineError::ArityMismatch` on mismatch.
///
/// ```ignore
/// check_arity!(args, "def", 2);        // exactly 2
/// check_arity!(args, "if", 2..=3);     // 2 to 3 inclusive
/// check_arity!(args, "+", 1..);        // 1 or more
/// ```
#[macro_export]
macro_rules! check_arity {
    ($args:expr, $name:expr, $exact:literal) => {
        if $args.len() != $exact {
            return Err($crate::EngineError::arity(
                $name,
                stringify!($exact),
                $args.len(),
            ));
        }
    };
    ($args:expr, $name:expr, $lo:literal ..= $hi:literal) => {
        if $args.len() < $lo || $args.len() > $hi {
            return Err($crate::EngineError::arity(
                $name,
                concat!(stringify!($lo), "-", stringify!($hi)),
                $args.len(),
            ));
        }
    };
    ($args:expr, $name:expr, $lo:literal ..) => {
        if $args.len() < $lo {
            return Err($crate::EngineError::arity(
                $name,
                concat!(stringify!($lo), "+"),
                $args.len(),
            ));
        }
    };
}
