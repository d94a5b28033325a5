// volt-core - Error types for the Volt evaluator
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Error types for Volt evaluation.
//!
//! Runtime errors and the non-local control signals (`return`, `break`,
//! `continue`, `throw`) share one enum so that evaluation routines can
//! propagate either with `?`. The signal variants are intercepted by the
//! constructs that consume them: function application consumes `Return`,
//! loops consume `Break`/`Continue`, and `try` consumes `Thrown` along with
//! ordinary runtime errors.

use std::fmt;

use crate::value::Value;

/// Result type for Volt evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during evaluation, plus control-flow signals.
#[derive(Debug, Clone)]
pub enum Error {
    /// Lexer or parser failure; fatal before execution starts
    Parse(String),
    /// Reference to an unbound identifier
    UndefinedName(String),
    /// Wrong type for an operation
    TypeError {
        expected: &'static str,
        got: String,
        context: Option<String>,
    },
    /// Wrong number of arguments to a function
    ArityError {
        expected: AritySpec,
        got: usize,
        name: Option<String>,
    },
    /// Attempted to call something that isn't callable
    NotCallable(String),
    /// Division or modulus by zero
    DivisionByZero,
    /// Integer overflow
    IntegerOverflow { operation: &'static str },
    /// List index out of range
    IndexOutOfBounds { index: i64, length: usize },
    /// Missing dict key
    KeyNotFound(String),
    /// Domain error: bad conversion, empty-collection min, etc.
    ValueError(String),
    /// I/O error (file operations, show/ask)
    IoError {
        operation: &'static str,
        path: Option<String>,
        message: String,
    },
    /// `use` of an unknown module
    ModuleNotFound(String),
    /// General evaluation error
    EvalError(String),
    /// User-thrown exception (via `throw`)
    Thrown(Value),
    /// Control signal: `return` (not a real error)
    Return(Value),
    /// Control signal: `break` (not a real error)
    Break,
    /// Control signal: `continue` (not a real error)
    Continue,
}

/// Specification for expected arity.
#[derive(Debug, Clone)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
            AritySpec::Range(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "{}", msg),
            Error::UndefinedName(name) => {
                write!(f, "Undefined variable: '{}'", name)
            }
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
            Error::ArityError {
                expected,
                got,
                name,
            } => {
                if let Some(name) = name {
                    write!(
                        f,
                        "Wrong number of arguments to '{}': expected {}, got {}",
                        name, expected, got
                    )
                } else {
                    write!(
                        f,
                        "Wrong number of arguments: expected {}, got {}",
                        expected, got
                    )
                }
            }
            Error::NotCallable(what) => {
                write!(f, "Cannot call value: {}", what)
            }
            Error::DivisionByZero => {
                write!(f, "Division by zero")
            }
            Error::IntegerOverflow { operation } => {
                write!(f, "Integer overflow in '{}'", operation)
            }
            Error::IndexOutOfBounds { index, length } => {
                write!(f, "Index {} out of range (length {})", index, length)
            }
            Error::KeyNotFound(key) => {
                write!(f, "Key '{}' not found in dict", key)
            }
            Error::ValueError(msg) => {
                write!(f, "Value error: {}", msg)
            }
            Error::IoError {
                operation,
                path,
                message,
            } => {
                if let Some(path) = path {
                    write!(f, "{} '{}': {}", operation, path, message)
                } else {
                    write!(f, "{}: {}", operation, message)
                }
            }
            Error::ModuleNotFound(name) => {
                write!(f, "Module not found: '{}'", name)
            }
            Error::EvalError(msg) => {
                write!(f, "{}", msg)
            }
            Error::Thrown(val) => {
                write!(f, "Uncaught exception: {}", val)
            }
            Error::Return(_) => {
                write!(f, "'return' used outside of a function")
            }
            Error::Break => {
                write!(f, "'break' used outside of a loop")
            }
            Error::Continue => {
                write!(f, "'continue' used outside of a loop")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an arity error for exact arity with function name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Exact(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for minimum arity with function name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::AtLeast(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for a range (min to max).
    pub fn arity_range(name: impl Into<String>, min: usize, max: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Range(min, max),
            got,
            name: Some(name.into()),
        }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: impl Into<String>) -> Self {
        Error::TypeError {
            expected,
            got: got.into(),
            context: None,
        }
    }

    /// Create a type error with context (usually the operation name).
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: impl Into<String>,
    ) -> Self {
        Error::TypeError {
            expected,
            got: got.into(),
            context: Some(context.into()),
        }
    }

    /// Create a value error.
    pub fn value_error(message: impl Into<String>) -> Self {
        Error::ValueError(message.into())
    }

    /// Create an I/O error from a std::io::Error.
    pub fn io(operation: &'static str, path: Option<String>, error: std::io::Error) -> Self {
        Error::IoError {
            operation,
            path,
            message: error.to_string(),
        }
    }

    /// Create a general evaluation error.
    pub fn eval(message: impl Into<String>) -> Self {
        Error::EvalError(message.into())
    }

    /// True for the control-flow signals that must never be caught by
    /// `try`/`catch`.
    pub fn is_control(&self) -> bool {
        matches!(self, Error::Return(_) | Error::Break | Error::Continue)
    }

    /// The value a `catch` clause binds for this error: the thrown payload,
    /// or the rendered message for ordinary runtime errors.
    pub fn into_caught_value(self) -> Value {
        match self {
            Error::Thrown(val) => val,
            other => Value::str(other.to_string()),
        }
    }
}
