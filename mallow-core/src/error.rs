// mallow-core - Error types for the Mallow evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Mallow reading and evaluation.

use std::fmt;

use mallow_parser::{MallowVal, ReadError, ReadErrorKind, Symbol};

/// Result type for Mallow evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or evaluating.
#[derive(Debug, Clone)]
pub enum Error {
    /// Input ended inside a form, or a stray closing delimiter
    UnbalancedInput(String),
    /// A token that cannot be read as a value
    InvalidLiteral(String),
    /// Symbol not bound in any enclosing environment
    UnboundSymbol(Symbol),
    /// Type error - wrong type for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Wrong number of values for a function or pattern
    ArityMismatch {
        expected: AritySpec,
        got: usize,
        name: Option<String>,
    },
    /// The same name appears twice in one binding pattern
    DuplicateBinding(Symbol),
    /// `&` in the wrong place in a binding pattern
    InvalidVariadic(String),
    /// Attempted to call something that isn't callable
    NotCallable(String),
    /// Integer division by zero
    DivisionByZero,
    /// General runtime failure (malformed spread, overflow, I/O)
    RuntimeError(String),
    /// Invalid special form syntax
    InvalidSyntax { form: &'static str, message: String },
    /// User-thrown exception (via throw)
    Thrown(MallowVal),
    /// Internal error - invariant violation
    Internal(String),
}

/// Specification for expected arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnbalancedInput(msg) => write!(f, "Unbalanced input: {}", msg),
            Error::InvalidLiteral(msg) => write!(f, "Invalid literal: {}", msg),
            Error::UnboundSymbol(sym) => {
                write!(f, "Unable to resolve symbol: {}", sym)
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
            Error::ArityMismatch {
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
            Error::DuplicateBinding(sym) => {
                write!(f, "Duplicate name in binding pattern: {}", sym)
            }
            Error::InvalidVariadic(msg) => write!(f, "Invalid variadic pattern: {}", msg),
            Error::NotCallable(val) => {
                write!(f, "Cannot call value: {}", val)
            }
            Error::DivisionByZero => {
                write!(f, "Division by zero")
            }
            Error::RuntimeError(msg) => {
                write!(f, "{}", msg)
            }
            Error::InvalidSyntax { form, message } => {
                write!(f, "Invalid '{}' syntax: {}", form, message)
            }
            Error::Thrown(val) => {
                write!(f, "Uncaught exception: {}", val)
            }
            Error::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        let message = e.to_string();
        match e.kind {
            ReadErrorKind::UnbalancedInput => Error::UnbalancedInput(message),
            ReadErrorKind::InvalidLiteral => Error::InvalidLiteral(message),
        }
    }
}

impl Error {
    /// Create an arity error for exact arity.
    pub fn arity(expected: usize, got: usize) -> Self {
        Error::ArityMismatch {
            expected: AritySpec::Exact(expected),
            got,
            name: None,
        }
    }

    /// Create an arity error for exact arity with function name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityMismatch {
            expected: AritySpec::Exact(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for minimum arity with function name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityMismatch {
            expected: AritySpec::AtLeast(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an invalid syntax error.
    pub fn syntax(form: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidSyntax {
            form,
            message: message.into(),
        }
    }

    /// Create a runtime error.
    pub fn runtime(message: impl Into<String>) -> Self {
        Error::RuntimeError(message.into())
    }

    /// Stable name of this error's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::UnbalancedInput(_) => "UnbalancedInput",
            Error::InvalidLiteral(_) => "InvalidLiteral",
            Error::UnboundSymbol(_) => "UnboundSymbol",
            Error::TypeError { .. } => "TypeError",
            Error::ArityMismatch { .. } => "ArityMismatch",
            Error::DuplicateBinding(_) => "DuplicateBinding",
            Error::InvalidVariadic(_) => "InvalidVariadic",
            Error::NotCallable(_) => "NotCallable",
            Error::DivisionByZero => "DivisionByZero",
            Error::RuntimeError(_) => "RuntimeError",
            Error::InvalidSyntax { .. } => "InvalidSyntax",
            Error::Thrown(_) => "Thrown",
            Error::Internal(_) => "Internal",
        }
    }
}

/// Extract an integer argument or fail with a type error naming `context`.
pub fn expect_int(val: &MallowVal, context: &str) -> Result<i64> {
    match val {
        MallowVal::Int(n) => Ok(*n),
        other => Err(Error::type_error_in(context, "int", other.type_name())),
    }
}
