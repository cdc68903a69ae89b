//! Evaluation errors and the unwind signal.
//!
//! Errors are built through the factory functions below so every message
//! for a given kind reads the same.

use crate::Value;
use monkey_ir::{InfixOp, Name, PrefixOp};
use std::fmt;

/// Why an evaluation step did not produce a value.
#[derive(Clone, Debug, PartialEq)]
pub enum Unwind {
    /// `return` unwinding to the nearest call boundary.
    Return(Value),
    /// A runtime error unwinding to the top.
    Error(EvalError),
}

impl From<EvalError> for Unwind {
    fn from(err: EvalError) -> Self {
        Unwind::Error(err)
    }
}

/// Result of evaluating a statement or expression.
pub type EvalResult = Result<Value, Unwind>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Operators
    UnknownPrefixOperator {
        op: PrefixOp,
        operand: &'static str,
    },
    UnknownInfixOperator {
        op: InfixOp,
        left: &'static str,
        right: &'static str,
    },
    TypeMismatch {
        op: InfixOp,
        left: &'static str,
        right: &'static str,
    },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },

    // Names and calls
    IdentifierNotFound {
        name: Name,
    },
    NotAFunction {
        type_name: &'static str,
    },
    WrongArgCount {
        expected: usize,
        got: usize,
    },
    CallDepthExceeded {
        limit: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPrefixOperator { op, operand } => {
                write!(f, "unknown operator: {}{operand}", op.as_symbol())
            }
            Self::UnknownInfixOperator { op, left, right } => {
                write!(f, "unknown operator: {left} {} {right}", op.as_symbol())
            }
            Self::TypeMismatch { op, left, right } => {
                write!(f, "type mismatch: {left} {} {right}", op.as_symbol())
            }
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::WrongArgCount { expected, got } => {
                write!(f, "wrong number of arguments: want={expected}, got={got}")
            }
            Self::CallDepthExceeded { limit } => {
                write!(f, "maximum call depth exceeded ({limit})")
            }
        }
    }
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Operator errors

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn unknown_infix_operator(op: InfixOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn type_mismatch(op: InfixOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

// Arithmetic errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Name and call errors

#[cold]
pub fn identifier_not_found(name: &Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound { name: name.clone() })
}

#[cold]
pub fn not_a_function(callee: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        type_name: callee.type_name(),
    })
}

#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount { expected, got })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { limit })
}
