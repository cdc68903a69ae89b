//! Tree-walking evaluator for Monkey.
//!
//! Evaluates a parsed `Program` against a chained lexical [`Environment`].
//! Runtime errors and `return` are not values: every evaluation step
//! returns [`EvalResult`], and both unwind through `?` until a function
//! call (for `return`) or the program (for both) handles them.
//!
//! # Module Structure
//!
//! - `value`: runtime values and closures
//! - `environment`: shared, chained scopes
//! - `errors`: `EvalError`, its kinds and the `Unwind` signal
//! - `operators` / `unary_operators`: infix and prefix operator semantics
//! - `diagnostics`: call stack with a depth limit
//! - `config`: evaluator settings
//! - `interpreter`: the `Evaluator` itself

mod config;
mod diagnostics;
pub mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

pub use config::{EvalConfig, DEFAULT_MAX_CALL_DEPTH};
pub use diagnostics::{CallFrame, CallStack};
pub use environment::{AssignError, Environment};
pub use errors::{EvalError, EvalErrorKind, EvalResult, Unwind};
pub use interpreter::Evaluator;
pub use operators::evaluate_infix;
pub use unary_operators::evaluate_prefix;
pub use value::{FunctionValue, Value};
