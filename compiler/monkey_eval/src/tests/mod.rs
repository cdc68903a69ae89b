//! Evaluator tests.
//!
//! - `eval`: literals, operators, conditionals, statements, loops
//! - `functions`: calls, closures, recursion, arity and depth limits
//! - `errors`: runtime error messages and propagation

mod eval;

use crate::{Environment, EvalConfig, EvalError, Evaluator, Value};

fn eval_with(config: EvalConfig, source: &str) -> Result<Value, EvalError> {
    let output = monkey_parse::parse(source);
    assert!(
        !output.has_errors(),
        "parse errors for {source:?}: {:?}",
        output.error_messages()
    );
    let env = Environment::new();
    Evaluator::new(config).eval_program(&output.program, &env)
}

fn eval_source(source: &str) -> Result<Value, EvalError> {
    eval_with(EvalConfig::default(), source)
}

fn error_message(source: &str) -> String {
    match eval_source(source) {
        Ok(value) => panic!("expected error for {source:?}, got {value:?}"),
        Err(err) => err.message,
    }
}
