//! Lex, parse and evaluate against a persistent environment.

use monkey_eval::{Environment, EvalConfig, EvalError, Evaluator, Value};
use monkey_parse::ParseError;

/// Failure of one [`Session::eval`] call.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The input did not parse; nothing was evaluated.
    #[error("{} syntax error(s)", .0.len())]
    Parse(Vec<ParseError>),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// One root environment plus the evaluator that runs against it.
///
/// Bindings made by one `eval` call are visible to the next, even when a
/// later statement of the same input failed.
pub struct Session {
    env: Environment,
    evaluator: Evaluator,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Session {
            env: Environment::new(),
            evaluator: Evaluator::new(config),
        }
    }

    /// Run one chunk of source text and return the value of its last
    /// statement, `null` if it had none.
    pub fn eval(&mut self, source: &str) -> Result<Value, RunError> {
        Ok(self.run(source)?.unwrap_or(Value::Null))
    }

    /// Like [`eval`](Self::eval), but `None` when the input was empty or
    /// ended in a `let`.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, RunError> {
        let output = monkey_parse::parse(source);
        if output.has_errors() {
            tracing::debug!(count = output.errors.len(), "rejected input with syntax errors");
            return Err(RunError::Parse(output.errors));
        }
        let value = self.evaluator.run_program(&output.program, &self.env)?;
        Ok(value)
    }

    /// The root environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &EvalConfig {
        self.evaluator.config()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
