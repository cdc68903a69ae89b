//! The tree-walking evaluator.
//!
//! Statement and expression evaluation return [`EvalResult`]. `?` carries
//! `Unwind::Return` up to the enclosing call and `Unwind::Error` up to
//! [`Evaluator::eval_program`], so no sub-result is used before it has
//! been checked.

mod function_call;

use crate::diagnostics::CallStack;
use crate::errors::identifier_not_found;
use crate::{
    evaluate_infix, evaluate_prefix, Environment, EvalConfig, EvalError, EvalResult,
    FunctionValue, Unwind, Value,
};
use monkey_ir::{BlockStatement, Expr, ExprKind, Identifier, Program, Stmt, StmtKind};
use monkey_stack::ensure_sufficient_stack;
use std::rc::Rc;

/// Evaluates programs against caller-supplied environments.
///
/// The evaluator itself holds only settings and the live call stack, so
/// one instance can serve many programs (a REPL session keeps one).
pub struct Evaluator {
    config: EvalConfig,
    call_stack: CallStack,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Evaluator {
            config,
            call_stack: CallStack::new(config.max_call_depth),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Current nesting of Monkey function calls.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Evaluate a whole program. A top-level `return` ends the program with
    /// its value; an empty program yields `null`.
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Result<Value, EvalError> {
        Ok(self.run_program(program, env)?.unwrap_or(Value::Null))
    }

    /// Like [`eval_program`](Self::eval_program), but `None` when the
    /// program produced no value: it was empty or its last statement was a
    /// `let`. The REPL prints nothing in that case.
    pub fn run_program(
        &mut self,
        program: &Program,
        env: &Environment,
    ) -> Result<Option<Value>, EvalError> {
        let mut result = None;
        for stmt in &program.statements {
            match self.eval_statement(stmt, env) {
                Ok(value) => {
                    result = (!matches!(stmt.kind, StmtKind::Let { .. })).then_some(value);
                }
                Err(Unwind::Return(value)) => return Ok(Some(value)),
                Err(Unwind::Error(err)) => {
                    tracing::debug!(span = %stmt.span, error = %err, "evaluation failed");
                    return Err(err);
                }
            }
        }
        Ok(result)
    }

    /// Evaluate a block in `env`. `Return` stays wrapped so it can pass
    /// through any number of nested blocks.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
        }
        Ok(result)
    }

    pub fn eval_statement(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.name.clone(), value);
                Ok(Value::Null)
            }
            StmtKind::Return(expr) => {
                let value = self.eval_expression(expr, env)?;
                Err(Unwind::Return(value))
            }
            StmtKind::Expression(expr) => self.eval_expression(expr, env),
        }
    }

    pub fn eval_expression(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| -> EvalResult {
            match &expr.kind {
                ExprKind::Ident(name) => env
                    .get(name)
                    .ok_or_else(|| identifier_not_found(name).into()),
                ExprKind::Int(n) => Ok(Value::Integer(*n)),
                ExprKind::Bool(b) => Ok(Value::Boolean(*b)),
                ExprKind::Prefix { op, right } => {
                    let right = self.eval_expression(right, env)?;
                    Ok(evaluate_prefix(*op, &right)?)
                }
                ExprKind::Infix { op, left, right } => {
                    let left = self.eval_expression(left, env)?;
                    let right = self.eval_expression(right, env)?;
                    Ok(evaluate_infix(*op, &left, &right)?)
                }
                ExprKind::If {
                    condition,
                    consequence,
                    alternative,
                } => {
                    let condition = self.eval_expression(condition, env)?;
                    if condition.is_truthy() {
                        self.eval_block(consequence, env)
                    } else if let Some(alternative) = alternative {
                        self.eval_block(alternative, env)
                    } else {
                        Ok(Value::Null)
                    }
                }
                ExprKind::Function(func) => Ok(Value::Function(Rc::new(FunctionValue {
                    parameters: Rc::clone(&func.parameters),
                    body: Rc::clone(&func.body),
                    env: env.clone(),
                }))),
                ExprKind::Call {
                    function,
                    arguments,
                } => self.eval_call(function, arguments, expr.span, env),
                ExprKind::For {
                    initial,
                    condition,
                    increment,
                    body,
                } => self.eval_for(initial, condition, increment, body, env),
                ExprKind::Assign { target, value } => self.eval_assign(target, value, env),
            }
        })
    }

    /// `initial` runs once in `env`, so a `let` there stays bound after the
    /// loop. The result is the last body value, or `null` if the body never
    /// ran.
    fn eval_for(
        &mut self,
        initial: &Stmt,
        condition: &Expr,
        increment: &Expr,
        body: &BlockStatement,
        env: &Environment,
    ) -> EvalResult {
        self.eval_statement(initial, env)?;
        let mut result = Value::Null;
        loop {
            if !self.eval_expression(condition, env)?.is_truthy() {
                return Ok(result);
            }
            result = self.eval_block(body, env)?;
            self.eval_expression(increment, env)?;
        }
    }

    /// The target must already be bound; the right-hand side only runs if
    /// it is.
    fn eval_assign(&mut self, target: &Identifier, value: &Expr, env: &Environment) -> EvalResult {
        if env.get(&target.name).is_none() {
            return Err(identifier_not_found(&target.name).into());
        }
        let value = self.eval_expression(value, env)?;
        env.assign(&target.name, value.clone())
            .map_err(|_| identifier_not_found(&target.name))?;
        Ok(value)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}
