//! Function calls.

use super::Evaluator;
use crate::diagnostics::CallFrame;
use crate::errors::{not_a_function, wrong_arg_count};
use crate::{Environment, EvalResult, FunctionValue, Unwind, Value};
use monkey_ir::{Expr, ExprKind, Span};

impl Evaluator {
    /// Evaluate the callee, then the arguments left to right, then apply.
    pub(super) fn eval_call(
        &mut self,
        callee: &Expr,
        arguments: &[Expr],
        span: Span,
        env: &Environment,
    ) -> EvalResult {
        let func = match self.eval_expression(callee, env)? {
            Value::Function(func) => func,
            other => return Err(not_a_function(&other).into()),
        };

        let mut args = Vec::with_capacity(arguments.len());
        for arg in arguments {
            args.push(self.eval_expression(arg, env)?);
        }

        let name = match &callee.kind {
            ExprKind::Ident(name) => Some(name.clone()),
            _ => None,
        };
        self.apply_function(&func, args, CallFrame { name, call_span: span })
    }

    /// Run `func`'s body in a fresh child of its captured environment and
    /// unwrap a `return`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = ?frame.name, depth = self.call_stack.depth())
    )]
    pub fn apply_function(
        &mut self,
        func: &FunctionValue,
        args: Vec<Value>,
        frame: CallFrame,
    ) -> EvalResult {
        if self.config.strict_arity && func.parameters.len() != args.len() {
            return Err(wrong_arg_count(func.parameters.len(), args.len()).into());
        }

        self.call_stack.push(frame)?;
        let call_env = Environment::enclosed(&func.env);
        // Missing arguments leave their parameters unbound; extras are dropped.
        for (param, arg) in func.parameters.iter().zip(args) {
            call_env.set(param.name.clone(), arg);
        }
        let result = self.eval_block(&func.body, &call_env);
        self.call_stack.pop();

        match result {
            Err(Unwind::Return(value)) => Ok(value),
            other => other,
        }
    }
}
