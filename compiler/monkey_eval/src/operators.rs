//! Infix operator semantics.
//!
//! Integer pairs get arithmetic and comparison. Any other pair supports
//! only `==` and `!=`. Past that, differing types are a type mismatch and
//! matching types an unknown operator.

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator};
use crate::{EvalError, Value};
use monkey_ir::InfixOp;

/// Apply an infix operator to two evaluated operands.
pub fn evaluate_infix(op: InfixOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        return evaluate_int_infix(op, *a, *b);
    }

    match op {
        InfixOp::Eq => Ok(Value::Boolean(left == right)),
        InfixOp::NotEq => Ok(Value::Boolean(left != right)),
        _ if left.type_name() != right.type_name() => Err(type_mismatch(op, left, right)),
        _ => Err(unknown_infix_operator(op, left, right)),
    }
}

fn evaluate_int_infix(op: InfixOp, a: i64, b: i64) -> Result<Value, EvalError> {
    let overflow = || integer_overflow(op.operation_name());
    match op {
        InfixOp::Add => a.checked_add(b).map(Value::Integer).ok_or_else(overflow),
        InfixOp::Sub => a.checked_sub(b).map(Value::Integer).ok_or_else(overflow),
        InfixOp::Mul => a.checked_mul(b).map(Value::Integer).ok_or_else(overflow),
        InfixOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            a.checked_div(b).map(Value::Integer).ok_or_else(overflow)
        }
        InfixOp::Lt => Ok(Value::Boolean(a < b)),
        InfixOp::Gt => Ok(Value::Boolean(a > b)),
        InfixOp::Eq => Ok(Value::Boolean(a == b)),
        InfixOp::NotEq => Ok(Value::Boolean(a != b)),
    }
}
