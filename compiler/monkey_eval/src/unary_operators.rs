//! Prefix operator semantics.

use crate::errors::{integer_overflow, unknown_prefix_operator};
use crate::{EvalError, Value};
use monkey_ir::PrefixOp;

/// Apply a prefix operator to an evaluated operand.
///
/// `!` works on any value through truthiness; `-` needs an integer.
pub fn evaluate_prefix(op: PrefixOp, operand: &Value) -> Result<Value, EvalError> {
    match (op, operand) {
        (PrefixOp::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
        (PrefixOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        (PrefixOp::Neg, value) => Err(unknown_prefix_operator(op, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bang() {
        let cases = [
            (Value::Boolean(true), false),
            (Value::Boolean(false), true),
            (Value::Null, true),
            (Value::Integer(5), false),
            (Value::Integer(0), false),
        ];
        for (operand, expected) in cases {
            assert_eq!(
                evaluate_prefix(PrefixOp::Not, &operand),
                Ok(Value::Boolean(expected)),
                "!{operand}"
            );
        }
    }

    #[test]
    fn test_negation() {
        assert_eq!(
            evaluate_prefix(PrefixOp::Neg, &Value::Integer(5)),
            Ok(Value::Integer(-5))
        );
        assert_eq!(
            evaluate_prefix(PrefixOp::Neg, &Value::Integer(i64::MIN)).map_err(|e| e.message),
            Err("integer overflow in negation".to_string())
        );
    }

    #[test]
    fn test_negating_non_integer() {
        assert_eq!(
            evaluate_prefix(PrefixOp::Neg, &Value::Boolean(true)).map_err(|e| e.message),
            Err("unknown operator: -BOOLEAN".to_string())
        );
        assert_eq!(
            evaluate_prefix(PrefixOp::Neg, &Value::Null).map_err(|e| e.message),
            Err("unknown operator: -NULL".to_string())
        );
    }
}
