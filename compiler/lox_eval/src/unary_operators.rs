//! Unary operator implementations for the evaluator.

use lox_ir::{UnaryOp, Value};

use crate::errors::operand_must_be_number;
use crate::RuntimeErrorKind;

/// Apply a prefix operator to an evaluated operand.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Result<Value, RuntimeErrorKind> {
    match (op, value) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Neg, _) => Err(operand_must_be_number()),
        // Any value has a truthiness.
        (UnaryOp::Not, _) => Ok(Value::Boolean(!value.is_truthy())),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negation_of_number() {
        assert_eq!(
            evaluate_unary(&Value::Number(2.5), UnaryOp::Neg).unwrap(),
            Value::Number(-2.5)
        );
    }

    #[test]
    fn negation_of_non_number_fails() {
        for value in [Value::Nil, Value::Boolean(true), Value::string("1")] {
            assert_eq!(
                evaluate_unary(&value, UnaryOp::Neg),
                Err(RuntimeErrorKind::OperandMustBeNumber)
            );
        }
    }

    #[test]
    fn not_uses_truthiness() {
        let not = |v: Value| evaluate_unary(&v, UnaryOp::Not).unwrap();
        assert_eq!(not(Value::Nil), Value::Boolean(true));
        assert_eq!(not(Value::Boolean(false)), Value::Boolean(true));
        assert_eq!(not(Value::Number(0.0)), Value::Boolean(false));
        assert_eq!(not(Value::string("")), Value::Boolean(false));
    }
}
