//! Binary operator implementations for the evaluator.
//!
//! Direct enum dispatch over the closed operator set. Operands are already
//! evaluated; short-circuiting `and`/`or` never reach this module.

use lox_ir::{BinaryOp, Value};

use crate::errors::{operands_must_be_numbers, operands_must_be_numbers_or_strings};
use crate::RuntimeErrorKind;

/// Apply `op` to two evaluated operands.
///
/// Division by zero follows IEEE 754 and yields an infinity or NaN.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, RuntimeErrorKind> {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => arithmetic(left, right, |a, b| a - b),
        BinaryOp::Mul => arithmetic(left, right, |a, b| a * b),
        BinaryOp::Div => arithmetic(left, right, |a, b| a / b),
        BinaryOp::Greater => comparison(left, right, |a, b| a > b),
        BinaryOp::GreaterEqual => comparison(left, right, |a, b| a >= b),
        BinaryOp::Less => comparison(left, right, |a, b| a < b),
        BinaryOp::LessEqual => comparison(left, right, |a, b| a <= b),
        BinaryOp::Equal => Ok(Value::Boolean(left.is_equal(right))),
        BinaryOp::NotEqual => Ok(Value::Boolean(!left.is_equal(right))),
    }
}

/// `+` adds numbers or concatenates strings. Mixed operands are an error.
fn add(left: &Value, right: &Value) -> Result<Value, RuntimeErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => Err(operands_must_be_numbers_or_strings()),
    }
}

#[inline]
fn number_operands(left: &Value, right: &Value) -> Result<(f64, f64), RuntimeErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_must_be_numbers()),
    }
}

#[inline]
fn arithmetic(
    left: &Value,
    right: &Value,
    apply: fn(f64, f64) -> f64,
) -> Result<Value, RuntimeErrorKind> {
    let (a, b) = number_operands(left, right)?;
    Ok(Value::Number(apply(a, b)))
}

#[inline]
fn comparison(
    left: &Value,
    right: &Value,
    apply: fn(f64, f64) -> bool,
) -> Result<Value, RuntimeErrorKind> {
    let (a, b) = number_operands(left, right)?;
    Ok(Value::Boolean(apply(a, b)))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
