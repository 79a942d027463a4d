//! Dyadic operator implementations.

use crate::syntax::BinaryOp;
use crate::values::Value;

/// Apply a dyadic operator to two evaluated operands.
///
/// `+` concatenates when either side is text. Every other combination is
/// numeric and follows IEEE 754 (division by zero is infinite, bad
/// coercions are `NaN`).
pub(super) fn eval_dyadic(op: BinaryOp, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOp::Add if is_text(left) || is_text(right) => {
            let mut text = left.to_text();
            text.push_str(&right.to_text());
            Value::Str(text)
        }
        _ => Value::Number(eval_numeric(op, left.to_number(), right.to_number())),
    }
}

fn is_text(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

fn eval_numeric(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
    }
}
