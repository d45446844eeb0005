use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to two evaluated operands.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`, `right`: The operand values, already evaluated left to right.
/// - `line`: Source line used for error reporting.
///
/// # Returns
/// - `+` concatenates the printed forms when either side is a string, and
///   adds numbers otherwise.
/// - `-`, `*` and `/` are numeric. Division by zero yields `0`.
/// - `==` and `!=` compare by value; values of different kinds are unequal.
/// - Ordering operators compare two numbers, two strings or two booleans.
///
/// # Errors
/// Returns [`RuntimeError::TypeMismatch`] for any other combination.
///
/// # Example
/// ```
/// use novolang::{
///     ast::BinaryOperator,
///     interpreter::value::{core::Value, ops::apply_binary},
/// };
///
/// let v = apply_binary(BinaryOperator::Add, &Value::from("n="), &Value::from(3.0), 1).unwrap();
/// assert_eq!(v, Value::from("n=3"));
///
/// let v = apply_binary(BinaryOperator::Div, &Value::from(1.0), &Value::from(0.0), 1).unwrap();
/// assert_eq!(v, Value::from(0.0));
/// ```
pub fn apply_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add if left.is_str() || right.is_str() => Ok(Value::from(format!("{left}{right}"))),
        Add | Sub | Mul | Div => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(mismatch(op, left, right, line));
            };
            Ok(Value::Number(arithmetic(op, *a, *b)))
        },
        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),
        Less | Greater | LessEqual | GreaterEqual => {
            let ordering = compare(left, right).ok_or_else(|| mismatch(op, left, right, line))?;
            let holds = match op {
                Less => ordering == Ordering::Less,
                Greater => ordering == Ordering::Greater,
                LessEqual => ordering != Ordering::Greater,
                _ => ordering != Ordering::Less,
            };
            Ok(Value::Bool(holds))
        },
    }
}

fn arithmetic(op: BinaryOperator, a: f64, b: f64) -> f64 {
    match op {
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div if b == 0.0 => 0.0,
        BinaryOperator::Div => a / b,
        _ => a + b,
    }
}

/// Orders two values of the same kind.
///
/// Returns `None` when the kinds differ, for null operands, and when a NaN
/// is involved.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

const fn mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { op,
                                 left: left.type_name(),
                                 right: right.type_name(),
                                 line }
}
