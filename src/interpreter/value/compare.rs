use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Compares two values for equality.
///
/// Numbers (including booleans) compare by numeric value, so `1 == 1.0` and
/// `True == 1`. Text compares by content, lists and tuples element-wise.
/// Values of different kinds are never equal; this never fails.
///
/// # Example
/// ```
/// use scical::interpreter::value::{compare::values_equal, core::Value};
///
/// assert!(values_equal(&Value::Integer(1), &Value::Real(1.0)));
/// assert!(!values_equal(&Value::List(vec![1.into()]),
///                       &Value::Tuple(vec![1.into()])));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        },
        (l, r) if l.is_numeric() && r.is_numeric() => match (l.as_real(), r.as_real()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        },
        _ => false,
    }
}

/// Orders two values.
///
/// Numbers order numerically, text lexicographically, and lists or tuples
/// lexicographically by element. `Ok(None)` is returned for unordered floats
/// (`nan`), which makes every ordering comparison false.
///
/// # Errors
/// Returns `TypeMismatch` when the kinds cannot be ordered against each
/// other, e.g. a list and a number.
pub fn compare_values(left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
        (l, r) if l.is_numeric() && r.is_numeric() => Ok(l.as_real()?.partial_cmp(&r.as_real()?)),
        (Value::Text(a), Value::Text(b)) => Ok(Some(a.cmp(b))),
        (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
            for (x, y) in a.iter().zip(b) {
                if values_equal(x, y) {
                    continue;
                }
                return compare_values(x, y);
            }
            Ok(Some(a.len().cmp(&b.len())))
        },
        _ => Err(RuntimeError::mismatch(format!("ordering is not supported between '{}' and '{}'",
                                                left.type_name(),
                                                right.type_name()))),
    }
}
