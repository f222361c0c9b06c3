use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{compare::compare_values, core::Value},
    },
};

/// Computes the minimum or maximum of the arguments.
///
/// A single list or tuple argument is expanded into its elements. The chosen
/// element is returned unchanged, so `min(1, 2.5)` is the integer `1`. On
/// ties the first candidate wins.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`.
///
/// # Errors
/// - `FunctionCall` for an empty sequence or a single non-sequence argument.
/// - `TypeMismatch` if two candidates cannot be ordered.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Integer(3), Value::Real(7.5)]).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let list = Value::List(vec![Value::Integer(4), Value::Integer(9), Value::Integer(2)]);
/// assert_eq!(min_max("max", &[list]).unwrap(), Value::Integer(9));
/// ```
pub fn min_max(name: &str, args: &[Value]) -> EvalResult<Value> {
    let candidates = match args {
        [Value::List(items) | Value::Tuple(items)] => items.as_slice(),
        [other] => {
            return Err(RuntimeError::call(format!("{name}() needs a sequence or at least two arguments, got a single '{}'",
                                                  other.type_name())));
        },
        _ => args,
    };

    let Some((first, rest)) = candidates.split_first() else {
        return Err(RuntimeError::call(format!("{name}() arg is an empty sequence")));
    };

    let wanted = if name == "min" {
        Ordering::Less
    } else {
        Ordering::Greater
    };

    let mut best = first;
    for candidate in rest {
        if compare_values(candidate, best)? == Some(wanted) {
            best = candidate;
        }
    }
    Ok(best.clone())
}
