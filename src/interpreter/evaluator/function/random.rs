use rand::{Rng, seq::SliceRandom, thread_rng};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg},
        value::core::Value,
    },
};

/// Returns a uniformly distributed float in `[0, 1)`.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::random::rand, value::core::Value};
///
/// let Value::Real(r) = rand(&[]).unwrap() else { panic!("rand() returned a non-float") };
/// assert!((0.0..1.0).contains(&r));
/// ```
pub fn rand(_args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(thread_rng().r#gen::<f64>()))
}

/// Picks one element of a list or tuple uniformly at random.
///
/// # Errors
/// `FunctionCall` if the argument is not a list or tuple, or is empty.
pub fn choice(args: &[Value]) -> EvalResult<Value> {
    let items = match single_arg("choice", args)? {
        Value::List(items) | Value::Tuple(items) => items,
        other => {
            return Err(RuntimeError::call(format!("choice() requires a single sequence argument, got '{}'",
                                                  other.type_name())));
        },
    };

    items.choose(&mut thread_rng())
         .cloned()
         .ok_or_else(|| RuntimeError::call("choice() cannot choose from an empty sequence"))
}
