use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{Arity, real_arg},
        },
        value::core::Value,
    },
};

/// Computes the base-10 logarithm, or the logarithm to an explicit base.
///
/// `log(x)` is `log10(x)`; `log(x, base)` is `ln(x) / ln(base)`.
///
/// # Errors
/// - `MathDomain` if `x` or `base` is not strictly positive.
/// - `DivisionByZero` if `base` is `1`.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// assert_eq!(log(&[Value::Integer(1000)]).unwrap(), Value::Real(3.0));
/// assert_eq!(log(&[Value::Integer(8), Value::Integer(2)]).unwrap(), Value::Real(3.0));
/// assert!(log(&[Value::Integer(0)]).is_err());
/// ```
pub fn log(args: &[Value]) -> EvalResult<Value> {
    match args {
        [value] => Ok(Value::Real(positive("log", value)?.log10())),
        [value, base] => log_base("log", value, base),
        _ => Err(Arity::Range(1, 2).mismatch("log", args.len())),
    }
}

/// Computes the natural logarithm.
///
/// Like [`log`], a second argument selects another base.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::log::ln, value::core::Value};
///
/// assert_eq!(ln(&[Value::Integer(1)]).unwrap(), Value::Real(0.0));
/// assert_eq!(ln(&[Value::Integer(100), Value::Integer(10)]).unwrap(), Value::Real(2.0));
/// ```
pub fn ln(args: &[Value]) -> EvalResult<Value> {
    match args {
        [value] => Ok(Value::Real(positive("ln", value)?.ln())),
        [value, base] => log_base("ln", value, base),
        _ => Err(Arity::Range(1, 2).mismatch("ln", args.len())),
    }
}

fn log_base(name: &str, value: &Value, base: &Value) -> EvalResult<Value> {
    let value = positive(name, value)?;
    let base = positive(name, base)?;

    let ln_base = base.ln();
    if ln_base == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    // Exact powers of ten come out exact through log10.
    if base == 10.0 {
        return Ok(Value::Real(value.log10()));
    }
    if base == 2.0 {
        return Ok(Value::Real(value.log2()));
    }
    Ok(Value::Real(value.ln() / ln_base))
}

fn positive(name: &str, value: &Value) -> EvalResult<f64> {
    let x = real_arg(name, value)?;
    if x <= 0.0 || x.is_nan() {
        return Err(RuntimeError::domain(format!("{name}() of a non-positive number")));
    }
    Ok(x)
}
