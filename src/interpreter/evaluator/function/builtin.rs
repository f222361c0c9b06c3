use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::{Arity, number_arg, real_arg, single_arg},
        },
        value::core::Value,
    },
    util::num::{f64_to_i64_exact, i64_to_f64},
};

/// Computes the square root of a non-negative number.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Integer(9)]).unwrap(), Value::Real(3.0));
/// assert!(sqrt(&[Value::Integer(-1)]).is_err());
/// ```
pub fn sqrt(args: &[Value]) -> EvalResult<Value> {
    let x = real_arg("sqrt", single_arg("sqrt", args)?)?;
    if x < 0.0 {
        return Err(RuntimeError::domain("sqrt() of a negative number"));
    }
    Ok(Value::Real(x.sqrt()))
}

/// Returns the absolute value, keeping integers integral.
pub fn abs(args: &[Value]) -> EvalResult<Value> {
    match number_arg("abs", single_arg("abs", args)?)? {
        Value::Integer(n) => Ok(n.checked_abs()
                                 .map_or_else(|| Value::Real(i64_to_f64(n).abs()), Value::Integer)),
        other => Ok(Value::Real(other.as_real()?.abs())),
    }
}

/// Rounds a number, half to even.
///
/// With one argument the result is an integer. With a second argument
/// `ndigits` the number is rounded to that many decimal places (negative
/// values round to tens, hundreds, ...) and keeps its numeric kind. Decimal
/// places are rounded from the exact binary value, so `round(2.675, 2)` is
/// `2.67`.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::builtin::round, value::core::Value};
///
/// assert_eq!(round(&[Value::Real(2.5)]).unwrap(), Value::Integer(2));
/// assert_eq!(round(&[Value::Real(3.5)]).unwrap(), Value::Integer(4));
/// assert_eq!(round(&[Value::Real(3.14159), Value::Integer(2)]).unwrap(),
///            Value::Real(3.14));
/// assert_eq!(round(&[Value::Integer(1250), Value::Integer(-2)]).unwrap(),
///            Value::Integer(1200));
/// ```
pub fn round(args: &[Value]) -> EvalResult<Value> {
    let (value, ndigits) = match args {
        [value] => (number_arg("round", value)?, None),
        [value, ndigits] => (number_arg("round", value)?, Some(ndigits)),
        _ => return Err(Arity::Range(1, 2).mismatch("round", args.len())),
    };

    let Some(ndigits) = ndigits else {
        return match value {
            Value::Integer(n) => Ok(Value::Integer(n)),
            other => real_to_integer(other.as_real()?.round_ties_even(), "round"),
        };
    };

    let ndigits = match number_arg("round", ndigits)? {
        Value::Integer(n) => n,
        other => {
            return Err(RuntimeError::call(format!("round() ndigits must be an integer, got '{}'",
                                                  other.type_name())));
        },
    };
    let ndigits = i32::try_from(ndigits.clamp(-400, 400)).unwrap_or_default();

    match value {
        Value::Integer(n) if ndigits >= 0 => Ok(Value::Integer(n)),
        Value::Integer(n) => {
            let scale = 10f64.powi(-ndigits);
            let rounded = (i64_to_f64(n) / scale).round_ties_even() * scale;
            Ok(f64_to_i64_exact(rounded).map_or(Value::Real(rounded), Value::Integer))
        },
        other => {
            let x = other.as_real()?;
            let scale = 10f64.powi(ndigits);
            if !x.is_finite() || !scale.is_finite() {
                return Ok(Value::Real(x));
            }
            if scale == 0.0 {
                return Ok(Value::Real(0.0_f64.copysign(x)));
            }
            if let Ok(places) = usize::try_from(ndigits) {
                // Formatting rounds the exact binary value, so 2.675 (really
                // 2.67499...) goes down.
                return format!("{x:.places$}")
                    .parse::<f64>()
                    .map(Value::Real)
                    .map_err(|_| RuntimeError::call("round() produced an unreadable number"));
            }
            Ok(Value::Real((x * scale).round_ties_even() / scale))
        },
    }
}

/// Computes `n!` for the integer part of `n`.
///
/// The result stays an integer while it fits into 64 bits and continues as a
/// float beyond that.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::builtin::factorial, value::core::Value};
///
/// assert_eq!(factorial(&[Value::Integer(5)]).unwrap(), Value::Integer(120));
/// assert_eq!(factorial(&[Value::Real(5.9)]).unwrap(), Value::Integer(120));
/// assert!(factorial(&[Value::Integer(-1)]).is_err());
/// ```
pub fn factorial(args: &[Value]) -> EvalResult<Value> {
    let n = match number_arg("factorial", single_arg("factorial", args)?)? {
        Value::Integer(n) => n,
        other => {
            let x = other.as_real()?;
            if x.is_nan() {
                return Err(RuntimeError::domain("cannot convert float nan to integer"));
            }
            f64_to_i64_exact(x.trunc()).ok_or_else(|| RuntimeError::Overflow {
                                           details: "factorial() argument is too large".to_string(),
                                       })?
        },
    };

    if n < 0 {
        return Err(RuntimeError::domain("factorial() not defined for negative values"));
    }

    let mut exact: i64 = 1;
    let mut k = 2;
    while k <= n {
        match exact.checked_mul(k) {
            Some(product) => exact = product,
            None => break,
        }
        k += 1;
    }
    if k > n {
        return Ok(Value::Integer(exact));
    }

    let mut approx = i64_to_f64(exact);
    while k <= n {
        approx *= i64_to_f64(k);
        if approx.is_infinite() {
            return Err(RuntimeError::Overflow { details: format!("factorial({n}) is too large") });
        }
        k += 1;
    }
    Ok(Value::Real(approx))
}

/// Function form of the `%` operator.
pub fn modulo(args: &[Value]) -> EvalResult<Value> {
    let [dividend, divisor] = args else {
        return Err(Arity::Exact(2).mismatch("mod", args.len()));
    };
    Context::eval_binary(BinaryOperator::Mod, dividend, divisor)
}

fn real_to_integer(x: f64, name: &str) -> EvalResult<Value> {
    if x.is_nan() {
        return Err(RuntimeError::domain(format!("{name}() cannot convert float nan to integer")));
    }
    if x.is_infinite() {
        return Err(RuntimeError::Overflow { details: format!("{name}() cannot convert float infinity to integer") });
    }
    Ok(f64_to_i64_exact(x).map_or(Value::Real(x), Value::Integer))
}
