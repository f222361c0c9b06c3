use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::{
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{Arity, number_arg},
        },
        value::core::{NO_UNIQUE_MODE, Value},
    },
    util::num::usize_to_f64,
};

/// Arithmetic mean of the arguments.
///
/// The mean of integers is an integer when the division is exact.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::stats::mean, value::core::Value};
///
/// let args = [Value::Integer(1), Value::Integer(2), Value::Integer(3)];
/// assert_eq!(mean(&args).unwrap(), Value::Integer(2));
///
/// let args = [Value::Integer(1), Value::Integer(2)];
/// assert_eq!(mean(&args).unwrap(), Value::Real(1.5));
/// ```
pub fn mean(args: &[Value]) -> EvalResult<Value> {
    let values = numbers("mean", args, 1)?;

    if let Some(ints) = integers(&values) {
        let n = i128::try_from(ints.len()).unwrap_or(i128::MAX);
        let sum: i128 = ints.iter().map(|&v| i128::from(v)).sum();
        if sum % n == 0
           && let Ok(exact) = i64::try_from(sum / n)
        {
            return Ok(Value::Integer(exact));
        }
    }

    let reals = reals(&values)?;
    Ok(Value::Real(reals.iter().sum::<f64>() / usize_to_f64(reals.len())))
}

/// Median of the arguments.
///
/// For an odd count the middle value is returned as is; for an even count
/// the mean of the two middle values is returned as a float.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::stats::median, value::core::Value};
///
/// let args = [Value::Integer(3), Value::Integer(1), Value::Integer(2)];
/// assert_eq!(median(&args).unwrap(), Value::Integer(2));
///
/// let args = [Value::Integer(4), Value::Integer(1), Value::Integer(2), Value::Integer(3)];
/// assert_eq!(median(&args).unwrap(), Value::Real(2.5));
/// ```
pub fn median(args: &[Value]) -> EvalResult<Value> {
    let mut keyed = numbers("median", args, 1)?.into_iter()
                                             .map(|v| Ok((v.as_real()?, v)))
                                             .collect::<EvalResult<Vec<(f64, Value)>>>()?;
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let upper = keyed.split_off(keyed.len() / 2);
    match (keyed.last(), upper.first()) {
        (Some(&(low, _)), Some(&(high, _))) if upper.len() == keyed.len() => {
            Ok(Value::Real(f64::midpoint(low, high)))
        },
        (_, Some((_, middle))) => Ok(middle.clone()),
        (_, None) => Err(Arity::AtLeast(1).mismatch("median", 0)),
    }
}

/// The single most common argument.
///
/// Numbers are counted by numeric value, so `1`, `1.0` and `True` are the
/// same entry; the first occurrence is returned. When several values share
/// the highest count, or there are no arguments, the result is the text
/// sentinel [`NO_UNIQUE_MODE`] rather than an error.
///
/// # Example
/// ```
/// use scical::interpreter::{
///     evaluator::function::stats::mode,
///     value::core::{NO_UNIQUE_MODE, Value},
/// };
///
/// let args = [Value::Integer(1), Value::Integer(2), Value::Integer(2)];
/// assert_eq!(mode(&args).unwrap(), Value::Integer(2));
///
/// let args = [Value::Integer(1), Value::Integer(1), Value::Integer(2), Value::Integer(2)];
/// assert_eq!(mode(&args).unwrap(), Value::Text(NO_UNIQUE_MODE.to_string()));
/// ```
pub fn mode(args: &[Value]) -> EvalResult<Value> {
    let mut counts: HashMap<OrderedFloat<f64>, (usize, usize)> = HashMap::new();
    for (index, value) in args.iter().enumerate() {
        let key = OrderedFloat(number_arg("mode", value)?.as_real()?);
        counts.entry(key).or_insert((0, index)).0 += 1;
    }

    let Some(highest) = counts.values().map(|&(count, _)| count).max() else {
        return Ok(no_unique_mode());
    };
    let mut leaders = counts.values().filter(|&&(count, _)| count == highest);
    match (leaders.next(), leaders.next()) {
        (Some(&(_, first)), None) => Ok(args[first].clone()),
        _ => Ok(no_unique_mode()),
    }
}

/// Sample variance of the arguments.
///
/// The variance of integers is an integer when the division is exact.
///
/// # Example
/// ```
/// use scical::interpreter::{evaluator::function::stats::variance, value::core::Value};
///
/// let args = [Value::Integer(1), Value::Integer(2), Value::Integer(3), Value::Integer(4)];
/// assert_eq!(variance(&args).unwrap(), Value::Real(5.0 / 3.0));
///
/// let args = [Value::Integer(1), Value::Integer(3), Value::Integer(5)];
/// assert_eq!(variance(&args).unwrap(), Value::Integer(4));
/// ```
pub fn variance(args: &[Value]) -> EvalResult<Value> {
    let values = numbers("variance", args, 2)?;

    if let Some(ints) = integers(&values)
       && let Some(exact) = exact_variance(&ints)
    {
        return Ok(exact);
    }

    Ok(Value::Real(real_variance(&reals(&values)?)))
}

/// Sample standard deviation of the arguments, registered as `name`.
///
/// The result is always a float.
pub fn stdev(name: &str, args: &[Value]) -> EvalResult<Value> {
    let reals = reals(&numbers(name, args, 2)?)?;
    Ok(Value::Real(real_variance(&reals).sqrt()))
}

fn no_unique_mode() -> Value {
    Value::Text(NO_UNIQUE_MODE.to_string())
}

/// Reads at least `least` numeric arguments of `name`.
fn numbers(name: &str, args: &[Value], least: usize) -> EvalResult<Vec<Value>> {
    Arity::AtLeast(least).check(name, args.len())?;
    args.iter().map(|v| number_arg(name, v)).collect()
}

fn integers(values: &[Value]) -> Option<Vec<i64>> {
    values.iter()
          .map(|v| match v {
              Value::Integer(n) => Some(*n),
              _ => None,
          })
          .collect()
}

fn reals(values: &[Value]) -> EvalResult<Vec<f64>> {
    values.iter().map(Value::as_real).collect()
}

/// `(n * sum(x^2) - sum(x)^2) / (n * (n - 1))`, when it is an exact integer.
fn exact_variance(ints: &[i64]) -> Option<Value> {
    let n = i128::try_from(ints.len()).ok()?;
    let mut sum: i128 = 0;
    let mut sum_sq: i128 = 0;
    for &v in ints {
        let v = i128::from(v);
        sum = sum.checked_add(v)?;
        sum_sq = sum_sq.checked_add(v.checked_mul(v)?)?;
    }

    let numerator = n.checked_mul(sum_sq)?.checked_sub(sum.checked_mul(sum)?)?;
    let denominator = n.checked_mul(n - 1)?;
    if denominator == 0 || numerator % denominator != 0 {
        return None;
    }
    i64::try_from(numerator / denominator).ok().map(Value::Integer)
}

fn real_variance(reals: &[f64]) -> f64 {
    let n = usize_to_f64(reals.len());
    let mean = reals.iter().sum::<f64>() / n;
    let squares: f64 = reals.iter().map(|x| (x - mean) * (x - mean)).sum();
    squares / (n - 1.0)
}
