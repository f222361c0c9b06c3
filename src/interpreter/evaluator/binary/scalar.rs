use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

impl Context<'_> {
    /// Evaluates `+`, `-`, `*`, `/`, `//` or `%` on two numbers.
    ///
    /// Two integers stay integral, except for `/`, which always produces a
    /// float. An integer result that does not fit into 64 bits continues as
    /// a float. `//` rounds toward negative infinity and `%` takes the sign
    /// of the divisor, so `a == (a // b) * b + a % b` holds.
    ///
    /// # Errors
    /// `DivisionByZero` when the divisor of `/`, `//` or `%` is zero.
    pub(in crate::interpreter::evaluator) fn eval_scalar_op(op: BinaryOperator,
                                                             left: &Value,
                                                             right: &Value)
                                                             -> EvalResult<Value> {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            return Self::eval_integer_op(op, *a, *b);
        }
        Self::eval_real_op(op, left.as_real()?, right.as_real()?)
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
        let exact = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div | BinaryOperator::FloorDiv | BinaryOperator::Mod if b == 0 => {
                return Err(RuntimeError::DivisionByZero);
            },
            BinaryOperator::Div => None,
            BinaryOperator::FloorDiv => floor_div(a, b),
            BinaryOperator::Mod => Some(floor_mod(a, b)),
            BinaryOperator::Pow => return Self::eval_pow(&Value::Integer(a), &Value::Integer(b)),
        };

        match exact {
            Some(n) => Ok(Value::Integer(n)),
            None => Self::eval_real_op(op, i64_to_f64(a), i64_to_f64(b)),
        }
    }

    fn eval_real_op(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div | BinaryOperator::FloorDiv | BinaryOperator::Mod if b == 0.0 => {
                return Err(RuntimeError::DivisionByZero);
            },
            BinaryOperator::Div => a / b,
            BinaryOperator::FloorDiv => real_div_mod(a, b).0,
            BinaryOperator::Mod => real_div_mod(a, b).1,
            BinaryOperator::Pow => return Self::eval_pow(&Value::Real(a), &Value::Real(b)),
        };
        Ok(Value::Real(result))
    }
}

/// Integer division rounding toward negative infinity. `None` on overflow.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Integer remainder with the sign of the divisor. `b` must be non-zero.
fn floor_mod(a: i64, b: i64) -> i64 {
    // i64::MIN % -1 is mathematically 0
    let rem = a.checked_rem(b).unwrap_or(0);
    if rem != 0 && (rem < 0) != (b < 0) {
        rem + b
    } else {
        rem
    }
}

/// Floored quotient and remainder of two floats. `b` must be non-zero.
///
/// The quotient is corrected so that it is the integer nearest to
/// `(a - rem) / b`, which `fmod` rounding can otherwise leave just off an
/// integer.
fn real_div_mod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;

    if rem == 0.0 {
        rem = 0.0_f64.copysign(b);
    } else if (b < 0.0) != (rem < 0.0) {
        rem += b;
        div -= 1.0;
    }

    let quotient = if div == 0.0 {
        0.0_f64.copysign(a / b)
    } else {
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    };
    (quotient, rem)
}
