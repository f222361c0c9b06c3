use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and continues in floating point when the result
    /// does not fit. Negative exponents and float operands are computed with
    /// `powf`.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power.
    /// - `MathDomain` for a negative base with a fractional exponent.
    /// - `Overflow` when finite operands produce an infinite result.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(10)).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(-1)).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    ///
    /// assert!(Context::eval_pow(&Value::Integer(-8), &Value::Real(0.5)).is_err());
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
        if let (Value::Integer(b), Value::Integer(e)) = (base, exponent)
           && let Ok(e) = u32::try_from(*e)
           && let Some(n) = b.checked_pow(e)
        {
            return Ok(Value::Integer(n));
        }

        let b = base.as_real()?;
        let e = exponent.as_real()?;

        if b == 0.0 && e < 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }
        if b < 0.0 && e.is_finite() && e.fract() != 0.0 {
            return Err(RuntimeError::domain(format!("negative number {base} cannot be raised to the fractional power {exponent}")));
        }

        let result = b.powf(e);
        if result.is_infinite() && b.is_finite() && e.is_finite() {
            return Err(RuntimeError::Overflow { details: format!("{base} ** {exponent}") });
        }
        Ok(Value::Real(result))
    }
}
