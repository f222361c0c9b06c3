use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns a number unchanged (booleans become `0`/`1`).
    /// - `Negate`: numeric negation; `-i64::MIN` continues as a float.
    /// - `Not`: logical negation of the operand's truthiness, for any value.
    ///
    /// # Errors
    /// `TypeMismatch` when `+` or `-` is applied to a non-number.
    ///
    /// # Example
    /// ```
    /// use scical::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::List(vec![])).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => value.to_number("unary +"),
            UnaryOperator::Negate => match value.to_number("unary -")? {
                Value::Integer(n) => Ok(n.checked_neg()
                                         .map_or_else(|| Value::Real(-i64_to_f64(n)), Value::Integer)),
                other => Ok(Value::Real(-other.as_real()?)),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
