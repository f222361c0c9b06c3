use crate::{
    ast::BoolOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Reduces already evaluated operands of an `and`/`or` chain.
    ///
    /// The operands are combined by their truthiness and the result is
    /// always a boolean. Nothing is skipped: the caller evaluates every
    /// operand before the reduction.
    ///
    /// # Example
    /// ```
    /// use scical::{
    ///     ast::BoolOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let operands = [Value::Integer(1), Value::Real(0.0)];
    /// assert_eq!(Context::eval_bool_op(BoolOperator::And, &operands), Value::Bool(false));
    /// assert_eq!(Context::eval_bool_op(BoolOperator::Or, &operands), Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_bool_op(op: BoolOperator, operands: &[Value]) -> Value {
        let result = match op {
            BoolOperator::And => operands.iter().all(Value::is_truthy),
            BoolOperator::Or => operands.iter().any(Value::is_truthy),
        };
        Value::Bool(result)
    }
}
