use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Both operands must be numbers; booleans take part as `0` and `1`.
    /// Power is routed to [`Context::eval_pow`], every other operator to the
    /// scalar arithmetic, which keeps integer operands integral where the
    /// operation allows it.
    ///
    /// # Errors
    /// - `TypeMismatch` for non-numeric operands.
    /// - `DivisionByZero` for `/`, `//` or `%` by zero.
    /// - The failures of [`Context::eval_pow`].
    ///
    /// # Example
    /// ```
    /// use scical::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let quotient = Context::eval_binary(BinaryOperator::Div, &Value::Integer(10), &Value::Integer(2));
    /// assert_eq!(quotient.unwrap(), Value::Real(5.0));
    ///
    /// let rem = Context::eval_binary(BinaryOperator::Mod, &Value::Integer(-7), &Value::Integer(3));
    /// assert_eq!(rem.unwrap(), Value::Integer(2));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let context = op.to_string();
        let left = left.to_number(&context)?;
        let right = right.to_number(&context)?;

        match op {
            BinaryOperator::Pow => Self::eval_pow(&left, &right),
            _ => Self::eval_scalar_op(op, &left, &right),
        }
    }
}
