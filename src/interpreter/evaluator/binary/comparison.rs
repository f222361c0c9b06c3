use std::cmp::Ordering;

use crate::{
    ast::{CompareOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            compare::{compare_values, values_equal},
            core::Value,
        },
    },
};

impl Context<'_> {
    /// Evaluates a comparison chain such as `a < b <= c`.
    ///
    /// Every operand is evaluated, left to right, even once the outcome is
    /// known. Each operator is applied between the previous operand and the
    /// next, and the results are joined with logical AND. After the first
    /// false pair the remaining pairs are no longer compared, so a later pair
    /// of incomparable values does not fail the chain.
    pub(in crate::interpreter::evaluator) fn eval_compare(&self,
                                                           first: &Expr,
                                                           rest: &[(CompareOperator, Expr)],
                                                           depth: usize)
                                                           -> EvalResult<Value> {
        let mut previous = self.eval_nested(first, depth)?;
        let mut result = true;

        for (op, operand) in rest {
            let current = self.eval_nested(operand, depth)?;
            if result {
                result = Self::eval_comparison(*op, &previous, &current)?;
            }
            previous = current;
        }
        Ok(Value::Bool(result))
    }

    /// Applies a single comparison operator.
    ///
    /// `==` and `!=` accept any pair of values. The ordering operators
    /// require comparable values and are false whenever `nan` is involved.
    ///
    /// # Errors
    /// `TypeMismatch` when ordering values that cannot be ordered.
    ///
    /// # Example
    /// ```
    /// use scical::{
    ///     ast::CompareOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let lt = Context::eval_comparison(CompareOperator::Less, &Value::Integer(1), &Value::Real(1.5));
    /// assert!(lt.unwrap());
    ///
    /// let eq = Context::eval_comparison(CompareOperator::Equal, &Value::Bool(true), &Value::Integer(1));
    /// assert!(eq.unwrap());
    /// ```
    pub fn eval_comparison(op: CompareOperator, left: &Value, right: &Value) -> EvalResult<bool> {
        let ordering = || compare_values(left, right);
        Ok(match op {
            CompareOperator::Equal => values_equal(left, right),
            CompareOperator::NotEqual => !values_equal(left, right),
            CompareOperator::Less => ordering()? == Some(Ordering::Less),
            CompareOperator::LessEqual => {
                matches!(ordering()?, Some(Ordering::Less | Ordering::Equal))
            },
            CompareOperator::Greater => ordering()? == Some(Ordering::Greater),
            CompareOperator::GreaterEqual => {
                matches!(ordering()?, Some(Ordering::Greater | Ordering::Equal))
            },
        })
    }
}
