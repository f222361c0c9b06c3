use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How many syntax tree levels one parser nesting level may produce.
///
/// A single parenthesized level can wrap an `or` chain, an `and` chain, a
/// comparison, a power and a call around its operand, so the evaluator allows
/// that many nodes per configured level before giving up.
pub const NODES_PER_NESTING_LEVEL: usize = 6;

/// Evaluates syntax trees against a fixed environment.
///
/// ## Usage
///
/// A `Context` borrows the [`Environment`] built for one evaluation and never
/// changes it; evaluating cannot define names, so the context holds no state
/// of its own beyond the depth limit.
///
/// # Example
/// ```
/// use scical::{
///     AngleMode,
///     interpreter::{
///         environment::Environment,
///         evaluator::core::Context,
///         lexer::tokenize,
///         parser::core::{DEFAULT_MAX_DEPTH, parse},
///         value::core::Value,
///     },
/// };
///
/// let env = Environment::new(AngleMode::Degrees);
/// let context = Context::new(&env, DEFAULT_MAX_DEPTH);
///
/// let expr = parse(&tokenize("2 ** 10 // 3").unwrap(), DEFAULT_MAX_DEPTH).unwrap();
/// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(341));
/// ```
pub struct Context<'env> {
    pub(crate) env: &'env Environment,
    max_depth:      usize,
}

impl<'env> Context<'env> {
    /// Creates an evaluation context over `env`.
    ///
    /// `max_depth` is the same nesting limit the parser was given.
    #[must_use]
    pub const fn new(env: &'env Environment, max_depth: usize) -> Self {
        Self { env, max_depth }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        self.eval_nested(expr, 0)
    }

    /// Evaluates `expr` found `depth` nodes below the root.
    ///
    /// The evaluator dispatches on the closed set of node kinds: literals,
    /// names, unary and binary operations, boolean chains, comparison chains,
    /// calls, lists and tuples.
    pub(crate) fn eval_nested(&self, expr: &Expr, depth: usize) -> EvalResult<Value> {
        let depth = depth + 1;
        if depth > self.max_depth.saturating_mul(NODES_PER_NESTING_LEVEL) {
            return Err(RuntimeError::NestingLimitExceeded { limit: self.max_depth });
        }

        match expr {
            Expr::Literal(literal) => Ok(Value::from(*literal)),
            Expr::Identifier(name) => self.env.name(name),
            Expr::UnaryOp { op, operand } => {
                let value = self.eval_nested(operand, depth)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval_nested(left, depth)?;
                let right = self.eval_nested(right, depth)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::BoolOp { op, operands } => {
                let values = self.eval_all(operands, depth)?;
                Ok(Self::eval_bool_op(*op, &values))
            },
            Expr::Compare { first, rest } => self.eval_compare(first, rest, depth),
            Expr::Call { name, arguments } => self.eval_call(name, arguments, depth),
            Expr::ListLit(elements) => Ok(Value::List(self.eval_all(elements, depth)?)),
            Expr::TupleLit(elements) => Ok(Value::Tuple(self.eval_all(elements, depth)?)),
        }
    }

    /// Evaluates every expression of `exprs` in order.
    ///
    /// The first failure stops evaluation and is returned unchanged.
    pub(crate) fn eval_all(&self, exprs: &[Expr], depth: usize) -> EvalResult<Vec<Value>> {
        exprs.iter()
             .map(|expr| self.eval_nested(expr, depth))
             .collect()
    }
}
