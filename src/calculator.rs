use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    sync::atomic::{AtomicBool, Ordering},
};

use tracing::{debug, info, trace};

use crate::{
    error::{CalcError, SampleError},
    interpreter::{
        environment::Environment,
        evaluator::{core::Context, function::trig::AngleMode},
        lexer::tokenize,
        parser::core::{DEFAULT_MAX_DEPTH, parse},
        value::core::Value,
    },
    util::num::usize_to_f64,
};

/// Fewest points [`Calculator::sample`] produces.
pub const MIN_SAMPLES: usize = 10;

/// The calculator facade.
///
/// Runs the whole pipeline (tokenize, parse, evaluate) for one expression
/// at a time and owns the only mutable state of the system, the angle mode.
/// The mode lives in an atomic and is read once at the start of every call,
/// so a shared `&Calculator` may be used from several threads and one
/// evaluation always sees a single mode.
///
/// # Example
/// ```
/// use scical::Calculator;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.calculate("2+3*4"), "14");
/// assert_eq!(calc.calculate("1/0"), "Division by zero");
/// assert!(calc.calculate("bar").starts_with("Error: "));
///
/// calc.set_mode("rad");
/// assert_eq!(calc.evaluate_at("2*x", 1.5), Some(3.0));
/// ```
#[derive(Debug)]
pub struct Calculator {
    radians:   AtomicBool,
    max_depth: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in degrees mode with the default nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { radians:   AtomicBool::new(false),
               max_depth: DEFAULT_MAX_DEPTH, }
    }

    /// Sets how deeply expressions may nest before they are rejected.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The configured nesting limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The current angle mode.
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        if self.radians.load(Ordering::Acquire) {
            AngleMode::Radians
        } else {
            AngleMode::Degrees
        }
    }

    /// Switches the angle mode for all following evaluations.
    pub fn set_angle_mode(&self, mode: AngleMode) {
        self.radians
            .store(mode == AngleMode::Radians, Ordering::Release);
        info!(%mode, "angle mode changed");
    }

    /// Switches the angle mode by name.
    ///
    /// Only `"deg"` and `"rad"` are recognized; anything else is ignored and
    /// the mode stays as it was.
    ///
    /// # Example
    /// ```
    /// use scical::{AngleMode, Calculator};
    ///
    /// let calc = Calculator::new();
    /// calc.set_mode("rad");
    /// calc.set_mode("gradians");
    /// assert_eq!(calc.angle_mode(), AngleMode::Radians);
    /// ```
    pub fn set_mode(&self, mode: &str) {
        match mode.parse() {
            Ok(mode) => self.set_angle_mode(mode),
            Err(e) => debug!(error = %e, "ignoring angle mode change"),
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// The parse or runtime error that stopped the pipeline.
    pub fn evaluate(&self, expression: &str) -> Result<Value, CalcError> {
        self.evaluate_with::<&str>(expression, &[])
    }

    /// Evaluates an expression with extra name bindings.
    ///
    /// Bindings are matched case-insensitively and take precedence over the
    /// constants `pi` and `e`.
    ///
    /// # Errors
    /// The parse or runtime error that stopped the pipeline.
    ///
    /// # Example
    /// ```
    /// use scical::{Calculator, Value};
    ///
    /// let calc = Calculator::new();
    /// let result = calc.evaluate_with("a * b", &[("a", Value::Integer(6)), ("B", Value::Integer(7))]);
    /// assert_eq!(result.unwrap(), Value::Integer(42));
    /// ```
    pub fn evaluate_with<S: AsRef<str>>(&self,
                                        expression: &str,
                                        bindings: &[(S, Value)])
                                        -> Result<Value, CalcError> {
        let mode = self.angle_mode();

        let ast = tokenize(expression).and_then(|tokens| {
                                          trace!(?tokens, "tokenized");
                                          parse(&tokens, self.max_depth)
                                      })
                                      .inspect_err(|e| {
                                          debug!(expression, position = e.position(), "rejected");
                                      })?;
        trace!(?ast, "parsed");

        let env = Environment::new(mode).with_bindings(bindings);
        let value = Context::new(&env, self.max_depth).eval(&ast)?;
        debug!(expression, %mode, %value, "evaluated");
        Ok(value)
    }

    /// Evaluates an expression to its display string.
    ///
    /// This never fails: errors are reported as `"Error: <message>"`, a
    /// division by zero as `"Division by zero"`, and an internal fault as
    /// `"Error"`.
    #[must_use]
    pub fn calculate(&self, expression: &str) -> String {
        match catch_unwind(AssertUnwindSafe(|| self.evaluate(expression))) {
            Ok(Ok(value)) => value.to_string(),
            Ok(Err(e)) if e.is_division_by_zero() => "Division by zero".to_string(),
            Ok(Err(e)) => {
                debug!(expression, error = %e, "calculation failed");
                format!("Error: {e}")
            },
            Err(_) => {
                debug!(expression, "calculation panicked");
                "Error".to_string()
            },
        }
    }

    /// Evaluates an expression with `x` bound to the given number.
    ///
    /// Returns `None` on any failure and for results that are not numbers;
    /// booleans count as `0.0`/`1.0`.
    ///
    /// # Example
    /// ```
    /// use scical::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.evaluate_at("x ^ 2", 3.0), Some(9.0));
    /// assert_eq!(calc.evaluate_at("1/x", 0.0), None);
    /// assert_eq!(calc.evaluate_at("1 +", 0.0), None);
    /// ```
    #[must_use]
    pub fn evaluate_at(&self, expression: &str, x: f64) -> Option<f64> {
        let result = catch_unwind(AssertUnwindSafe(|| {
                         self.evaluate_with(expression, &[("x", Value::Real(x))])
                     }));

        match result {
            Ok(Ok(value)) if value.is_numeric() => value.as_real().ok(),
            Ok(Ok(value)) => {
                trace!(x, kind = value.type_name(), "non-numeric sample");
                None
            },
            Ok(Err(e)) => {
                trace!(x, error = %e, "sample failed");
                None
            },
            Err(_) => None,
        }
    }

    /// Samples `y = f(x)` at evenly spaced points of `[x_min, x_max]`.
    ///
    /// Both ends are included and at least [`MIN_SAMPLES`] points are taken.
    /// Each point is computed with [`Calculator::evaluate_at`], so points
    /// where the expression fails carry `None`.
    ///
    /// # Errors
    /// `InvalidRange` unless `x_min < x_max` with both ends finite.
    ///
    /// # Example
    /// ```
    /// use scical::Calculator;
    ///
    /// let calc = Calculator::new();
    /// let samples = calc.sample("1/x", -1.0, 1.0, 11).unwrap();
    ///
    /// assert_eq!(samples.points().len(), 11);
    /// assert_eq!(samples.points()[5], (0.0, None));
    /// assert!(samples.has_valid_points());
    /// assert!(calc.sample("x", 1.0, 1.0, 11).is_err());
    /// ```
    pub fn sample(&self,
                  expression: &str,
                  x_min: f64,
                  x_max: f64,
                  samples: usize)
                  -> Result<Samples, SampleError> {
        if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max) {
            return Err(SampleError::InvalidRange { x_min, x_max });
        }

        let count = samples.max(MIN_SAMPLES);
        let last = count - 1;
        let span = x_max - x_min;

        let points = (0..count).map(|i| {
                                   let x = if i == last {
                                       x_max
                                   } else {
                                       span.mul_add(usize_to_f64(i) / usize_to_f64(last), x_min)
                                   };
                                   (x, self.evaluate_at(expression, x))
                               })
                               .collect();

        let samples = Samples { points };
        debug!(expression, count, valid = samples.has_valid_points(), "sampled");
        Ok(samples)
    }
}

/// Points produced by [`Calculator::sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    points: Vec<(f64, Option<f64>)>,
}

impl Samples {
    /// The `(x, y)` pairs in increasing `x` order; `y` is `None` where the
    /// expression had no numeric value.
    #[must_use]
    pub fn points(&self) -> &[(f64, Option<f64>)] {
        &self.points
    }

    /// Returns `true` if at least one point has a finite `y`.
    #[must_use]
    pub fn has_valid_points(&self) -> bool {
        self.points
            .iter()
            .any(|(_, y)| y.is_some_and(f64::is_finite))
    }
}

/// Appends the `)` needed to close every unmatched `(`.
///
/// Input with as many or more closing than opening parentheses is returned
/// unchanged; the parser still reports it.
///
/// # Example
/// ```
/// use scical::balance_parentheses;
///
/// assert_eq!(balance_parentheses("sin(cos(0"), "sin(cos(0))");
/// assert_eq!(balance_parentheses("(1+2))"), "(1+2))");
/// ```
#[must_use]
pub fn balance_parentheses(expression: &str) -> String {
    let open = expression.matches('(').count();
    let close = expression.matches(')').count();

    let mut balanced = expression.to_string();
    if open > close {
        balanced.push_str(&")".repeat(open - close));
    }
    balanced
}
