use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, log, min_max, random, stats},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers that need no captured state.
///
/// A builtin receives a slice of evaluated argument values whose count has
/// already been checked against its [`Arity`].
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A callable entry of the function table.
pub type NativeFn = Box<dyn Fn(&[Value]) -> EvalResult<Value>>;

/// Specifies the allowed number of arguments for a native function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `Range(lo, hi)` accepts any count in `lo..=hi`.
/// - `AtLeast(n)` accepts `n` or more arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether `given` arguments satisfy this arity for function
    /// `name`.
    ///
    /// # Errors
    /// A `FunctionCall` error describing the expected count.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::Exact(1).check("sin", 1).is_ok());
    /// assert!(Arity::Range(1, 2).check("log", 3).is_err());
    /// assert!(Arity::AtLeast(2).check("stdev", 1).is_err());
    /// ```
    pub fn check(self, name: &str, given: usize) -> EvalResult<()> {
        let ok = match self {
            Self::Exact(n) => given == n,
            Self::Range(lo, hi) => (lo..=hi).contains(&given),
            Self::AtLeast(n) => given >= n,
        };
        if ok {
            return Ok(());
        }
        Err(self.mismatch(name, given))
    }

    /// The error for calling `name` with `given` arguments.
    #[must_use]
    pub fn mismatch(self, name: &str, given: usize) -> RuntimeError {
        let expected = match self {
            Self::Exact(0) => "takes no arguments".to_string(),
            Self::Exact(1) => "takes exactly one argument".to_string(),
            Self::Exact(n) => format!("takes exactly {n} arguments"),
            Self::Range(lo, hi) => format!("takes {lo} to {hi} arguments"),
            Self::AtLeast(1) => "requires at least one argument".to_string(),
            Self::AtLeast(n) => format!("requires at least {n} arguments"),
        };
        RuntimeError::call(format!("{name}() {expected} ({given} given)"))
    }
}

/// A named, arity-checked native operation.
pub struct NativeFunction {
    name:  &'static str,
    arity: Arity,
    call:  NativeFn,
}

impl NativeFunction {
    #[must_use]
    pub fn new(name: &'static str, arity: Arity, call: NativeFn) -> Self {
        Self { name, arity, call }
    }

    /// The name the function is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Checks the argument count, then runs the function.
    pub fn invoke(&self, args: &[Value]) -> EvalResult<Value> {
        self.arity.check(self.name, args.len())?;
        (self.call)(args)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used to build environments),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the functions that do not depend on the angle mode.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"      => { arity: Arity::Exact(1),      func: builtin::sqrt },
    "log"       => { arity: Arity::Range(1, 2),   func: log::log },
    "ln"        => { arity: Arity::Range(1, 2),   func: log::ln },
    "mean"      => { arity: Arity::AtLeast(1),    func: stats::mean },
    "median"    => { arity: Arity::AtLeast(1),    func: stats::median },
    "mode"      => { arity: Arity::AtLeast(0),    func: stats::mode },
    "std"       => { arity: Arity::AtLeast(2),    func: |args| stats::stdev("std", args) },
    "stdev"     => { arity: Arity::AtLeast(2),    func: |args| stats::stdev("stdev", args) },
    "variance"  => { arity: Arity::AtLeast(2),    func: stats::variance },
    "min"       => { arity: Arity::AtLeast(1),    func: |args| min_max::min_max("min", args) },
    "max"       => { arity: Arity::AtLeast(1),    func: |args| min_max::min_max("max", args) },
    "abs"       => { arity: Arity::Exact(1),      func: builtin::abs },
    "round"     => { arity: Arity::Range(1, 2),   func: builtin::round },
    "factorial" => { arity: Arity::Exact(1),      func: builtin::factorial },
    "mod"       => { arity: Arity::Exact(2),      func: builtin::modulo },
    "rand"      => { arity: Arity::Exact(0),      func: random::rand },
    "choice"    => { arity: Arity::Exact(1),      func: random::choice },
}

/// Builds the function table entries that do not depend on the angle mode.
#[must_use]
pub fn builtin_functions() -> Vec<NativeFunction> {
    BUILTIN_TABLE.iter()
                 .map(|def| {
                     let func = def.func;
                     NativeFunction::new(def.name, def.arity, Box::new(func))
                 })
                 .collect()
}

/// Returns the only argument of function `name`.
///
/// # Errors
/// A `FunctionCall` error unless exactly one argument was given.
pub fn single_arg<'a>(name: &str, args: &'a [Value]) -> EvalResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(Arity::Exact(1).mismatch(name, args.len())),
    }
}

/// Reads a numeric argument of function `name` as a float.
///
/// # Errors
/// A `FunctionCall` error if the argument is not a number.
pub fn real_arg(name: &str, value: &Value) -> EvalResult<f64> {
    number_arg(name, value)?.as_real()
}

/// Reads a numeric argument of function `name`, turning booleans into the
/// integers `0` and `1`.
///
/// # Errors
/// A `FunctionCall` error if the argument is not a number.
pub fn number_arg(name: &str, value: &Value) -> EvalResult<Value> {
    match value {
        Value::Integer(_) | Value::Real(_) => Ok(value.clone()),
        Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        _ => Err(RuntimeError::call(format!("{name}() requires numeric arguments, got '{}'",
                                            value.type_name()))),
    }
}

impl Context<'_> {
    /// Evaluates a call of a named function.
    ///
    /// The name is resolved first, so an unknown function fails before any
    /// argument is evaluated. Arguments are then evaluated left to right and
    /// passed positionally.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name is not in the function table.
    /// - Any error raised while evaluating an argument, unchanged.
    /// - Any error raised by the function itself.
    pub(crate) fn eval_call(&self,
                            name: &str,
                            arguments: &[Expr],
                            depth: usize)
                            -> EvalResult<Value> {
        let function = self.env.function(name)?;
        let args = self.eval_all(arguments, depth)?;

        tracing::trace!(function = function.name(), args = args.len(), "calling native function");
        function.invoke(&args)
    }
}
