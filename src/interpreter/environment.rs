use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{
                core::{NativeFunction, builtin_functions},
                trig::{AngleMode, trig_functions},
            },
        },
        value::core::Value,
    },
};

/// The closed set of names and functions an expression can reach.
///
/// Everything an expression may touch is listed here explicitly; there is no
/// fallback to anything outside the two tables. Lookups ignore case, so
/// `SIN(PI)` and `sin(pi)` are the same call.
///
/// An environment is built for a single evaluation: the trigonometric entries
/// capture the angle mode current at that moment.
///
/// # Example
/// ```
/// use scical::{
///     AngleMode,
///     interpreter::{environment::Environment, value::core::Value},
/// };
///
/// let env = Environment::new(AngleMode::Radians).with_bindings(&[("x", Value::Integer(3))]);
///
/// assert_eq!(env.name("X").unwrap(), Value::Integer(3));
/// assert_eq!(env.name("pi").unwrap(), Value::Real(std::f64::consts::PI));
/// assert!(env.function("Sqrt").is_ok());
/// assert!(env.function("exec").is_err());
/// ```
pub struct Environment {
    functions: HashMap<&'static str, NativeFunction>,
    names:     HashMap<String, Value>,
}

impl Environment {
    /// Builds the default environment for `mode`.
    ///
    /// Contains every builtin function, the trigonometric family wrapped for
    /// `mode`, and the constants `pi` and `e`.
    #[must_use]
    pub fn new(mode: AngleMode) -> Self {
        let functions = builtin_functions().into_iter()
                                           .chain(trig_functions(mode))
                                           .map(|f| (f.name(), f))
                                           .collect();

        let names = HashMap::from([("pi".to_string(), Value::Real(std::f64::consts::PI)),
                                   ("e".to_string(), Value::Real(std::f64::consts::E))]);

        Self { functions, names }
    }

    /// Adds caller-supplied name bindings.
    ///
    /// Bindings are stored lowercased and shadow the constants, so binding
    /// `e` replaces Euler's number for this environment.
    #[must_use]
    pub fn with_bindings<S: AsRef<str>>(mut self, bindings: &[(S, Value)]) -> Self {
        for (name, value) in bindings {
            self.names
                .insert(name.as_ref().to_lowercase(), value.clone());
        }
        self
    }

    /// Looks up a function by name.
    ///
    /// # Errors
    /// `UnknownFunction` with the lowercased name if it is not in the table.
    pub fn function(&self, name: &str) -> EvalResult<&NativeFunction> {
        let key = name.to_lowercase();
        self.functions
            .get(key.as_str())
            .ok_or(RuntimeError::UnknownFunction { name: key })
    }

    /// Looks up the value bound to a name.
    ///
    /// # Errors
    /// `UnknownName` if nothing is bound to the name.
    pub fn name(&self, name: &str) -> EvalResult<Value> {
        self.names
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownName { name: name.to_string() })
    }
}
