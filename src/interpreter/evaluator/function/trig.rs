use std::str::FromStr;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{Arity, NativeFunction, real_arg, single_arg},
        },
        value::core::Value,
    },
};

/// How arguments of the trigonometric functions are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Arguments are in degrees and converted to radians before the call.
    #[default]
    Degrees,
    /// Arguments are passed through unchanged.
    Radians,
}

impl AngleMode {
    /// Converts an angle given in this mode to radians.
    ///
    /// # Example
    /// ```
    /// use scical::AngleMode;
    ///
    /// assert_eq!(AngleMode::Degrees.to_radians(180.0), std::f64::consts::PI);
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }
}

/// Error returned when parsing an unrecognized angle mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAngleMode(pub String);

impl std::fmt::Display for UnknownAngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown angle mode '{}', expected 'deg' or 'rad'", self.0)
    }
}

impl std::error::Error for UnknownAngleMode {}

impl FromStr for AngleMode {
    type Err = UnknownAngleMode;

    /// Accepts exactly `deg` and `rad`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" => Ok(Self::Degrees),
            "rad" => Ok(Self::Radians),
            _ => Err(UnknownAngleMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degrees => write!(f, "deg"),
            Self::Radians => write!(f, "rad"),
        }
    }
}

/// Wraps a real trigonometric function so its argument is read in `mode`.
fn angle_wrapped(name: &'static str, mode: AngleMode, trig: fn(f64) -> f64) -> NativeFunction {
    NativeFunction::new(name,
                        Arity::Exact(1),
                        Box::new(move |args: &[Value]| {
                            let angle = radians(name, mode, args)?;
                            Ok(Value::Real(trig(angle)))
                        }))
}

/// Wraps the reciprocal of a real trigonometric function, read in `mode`.
///
/// An exact zero in the denominator is a division by zero.
fn reciprocal_wrapped(name: &'static str, mode: AngleMode, trig: fn(f64) -> f64) -> NativeFunction {
    NativeFunction::new(name,
                        Arity::Exact(1),
                        Box::new(move |args: &[Value]| {
                            let angle = radians(name, mode, args)?;
                            reciprocal(trig(angle))
                        }))
}

/// Reads the only argument of `name` as an angle in radians.
fn radians(name: &str, mode: AngleMode, args: &[Value]) -> EvalResult<f64> {
    let angle = mode.to_radians(real_arg(name, single_arg(name, args)?)?);
    if angle.is_infinite() {
        return Err(RuntimeError::domain(format!("{name}() of an infinite angle")));
    }
    Ok(angle)
}

fn reciprocal(denominator: f64) -> EvalResult<Value> {
    if denominator == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(Value::Real(1.0 / denominator))
}

/// Builds the trigonometric entries of the function table for `mode`.
///
/// The mode is captured when the table is built, so every call within one
/// evaluation sees the same mode.
#[must_use]
pub fn trig_functions(mode: AngleMode) -> Vec<NativeFunction> {
    vec![angle_wrapped("sin", mode, f64::sin),
         angle_wrapped("cos", mode, f64::cos),
         angle_wrapped("tan", mode, f64::tan),
         reciprocal_wrapped("sec", mode, f64::cos),
         reciprocal_wrapped("csc", mode, f64::sin),
         reciprocal_wrapped("cot", mode, f64::tan),]
}
