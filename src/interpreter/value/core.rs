use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{format_real, i64_to_f64},
};

/// Sentinel returned by `mode` when the data has no single most common value.
pub const NO_UNIQUE_MODE: &str = "No unique mode";

/// Represents a runtime value produced by evaluating an expression.
///
/// Values are plain data: they never hold functions, syntax tree nodes or
/// references into the environment, so nothing an expression computes can
/// carry a capability out of the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer, produced by integer literals and integral
    /// operations such as `factorial`.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A boolean, produced by comparisons and boolean operators.
    Bool(bool),
    /// Text. Only produced as a sentinel result, e.g. by `mode`.
    Text(String),
    /// An ordered sequence, produced by `[a, b, c]`.
    List(Vec<Self>),
    /// A fixed-size tuple, produced by `(a, b)`.
    Tuple(Vec<Self>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
            LiteralValue::Bool(b) => Self::Bool(b),
        }
    }
}

impl Value {
    /// Returns the name of the value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "str",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
        }
    }

    /// Returns `true` for integers, floats and booleans.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_) | Self::Bool(_))
    }

    /// Returns the truthiness of the value.
    ///
    /// Numbers are truthy when non-zero, text and sequences when non-empty.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::List(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty(),
            Self::List(v) | Self::Tuple(v) => !v.is_empty(),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts integers, floats and booleans (as `0.0`/`1.0`).
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// assert_eq!(Value::Bool(true).as_real().unwrap(), 1.0);
    /// assert!(Value::List(vec![]).as_real().is_err());
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            Self::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(RuntimeError::mismatch(format!("expected a number, found {}",
                                                    self.type_name()))),
        }
    }

    /// Normalizes a numeric value for arithmetic.
    ///
    /// Booleans become the integers `0` and `1`; integers and floats are
    /// returned unchanged. Anything else is a type mismatch naming `context`.
    pub fn to_number(&self, context: &str) -> EvalResult<Self> {
        match self {
            Self::Integer(_) | Self::Real(_) => Ok(self.clone()),
            Self::Bool(b) => Ok(Self::Integer(i64::from(*b))),
            _ => {
                Err(RuntimeError::mismatch(format!("unsupported operand type for {context}: '{}'",
                                                   self.type_name())))
            },
        }
    }

    /// Writes the value as it appears inside a container, where text is
    /// quoted.
    fn fmt_nested(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{s}'"),
            _ => write!(f, "{self}"),
        }
    }

    fn fmt_elements(elements: &[Self], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, value) in elements.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            value.fmt_nested(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(values) => {
                write!(f, "[")?;
                Self::fmt_elements(values, f)?;
                write!(f, "]")
            },
            Self::Tuple(values) => {
                write!(f, "(")?;
                Self::fmt_elements(values, f)?;
                if values.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            },
        }
    }
}
