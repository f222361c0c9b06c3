/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: unknown characters, unexpected tokens, oversized literals and
/// nesting that exceeds the configured limit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, type mismatches, unknown names and failed native calls.
pub mod runtime_error;
/// Curve sampling errors.
pub mod sample_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use sample_error::SampleError;

/// Any failure of the calculator pipeline.
///
/// Joins the parse and runtime error families so that the pipeline can use
/// `?` from tokenizing through evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns `true` if the failure is a division or modulo by zero.
    ///
    /// # Example
    /// ```
    /// use scical::error::{CalcError, RuntimeError};
    ///
    /// assert!(CalcError::from(RuntimeError::DivisionByZero).is_division_by_zero());
    /// ```
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Runtime(RuntimeError::DivisionByZero))
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
