#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Called a function that is not in the function table.
    UnknownFunction {
        /// The name of the function, lowercased.
        name: String,
    },
    /// Referenced a name that is not in the name table.
    UnknownName {
        /// The name as written in the expression.
        name: String,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero,
    /// An operator was applied to operands of the wrong kind.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// A native function rejected its arguments (wrong count or kind).
    FunctionCall {
        /// The message produced by the function.
        details: String,
    },
    /// An argument lies outside the mathematical domain of an operation.
    MathDomain {
        /// Details about the violated domain.
        details: String,
    },
    /// A floating point result overflowed.
    Overflow {
        /// The operation that overflowed.
        details: String,
    },
    /// Evaluation recursed deeper than the configured limit.
    NestingLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl RuntimeError {
    /// Shorthand for a [`RuntimeError::FunctionCall`] error.
    pub(crate) fn call(details: impl Into<String>) -> Self {
        Self::FunctionCall { details: details.into() }
    }

    /// Shorthand for a [`RuntimeError::MathDomain`] error.
    pub(crate) fn domain(details: impl Into<String>) -> Self {
        Self::MathDomain { details: details.into() }
    }

    /// Shorthand for a [`RuntimeError::TypeMismatch`] error.
    pub(crate) fn mismatch(details: impl Into<String>) -> Self {
        Self::TypeMismatch { details: details.into() }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "Unknown function: {name}"),
            Self::UnknownName { name } => write!(f, "Unknown name: {name}"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::TypeMismatch { details } => write!(f, "Type mismatch: {details}"),
            Self::FunctionCall { details } => write!(f, "Function call error: {details}"),
            Self::MathDomain { details } => write!(f, "Math domain error: {details}"),
            Self::Overflow { details } => write!(f, "Numerical result out of range: {details}"),
            Self::NestingLimitExceeded { limit } => {
                write!(f, "Expression nests deeper than {limit} levels")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
