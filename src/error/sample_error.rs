/// Represents the errors of curve sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The interval is empty, reversed or not finite.
    InvalidRange {
        /// The requested lower end.
        x_min: f64,
        /// The requested upper end.
        x_max: f64,
    },
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { x_min, x_max } => {
                write!(f, "Invalid range: x_min ({x_min}) must be less than x_max ({x_max})")
            },
        }
    }
}

impl std::error::Error for SampleError {}
