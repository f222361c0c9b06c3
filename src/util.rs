/// Numeric conversion and formatting helpers.
///
/// This module provides the conversions between integer and floating-point
/// types used by the evaluator, and the float formatting used when values are
/// displayed.
///
/// # Responsibilities
/// - Convert `f64` to `i64` only when the conversion is exact.
/// - Render floats in the calculator's display notation.
pub mod num;
