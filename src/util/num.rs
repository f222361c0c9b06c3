/// Exponent (base 10) from which floats are shown in scientific notation.
const SCIENTIFIC_UPPER_EXPONENT: i32 = 16;
/// Exponent (base 10) below which floats are shown in scientific notation.
const SCIENTIFIC_LOWER_EXPONENT: i32 = -4;

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose precision, exactly as mixed integer/float
/// arithmetic does on a calculator.
///
/// ## Example
/// ```
/// use scical::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a `usize` count to `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if and only if it is finite, integral and in
/// range.
///
/// ## Returns
/// - `Some(i64)`: The exact integer value.
/// - `None`: If the value is fractional, non-finite or out of range.
///
/// ## Example
/// ```
/// use scical::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Formats a float the way the calculator displays it.
///
/// The shortest representation that round-trips is used. Values whose
/// decimal exponent lies in `[-4, 16)` are written positionally and always
/// carry a fractional part (`5.0`); all others are written in scientific
/// notation with a signed, two digit minimum exponent (`1e-05`, `1e+16`).
///
/// ## Example
/// ```
/// use scical::util::num::format_real;
///
/// assert_eq!(format_real(5.0), "5.0");
/// assert_eq!(format_real(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_real(0.00001), "1e-05");
/// assert_eq!(format_real(1.5e16), "1.5e+16");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return (if value > 0.0 { "inf" } else { "-inf" }).to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e')
                                         .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (SCIENTIFIC_LOWER_EXPONENT..SCIENTIFIC_UPPER_EXPONENT).contains(&exponent) {
        let positional = format!("{value}");
        if positional.contains('.') {
            positional
        } else {
            format!("{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
