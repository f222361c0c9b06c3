/// Numeric builtins: `sqrt`, `abs`, `round`, `factorial` and `mod`.
pub mod builtin;
/// Function table plumbing.
///
/// Defines arity contracts, the [`core::NativeFunction`] table entry, the
/// static table of mode-independent builtins and the evaluation of calls.
pub mod core;
/// Logarithms: `log` and `ln`, both with an optional base.
pub mod log;
/// `min` and `max`, over arguments or over a single sequence.
pub mod min_max;
/// Randomized functions: `rand` and `choice`.
pub mod random;
/// Statistics over the argument list.
///
/// Provides `mean`, `median`, `mode`, `variance` and the `std`/`stdev`
/// aliases.
pub mod stats;
/// Angle-mode aware trigonometry.
///
/// Defines [`trig::AngleMode`] and builds the `sin`, `cos`, `tan`, `sec`,
/// `csc` and `cot` entries for a given mode.
pub mod trig;
