/// Comparison chains and single comparisons.
pub mod comparison;
/// Entry point for arithmetic operators.
///
/// Normalizes the operands and routes each operator to its handler.
pub mod core;
/// Reduction of `and`/`or` chains.
pub mod logic;
/// Exponentiation, with its domain and overflow checks.
pub mod power;
/// Integer and float arithmetic for `+ - * / // %`.
pub mod scalar;
