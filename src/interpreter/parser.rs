/// Binary operator parsing.
///
/// Handles the boolean chains (`or`, `and`), comparison chains and the
/// left-associative arithmetic levels.
pub mod binary;

/// Parser state and entry point.
///
/// Defines the `Parser` type, the nesting guard and the top-level `parse`
/// function that rejects trailing input.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles `not`, prefix signs, power and the atomic expressions: literals,
/// names, calls, groups, tuples and lists.
pub mod unary;

/// Shared parsing helpers.
///
/// Provides the comma-separated list parser used by calls, lists and tuples.
pub mod utils;
