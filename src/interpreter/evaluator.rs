/// Binary operator evaluation logic.
///
/// Handles arithmetic, power, comparison chains and the reduction of boolean
/// chains.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix `+`, arithmetic negation and logical `not`.
pub mod unary;

/// Core evaluation logic and context.
///
/// Contains the evaluation context, the dispatch over node kinds and the
/// evaluation depth limit.
pub mod core;

/// Function evaluation.
///
/// Holds the function table, arity checks and every native function
/// available to expressions.
pub mod function;
