//! # scical
//!
//! scical is a sandboxed evaluator for scientific calculator expressions.
//! It tokenizes, parses and evaluates untrusted expression text against a
//! closed set of names and functions, so an expression can compute a value
//! but can never reach anything outside the calculator.
//!
//! ```
//! use scical::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.calculate("2^3^2"), "512");
//! assert_eq!(calc.calculate("mean(1, 2, 3, 4)"), "2.5");
//! assert_eq!(calc.calculate("1 < 2 < 3"), "True");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per grammar construct, and nothing more.
/// - Names the unary, arithmetic, boolean and comparison operators.
pub mod ast;
/// The calculator facade.
///
/// Holds the angle mode and the nesting limit, runs the full pipeline for an
/// expression, and turns every outcome into the form its caller expects: a
/// value, a display string, or an optional number for plotting.
pub mod calculator;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, and while sampling a curve.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions to syntax errors.
/// - Supports integration with the standard error traits.
pub mod error;
/// Lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator, the value
/// representation and the environment an expression is evaluated in.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Keeps the set of reachable names and functions closed.
pub mod interpreter;
/// General utilities for safe numeric conversion and formatting.
///
/// # Responsibilities
/// - Convert between `i64`, `usize`, and `f64` without silent data loss.
/// - Render floats the way the calculator displays them.
pub mod util;

pub use calculator::{Calculator, Samples, balance_parentheses};
pub use error::CalcError;
pub use interpreter::{evaluator::function::trig::AngleMode, value::core::Value};
