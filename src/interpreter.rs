/// The environment module holds everything an expression can reach.
///
/// An expression can only see the names and functions listed in its
/// environment: the builtin function table, the angle-mode aware
/// trigonometric functions, the constants `pi` and `e`, and any bindings the
/// caller adds. Anything else is an unknown name.
pub mod environment;
/// The evaluator module walks syntax trees and computes values.
///
/// The evaluator traverses the AST with an exhaustive match over its node
/// kinds, performs arithmetic, comparison and boolean reduction, and calls
/// native functions from the environment.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports runtime errors such as division by zero or unknown names.
/// - Bounds its own recursion depth.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a sequence of tokens, each
/// carrying its byte offset: numbers, booleans, identifiers, operators,
/// punctuation and keywords. The sequence always ends with an end marker.
///
/// # Responsibilities
/// - Converts the input into tokens with their positions.
/// - Treats `^` and `**` alike as the power operator.
/// - Reports unknown characters and oversized integer literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the whole token sequence and produces exactly one
/// expression, following the calculator's precedence rules.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Reports syntax errors with the position of the offending token.
/// - Rejects input that nests deeper than the configured limit.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, booleans, text sentinels, lists and tuples. The module
/// provides truthiness, numeric conversion, comparison and the display
/// format.
pub mod value;
