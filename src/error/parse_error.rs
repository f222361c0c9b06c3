#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset in the source text at which the
/// problem was detected.
pub enum ParseError {
    /// The lexer found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        ch:       char,
        /// Byte offset of the character.
        position: usize,
    },
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: String,
        /// Byte offset of the end of input.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// An integer literal does not fit into a 64 bit integer.
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    NestingLimitExceeded {
        /// The configured limit.
        limit:    usize,
        /// Byte offset at which the limit was crossed.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::LiteralTooLarge { position }
            | Self::NestingLimitExceeded { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { ch, position } => {
                write!(f, "Unexpected character '{ch}' at position {position}")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Invalid syntax at position {position}: expected {expected}, found {found}"),
            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Unexpected end of input at position {position}: expected {expected}"),
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Extra tokens after expression at position {position}: {token}"),
            Self::LiteralTooLarge { position } => {
                write!(f, "Literal at position {position} is too large")
            },
            Self::NestingLimitExceeded { limit, position } => write!(f,
                                                                     "Expression nests deeper than {limit} levels at position {position}"),
        }
    }
}

impl std::error::Error for ParseError {}
