use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the expression text.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace is skipped. The caret `^` lexes to the same token as `**`, so
/// both spellings denote power everywhere.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens.
    #[token("True", |_| true)]
    #[token("true", |_| true)]
    #[token("False", |_| false)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens; names such as `pi`, `x` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**` or `^`
    #[token("**")]
    #[token("^")]
    Power,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// End of input. Never produced by the lexer itself; [`tokenize`]
    /// appends it.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "number {r}"),
            Self::Integer(n) => write!(f, "number {n}"),
            Self::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Self::And => write!(f, "'and'"),
            Self::Or => write!(f, "'or'"),
            Self::Not => write!(f, "'not'"),
            Self::Identifier(name) => write!(f, "name '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Power => write!(f, "'**'"),
            Self::Slash => write!(f, "'/'"),
            Self::DoubleSlash => write!(f, "'//'"),
            Self::Percent => write!(f, "'%'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token paired with the byte offset at which it starts.
pub type Spanned = (Token, usize);

/// Splits expression text into tokens.
///
/// The returned sequence always ends with [`Token::Eof`] positioned at the
/// end of the input.
///
/// # Errors
/// - `UnexpectedCharacter` for a character that starts no token.
/// - `LiteralTooLarge` for an integer literal that does not fit `i64`.
///
/// # Example
/// ```
/// use scical::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ^ x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0),
///                 (Token::Power, 2),
///                 (Token::Identifier("x".to_string()), 4),
///                 (Token::Eof, 5)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { position });
                }
                let ch = source[position..].chars().next().unwrap_or('\0');
                return Err(ParseError::UnexpectedCharacter { ch, position });
            },
        }
    }

    tokens.push((Token::Eof, source.len()));
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
