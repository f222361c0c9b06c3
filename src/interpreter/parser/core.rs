use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Spanned, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply an expression may nest.
///
/// One parenthesized level runs through every precedence band, about a
/// dozen parser frames. At this limit the deepest input still parses and
/// evaluates on a 2 MiB thread stack in an unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Recursive-descent parser over a tokenized expression.
///
/// The parser walks a token slice that ends with [`Token::Eof`]. Its methods
/// are spread over the `parser` submodules, one per precedence band. Every
/// recursive cycle of the grammar passes through [`Parser::descend`], which
/// bounds the nesting depth so adversarial input cannot exhaust the stack.
pub struct Parser<'a> {
    tokens:    &'a [Spanned],
    cursor:    usize,
    depth:     usize,
    max_depth: usize,
}

/// Parses a token sequence into a single expression.
///
/// The whole input must form exactly one expression; anything left over is
/// an `UnexpectedTrailingTokens` error.
///
/// Grammar: `input := expression EOF`
///
/// # Example
/// ```
/// use scical::{
///     ast::{BinaryOperator, Expr, LiteralValue},
///     interpreter::{
///         lexer::tokenize,
///         parser::core::{DEFAULT_MAX_DEPTH, parse},
///     },
/// };
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let expr = parse(&tokens, DEFAULT_MAX_DEPTH).unwrap();
///
/// assert_eq!(expr,
///            Expr::BinaryOp { left:  Box::new(Expr::Literal(LiteralValue::Integer(1))),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Literal(LiteralValue::Integer(2))), });
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse(&tokens, DEFAULT_MAX_DEPTH).is_err());
/// ```
pub fn parse(tokens: &[Spanned], max_depth: usize) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens, max_depth);
    let expr = parser.parse_expression()?;

    match parser.peek() {
        (Token::Eof, _) => Ok(expr),
        (tok, position) => Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                                      position: *position, }),
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Spanned], max_depth: usize) -> Self {
        Self { tokens,
               cursor: 0,
               depth: 0,
               max_depth }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing, used for the whole
    /// input and for every parenthesized group, argument and element.
    /// It begins at the lowest-precedence level, `or`.
    ///
    /// Grammar: `expression := or`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.descend(Self::parse_or)
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingLimitExceeded` once the depth would pass the configured limit.
    pub(in crate::interpreter::parser) fn descend(&mut self,
                                                  rule: impl FnOnce(&mut Self) -> ParseResult<Expr>)
                                                  -> ParseResult<Expr> {
        self.deepen()?;
        let result = rule(self);
        self.release(1);
        result
    }

    /// Claims one more nesting level; the caller gives it back.
    pub(in crate::interpreter::parser) fn deepen(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingLimitExceeded { limit:    self.max_depth,
                                                          position: self.peek().1, });
        }
        self.depth += 1;
        Ok(())
    }

    /// Gives back `levels` claimed with [`Parser::deepen`].
    pub(in crate::interpreter::parser) const fn release(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Returns the current token without consuming it.
    ///
    /// Past the end, the trailing [`Token::Eof`] is returned again.
    pub(in crate::interpreter::parser) fn peek(&self) -> &'a Spanned {
        const EOF: &Spanned = &(Token::Eof, 0);

        self.tokens
            .get(self.cursor)
            .or_else(|| self.tokens.last())
            .unwrap_or(EOF)
    }

    /// Consumes and returns the current token. [`Token::Eof`] is never
    /// consumed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'a Spanned {
        let current = self.peek();
        if current.0 != Token::Eof {
            self.cursor += 1;
        }
        current
    }

    /// Consumes the current token if it equals `expected`.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> bool {
        if &self.peek().0 == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` or fails describing what was found instead.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: &Token,
                                                 description: &str)
                                                 -> ParseResult<()> {
        if self.eat(expected) {
            return Ok(());
        }
        Err(self.unexpected(description))
    }

    /// Builds the error for the current token not matching `expected`.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            (Token::Eof, position) => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                                         position: *position, },
            (tok, position) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                             found:    tok.to_string(),
                                                             position: *position, },
        }
    }
}
