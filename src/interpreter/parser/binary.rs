use crate::{
    ast::{BinaryOperator, BoolOperator, CompareOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to its corresponding arithmetic operator.
///
/// Returns `None` for all tokens that are not arithmetic infix operators.
///
/// # Example
/// ```
/// use scical::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Power => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
#[must_use]
pub const fn token_to_compare_operator(token: &Token) -> Option<CompareOperator> {
    match token {
        Token::EqualEqual => Some(CompareOperator::Equal),
        Token::BangEqual => Some(CompareOperator::NotEqual),
        Token::Less => Some(CompareOperator::Less),
        Token::LessEqual => Some(CompareOperator::LessEqual),
        Token::Greater => Some(CompareOperator::Greater),
        Token::GreaterEqual => Some(CompareOperator::GreaterEqual),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses logical OR expressions.
    ///
    /// All operands of one `or` chain are collected into a single
    /// `Expr::BoolOp`; a lone operand is returned unchanged.
    ///
    /// Grammar: `or := and ("or" and)*`
    pub(in crate::interpreter::parser) fn parse_or(&mut self) -> ParseResult<Expr> {
        self.parse_bool_chain(&Token::Or, BoolOperator::Or, Self::parse_and)
    }

    /// Parses logical AND expressions.
    ///
    /// Grammar: `and := not ("and" not)*`
    fn parse_and(&mut self) -> ParseResult<Expr> {
        self.parse_bool_chain(&Token::And, BoolOperator::And, Self::parse_not)
    }

    fn parse_bool_chain(&mut self,
                        connective: &Token,
                        op: BoolOperator,
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let first = operand(self)?;
        if &self.peek().0 != connective {
            return Ok(first);
        }

        let mut operands = vec![first];
        while self.eat(connective) {
            operands.push(operand(self)?);
        }
        Ok(Expr::BoolOp { op, operands })
    }

    /// Parses comparison chains.
    ///
    /// `a < b <= c` becomes one `Expr::Compare` holding both operator pairs,
    /// so the evaluator can apply them pairwise. A lone operand is returned
    /// unchanged.
    ///
    /// Grammar: `compare := additive (cmp_op additive)*`
    pub(in crate::interpreter::parser) fn parse_compare(&mut self) -> ParseResult<Expr> {
        let first = self.parse_additive()?;
        let mut rest = Vec::new();

        while let Some(op) = token_to_compare_operator(&self.peek().0) {
            self.advance();
            rest.push((op, self.parse_additive()?));
        }

        if rest.is_empty() {
            Ok(first)
        } else {
            Ok(Expr::Compare { first: Box::new(first),
                               rest })
        }
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. Every operator
    /// in the chain adds a level to the resulting tree, so each one counts
    /// against the nesting limit.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        let mut folds = 0;
        loop {
            if let Some(op) = token_to_binary_operator(&self.peek().0)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.advance();
                self.deepen()?;
                folds += 1;
                let right = self.parse_multiplicative()?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right) };
                continue;
            }
            break;
        }
        self.release(folds);
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*`, `/`, `//` and `%`.
    ///
    /// Grammar: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        let mut folds = 0;
        loop {
            if let Some(op) = token_to_binary_operator(&self.peek().0)
               && matches!(op,
                           BinaryOperator::Mul
                           | BinaryOperator::Div
                           | BinaryOperator::FloorDiv
                           | BinaryOperator::Mod)
            {
                self.advance();
                self.deepen()?;
                folds += 1;
                let right = self.parse_unary()?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right) };
                continue;
            }
            break;
        }
        self.release(folds);
        Ok(left)
    }
}
