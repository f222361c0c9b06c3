use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses logical negation.
    ///
    /// `not` binds looser than comparisons, so `not 1 < 2` negates the
    /// whole comparison.
    ///
    /// Grammar: `not := "not" not | compare`
    pub(in crate::interpreter::parser) fn parse_not(&mut self) -> ParseResult<Expr> {
        if self.eat(&Token::Not) {
            let operand = self.descend(Self::parse_not)?;
            return Ok(Expr::UnaryOp { op:      UnaryOperator::Not,
                                      operand: Box::new(operand), });
        }
        self.parse_compare()
    }

    /// Parses a signed expression.
    ///
    /// Prefix signs bind tighter than every binary operator except power,
    /// so `-2 ** 2` parses as `-(2 ** 2)`.
    ///
    /// Grammar: `unary := ("+" | "-") unary | power`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.peek().0 {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Negate,
            _ => return self.parse_power(),
        };
        self.advance();
        let operand = self.descend(Self::parse_unary)?;
        Ok(Expr::UnaryOp { op,
                           operand: Box::new(operand) })
    }

    /// Parses exponentiation.
    ///
    /// The exponent is itself a unary expression, which makes power
    /// right-associative: `2 ** 3 ** 2` parses as `2 ** (3 ** 2)`, and
    /// allows signed exponents such as `2 ** -1`.
    ///
    /// Grammar: `power := primary ("**" unary)?`
    fn parse_power(&mut self) -> ParseResult<Expr> {
        let base = self.parse_primary()?;
        if !self.eat(&Token::Power) {
            return Ok(base);
        }
        let exponent = self.descend(Self::parse_unary)?;
        Ok(Expr::BinaryOp { left:  Box::new(base),
                            op:    BinaryOperator::Pow,
                            right: Box::new(exponent), })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := number | boolean
    ///              | identifier "(" arguments? ")"
    ///              | identifier
    ///              | "(" expression ")"
    ///              | "(" expression "," arguments? ")"
    ///              | "[" arguments? "]"
    /// ```
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match &self.peek().0 {
            Token::Integer(n) => {
                let n = *n;
                self.advance();
                Ok(Expr::Literal(LiteralValue::Integer(n)))
            },
            Token::Real(r) => {
                let r = *r;
                self.advance();
                Ok(Expr::Literal(LiteralValue::Real(r)))
            },
            Token::Bool(b) => {
                let b = *b;
                self.advance();
                Ok(Expr::Literal(LiteralValue::Bool(b)))
            },
            Token::Identifier(name) => {
                self.advance();
                if self.eat(&Token::LParen) {
                    let arguments = self.parse_comma_separated(&Token::RParen, "')'")?;
                    return Ok(Expr::Call { name: name.clone(),
                                           arguments });
                }
                Ok(Expr::Identifier(name.clone()))
            },
            Token::LParen => self.parse_group_or_tuple(),
            Token::LBracket => {
                self.advance();
                let elements = self.parse_comma_separated(&Token::RBracket, "']'")?;
                Ok(Expr::ListLit(elements))
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses a parenthesized group or a tuple literal.
    ///
    /// A single expression in parentheses is grouping; one or more commas
    /// make a tuple, so `(1,)` is a one element tuple and `(1)` is just `1`.
    fn parse_group_or_tuple(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen, "'('")?;
        let first = self.parse_expression()?;

        if self.eat(&Token::RParen) {
            return Ok(first);
        }
        self.expect(&Token::Comma, "',' or ')'")?;

        let mut elements = vec![first];
        elements.extend(self.parse_comma_separated(&Token::RParen, "')'")?);
        Ok(Expr::TupleLit(elements))
    }
}
