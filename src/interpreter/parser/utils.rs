use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions until a closing token.
    ///
    /// This utility is shared by list literals, tuple literals and function
    /// argument lists. The opening token has already been consumed. An
    /// immediately encountered closing token produces an empty list; a
    /// trailing comma before the closing token is rejected.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list (`]` or `)`).
    /// - `description`: How the closing token is named in error messages.
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse, an unexpected token
    /// is encountered, or the input ends before the closing token.
    pub(in crate::interpreter::parser) fn parse_comma_separated(&mut self,
                                                                closing: &Token,
                                                                description: &str)
                                                                -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.eat(closing) {
            return Ok(items);
        }
        loop {
            items.push(self.parse_expression()?);
            if self.eat(&Token::Comma) {
                continue;
            }
            if self.eat(closing) {
                break;
            }
            return Err(self.unexpected(&format!("',' or {description}")));
        }
        Ok(items)
    }
}
