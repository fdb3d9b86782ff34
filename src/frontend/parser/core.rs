use crate::{
    ast::Node,
    error::Error,
    frontend::{
        parser::{MAX_NESTING, ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

/// What `factor` accepts, as quoted in diagnostics.
const OPERAND: &str = "INT, FLOAT or '('";

impl Parser<'_> {
    /// Parses the whole token sequence as one expression.
    ///
    /// # Errors
    /// - Any error raised while parsing the expression.
    /// - `UnexpectedToken` when tokens remain after a complete expression,
    ///   e.g. the `2` in `1 2`.
    ///
    /// # Example
    /// ```
    /// use fal::frontend::{lexer::Lexer, parser::Parser};
    ///
    /// let mut lexer = Lexer::new("demo", "2 + 3 * 4");
    /// let tokens = lexer.make_tokens().unwrap();
    /// let ast = Parser::new(&tokens, lexer.position().copy()).parse().unwrap();
    /// assert_eq!(ast.to_string(), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
    /// ```
    pub fn parse(&mut self) -> ParseResult<Node> {
        let ast = self.expr()?;

        match self.current() {
            Some(token) => Err(Error::unexpected_token(token, "'+', '-', '*' or '/'")),
            None => Ok(ast),
        }
    }

    /// Parses a literal or a parenthesized expression.
    ///
    /// The rule is: `factor := INT | FLOAT | "(" expr ")"`
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` when no token is left.
    /// - `UnexpectedToken` on an operator or `)`.
    /// - `NestingTooDeep` on a `(` nested deeper than [`MAX_NESTING`].
    /// - Errors from the grouped expression.
    pub(in crate::frontend::parser) fn factor(&mut self) -> ParseResult<Node> {
        let Some(token) = self.current() else {
            return Err(Error::unexpected_end_of_input(&self.end, OPERAND));
        };

        match token.kind {
            TokenKind::Int(_) | TokenKind::Float(_) => {
                self.advance();
                Ok(Node::Number { tok: token.clone() })
            },
            TokenKind::LParen => self.grouping(token),
            _ => Err(Error::unexpected_token(token, OPERAND)),
        }
    }

    /// Parses `"(" expr ")"`. The parentheses leave no node behind.
    fn grouping(&mut self, open: &Token) -> ParseResult<Node> {
        if self.depth >= MAX_NESTING {
            return Err(Error::nesting_too_deep(open, MAX_NESTING));
        }

        self.advance();
        self.depth += 1;
        let expr = self.expr();
        self.depth -= 1;
        let expr = expr?;

        match self.advance() {
            Some(Token { kind: TokenKind::RParen,
                         .. }) => Ok(expr),
            found => Err(Error::expected_closing_paren(found, &self.end)),
        }
    }
}
