use crate::{
    ast::{BinaryOperator, Node},
    frontend::parser::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    pub(in crate::frontend::parser) fn expr(&mut self) -> ParseResult<Node> {
        self.bin_op(Self::term, &[BinaryOperator::Add, BinaryOperator::Sub])
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    fn term(&mut self) -> ParseResult<Node> {
        self.bin_op(Self::factor, &[BinaryOperator::Mul, BinaryOperator::Div])
    }

    /// Parses one precedence tier.
    ///
    /// Reads an operand with `operand`, then keeps folding `left op right`
    /// while the current token is one of `ops`, so `1 - 2 - 3` becomes
    /// `((1 - 2) - 3)`.
    fn bin_op(&mut self,
              operand: fn(&mut Self) -> ParseResult<Node>,
              ops: &[BinaryOperator])
              -> ParseResult<Node> {
        let mut left = operand(self)?;
        loop {
            if let Some(token) = self.current()
               && let Some(op) = token.kind.binary_operator()
               && ops.contains(&op)
            {
                self.advance();
                let right = operand(self)?;
                left = Node::BinOp { left:  Box::new(left),
                                     op:    token.clone(),
                                     right: Box::new(right), };
                continue;
            }
            break;
        }
        Ok(left)
    }
}
