//! Evaluator for a closed pending expression
//!
//! The committed terms plus the final operand are laid out as an alternating
//! token stream, folded into an AST by precedence climbing, then evaluated.
//! Precedence matches what users of the desktop calculator expect: `**`
//! binds tightest (right-associative), then `* / %`, then `+ -`. A leading
//! minus negates the first power chain, so `-2**2` is `-4`.

use crate::core::expression::PendingExpression;
use crate::core::{CalcResult, Calculator, Operation};

/// Token in a closed expression; numbers and operators strictly alternate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Operand
    Number(f64),
    /// Binary operator
    Operator(Operation),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation from a leading minus
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Closes a pending expression with its final operand
#[must_use]
pub fn close(pending: &PendingExpression, last_operand: f64) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pending.terms().len() * 2 + 1);
    for term in pending.terms() {
        tokens.push(Token::Number(term.operand));
        tokens.push(Token::Operator(term.op));
    }
    tokens.push(Token::Number(last_operand));
    tokens
}

/// Precedence-climbing builder over an alternating token stream
#[derive(Debug)]
struct TreeBuilder<'a> {
    tokens: &'a [Token],
    pos: usize,
    negate_next: bool,
}

impl<'a> TreeBuilder<'a> {
    fn new(tokens: &'a [Token], negate_first: bool) -> Self {
        Self {
            tokens,
            pos: 0,
            negate_next: negate_first,
        }
    }

    fn parse_expression(&mut self, min_precedence: u8) -> AstNode {
        let mut left = self.parse_unary();

        while let Some(op) = self.peek_operator() {
            if op.precedence() < min_precedence {
                break;
            }
            self.pos += 1;
            let next_min = if op.is_left_associative() {
                op.precedence() + 1
            } else {
                op.precedence()
            };
            let right = self.parse_expression(next_min);
            left = AstNode::binary(left, op, right);
        }

        left
    }

    fn parse_unary(&mut self) -> AstNode {
        if std::mem::take(&mut self.negate_next) {
            // Looser than power, tighter than everything else
            let inner = self.parse_expression(Operation::Power.precedence());
            return AstNode::negate(inner);
        }
        self.parse_operand()
    }

    fn parse_operand(&mut self) -> AstNode {
        match self.tokens.get(self.pos) {
            Some(Token::Number(n)) => {
                self.pos += 1;
                AstNode::number(*n)
            }
            // Alternation is guaranteed by `close`; a missing operand reads as zero
            _ => AstNode::number(0.0),
        }
    }

    fn peek_operator(&self) -> Option<Operation> {
        match self.tokens.get(self.pos) {
            Some(Token::Operator(op)) => Some(*op),
            _ => None,
        }
    }
}

/// Builds the AST for an alternating token stream
#[must_use]
pub fn build_tree(tokens: &[Token], negate_first: bool) -> AstNode {
    TreeBuilder::new(tokens, negate_first).parse_expression(0)
}

/// Evaluator for expression trees
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => Ok(-self.evaluate(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                Calculator::calculate(left_val, right_val, *op)
            }
        }
    }

    /// Closes `pending` with `last_operand` and evaluates the whole chain
    pub fn evaluate_pending(
        &self,
        pending: &PendingExpression,
        last_operand: f64,
    ) -> CalcResult<f64> {
        let tokens = close(pending, last_operand);
        let ast = build_tree(&tokens, pending.starts_negative());
        self.evaluate(&ast)
    }
}
