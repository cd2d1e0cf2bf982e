//! Expression parsing.
//!
//! One method per precedence level, loosest first. Each level parses its
//! operands with the next tighter level and folds left to right, except `^`,
//! which is right-associative, and comparisons, which collect a whole chain
//! into one node.
//!
//! ```text
//! expression  := or_expr
//! or_expr     := and_expr ( ('or' | 'xor') and_expr )*
//! and_expr    := not_expr ( 'and' not_expr )*
//! not_expr    := 'not' not_expr | comparison
//! comparison  := arith ( CMP_OP arith )*
//! arith       := term ( ('+' | '-') term )*
//! term        := factor ( ('*' | '/' | 'mod') factor )*
//! factor      := '-' factor | power
//! power       := primary ( '^' factor )?
//! ```
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expression`) and the precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Atoms and call/subscript/member trailers

mod operators;
mod primary;

use lie_ir::{LexemeKind, Node, NodeKind, Position, Span};
use lie_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply parenthesized input does not
    /// overflow the stack.
    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    /// `or` / `xor` (loosest).
    fn parse_or(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_and()?;

        while let Some(op) = self.match_or_op() {
            self.advance()?;
            let right = self.parse_and()?;
            left = binary(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_not()?;

        while self.check(LexemeKind::And) {
            self.advance()?;
            let right = self.parse_not()?;
            left = binary(NodeKind::And, left, right)?;
        }

        Ok(left)
    }

    /// Prefix `not`, which nests.
    fn parse_not(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            if !self.check(LexemeKind::Not) {
                return self.parse_comparison();
            }
            let start = self.current_position();
            self.advance()?;
            let operand = self.parse_not()?;
            unary(NodeKind::Not, start, operand)
        })
    }

    /// Comparison chain.
    ///
    /// Without an operator the operand passes through. With N operators the
    /// result is `Comparison { operand0, ComparisonOps[N], ComparisonOperands[N] }`.
    fn parse_comparison(&mut self) -> Result<Node, ParseError> {
        let first = self.parse_arith()?;
        if self.match_comparison_op().is_none() {
            return Ok(first);
        }

        let mut ops = Node::new(NodeKind::ComparisonOps);
        let mut operands = Node::new(NodeKind::ComparisonOperands);
        while let Some(op) = self.match_comparison_op() {
            let op_span = self.current_span();
            self.advance()?;
            ops.push_child(Node::with_span(op, op_span))?;
            operands.push_child(self.parse_arith()?)?;
        }
        ops.span = span_of_children(&ops);
        operands.span = span_of_children(&operands);
        ops.fit();
        operands.fit();

        let mut comparison =
            Node::with_span(NodeKind::Comparison, first.span.merge(operands.span));
        comparison.push_child(first)?;
        comparison.push_child(ops)?;
        comparison.push_child(operands)?;
        Ok(comparison)
    }

    /// `+` / `-`.
    fn parse_arith(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_additive_op() {
            self.advance()?;
            let right = self.parse_term()?;
            left = binary(op, left, right)?;
        }

        Ok(left)
    }

    /// `*` / `/` / `mod`.
    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.advance()?;
            let right = self.parse_factor()?;
            left = binary(op, left, right)?;
        }

        Ok(left)
    }

    /// Prefix `-`, which nests and binds looser than `^`: `-x^2` is `-(x^2)`.
    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            if !self.check(LexemeKind::Minus) {
                return self.parse_power();
            }
            let start = self.current_position();
            self.advance()?;
            let operand = self.parse_factor()?;
            unary(NodeKind::UnaryMinus, start, operand)
        })
    }

    /// `^`, right-associative: the exponent is a whole `factor`, so
    /// `2^3^2` is `2^(3^2)` and `2^-1` is allowed.
    fn parse_power(&mut self) -> Result<Node, ParseError> {
        let base = self.parse_primary()?;
        if !self.check(LexemeKind::Caret) {
            return Ok(base);
        }
        self.advance()?;
        let exponent = self.parse_factor()?;
        binary(NodeKind::Pow, base, exponent)
    }
}

/// Binary operator node spanning both operands.
fn binary(kind: NodeKind, left: Node, right: Node) -> Result<Node, ParseError> {
    let mut node = Node::with_span(kind, left.span.merge(right.span));
    node.push_child(left)?;
    node.push_child(right)?;
    Ok(node)
}

/// Prefix operator node spanning the operator and its operand.
fn unary(kind: NodeKind, start: Position, operand: Node) -> Result<Node, ParseError> {
    let mut node = Node::with_span(kind, Span::new(start, operand.span.end));
    node.push_child(operand)?;
    Ok(node)
}

/// First child's start to last child's end.
fn span_of_children(node: &Node) -> Span {
    let children = node.children().as_slice();
    match (children.first(), children.last()) {
        (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
        _ => Span::EMPTY,
    }
}
