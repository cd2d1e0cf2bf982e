//! Operator Matching Helpers
//!
//! Map the current lexeme to the node kind of the operator it starts, if any.

use lie_ir::{LexemeKind, NodeKind};

use crate::Parser;

impl Parser {
    pub(crate) fn match_or_op(&self) -> Option<NodeKind> {
        match self.current_kind() {
            LexemeKind::Or => Some(NodeKind::Or),
            LexemeKind::Xor => Some(NodeKind::Xor),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<NodeKind> {
        match self.current_kind() {
            LexemeKind::LessThan => Some(NodeKind::Less),
            LexemeKind::LessOrEqual => Some(NodeKind::LessOrEqual),
            LexemeKind::GreaterThan => Some(NodeKind::Greater),
            LexemeKind::GreaterOrEqual => Some(NodeKind::GreaterOrEqual),
            LexemeKind::DoubleEquals => Some(NodeKind::Equal),
            LexemeKind::NotEqual => Some(NodeKind::NotEqual),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<NodeKind> {
        match self.current_kind() {
            LexemeKind::Plus => Some(NodeKind::Plus),
            LexemeKind::Minus => Some(NodeKind::Minus),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<NodeKind> {
        match self.current_kind() {
            LexemeKind::Asterisk => Some(NodeKind::Mul),
            LexemeKind::Slash => Some(NodeKind::Div),
            LexemeKind::Mod => Some(NodeKind::Mod),
            _ => None,
        }
    }
}
