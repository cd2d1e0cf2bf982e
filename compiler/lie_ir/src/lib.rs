//! Lie IR - shared front-end data structures.
//!
//! - [`Position`] and [`Span`] for line/column source locations
//! - [`Lexeme`] and [`LexemeKind`] for lexer output
//! - [`ast`]: the owned syntax tree and its s-expression printer

pub mod ast;
mod span;
mod token;

pub use ast::{AstError, Node, NodeKind, NodeVec, Value};
pub use span::{Position, Span};
pub use token::{Lexeme, LexemeKind};
