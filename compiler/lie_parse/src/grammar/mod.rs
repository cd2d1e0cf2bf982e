//! Grammar productions.
//!
//! ```text
//! root       := statement* END_OF_INPUT
//! statement  := expression STATEMENT_TERMINATOR
//! ```
//!
//! Expressions live in [`expr`].

mod expr;

use lie_ir::{LexemeKind, Node, NodeKind, Span};
use tracing::debug;

use crate::{ParseError, Parser};

impl Parser {
    /// Statements until end of input, stopping at the first error.
    ///
    /// The root spans from the first lexeme to the end of the last one
    /// consumed; an empty program pins it to the end-of-input position.
    pub(crate) fn parse_statements(&mut self) -> (Node, Option<ParseError>) {
        let mut root = Node::new(NodeKind::Root);
        let start = self.current_position();

        let error = loop {
            if let Err(err) = self.cursor.raise_deferred() {
                break Some(ParseError::from(err));
            }
            if self.check(LexemeKind::EndOfInput) {
                break None;
            }
            let (statement, error) = self.parse_statement();
            if let Some(statement) = statement {
                if let Err(err) = root.push_child(statement) {
                    break Some(err.into());
                }
            }
            if error.is_some() {
                break error;
            }
        };

        root.span = if root.children().is_empty() {
            Span::point(start)
        } else {
            Span::new(start, self.previous_end())
        };
        root.fit();
        (root, error)
    }

    /// `expression '.'` followed directly by a line break.
    ///
    /// The statement is returned once its terminator matched, even when
    /// scanning the lexeme after the terminator failed.
    fn parse_statement(&mut self) -> (Option<Node>, Option<ParseError>) {
        let statement = match self.parse_expression() {
            Ok(statement) => statement,
            Err(err) => return (None, Some(err)),
        };
        debug!(
            line = statement.span.start.line,
            column = statement.span.start.column,
            kind = ?statement.kind(),
            "statement"
        );
        let terminated = self.check(LexemeKind::StatementTerminator);
        let error = self.expect(LexemeKind::StatementTerminator).err();
        (terminated.then_some(statement), error)
    }
}
