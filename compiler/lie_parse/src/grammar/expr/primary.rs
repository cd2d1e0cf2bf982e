//! Atoms and trailers.
//!
//! ```text
//! primary := atom trailer*
//! trailer := '(' args? ')' | '[' args ']' | '.' IDENTIFIER
//! atom    := INTEGER | FLOAT | STRING | IDENTIFIER | BOOL | '(' expression ')'
//! args    := expression ( ',' expression )*
//! ```

use lie_ir::{LexemeKind, Node, NodeKind, Position, Span};

use crate::{ParseError, Parser};

impl Parser {
    /// An atom followed by any number of call, subscript and member trailers,
    /// applied left to right.
    pub(crate) fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_atom()?;

        loop {
            let start = expr.span.start;
            expr = match self.current_kind() {
                LexemeKind::LeftParen => {
                    self.advance()?;
                    let mut call = Node::new(NodeKind::Call);
                    call.push_child(expr)?;
                    if !self.check(LexemeKind::RightParen) {
                        self.parse_expression_list(&mut call)?;
                    }
                    self.expect(LexemeKind::RightParen)?;
                    self.close_trailer(call, start)
                }
                LexemeKind::LeftBracket => {
                    self.advance()?;
                    let mut subscript = Node::new(NodeKind::Subscript);
                    subscript.push_child(expr)?;
                    self.parse_expression_list(&mut subscript)?;
                    self.expect(LexemeKind::RightBracket)?;
                    self.close_trailer(subscript, start)
                }
                LexemeKind::Dot => {
                    self.advance()?;
                    let mut member = Node::new(NodeKind::Member);
                    member.push_child(expr)?;
                    let mut name = Node::new(NodeKind::Identifier);
                    self.expect_and_capture(LexemeKind::Identifier, &mut name)?;
                    member.push_child(name)?;
                    self.close_trailer(member, start)
                }
                _ => return Ok(expr),
            };
        }
    }

    /// Span a finished trailer node from its target to the last lexeme
    /// consumed.
    fn close_trailer(&self, mut node: Node, start: Position) -> Node {
        node.span = Span::new(start, self.previous_end());
        node.fit();
        node
    }

    /// Comma-separated expressions, appended to `node`.
    fn parse_expression_list(&mut self, node: &mut Node) -> Result<(), ParseError> {
        node.push_child(self.parse_expression()?)?;
        while self.check(LexemeKind::Comma) {
            self.advance()?;
            node.push_child(self.parse_expression()?)?;
        }
        Ok(())
    }

    /// A literal, an identifier or a parenthesized expression.
    ///
    /// Anything else is [`ParseError::ExpectedAtom`]; the offending lexeme is
    /// left in place.
    fn parse_atom(&mut self) -> Result<Node, ParseError> {
        let kind = self.current_kind();
        let node_kind = match kind {
            LexemeKind::DecInteger | LexemeKind::HexInteger | LexemeKind::BinInteger => {
                NodeKind::Integer
            }
            LexemeKind::Float => NodeKind::Float,
            LexemeKind::String => NodeKind::String,
            LexemeKind::Identifier => NodeKind::Identifier,
            LexemeKind::True | LexemeKind::False => NodeKind::Boolean,
            LexemeKind::LeftParen => {
                self.advance()?;
                let inner = self.parse_expression()?;
                self.expect(LexemeKind::RightParen)?;
                return Ok(inner);
            }
            found => {
                return Err(ParseError::ExpectedAtom {
                    found,
                    position: self.current_position(),
                })
            }
        };

        let mut node = Node::new(node_kind);
        self.expect_and_capture(kind, &mut node)?;
        Ok(node)
    }
}
