//! Recursive descent parser for lie.
//!
//! Pulls lexemes through a [`LOOKAHEAD`]-slot ring and builds an owned
//! [`Node`] tree. Parsing stops at the first error; whatever was built up to
//! that point is returned alongside it in [`ParseOutput`].

mod cursor;
mod error;
mod grammar;

use std::path::Path;

use lie_ir::{Lexeme, LexemeKind, Node, Position, Span, Value};
use lie_lexer::{LexError, Lexer};
use lie_lexer_core::SourceBuffer;
use tracing::debug;

pub use cursor::{Cursor, LOOKAHEAD};
pub use error::ParseError;

/// Result of parsing a whole program.
#[derive(Debug)]
pub struct ParseOutput {
    /// Root node holding every statement parsed before the first error.
    pub root: Node,
    /// First error, if any. The tree is incomplete when this is set.
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }

    /// The tree, or the first error (discarding the partial tree).
    pub fn into_result(self) -> Result<Node, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.root),
        }
    }
}

/// Parser state.
#[derive(Debug)]
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    pub fn new(source: SourceBuffer) -> Self {
        Parser {
            cursor: Cursor::new(Lexer::new(source)),
        }
    }

    /// The lexeme `i` positions ahead (`la(0)` is current).
    #[inline]
    pub fn la(&self, i: usize) -> &Lexeme {
        self.cursor.la(i)
    }

    /// Class of the lexeme `i` positions ahead.
    #[inline]
    pub fn lt(&self, i: usize) -> LexemeKind {
        self.cursor.lt(i)
    }

    #[inline]
    fn current_kind(&self) -> LexemeKind {
        self.cursor.lt(0)
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current().span
    }

    #[inline]
    fn current_position(&self) -> Position {
        self.cursor.current().position()
    }

    /// End of the last lexeme consumed.
    #[inline]
    fn previous_end(&self) -> Position {
        self.cursor.previous_end()
    }

    #[inline]
    fn check(&self, kind: LexemeKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current lexeme.
    pub fn advance(&mut self) -> Result<(), ParseError> {
        Ok(self.cursor.advance()?)
    }

    /// Consume the current lexeme, failing unless it is of class `kind`.
    ///
    /// The lexeme is consumed even on failure so a caller that carries on
    /// always makes progress.
    pub fn expect(&mut self, kind: LexemeKind) -> Result<(), ParseError> {
        if self.check(kind) {
            return self.advance();
        }
        let err = self.make_expect_error(kind);
        debug!(error = %err, "match failed");
        if let Err(skipped) = self.cursor.advance() {
            debug!(error = %skipped, "lexer error behind failed match");
        }
        Err(err)
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: LexemeKind) -> ParseError {
        ParseError::MatchFailed {
            expected: kind,
            found: self.current_kind(),
            position: self.current_position(),
        }
    }

    /// [`expect`](Self::expect) `kind`, then store the lexeme's value in
    /// `node` and set the node's span to the lexeme's.
    ///
    /// Integer text is read in its base (after the `0x`/`0b` prefix), float
    /// text as `f64`, `true`/`false` as booleans. String and identifier text
    /// is moved out of the lexeme, not copied.
    pub fn expect_and_capture(&mut self, kind: LexemeKind, node: &mut Node) -> Result<(), ParseError> {
        if !self.check(kind) {
            return self.expect(kind);
        }

        let lexeme = self.cursor.current_mut();
        let position = lexeme.position();
        node.span = lexeme.span;
        let value = match kind {
            LexemeKind::DecInteger => parse_integer(&lexeme.text, 0, 10, position),
            LexemeKind::HexInteger => parse_integer(&lexeme.text, 2, 16, position),
            LexemeKind::BinInteger => parse_integer(&lexeme.text, 2, 2, position),
            LexemeKind::Float => parse_float(&lexeme.text, position),
            LexemeKind::True => Ok(Value::Boolean(true)),
            LexemeKind::False => Ok(Value::Boolean(false)),
            LexemeKind::String | LexemeKind::Identifier => Ok(Value::Text(lexeme.take_text())),
            other => Err(ParseError::MatchedTokenHasNoValue {
                kind: other,
                position,
            }),
        };

        let advanced = self.advance();
        node.set_value(value?)?;
        advanced
    }

    /// Parse a whole program: statements until end of input.
    pub fn parse_root(&mut self) -> ParseOutput {
        let (root, error) = self.parse_statements();
        ParseOutput { root, error }
    }

    /// Release the character source.
    pub fn close(&mut self) {
        self.cursor.close();
    }
}

/// Read `text[prefix..]` as an integer in `radix`.
fn parse_integer(text: &str, prefix: usize, radix: u32, position: Position) -> Result<Value, ParseError> {
    let digits = text.get(prefix..).unwrap_or_default();
    i64::from_str_radix(digits, radix)
        .map(Value::Integer)
        .map_err(|_| ParseError::LiteralOutOfRange {
            text: text.to_owned(),
            position,
        })
}

fn parse_float(text: &str, position: Position) -> Result<Value, ParseError> {
    text.parse::<f64>()
        .map(Value::Float)
        .map_err(|_| ParseError::LiteralOutOfRange {
            text: text.to_owned(),
            position,
        })
}

/// Parse everything a buffer holds, then close it.
pub fn parse(source: SourceBuffer) -> ParseOutput {
    let mut parser = Parser::new(source);
    let output = parser.parse_root();
    parser.close();
    if let Some(err) = &output.error {
        debug!(code = %err.code(), error = %err, "parse failed");
    }
    output
}

/// Parse an in-memory program.
pub fn parse_str(source: &str) -> ParseOutput {
    parse(SourceBuffer::new(source))
}

/// Parse a file. Fails only if the file cannot be opened; parse errors are
/// reported in the output.
pub fn parse_path(path: impl AsRef<Path>) -> Result<ParseOutput, ParseError> {
    let source = SourceBuffer::open(path).map_err(LexError::from)?;
    Ok(parse(source))
}

#[cfg(test)]
mod tests;
