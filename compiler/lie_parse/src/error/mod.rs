//! Parse error types.
//!
//! The parser stops at the first error. Lexer and buffer failures arrive
//! wrapped in [`ParseError::Lex`], tree-building failures in
//! [`ParseError::Ast`], so one type reaches the caller whatever the origin.

use lie_diagnostic::{Diagnostic, ErrorCode};
use lie_ir::{AstError, LexemeKind, Position};
use lie_lexer::LexError;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected {}, found {}", describe(*expected), describe(*found))]
    MatchFailed {
        expected: LexemeKind,
        found: LexemeKind,
        position: Position,
    },

    #[error("{} carries no value", describe(*kind))]
    MatchedTokenHasNoValue { kind: LexemeKind, position: Position },

    #[error("expected an expression, found {}", describe(*found))]
    ExpectedAtom { found: LexemeKind, position: Position },

    #[error("numeric literal `{text}` is not representable in 64 bits")]
    LiteralOutOfRange { text: String, position: Position },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Ast(#[from] AstError),
}

/// Lexeme class as it reads in a message: fixed spellings are quoted.
fn describe(kind: LexemeKind) -> String {
    if kind.is_literal()
        || matches!(
            kind,
            LexemeKind::EndOfInput | LexemeKind::StatementTerminator
        )
    {
        kind.display_name().to_owned()
    } else {
        format!("'{}'", kind.spelling())
    }
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::MatchFailed { .. } => ErrorCode::E0401,
            ParseError::MatchedTokenHasNoValue { .. }
            | ParseError::Ast(AstError::ValueMismatch { .. }) => ErrorCode::E0402,
            ParseError::ExpectedAtom { .. } => ErrorCode::E0403,
            ParseError::LiteralOutOfRange { .. } => ErrorCode::E0404,
            ParseError::Lex(err) => err.code(),
            ParseError::Ast(AstError::OutOfMemory { .. }) => ErrorCode::E0102,
        }
    }

    /// Offending lexeme or character, if the failure has a source location.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::MatchFailed { position, .. }
            | ParseError::MatchedTokenHasNoValue { position, .. }
            | ParseError::ExpectedAtom { position, .. }
            | ParseError::LiteralOutOfRange { position, .. } => Some(*position),
            ParseError::Lex(err) => err.position(),
            ParseError::Ast(_) => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string()).at_opt(self.position())
    }
}
