//! Lexer error types.
//!
//! Lexical failures carry the offending character (`None` for end of input)
//! and the position where it was read. Buffer failures pass through
//! unchanged so the first error in the chain is what gets reported.

use lie_diagnostic::{Diagnostic, ErrorCode};
use lie_ir::Position;
use lie_lexer_core::BufferError;

#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("unexpected {}", describe(*symbol))]
    UnexpectedSymbol {
        symbol: Option<char>,
        position: Position,
    },

    #[error("end of input inside a comment; comments end with a line break")]
    UnterminatedComment { position: Position },

    #[error("end of input inside a string literal")]
    UnterminatedString { position: Position },

    #[error("unrecognized escape sequence `\\{escape}`")]
    UnknownEscapeSequence { escape: char, position: Position },

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

fn describe(symbol: Option<char>) -> String {
    match symbol {
        Some(c) if c.is_ascii_graphic() => format!("symbol '{c}'"),
        Some(c) => format!("symbol {:?}", c),
        None => "end of input".to_owned(),
    }
}

impl LexError {
    pub(crate) fn unexpected(symbol: Option<u8>, position: Position) -> Self {
        LexError::UnexpectedSymbol {
            symbol: symbol.map(char::from),
            position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnexpectedSymbol { .. } => ErrorCode::E0301,
            LexError::UnterminatedComment { .. } => ErrorCode::E0302,
            LexError::UnterminatedString { .. } => ErrorCode::E0303,
            LexError::UnknownEscapeSequence { .. } => ErrorCode::E0304,
            LexError::Buffer(err) => buffer_error_code(err),
        }
    }

    /// Where the failure happened. Buffer failures have no source position.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::UnexpectedSymbol { position, .. }
            | LexError::UnterminatedComment { position }
            | LexError::UnterminatedString { position }
            | LexError::UnknownEscapeSequence { position, .. } => Some(*position),
            LexError::Buffer(_) => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string()).at_opt(self.position())
    }
}

/// Error code for a character-source failure.
pub fn buffer_error_code(err: &BufferError) -> ErrorCode {
    match err {
        BufferError::CannotOpenSource { .. } => ErrorCode::E0101,
        BufferError::InvalidBatchSize { .. } | BufferError::Closed => ErrorCode::E0202,
        BufferError::LookaheadTooFar { .. } => ErrorCode::E0203,
        BufferError::Read { .. } => ErrorCode::E0204,
    }
}
