//! Lexer for lie.
//!
//! [`Lexer::scan`] pulls characters from a [`lie_lexer_core::SourceBuffer`]
//! and returns one [`lie_ir::Lexeme`] per call. Keywords are resolved after
//! an identifier has been scanned in full.

mod keywords;
mod lex_error;
mod scanner;

pub use lex_error::{buffer_error_code, LexError};
pub use scanner::{lex, Lexer};
