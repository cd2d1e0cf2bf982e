//! Diagnostic system for front-end error reporting.
//!
//! Every failure in the buffer, lexer and parser maps to a stable
//! [`ErrorCode`] and renders as a [`Diagnostic`] carrying the message and the
//! 1-based line/column of the offending character or token.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
