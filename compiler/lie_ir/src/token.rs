//! Lexeme (token) types produced by the lexer.

use std::fmt;

use crate::{Position, Span};

/// Closed set of lexeme classes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexemeKind {
    // === Literals ===
    DecInteger,
    HexInteger,
    BinInteger,
    Float,
    String,
    Identifier,

    // === Brackets ===
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    // === Operators ===
    LessThan,
    LessOrEqual,
    LeftArrow,
    GreaterThan,
    GreaterOrEqual,
    DoubleEquals,
    NotEqual,
    Equals,
    RightArrow,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,

    // === Punctuation ===
    Dot,
    Ellipsis,
    Colon,
    Comma,
    Semicolon,
    /// `.` directly followed by a line break.
    StatementTerminator,

    // === Keywords ===
    Mod,
    Func,
    Fn,
    Use,
    As,
    Let,
    If,
    Else,
    Where,
    Cases,
    Otherwise,
    Not,
    And,
    Or,
    Xor,
    True,
    False,

    EndOfInput,
}

impl LexemeKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            LexemeKind::DecInteger => "integer",
            LexemeKind::HexInteger => "hex integer",
            LexemeKind::BinInteger => "binary integer",
            LexemeKind::Float => "float",
            LexemeKind::String => "string",
            LexemeKind::Identifier => "identifier",
            LexemeKind::StatementTerminator => "statement terminator",
            LexemeKind::EndOfInput => "end of input",
            other => other.spelling(),
        }
    }

    /// Fixed source spelling of punctuation, operators and keywords.
    ///
    /// Literal classes have no fixed spelling and return their class name.
    pub fn spelling(self) -> &'static str {
        match self {
            LexemeKind::DecInteger
            | LexemeKind::HexInteger
            | LexemeKind::BinInteger
            | LexemeKind::Float
            | LexemeKind::String
            | LexemeKind::Identifier
            | LexemeKind::EndOfInput => self.display_name(),
            LexemeKind::LeftParen => "(",
            LexemeKind::RightParen => ")",
            LexemeKind::LeftBracket => "[",
            LexemeKind::RightBracket => "]",
            LexemeKind::LeftBrace => "{",
            LexemeKind::RightBrace => "}",
            LexemeKind::LessThan => "<",
            LexemeKind::LessOrEqual => "<=",
            LexemeKind::LeftArrow => "<-",
            LexemeKind::GreaterThan => ">",
            LexemeKind::GreaterOrEqual => ">=",
            LexemeKind::DoubleEquals => "==",
            LexemeKind::NotEqual => "!=",
            LexemeKind::Equals => "=",
            LexemeKind::RightArrow => "->",
            LexemeKind::Plus => "+",
            LexemeKind::Minus => "-",
            LexemeKind::Asterisk => "*",
            LexemeKind::Slash => "/",
            LexemeKind::Caret => "^",
            LexemeKind::Dot | LexemeKind::StatementTerminator => ".",
            LexemeKind::Ellipsis => "...",
            LexemeKind::Colon => ":",
            LexemeKind::Comma => ",",
            LexemeKind::Semicolon => ";",
            LexemeKind::Mod => "mod",
            LexemeKind::Func => "func",
            LexemeKind::Fn => "fn",
            LexemeKind::Use => "use",
            LexemeKind::As => "as",
            LexemeKind::Let => "let",
            LexemeKind::If => "if",
            LexemeKind::Else => "else",
            LexemeKind::Where => "where",
            LexemeKind::Cases => "cases",
            LexemeKind::Otherwise => "otherwise",
            LexemeKind::Not => "not",
            LexemeKind::And => "and",
            LexemeKind::Or => "or",
            LexemeKind::Xor => "xor",
            LexemeKind::True => "true",
            LexemeKind::False => "false",
        }
    }

    /// Literal classes whose text is the payload rather than a fixed spelling.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            LexemeKind::DecInteger
                | LexemeKind::HexInteger
                | LexemeKind::BinInteger
                | LexemeKind::Float
                | LexemeKind::String
                | LexemeKind::Identifier
        )
    }
}

impl fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified, positioned unit of source text.
///
/// The text is always populated: literals and identifiers carry their
/// scanned text (strings already unescaped, without quotes), everything else
/// carries its fixed spelling. The end-of-input lexeme carries empty text.
#[derive(Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub text: String,
    /// First and last character of the lexeme.
    pub span: Span,
}

impl Lexeme {
    #[inline]
    pub fn new(kind: LexemeKind, text: impl Into<String>, span: Span) -> Self {
        Lexeme {
            kind,
            text: text.into(),
            span,
        }
    }

    /// End-of-input lexeme at the given position.
    pub fn end_of_input(at: Position) -> Self {
        Lexeme {
            kind: LexemeKind::EndOfInput,
            text: String::new(),
            span: Span::point(at),
        }
    }

    /// Position of the lexeme's first character.
    #[inline]
    pub fn position(&self) -> Position {
        self.span.start
    }

    /// Move the text payload out, leaving the lexeme with empty text.
    ///
    /// Used when the text becomes the value of an AST node.
    #[inline]
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

impl fmt::Debug for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span.start)
    }
}

#[cfg(test)]
mod tests;
