//! Character equivalence classes.
//!
//! The lexer never matches on raw bytes in its start state; it classifies the
//! character first and dispatches on the class. Symbols keep their byte so
//! single-character operators can be resolved in one match.

/// Equivalence class of one input character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CharClass {
    /// `0`, which may open a hex or binary literal.
    Zero,
    /// `1` through `9`.
    NonZeroDigit,
    /// ASCII letter.
    Letter,
    Underscore,
    /// `"`
    Quote,
    /// Space, tab, carriage return, form feed, vertical tab.
    Whitespace,
    /// `\n`
    LineBreak,
    /// The source is exhausted.
    EndOfInput,
    /// One of `( ) [ ] { } < > ! = . : , ; ^ + - * /`.
    Symbol(u8),
    /// Anything the language has no use for.
    Invalid(u8),
}

const SYMBOLS: &[u8] = b"()[]{}<>!=.:,;^+-*/";

/// Classify a character, `None` meaning end of input.
pub fn classify(c: Option<u8>) -> CharClass {
    let Some(c) = c else {
        return CharClass::EndOfInput;
    };
    match c {
        b'0' => CharClass::Zero,
        b'1'..=b'9' => CharClass::NonZeroDigit,
        b'a'..=b'z' | b'A'..=b'Z' => CharClass::Letter,
        b'_' => CharClass::Underscore,
        b'"' => CharClass::Quote,
        b'\n' => CharClass::LineBreak,
        b' ' | b'\t' | b'\r' | b'\x0b' | b'\x0c' => CharClass::Whitespace,
        _ if SYMBOLS.contains(&c) => CharClass::Symbol(c),
        _ => CharClass::Invalid(c),
    }
}

impl CharClass {
    pub fn is_digit(self) -> bool {
        matches!(self, CharClass::Zero | CharClass::NonZeroDigit)
    }

    /// Letters, digits and underscores continue an identifier.
    pub fn is_identifier_continue(self) -> bool {
        self.is_digit() || matches!(self, CharClass::Letter | CharClass::Underscore)
    }
}

#[cfg(test)]
mod tests;
