//! The lexer state machine.
//!
//! `scan` starts in [`State::Start`], classifies the first character and
//! moves through one state per character until a state emits a lexeme or
//! fails. States that may end a lexeme decide on `peek(0)` (or `peek(1)`
//! for a `.` after digits) so the character that ends a lexeme is never
//! consumed. States that require a specific character consume it and fail
//! if it is wrong.

use lie_ir::{Lexeme, LexemeKind, Position, Span};
use lie_lexer_core::{classify, CharClass, SourceBuffer};
use tracing::trace;

use crate::keywords;
use crate::LexError;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Start,
    // Numbers
    SeenZero,
    Digits,
    Fraction,
    ExponentStart,
    ExponentSign,
    Exponent,
    HexStart,
    Hex,
    BinStart,
    Bin,
    // Strings
    String,
    Escape,
    Identifier,
    // Operators
    SeenDot,
    SeenTwoDots,
    SeenMinus,
    SeenSlash,
    Comment,
    SeenLess,
    SeenGreater,
    SeenBang,
    SeenEquals,
}

/// Outcome of one state.
enum Step {
    Goto(State),
    Emit(LexemeKind),
}

/// Turns a [`SourceBuffer`] into lexemes, one per [`scan`](Lexer::scan).
#[derive(Debug)]
pub struct Lexer {
    source: SourceBuffer,
    /// Characters of the lexeme being scanned (unescaped for strings).
    text: Vec<u8>,
    start: Position,
    end: Position,
}

impl Lexer {
    pub fn new(source: SourceBuffer) -> Self {
        Lexer {
            source,
            text: Vec::new(),
            start: Position::UNSET,
            end: Position::UNSET,
        }
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut SourceBuffer {
        &mut self.source
    }

    /// Scan the next lexeme. Once the input is exhausted every call returns
    /// an end-of-input lexeme at the same position.
    pub fn scan(&mut self) -> Result<Lexeme, LexError> {
        self.text.clear();
        let mut state = State::Start;
        loop {
            let step = match state {
                State::Start => self.start()?,
                State::SeenZero => self.seen_zero()?,
                State::Digits => self.digits()?,
                State::Fraction => self.fraction()?,
                State::ExponentStart => self.exponent_start()?,
                State::ExponentSign => self.exponent_sign()?,
                State::Exponent => self.exponent()?,
                State::HexStart => self.radix_start(State::Hex, |c| c.is_ascii_hexdigit())?,
                State::Hex => {
                    self.radix_digits(State::Hex, LexemeKind::HexInteger, |c| c.is_ascii_hexdigit())?
                }
                State::BinStart => self.radix_start(State::Bin, is_bin_digit)?,
                State::Bin => self.radix_digits(State::Bin, LexemeKind::BinInteger, is_bin_digit)?,
                State::String => self.string()?,
                State::Escape => self.escape()?,
                State::Identifier => self.identifier()?,
                State::SeenDot => self.seen_dot()?,
                State::SeenTwoDots => self.seen_two_dots()?,
                State::SeenMinus => self.one_of(&[(b'>', LexemeKind::RightArrow)], LexemeKind::Minus)?,
                State::SeenSlash => self.seen_slash()?,
                State::Comment => self.comment()?,
                State::SeenLess => self.one_of(
                    &[(b'=', LexemeKind::LessOrEqual), (b'-', LexemeKind::LeftArrow)],
                    LexemeKind::LessThan,
                )?,
                State::SeenGreater => {
                    self.one_of(&[(b'=', LexemeKind::GreaterOrEqual)], LexemeKind::GreaterThan)?
                }
                State::SeenBang => self.seen_bang()?,
                State::SeenEquals => {
                    self.one_of(&[(b'=', LexemeKind::DoubleEquals)], LexemeKind::Equals)?
                }
            };
            match step {
                Step::Goto(next) => state = next,
                Step::Emit(kind) => return Ok(self.emit(kind)),
            }
        }
    }

    // ─── Character access ────────────────────────────────────────────────

    fn here(&self) -> Position {
        Position::new(self.source.line(), self.source.column())
    }

    fn peek(&self, k: usize) -> Result<Option<u8>, LexError> {
        Ok(self.source.peek(k)?)
    }

    /// Consume one character as part of the current lexeme without keeping it.
    fn bump(&mut self) -> Result<Option<u8>, LexError> {
        let c = self.source.consume()?;
        self.end = self.here();
        Ok(c)
    }

    /// Consume one character and append it to the lexeme text.
    fn munch(&mut self) -> Result<Option<u8>, LexError> {
        let c = self.bump()?;
        if let Some(c) = c {
            self.text.push(c);
        }
        Ok(c)
    }

    fn unexpected(&self, c: Option<u8>) -> LexError {
        LexError::unexpected(c, self.here())
    }

    fn emit(&mut self, kind: LexemeKind) -> Lexeme {
        let lexeme = match kind {
            LexemeKind::EndOfInput => Lexeme::end_of_input(self.start),
            _ if kind.is_literal() => {
                let bytes = std::mem::take(&mut self.text);
                let text = String::from_utf8(bytes)
                    .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
                Lexeme::new(kind, text, Span::new(self.start, self.end))
            }
            _ => Lexeme::new(kind, kind.spelling(), Span::new(self.start, self.end)),
        };
        trace!(
            kind = %lexeme.kind.display_name(),
            text = %lexeme.text,
            line = lexeme.span.start.line,
            column = lexeme.span.start.column,
            "scan"
        );
        lexeme
    }

    // ─── States ──────────────────────────────────────────────────────────

    fn start(&mut self) -> Result<Step, LexError> {
        let c = self.source.consume()?;
        self.start = self.here();
        self.end = self.start;

        let step = match classify(c) {
            CharClass::Whitespace | CharClass::LineBreak => Step::Goto(State::Start),
            CharClass::Zero => {
                self.text.extend(c);
                Step::Goto(State::SeenZero)
            }
            CharClass::NonZeroDigit => {
                self.text.extend(c);
                Step::Goto(State::Digits)
            }
            CharClass::Letter | CharClass::Underscore => {
                self.text.extend(c);
                Step::Goto(State::Identifier)
            }
            CharClass::Quote => Step::Goto(State::String),
            CharClass::EndOfInput => Step::Emit(LexemeKind::EndOfInput),
            CharClass::Symbol(symbol) => symbol_step(symbol).ok_or_else(|| self.unexpected(c))?,
            CharClass::Invalid(_) => return Err(self.unexpected(c)),
        };
        Ok(step)
    }

    fn seen_zero(&mut self) -> Result<Step, LexError> {
        match self.peek(0)? {
            Some(b'x' | b'X') => {
                self.munch()?;
                Ok(Step::Goto(State::HexStart))
            }
            Some(b'b' | b'B') => {
                self.munch()?;
                Ok(Step::Goto(State::BinStart))
            }
            _ => self.digits(),
        }
    }

    fn digits(&mut self) -> Result<Step, LexError> {
        match self.peek(0)? {
            Some(c) if c.is_ascii_digit() => {
                self.munch()?;
                Ok(Step::Goto(State::Digits))
            }
            Some(b'.') if self.peek(1)?.is_some_and(|c| c.is_ascii_digit()) => {
                self.munch()?;
                Ok(Step::Goto(State::Fraction))
            }
            Some(b'e' | b'E') => {
                self.munch()?;
                Ok(Step::Goto(State::ExponentStart))
            }
            _ => Ok(Step::Emit(LexemeKind::DecInteger)),
        }
    }

    fn fraction(&mut self) -> Result<Step, LexError> {
        match self.peek(0)? {
            Some(c) if c.is_ascii_digit() => {
                self.munch()?;
                Ok(Step::Goto(State::Fraction))
            }
            Some(b'e' | b'E') => {
                self.munch()?;
                Ok(Step::Goto(State::ExponentStart))
            }
            _ => Ok(Step::Emit(LexemeKind::Float)),
        }
    }

    fn exponent_start(&mut self) -> Result<Step, LexError> {
        match self.munch()? {
            Some(c) if c.is_ascii_digit() => Ok(Step::Goto(State::Exponent)),
            Some(b'-') => Ok(Step::Goto(State::ExponentSign)),
            c => Err(self.unexpected(c)),
        }
    }

    fn exponent_sign(&mut self) -> Result<Step, LexError> {
        match self.munch()? {
            Some(c) if c.is_ascii_digit() => Ok(Step::Goto(State::Exponent)),
            c => Err(self.unexpected(c)),
        }
    }

    fn exponent(&mut self) -> Result<Step, LexError> {
        match self.peek(0)? {
            Some(c) if c.is_ascii_digit() => {
                self.munch()?;
                Ok(Step::Goto(State::Exponent))
            }
            _ => Ok(Step::Emit(LexemeKind::Float)),
        }
    }

    /// First digit after `0x` / `0b`: required.
    fn radix_start(&mut self, next: State, is_digit: fn(u8) -> bool) -> Result<Step, LexError> {
        match self.munch()? {
            Some(c) if is_digit(c) => Ok(Step::Goto(next)),
            c => Err(self.unexpected(c)),
        }
    }

    fn radix_digits(
        &mut self,
        state: State,
        kind: LexemeKind,
        is_digit: fn(u8) -> bool,
    ) -> Result<Step, LexError> {
        match self.peek(0)? {
            Some(c) if is_digit(c) => {
                self.munch()?;
                Ok(Step::Goto(state))
            }
            _ => Ok(Step::Emit(kind)),
        }
    }

    fn string(&mut self) -> Result<Step, LexError> {
        match self.bump()? {
            Some(b'"') => Ok(Step::Emit(LexemeKind::String)),
            Some(b'\\') => Ok(Step::Goto(State::Escape)),
            Some(c) => {
                self.text.push(c);
                Ok(Step::Goto(State::String))
            }
            None => Err(LexError::UnterminatedString {
                position: self.here(),
            }),
        }
    }

    fn escape(&mut self) -> Result<Step, LexError> {
        let unescaped = match self.bump()? {
            Some(b'n') => b'\n',
            Some(b't') => b'\t',
            Some(c) => {
                return Err(LexError::UnknownEscapeSequence {
                    escape: char::from(c),
                    position: self.here(),
                });
            }
            None => {
                return Err(LexError::UnterminatedString {
                    position: self.here(),
                });
            }
        };
        self.text.push(unescaped);
        Ok(Step::Goto(State::String))
    }

    fn identifier(&mut self) -> Result<Step, LexError> {
        let c = self.peek(0)?;
        if classify(c).is_identifier_continue() {
            self.munch()?;
            return Ok(Step::Goto(State::Identifier));
        }
        // A single `?` may end an identifier.
        if c == Some(b'?') {
            self.munch()?;
        }
        let kind = std::str::from_utf8(&self.text)
            .ok()
            .and_then(keywords::lookup)
            .unwrap_or(LexemeKind::Identifier);
        Ok(Step::Emit(kind))
    }

    fn seen_dot(&mut self) -> Result<Step, LexError> {
        match self.peek(0)? {
            Some(b'.') => {
                self.bump()?;
                Ok(Step::Goto(State::SeenTwoDots))
            }
            Some(b'\n' | b'\r') => {
                self.bump()?;
                Ok(Step::Emit(LexemeKind::StatementTerminator))
            }
            _ => Ok(Step::Emit(LexemeKind::Dot)),
        }
    }

    fn seen_two_dots(&mut self) -> Result<Step, LexError> {
        match self.bump()? {
            Some(b'.') => Ok(Step::Emit(LexemeKind::Ellipsis)),
            c => Err(self.unexpected(c)),
        }
    }

    fn seen_slash(&mut self) -> Result<Step, LexError> {
        if self.peek(0)? == Some(b'/') {
            self.bump()?;
            return Ok(Step::Goto(State::Comment));
        }
        Ok(Step::Emit(LexemeKind::Slash))
    }

    fn comment(&mut self) -> Result<Step, LexError> {
        match self.bump()? {
            Some(b'\n' | b'\r') => Ok(Step::Goto(State::Start)),
            Some(_) => Ok(Step::Goto(State::Comment)),
            None => Err(LexError::UnterminatedComment {
                position: self.here(),
            }),
        }
    }

    fn seen_bang(&mut self) -> Result<Step, LexError> {
        match self.bump()? {
            Some(b'=') => Ok(Step::Emit(LexemeKind::NotEqual)),
            c => Err(self.unexpected(c)),
        }
    }

    /// Two-character operators: consume the second character if it is one of
    /// `pairs`, otherwise emit the single-character `fallback`.
    fn one_of(
        &mut self,
        pairs: &[(u8, LexemeKind)],
        fallback: LexemeKind,
    ) -> Result<Step, LexError> {
        let c = self.peek(0)?;
        for &(second, kind) in pairs {
            if c == Some(second) {
                self.bump()?;
                return Ok(Step::Emit(kind));
            }
        }
        Ok(Step::Emit(fallback))
    }
}

fn is_bin_digit(c: u8) -> bool {
    matches!(c, b'0' | b'1')
}

/// Start-state transition for a punctuation character.
fn symbol_step(symbol: u8) -> Option<Step> {
    let step = match symbol {
        b'(' => Step::Emit(LexemeKind::LeftParen),
        b')' => Step::Emit(LexemeKind::RightParen),
        b'[' => Step::Emit(LexemeKind::LeftBracket),
        b']' => Step::Emit(LexemeKind::RightBracket),
        b'{' => Step::Emit(LexemeKind::LeftBrace),
        b'}' => Step::Emit(LexemeKind::RightBrace),
        b':' => Step::Emit(LexemeKind::Colon),
        b',' => Step::Emit(LexemeKind::Comma),
        b';' => Step::Emit(LexemeKind::Semicolon),
        b'^' => Step::Emit(LexemeKind::Caret),
        b'+' => Step::Emit(LexemeKind::Plus),
        b'*' => Step::Emit(LexemeKind::Asterisk),
        b'<' => Step::Goto(State::SeenLess),
        b'>' => Step::Goto(State::SeenGreater),
        b'!' => Step::Goto(State::SeenBang),
        b'=' => Step::Goto(State::SeenEquals),
        b'.' => Step::Goto(State::SeenDot),
        b'-' => Step::Goto(State::SeenMinus),
        b'/' => Step::Goto(State::SeenSlash),
        _ => return None,
    };
    Some(step)
}

/// Scan an entire source, up to and including the end-of-input lexeme.
pub fn lex(source: SourceBuffer) -> Result<Vec<Lexeme>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut lexemes = Vec::new();
    loop {
        let lexeme = lexer.scan()?;
        let done = lexeme.kind == LexemeKind::EndOfInput;
        lexemes.push(lexeme);
        if done {
            return Ok(lexemes);
        }
    }
}
