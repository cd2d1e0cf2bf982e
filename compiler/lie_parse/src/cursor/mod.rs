//! Fixed-size lookahead window over the lexer.
//!
//! The window is a ring of [`LOOKAHEAD`] lexemes that is always full. Slot
//! `position` holds the current lexeme; `advance` drops it, scans one new
//! lexeme into the vacated slot and moves `position` forward modulo the ring
//! size.
//!
//! # Deferred lexer errors
//!
//! The ring scans up to `LOOKAHEAD - 1` lexemes ahead of the parser, so a
//! lexer failure is usually discovered before the parser has reached the
//! lexemes in front of it. The failure is parked together with the absolute
//! index of the slot it would have filled; that slot and every later one get
//! an end-of-input placeholder. The error is raised when the placeholder
//! becomes current, so errors surface in source order.

use lie_ir::{Lexeme, LexemeKind, Position};
use lie_lexer::{LexError, Lexer};
use tracing::{debug, trace};

/// Number of lexemes visible to the parser (`la(0)` through `la(LOOKAHEAD - 1)`).
pub const LOOKAHEAD: usize = 16;

/// Lookahead ring owning the lexer and the buffered lexemes.
#[derive(Debug)]
pub struct Cursor {
    lexer: Lexer,
    ring: Vec<Lexeme>,
    /// Ring slot of the current lexeme.
    position: usize,
    /// Lexemes advanced past so far.
    consumed: u64,
    /// Lexemes placed into the ring so far.
    scanned: u64,
    /// A lexer failure and the absolute index of the lexeme it replaced.
    deferred: Option<(u64, LexError)>,
    /// Set once the lexer failed; placeholders sit at this position.
    halted_at: Option<Position>,
    /// End of the most recently consumed lexeme.
    previous_end: Position,
}

impl Cursor {
    /// Fill the ring with the first [`LOOKAHEAD`] lexemes.
    pub fn new(lexer: Lexer) -> Self {
        let mut cursor = Cursor {
            lexer,
            ring: Vec::with_capacity(LOOKAHEAD),
            position: 0,
            consumed: 0,
            scanned: 0,
            deferred: None,
            halted_at: None,
            previous_end: Position::START,
        };
        for _ in 0..LOOKAHEAD {
            let lexeme = cursor.scan();
            cursor.ring.push(lexeme);
        }
        cursor
    }

    /// The lexeme `i` positions ahead of the current one (`la(0)` is current).
    #[inline]
    pub fn la(&self, i: usize) -> &Lexeme {
        debug_assert!(i < LOOKAHEAD, "lookahead {i} exceeds window of {LOOKAHEAD}");
        &self.ring[(self.position + i) % LOOKAHEAD]
    }

    /// Class of [`la(i)`](Self::la).
    #[inline]
    pub fn lt(&self, i: usize) -> LexemeKind {
        self.la(i).kind
    }

    #[inline]
    pub fn current(&self) -> &Lexeme {
        &self.ring[self.position]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Lexeme {
        &mut self.ring[self.position]
    }

    /// End position of the last lexeme advanced past (`1:1` before any).
    #[inline]
    pub fn previous_end(&self) -> Position {
        self.previous_end
    }

    /// Number of lexemes advanced past.
    #[inline]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Drop the current lexeme and scan one more into its slot.
    ///
    /// Fails with the parked lexer error when the lexeme it replaced becomes
    /// current.
    pub fn advance(&mut self) -> Result<(), LexError> {
        let next = self.scan();
        let old = std::mem::replace(&mut self.ring[self.position], next);
        trace!(
            consumed = self.consumed,
            kind = %old.kind.display_name(),
            line = old.span.start.line,
            column = old.span.start.column,
            "advance"
        );
        self.previous_end = old.span.end;
        self.position = (self.position + 1) % LOOKAHEAD;
        self.consumed += 1;
        self.raise_deferred()
    }

    /// Raise the parked lexer error if its lexeme is current. Raised once.
    pub fn raise_deferred(&mut self) -> Result<(), LexError> {
        let due = matches!(self.deferred, Some((index, _)) if index == self.consumed);
        if due {
            if let Some((_, err)) = self.deferred.take() {
                return Err(err);
            }
        }
        Ok(())
    }

    /// Release the character source.
    pub fn close(&mut self) {
        self.lexer.source_mut().close();
    }

    fn scan(&mut self) -> Lexeme {
        let index = self.scanned;
        self.scanned += 1;

        if let Some(at) = self.halted_at {
            return Lexeme::end_of_input(at);
        }

        match self.lexer.scan() {
            Ok(lexeme) => lexeme,
            Err(err) => {
                let source = self.lexer.source();
                let at = err
                    .position()
                    .unwrap_or_else(|| Position::new(source.line(), source.column()));
                debug!(index, error = %err, "lexer failed; parking error");
                self.deferred = Some((index, err));
                self.halted_at = Some(at);
                Lexeme::end_of_input(at)
            }
        }
    }
}
