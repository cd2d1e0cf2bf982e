//! Character source for the lie lexer.
//!
//! Standalone layer with no `lie_*` dependencies:
//!
//! - [`SourceBuffer`]: reads characters from an in-memory string or any
//!   [`std::io::Read`] through a circular staging area, with bounded
//!   lookahead and line/column tracking
//! - [`CharClass`]: equivalence classes the lexer state machine dispatches on

mod char_class;
mod source_buffer;

pub use char_class::{classify, CharClass};
pub use source_buffer::{
    BufferConfig, BufferError, SourceBuffer, BATCHES_PER_RING, DEFAULT_BATCH_SIZE,
};
