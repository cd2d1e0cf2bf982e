//! Position-tracking character source with bounded lookahead.
//!
//! Two backends sit behind one `peek`/`consume` interface so the lexer never
//! knows where its characters come from:
//!
//! - **Text**: the whole source is owned in memory and indexed directly.
//!   Exhausted when the cursor reaches the end of the bytes.
//! - **Reader**: any [`Read`] (files included) feeds a circular staging area
//!   of [`BATCHES_PER_RING`] batches. Two batches are fetched up front; each
//!   time the unread range drops to one batch or less, the next batch is read
//!   into the slots following the last valid position, wrapping modulo the
//!   staging-area size.
//!
//! # Layout (reader backend)
//!
//! ```text
//! ring: [ ........ | cursor ->  buffered bytes  -> | free ........ ]
//!                    ^                              ^
//!                    cursor                         (cursor + buffered) % len
//! ```
//!
//! Because a refill happens as soon as `buffered <= batch_size`, every
//! non-drained reader keeps more than `batch_size` unread bytes staged, which
//! is exactly the lookahead `peek` promises.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Characters fetched per read from a reader-backed source.
pub const DEFAULT_BATCH_SIZE: usize = 128;

/// Staging-area size, in batches.
pub const BATCHES_PER_RING: usize = 3;

/// Tuning for reader-backed buffers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BufferConfig {
    /// Characters per read; also the maximum `peek` distance.
    pub batch_size: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl BufferConfig {
    #[must_use]
    pub const fn with_batch_size(batch_size: usize) -> Self {
        BufferConfig { batch_size }
    }

    /// Staging-area length, or `None` if the batch size is unusable.
    fn ring_len(self) -> Option<usize> {
        if self.batch_size == 0 {
            return None;
        }
        self.batch_size.checked_mul(BATCHES_PER_RING)
    }
}

/// Failures of the character source.
///
/// Running out of input is not an error: `peek` and `consume` report it as
/// `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("cannot open source `{}`: {source}", path.display())]
    CannotOpenSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid batch size {batch_size}")]
    InvalidBatchSize { batch_size: usize },

    #[error("source buffer used after close")]
    Closed,

    #[error("cannot look {distance} characters ahead (at most {limit})")]
    LookaheadTooFar { distance: usize, limit: usize },

    #[error("failed to read from `{name}`: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

enum Backend {
    Text(Box<[u8]>),
    Reader {
        reader: Box<dyn Read>,
        ring: Box<[u8]>,
        /// The reader has returned end of file.
        drained: bool,
    },
    Closed,
}

/// What the most recent `consume` produced; drives line/column updates.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Last {
    Nothing,
    Char(u8),
    End,
}

/// Buffered character source over a string, file or reader.
pub struct SourceBuffer {
    name: String,
    backend: Backend,
    batch_size: usize,
    /// Index of the next character to consume (into the text or the ring).
    cursor: usize,
    /// Characters staged from `cursor` onward; the last valid position is
    /// `cursor + buffered - 1` (modulo the ring length).
    buffered: usize,
    last: Last,
    line: u32,
    column: u32,
}

impl SourceBuffer {
    /// Buffer over an in-memory string.
    pub fn new(source: &str) -> Self {
        Self::from_string(source.to_owned())
    }

    /// Buffer taking ownership of an in-memory string.
    pub fn from_string(source: String) -> Self {
        let bytes = source.into_bytes().into_boxed_slice();
        SourceBuffer {
            name: "<string>".to_owned(),
            buffered: bytes.len(),
            backend: Backend::Text(bytes),
            batch_size: DEFAULT_BATCH_SIZE,
            cursor: 0,
            last: Last::Nothing,
            line: 1,
            column: 0,
        }
    }

    /// Open a file with the default configuration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        Self::open_with(path, BufferConfig::default())
    }

    /// Open a file and read it in batches of `config.batch_size`.
    pub fn open_with(path: impl AsRef<Path>, config: BufferConfig) -> Result<Self, BufferError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BufferError::CannotOpenSource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path.display().to_string(), config)
    }

    /// Buffer over an arbitrary reader. The first two batches are read
    /// immediately.
    pub fn from_reader(
        reader: impl Read + 'static,
        name: impl Into<String>,
        config: BufferConfig,
    ) -> Result<Self, BufferError> {
        let ring_len = config.ring_len().ok_or(BufferError::InvalidBatchSize {
            batch_size: config.batch_size,
        })?;
        let mut buffer = SourceBuffer {
            name: name.into(),
            backend: Backend::Reader {
                reader: Box::new(reader),
                ring: vec![0; ring_len].into_boxed_slice(),
                drained: false,
            },
            batch_size: config.batch_size,
            cursor: 0,
            buffered: 0,
            last: Last::Nothing,
            line: 1,
            column: 0,
        };
        buffer.refill(2 * config.batch_size)?;
        Ok(buffer)
    }

    /// Display name of the source, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum distance accepted by [`peek`](Self::peek).
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Line of the most recently consumed character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the most recently consumed character (1-based; 0 before the
    /// first `consume`).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` once every character has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.buffered == 0
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.backend, Backend::Closed)
    }

    /// The character the `k`-th next `consume` would return (`peek(0)` is the
    /// next one), or `None` past the end of input. Never changes state.
    pub fn peek(&self, k: usize) -> Result<Option<u8>, BufferError> {
        if k > self.batch_size {
            return Err(BufferError::LookaheadTooFar {
                distance: k,
                limit: self.batch_size,
            });
        }
        if k >= self.buffered {
            return match self.backend {
                Backend::Closed => Err(BufferError::Closed),
                _ => Ok(None),
            };
        }
        Ok(self.byte_at(self.cursor + k))
    }

    /// Take the next character, or `None` forever once the input is
    /// exhausted.
    ///
    /// Line and column describe the character just returned. The first
    /// `None` sits one column past the last character (or at column 1 of the
    /// next line after a line break); later calls do not move it.
    pub fn consume(&mut self) -> Result<Option<u8>, BufferError> {
        if self.is_closed() {
            return Err(BufferError::Closed);
        }

        match self.last {
            Last::Char(b'\n') => {
                self.line += 1;
                self.column = 1;
            }
            Last::End => {}
            Last::Nothing | Last::Char(_) => self.column += 1,
        }

        if self.buffered == 0 {
            self.last = Last::End;
            return Ok(None);
        }

        let Some(c) = self.byte_at(self.cursor) else {
            self.last = Last::End;
            return Ok(None);
        };
        self.last = Last::Char(c);
        self.buffered -= 1;

        if let Backend::Reader { ring, .. } = &self.backend {
            self.cursor = (self.cursor + 1) % ring.len();
            if self.buffered <= self.batch_size {
                self.refill(self.batch_size)?;
            }
        } else {
            self.cursor += 1;
        }

        Ok(Some(c))
    }

    /// Release the backing reader and clear all state. Further `consume`
    /// calls fail; closing twice is harmless.
    pub fn close(&mut self) {
        self.backend = Backend::Closed;
        self.cursor = 0;
        self.buffered = 0;
        self.last = Last::Nothing;
        self.line = 0;
        self.column = 0;
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        match &self.backend {
            Backend::Text(bytes) => bytes.get(index).copied(),
            Backend::Reader { ring, .. } => ring.get(index % ring.len()).copied(),
            Backend::Closed => None,
        }
    }

    /// Read up to `want` bytes into the free slots after the last valid
    /// position. Short reads are retried until `want` bytes arrived or the
    /// reader reports end of file.
    fn refill(&mut self, want: usize) -> Result<(), BufferError> {
        let Backend::Reader {
            reader,
            ring,
            drained,
        } = &mut self.backend
        else {
            return Ok(());
        };

        let len = ring.len();
        let mut filled = 0;
        while !*drained && filled < want && self.buffered < len {
            let tail = (self.cursor + self.buffered) % len;
            let end = (tail + (want - filled)).min(len);
            match reader.read(&mut ring[tail..end]) {
                Ok(0) => *drained = true,
                Ok(n) => {
                    self.buffered += n;
                    filled += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(BufferError::Read {
                        name: self.name.clone(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = match self.backend {
            Backend::Text(_) => "text",
            Backend::Reader { .. } => "reader",
            Backend::Closed => "closed",
        };
        f.debug_struct("SourceBuffer")
            .field("name", &self.name)
            .field("backend", &backend)
            .field("cursor", &self.cursor)
            .field("buffered", &self.buffered)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish_non_exhaustive()
    }
}
