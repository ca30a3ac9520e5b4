//! Error types for word stream operations.

use std::fmt;
use std::io;

/// Result type for word stream operations.
pub type WordResult<T> = Result<T, WordError>;

/// Errors that can occur while moving words through a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The stream ended before the requested number of words was read.
    UnexpectedEof {
        /// Number of words requested.
        requested: usize,
        /// Number of complete words that were available.
        available: usize,
    },

    /// The underlying reader or writer failed.
    Io {
        /// Kind of the underlying I/O error.
        kind: io::ErrorKind,
    },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} words but only {available} words available"
                )
            }
            Self::Io { kind } => write!(f, "stream i/o failed: {kind}"),
        }
    }
}

impl std::error::Error for WordError {}

impl From<io::Error> for WordError {
    fn from(err: io::Error) -> Self {
        Self::Io { kind: err.kind() }
    }
}
