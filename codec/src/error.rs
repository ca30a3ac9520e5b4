//! Error types for codec operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

use wire::SectionTag;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while loading, converting or saving a city file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The source or destination file could not be opened.
    OpenFailure { path: PathBuf, kind: io::ErrorKind },

    /// A section held fewer elements than the format requires.
    ShortRead {
        section: SectionTag,
        expected: usize,
        actual: usize,
    },

    /// The stream failed while writing. `section` is `None` when the final
    /// flush failed.
    WriteFailure {
        section: Option<SectionTag>,
        kind: io::ErrorKind,
    },

    /// Section read error other than a short read.
    Wire(wire::DecodeError),

    /// Section write error other than a stream failure.
    Encode(wire::EncodeError),

    /// Misc field decode/encode error.
    Schema(schema::SchemaError),

    /// A normalized tile does not fit in a 16-bit tile code.
    TileOutOfRange { row: usize, col: usize, value: i32 },
}

impl CodecError {
    /// Returns `true` if the file was structurally too short.
    #[must_use]
    pub const fn is_short_read(&self) -> bool {
        matches!(self, Self::ShortRead { .. })
    }

    pub(crate) fn open(path: PathBuf, err: &io::Error) -> Self {
        Self::OpenFailure {
            path,
            kind: err.kind(),
        }
    }

    pub(crate) fn flush(err: wordstream::WordError) -> Self {
        let kind = match err {
            wordstream::WordError::Io { kind } => kind,
            wordstream::WordError::UnexpectedEof { .. } => io::ErrorKind::UnexpectedEof,
        };
        Self::WriteFailure {
            section: None,
            kind,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFailure { path, kind } => {
                write!(f, "cannot open '{}': {kind}", path.display())
            }
            Self::ShortRead {
                section,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "truncated or foreign file: {section} has {actual} of {expected} elements"
                )
            }
            Self::WriteFailure {
                section: Some(section),
                kind,
            } => write!(f, "write failed in {section}: {kind}"),
            Self::WriteFailure {
                section: None,
                kind,
            } => write!(f, "write failed while flushing: {kind}"),
            Self::Wire(e) => write!(f, "section error: {e}"),
            Self::Encode(e) => write!(f, "section error: {e}"),
            Self::Schema(e) => write!(f, "field error: {e}"),
            Self::TileOutOfRange { row, col, value } => {
                write!(f, "tile ({row}, {col}) value {value} is not a 16-bit tile code")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            Self::Encode(e) => Some(e),
            Self::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        match err {
            wire::DecodeError::ShortRead {
                section,
                expected,
                actual,
            } => Self::ShortRead {
                section,
                expected,
                actual,
            },
            other => Self::Wire(other),
        }
    }
}

impl From<wire::EncodeError> for CodecError {
    fn from(err: wire::EncodeError) -> Self {
        match err {
            wire::EncodeError::WriteFailure { section, kind } => Self::WriteFailure {
                section: Some(section),
                kind,
            },
            other => Self::Encode(other),
        }
    }
}

impl From<schema::SchemaError> for CodecError {
    fn from(err: schema::SchemaError) -> Self {
        Self::Schema(err)
    }
}
