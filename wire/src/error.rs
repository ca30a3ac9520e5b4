//! Error types for section framing.

use std::fmt;
use std::io;

use wordstream::WordError;

use crate::SectionTag;

/// Result type for section reads.
pub type WireResult<T> = Result<T, DecodeError>;

/// Errors that can occur while reading a section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The stream held fewer elements than the section declares.
    ShortRead {
        section: SectionTag,
        expected: usize,
        actual: usize,
    },

    /// The destination buffer does not match the section's element count.
    BufferLength {
        section: SectionTag,
        expected: usize,
        actual: usize,
    },

    /// The stream failed while reading the section.
    Io {
        section: SectionTag,
        kind: io::ErrorKind,
    },
}

/// Errors that can occur while writing a section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// The source buffer does not match the section's element count.
    BufferLength {
        section: SectionTag,
        expected: usize,
        actual: usize,
    },

    /// The stream entered a failure state while writing the section.
    WriteFailure {
        section: SectionTag,
        kind: io::ErrorKind,
    },
}

impl DecodeError {
    /// Returns the section that failed.
    #[must_use]
    pub const fn section(&self) -> SectionTag {
        match self {
            Self::ShortRead { section, .. }
            | Self::BufferLength { section, .. }
            | Self::Io { section, .. } => *section,
        }
    }

    pub(crate) fn from_word(section: SectionTag, err: WordError) -> Self {
        match err {
            WordError::UnexpectedEof {
                requested,
                available,
            } => Self::ShortRead {
                section,
                expected: requested,
                actual: available,
            },
            WordError::Io { kind } => Self::Io { section, kind },
        }
    }
}

impl EncodeError {
    /// Returns the section that failed.
    #[must_use]
    pub const fn section(&self) -> SectionTag {
        match self {
            Self::BufferLength { section, .. } | Self::WriteFailure { section, .. } => *section,
        }
    }

    pub(crate) fn from_word(section: SectionTag, err: WordError) -> Self {
        let kind = match err {
            WordError::Io { kind } => kind,
            WordError::UnexpectedEof { .. } => io::ErrorKind::UnexpectedEof,
        };
        Self::WriteFailure { section, kind }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortRead {
                section,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "short read in {section}: expected {expected} elements, got {actual}"
                )
            }
            Self::BufferLength {
                section,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "buffer for {section} holds {actual} elements, section needs {expected}"
                )
            }
            Self::Io { section, kind } => write!(f, "i/o error reading {section}: {kind}"),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferLength {
                section,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "buffer for {section} holds {actual} elements, section needs {expected}"
                )
            }
            Self::WriteFailure { section, kind } => {
                write!(f, "write failed in {section}: {kind}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl std::error::Error for EncodeError {}
