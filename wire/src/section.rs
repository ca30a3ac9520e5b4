//! Section reader and writer.

use std::io::{Read, Write};

use wordstream::{swap_shorts, Word, WordReader, WordWriter, SWAP_ON_READ};

use crate::error::{DecodeError, EncodeError, WireResult};
use crate::SectionTag;

/// Reads one section from `reader` into `buf`.
///
/// Exactly [`SectionTag::element_count`] words are consumed. On success the
/// buffer is normalized to host values with [`swap_shorts`] when
/// [`SWAP_ON_READ`] is set.
///
/// # Errors
///
/// Returns [`DecodeError::BufferLength`] if `buf` is not the section's size,
/// [`DecodeError::ShortRead`] if the stream ends early and
/// [`DecodeError::Io`] if the stream fails.
pub fn read_section<R: Read, W: Word>(
    tag: SectionTag,
    buf: &mut [W],
    reader: &mut WordReader<R>,
) -> WireResult<()> {
    check_len(tag, buf.len()).map_err(|(expected, actual)| DecodeError::BufferLength {
        section: tag,
        expected,
        actual,
    })?;
    reader
        .read_words(buf)
        .map_err(|err| DecodeError::from_word(tag, err))?;
    if SWAP_ON_READ {
        swap_shorts(buf);
    }
    Ok(())
}

/// Writes one section from `buf` to `writer`.
///
/// The buffer is dumped as-is; whether words are swapped on the way out is
/// decided by how `writer` was configured.
///
/// # Errors
///
/// Returns [`EncodeError::BufferLength`] if `buf` is not the section's size
/// and [`EncodeError::WriteFailure`] if the stream fails.
pub fn write_section<W: Write, T: Word>(
    tag: SectionTag,
    buf: &[T],
    writer: &mut WordWriter<W>,
) -> Result<(), EncodeError> {
    check_len(tag, buf.len()).map_err(|(expected, actual)| EncodeError::BufferLength {
        section: tag,
        expected,
        actual,
    })?;
    writer
        .write_words(buf)
        .map_err(|err| EncodeError::from_word(tag, err))
}

fn check_len(tag: SectionTag, actual: usize) -> Result<(), (usize, usize)> {
    let expected = tag.element_count();
    if actual == expected {
        Ok(())
    } else {
        Err((expected, actual))
    }
}
