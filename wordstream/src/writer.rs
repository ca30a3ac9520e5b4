//! Word writer over a byte stream.

use std::io::Write;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::WordResult;
use crate::order::{Endian, Word, ASSUMED_HOST_ORDER};

/// Writes 16-bit words to a byte stream.
///
/// Words are laid out in the writer's [`Endian`] order. When swapping is
/// enabled each word is byte-swapped on the way out; the caller's buffer is
/// never modified.
#[derive(Debug)]
pub struct WordWriter<W> {
    inner: W,
    order: Endian,
    swap: bool,
    scratch: Vec<u8>,
    words_written: usize,
}

impl<W: Write> WordWriter<W> {
    /// Creates a writer that lays out words in [`ASSUMED_HOST_ORDER`]
    /// without swapping.
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self::with_order(inner, ASSUMED_HOST_ORDER)
    }

    /// Creates a writer that lays out words in the given order.
    #[must_use]
    pub fn with_order(inner: W, order: Endian) -> Self {
        Self {
            inner,
            order,
            swap: false,
            scratch: Vec::new(),
            words_written: 0,
        }
    }

    /// Enables or disables byte swapping of every written word.
    #[must_use]
    pub fn with_swap(mut self, swap: bool) -> Self {
        self.swap = swap;
        self
    }

    /// Returns `true` if words are byte-swapped on write.
    #[must_use]
    pub const fn swaps(&self) -> bool {
        self.swap
    }

    /// Returns the number of words written so far.
    #[must_use]
    pub const fn words_written(&self) -> usize {
        self.words_written
    }

    /// Writes every word of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Io`](crate::WordError::Io) if the underlying
    /// stream fails. Part of `buf` may already have been written.
    pub fn write_words<T: Word>(&mut self, buf: &[T]) -> WordResult<()> {
        self.scratch.clear();
        self.scratch.resize(buf.len() * 2, 0);

        for (word, bytes) in buf.iter().zip(self.scratch.chunks_exact_mut(2)) {
            let mut bits = word.to_bits();
            if self.swap {
                bits = bits.swap_bytes();
            }
            match self.order {
                Endian::Big => BigEndian::write_u16(bytes, bits),
                Endian::Little => LittleEndian::write_u16(bytes, bits),
            }
        }

        self.inner.write_all(&self.scratch)?;
        self.words_written += buf.len();
        Ok(())
    }

    /// Flushes the underlying stream.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Io`](crate::WordError::Io) if flushing fails.
    pub fn flush(&mut self) -> WordResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
