//! Word reader over a byte stream.

use std::io::{self, Read};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{WordError, WordResult};
use crate::order::{Endian, Word, ASSUMED_HOST_ORDER};

/// Reads 16-bit words from a byte stream.
///
/// Bytes are assembled into words in the reader's [`Endian`] order without
/// any further correction, the way a raw memory dump would be loaded.
/// Byte-order normalization is a separate step (see
/// [`swap_shorts`](crate::swap_shorts)).
#[derive(Debug)]
pub struct WordReader<R> {
    inner: R,
    order: Endian,
    scratch: Vec<u8>,
    words_read: usize,
}

impl<R: Read> WordReader<R> {
    /// Creates a reader that assembles words in [`ASSUMED_HOST_ORDER`].
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self::with_order(inner, ASSUMED_HOST_ORDER)
    }

    /// Creates a reader that assembles words in the given order.
    #[must_use]
    pub fn with_order(inner: R, order: Endian) -> Self {
        Self {
            inner,
            order,
            scratch: Vec::new(),
            words_read: 0,
        }
    }

    /// Returns the order used to assemble words.
    #[must_use]
    pub const fn order(&self) -> Endian {
        self.order
    }

    /// Returns the number of words successfully read so far.
    #[must_use]
    pub const fn words_read(&self) -> usize {
        self.words_read
    }

    /// Consumes the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fills `buf` completely from the stream.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::UnexpectedEof`] if the stream ends before
    /// `buf.len()` whole words were available, and [`WordError::Io`] if the
    /// stream itself fails. The contents of `buf` are unspecified on error.
    pub fn read_words<W: Word>(&mut self, buf: &mut [W]) -> WordResult<()> {
        let byte_len = buf.len() * 2;
        self.scratch.clear();
        self.scratch.resize(byte_len, 0);

        let filled = fill(&mut self.inner, &mut self.scratch)?;
        if filled < byte_len {
            return Err(WordError::UnexpectedEof {
                requested: buf.len(),
                available: filled / 2,
            });
        }

        for (word, bytes) in buf.iter_mut().zip(self.scratch.chunks_exact(2)) {
            let bits = match self.order {
                Endian::Big => BigEndian::read_u16(bytes),
                Endian::Little => LittleEndian::read_u16(bytes),
            };
            *word = W::from_bits(bits);
        }
        self.words_read += buf.len();
        Ok(())
    }
}

/// Reads until `buf` is full or the stream is exhausted, returning the
/// number of bytes read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> WordResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_reader_reads_nothing() {
        let mut reader = WordReader::new(Cursor::new(Vec::new()));
        let mut buf: [u16; 0] = [];
        reader.read_words(&mut buf).unwrap();
        assert_eq!(reader.words_read(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = WordReader::new(Cursor::new(Vec::new()));
        let mut buf = [0u16; 1];
        let err = reader.read_words(&mut buf).unwrap_err();
        assert_eq!(
            err,
            WordError::UnexpectedEof {
                requested: 1,
                available: 0
            }
        );
    }

    #[test]
    fn default_order_is_little_endian() {
        let mut reader = WordReader::new(Cursor::new(vec![0x34, 0x12, 0xFF, 0xFF]));
        assert_eq!(reader.order(), Endian::Little);
        let mut buf = [0u16; 2];
        reader.read_words(&mut buf).unwrap();
        assert_eq!(buf, [0x1234, 0xFFFF]);
    }

    #[test]
    fn big_endian_order() {
        let mut reader = WordReader::with_order(Cursor::new(vec![0x12, 0x34]), Endian::Big);
        let mut buf = [0u16; 1];
        reader.read_words(&mut buf).unwrap();
        assert_eq!(buf, [0x1234]);
    }

    #[test]
    fn signed_words() {
        let mut reader = WordReader::new(Cursor::new(vec![0xFF, 0xFF, 0x00, 0x80]));
        let mut buf = [0i16; 2];
        reader.read_words(&mut buf).unwrap();
        assert_eq!(buf, [-1, i16::MIN]);
    }

    #[test]
    fn short_read_counts_whole_words() {
        // Five bytes hold two whole words and one dangling byte.
        let mut reader = WordReader::new(Cursor::new(vec![1, 2, 3, 4, 5]));
        let mut buf = [0u16; 4];
        let err = reader.read_words(&mut buf).unwrap_err();
        assert_eq!(
            err,
            WordError::UnexpectedEof {
                requested: 4,
                available: 2
            }
        );
        assert_eq!(reader.words_read(), 0);
    }

    #[test]
    fn sequential_reads_advance() {
        let mut reader = WordReader::new(Cursor::new(vec![1, 0, 2, 0, 3, 0]));
        let mut first = [0u16; 1];
        let mut rest = [0u16; 2];
        reader.read_words(&mut first).unwrap();
        reader.read_words(&mut rest).unwrap();
        assert_eq!(first, [1]);
        assert_eq!(rest, [2, 3]);
        assert_eq!(reader.words_read(), 3);
    }

    #[test]
    fn io_error_is_reported() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("boom"))
            }
        }

        let mut reader = WordReader::new(Failing);
        let mut buf = [0u16; 1];
        let err = reader.read_words(&mut buf).unwrap_err();
        assert_eq!(
            err,
            WordError::Io {
                kind: io::ErrorKind::Other
            }
        );
    }

    #[test]
    fn into_inner_returns_stream() {
        let reader = WordReader::new(Cursor::new(vec![9u8]));
        let cursor = reader.into_inner();
        assert_eq!(cursor.into_inner(), vec![9]);
    }
}
