//! 16-bit word I/O and byte-order normalization for legacy city saves.
//!
//! City save files are flat dumps of 16-bit words written by a big-endian
//! machine. This crate provides [`WordReader`] and [`WordWriter`], which move
//! words between byte streams and typed buffers exactly as a raw memory dump
//! would, plus the normalizers ([`swap_shorts`], [`half_swap_longs`]) that
//! correct the byte order afterwards.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Words are assembled with explicit byte order, never
//!   by reinterpreting memory.
//! - **Explicit byte order** - The disk/host assumption lives in named
//!   constants ([`DISK_ORDER`], [`ASSUMED_HOST_ORDER`], [`SWAP_ON_READ`]).
//! - **No domain knowledge** - This crate knows nothing about sections,
//!   histories, or tiles.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use wordstream::{swap_shorts, WordReader, WordWriter, SWAP_ON_READ};
//!
//! let mut writer = WordWriter::new(Vec::new()).with_swap(SWAP_ON_READ);
//! writer.write_words(&[1200i16, -3]).unwrap();
//! let bytes = writer.into_inner();
//!
//! let mut reader = WordReader::new(Cursor::new(bytes));
//! let mut words = [0i16; 2];
//! reader.read_words(&mut words).unwrap();
//! if SWAP_ON_READ {
//!     swap_shorts(&mut words);
//! }
//! assert_eq!(words, [1200, -3]);
//! ```

mod error;
mod order;
mod reader;
mod writer;

pub use error::{WordError, WordResult};
pub use order::{
    half_swap_long, half_swap_longs, needs_swap, swap_shorts, Endian, Word, ASSUMED_HOST_ORDER,
    DISK_ORDER, SWAP_ON_READ,
};
pub use reader::WordReader;
pub use writer::WordWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn disk_bytes_decode_as_big_endian() {
        // 0x04B0 = 1200 stored most significant byte first.
        let mut reader = WordReader::new(Cursor::new(vec![0x04, 0xB0]));
        let mut words = [0i16; 1];
        reader.read_words(&mut words).unwrap();
        if SWAP_ON_READ {
            swap_shorts(&mut words);
        }
        assert_eq!(words, [1200]);
    }

    #[test]
    fn unswapped_write_is_host_order() {
        let mut writer = WordWriter::new(Vec::new());
        writer.write_words(&[1200i16]).unwrap();
        assert_eq!(writer.into_inner(), vec![0xB0, 0x04]);
    }

    #[test]
    fn swapped_write_matches_disk_order() {
        let mut writer = WordWriter::new(Vec::new()).with_swap(SWAP_ON_READ);
        writer.write_words(&[1200i16]).unwrap();
        assert_eq!(writer.into_inner(), vec![0x04, 0xB0]);
    }

    #[test]
    fn doctest_example() {
        let mut writer = WordWriter::new(Vec::new()).with_swap(SWAP_ON_READ);
        writer.write_words(&[1200i16, -3]).unwrap();
        let bytes = writer.into_inner();

        let mut reader = WordReader::new(Cursor::new(bytes));
        let mut words = [0i16; 2];
        reader.read_words(&mut words).unwrap();
        if SWAP_ON_READ {
            swap_shorts(&mut words);
        }
        assert_eq!(words, [1200, -3]);
    }
}
