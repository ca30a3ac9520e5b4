//! Fixed section layout and section reader/writer for legacy city saves.
//!
//! A city file is eight back-to-back sections of 16-bit words with no magic
//! number, no version field and no length prefixes. This crate names those
//! sections, fixes their sizes and order, and moves one section at a time
//! between a word stream and a caller-owned buffer. It does not know what
//! the words mean.
//!
//! # Design Principles
//!
//! - **Fixed layout** - Section order and lengths never vary; [`FILE_SIZE`]
//!   is a constant.
//! - **Sequential** - Readers consume the stream one section at a time and
//!   never look at the file size up front.
//! - **No domain knowledge** - Decoding the misc slots and the tile map
//!   belongs to higher layers.

mod error;
mod layout;
mod section;

pub use error::{DecodeError, EncodeError, WireResult};
pub use layout::{
    SectionTag, FILE_SIZE, HISTORY_LEN, HISTORY_SECTIONS, MISC_LEN, TILE_COUNT, WORD_SIZE,
    WORLD_H, WORLD_W,
};
pub use section::{read_section, write_section};
