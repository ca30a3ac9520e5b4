//! Load, convert and save legacy city save files.
//!
//! This is the main codec crate. It ties together `wordstream`, `wire` and
//! `schema` to read the eight fixed sections of a city file into a
//! [`CityFile`], decode the misc header into a [`CityHeader`], project the
//! tile map into a [`NormalizedGrid`] and write everything back out.
//!
//! # Features
//!
//! - Section-by-section load with short-read detection
//! - Typed header decode with range fallbacks
//! - Legacy-to-normalized tile map projection
//! - Save with the legacy byte-order behavior, or symmetric via
//!   [`CodecOptions::symmetric`]
//!
//! # Design Principles
//!
//! - **Fail whole** - A load either yields a complete city or an error.
//! - **Owned values** - A [`CityFile`] shares nothing with other instances.
//! - **Deterministic** - Same bytes in, same city out.

mod city;
mod error;
mod grid;
mod header;
mod options;
mod types;

pub use city::{load_city_file, save_file, save_file_with, CityFile};
pub use error::{CodecError, CodecResult};
pub use grid::{project, LegacyMap, NormalizedGrid, TileGrid};
pub use header::{CityHeader, Service};
pub use options::CodecOptions;
pub use types::{HistoryBuffer, MiscBuffer};
pub use wire::{SectionTag, FILE_SIZE};
