//! The city file aggregate and its load/save entry points.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};
use wire::{read_section, write_section, SectionTag};
use wordstream::{WordReader, WordWriter};

use crate::error::{CodecError, CodecResult};
use crate::grid::{project, NormalizedGrid, TileGrid};
use crate::header::CityHeader;
use crate::options::CodecOptions;
use crate::types::{HistoryBuffer, MiscBuffer};

/// Every section of one city save, plus its decoded header.
///
/// A `CityFile` is a self-contained owned value; nothing is shared between
/// instances.
#[derive(Debug, Clone, PartialEq)]
pub struct CityFile {
    pub residential: HistoryBuffer,
    pub commercial: HistoryBuffer,
    pub industrial: HistoryBuffer,
    pub crime: HistoryBuffer,
    pub pollution: HistoryBuffer,
    pub money: HistoryBuffer,
    pub misc: MiscBuffer,
    pub tiles: TileGrid,
    /// Typed header fields. Filled by [`CityFile::decode_header`] and
    /// written back into `misc` on save.
    pub header: CityHeader,
}

impl Default for CityFile {
    fn default() -> Self {
        Self::new()
    }
}

impl CityFile {
    /// Creates an empty city with zeroed sections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            residential: HistoryBuffer::new(),
            commercial: HistoryBuffer::new(),
            industrial: HistoryBuffer::new(),
            crime: HistoryBuffer::new(),
            pollution: HistoryBuffer::new(),
            money: HistoryBuffer::new(),
            misc: MiscBuffer::new(),
            tiles: TileGrid::new(),
            header: CityHeader::default(),
        }
    }

    /// Reads all eight sections from `reader` in file order, stopping at
    /// the first failing section. The header is left at its defaults.
    fn read_sections<R: Read>(reader: R) -> CodecResult<Self> {
        let mut city = Self::new();
        let mut words = WordReader::new(reader);
        for tag in SectionTag::ALL {
            city.read_section(tag, &mut words)?;
            debug!("read {tag} ({} elements)", tag.element_count());
        }
        Ok(city)
    }

    /// Reads all sections from `reader` and decodes the header.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ShortRead`] if any section is truncated. No
    /// section after the truncated one is read.
    pub fn read_from<R: Read>(reader: R) -> CodecResult<Self> {
        let mut city = Self::read_sections(reader)?;
        city.decode_header()?;
        Ok(city)
    }

    /// Loads and decodes the city file at `path`. Same as
    /// [`load_city_file`].
    pub fn load(path: impl AsRef<Path>) -> CodecResult<Self> {
        load_city_file(path)
    }

    /// Decodes [`CityFile::header`] from the misc section.
    pub fn decode_header(&mut self) -> CodecResult<&CityHeader> {
        self.header = CityHeader::decode(&self.misc)?;
        Ok(&self.header)
    }

    /// Stores [`CityFile::header`] back into the misc section.
    pub fn encode_header(&mut self, options: &CodecOptions) -> CodecResult<()> {
        self.header.encode_into(&mut self.misc, options)
    }

    /// Projects the tile map into its normalized layout.
    #[must_use]
    pub fn copy_arrays(&self) -> NormalizedGrid {
        project(&self.tiles.legacy())
    }

    /// Encodes the header and writes all eight sections to `writer` in file
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WriteFailure`] if the stream fails. Sections
    /// before the failing one have already been written.
    pub fn write_to<W: Write>(&mut self, writer: W, options: &CodecOptions) -> CodecResult<()> {
        self.encode_header(options)?;
        let mut words = WordWriter::new(writer).with_swap(options.swap_on_write);
        for tag in SectionTag::ALL {
            self.write_section(tag, &mut words)?;
            debug!("wrote {tag} ({} elements)", tag.element_count());
        }
        words.flush().map_err(CodecError::flush)
    }

    /// Returns the history stored in section `tag`.
    #[must_use]
    pub const fn history(&self, tag: SectionTag) -> Option<&HistoryBuffer> {
        match tag {
            SectionTag::ResidentialHistory => Some(&self.residential),
            SectionTag::CommercialHistory => Some(&self.commercial),
            SectionTag::IndustrialHistory => Some(&self.industrial),
            SectionTag::CrimeHistory => Some(&self.crime),
            SectionTag::PollutionHistory => Some(&self.pollution),
            SectionTag::MoneyHistory => Some(&self.money),
            SectionTag::MiscHistory | SectionTag::TileMap => None,
        }
    }

    /// Returns the history stored in section `tag` for modification.
    pub fn history_mut(&mut self, tag: SectionTag) -> Option<&mut HistoryBuffer> {
        match tag {
            SectionTag::ResidentialHistory => Some(&mut self.residential),
            SectionTag::CommercialHistory => Some(&mut self.commercial),
            SectionTag::IndustrialHistory => Some(&mut self.industrial),
            SectionTag::CrimeHistory => Some(&mut self.crime),
            SectionTag::PollutionHistory => Some(&mut self.pollution),
            SectionTag::MoneyHistory => Some(&mut self.money),
            SectionTag::MiscHistory | SectionTag::TileMap => None,
        }
    }

    /// Iterates the six histories in file order.
    pub fn histories(&self) -> impl Iterator<Item = (SectionTag, &HistoryBuffer)> {
        SectionTag::HISTORIES
            .into_iter()
            .filter_map(|tag| self.history(tag).map(|history| (tag, history)))
    }

    fn read_section<R: Read>(
        &mut self,
        tag: SectionTag,
        words: &mut WordReader<R>,
    ) -> CodecResult<()> {
        match tag {
            SectionTag::MiscHistory => read_section(tag, self.misc.slots_mut(), words)?,
            SectionTag::TileMap => read_section(tag, self.tiles.as_mut_slice(), words)?,
            history => {
                if let Some(buf) = self.history_mut(history) {
                    read_section(history, buf.as_mut_slice(), words)?;
                }
            }
        }
        Ok(())
    }

    fn write_section<W: Write>(&self, tag: SectionTag, words: &mut WordWriter<W>) -> CodecResult<()> {
        match tag {
            SectionTag::MiscHistory => write_section(tag, self.misc.slots(), words)?,
            SectionTag::TileMap => write_section(tag, self.tiles.as_slice(), words)?,
            history => {
                if let Some(buf) = self.history(history) {
                    write_section(history, buf.as_slice(), words)?;
                }
            }
        }
        Ok(())
    }
}

/// Reads the city file at `path` and decodes its header.
///
/// # Errors
///
/// Returns [`CodecError::OpenFailure`] if the file cannot be opened and
/// [`CodecError::ShortRead`] if it is truncated or not a city file.
pub fn load_city_file(path: impl AsRef<Path>) -> CodecResult<CityFile> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| CodecError::open(path.to_path_buf(), &err))?;
    let city = CityFile::read_from(BufReader::new(file))?;
    info!("loaded city file {}", path.display());
    Ok(city)
}

/// Saves `city` to `path` the way the legacy writer does.
///
/// See [`CodecOptions::reference`].
pub fn save_file(city: &mut CityFile, path: impl AsRef<Path>) -> CodecResult<()> {
    save_file_with(city, path, &CodecOptions::default())
}

/// Saves `city` to `path` with explicit options.
///
/// The destination is created or truncated first. If a write fails the
/// file is left truncated and its contents are undefined.
///
/// # Errors
///
/// Returns [`CodecError::OpenFailure`] if the destination cannot be created
/// and [`CodecError::WriteFailure`] if writing fails.
pub fn save_file_with(
    city: &mut CityFile,
    path: impl AsRef<Path>,
    options: &CodecOptions,
) -> CodecResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| CodecError::open(path.to_path_buf(), &err))?;
    city.write_to(BufWriter::new(file), options)?;
    info!("saved city file {}", path.display());
    Ok(())
}
