//! Fixed section layout of a city save file.

use std::fmt;

/// Number of tile rows in the city map.
pub const WORLD_W: usize = 120;

/// Number of tiles in each row of the city map.
pub const WORLD_H: usize = 100;

/// Number of tiles in the city map.
pub const TILE_COUNT: usize = WORLD_W * WORLD_H;

/// Number of samples in each history section.
pub const HISTORY_LEN: usize = 120;

/// Number of slots in the misc section.
pub const MISC_LEN: usize = 120;

/// Number of history sections in a file.
pub const HISTORY_SECTIONS: usize = 6;

/// Size in bytes of one stored element.
pub const WORD_SIZE: usize = 2;

/// Total size of a city file in bytes (25 680).
pub const FILE_SIZE: usize = (HISTORY_SECTIONS * HISTORY_LEN + MISC_LEN + TILE_COUNT) * WORD_SIZE;

/// A fixed section of a city file.
///
/// Declaration order is file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionTag {
    ResidentialHistory,
    CommercialHistory,
    IndustrialHistory,
    CrimeHistory,
    PollutionHistory,
    MoneyHistory,
    MiscHistory,
    TileMap,
}

impl SectionTag {
    /// Every section in file order.
    pub const ALL: [Self; 8] = [
        Self::ResidentialHistory,
        Self::CommercialHistory,
        Self::IndustrialHistory,
        Self::CrimeHistory,
        Self::PollutionHistory,
        Self::MoneyHistory,
        Self::MiscHistory,
        Self::TileMap,
    ];

    /// The six history sections in file order.
    pub const HISTORIES: [Self; HISTORY_SECTIONS] = [
        Self::ResidentialHistory,
        Self::CommercialHistory,
        Self::IndustrialHistory,
        Self::CrimeHistory,
        Self::PollutionHistory,
        Self::MoneyHistory,
    ];

    /// Returns the number of 16-bit elements in this section.
    #[must_use]
    pub const fn element_count(self) -> usize {
        match self {
            Self::MiscHistory => MISC_LEN,
            Self::TileMap => TILE_COUNT,
            _ => HISTORY_LEN,
        }
    }

    /// Returns the number of bytes this section occupies on disk.
    #[must_use]
    pub const fn byte_len(self) -> usize {
        self.element_count() * WORD_SIZE
    }

    /// Returns the byte offset of this section from the start of the file.
    #[must_use]
    pub const fn byte_offset(self) -> usize {
        let mut offset = 0;
        let mut idx = 0;
        while idx < Self::ALL.len() {
            let tag = Self::ALL[idx];
            if tag as u8 == self as u8 {
                return offset;
            }
            offset += tag.byte_len();
            idx += 1;
        }
        offset
    }

    /// Returns `true` for the six history sections.
    #[must_use]
    pub const fn is_history(self) -> bool {
        !matches!(self, Self::MiscHistory | Self::TileMap)
    }

    /// Returns a short lowercase name for this section.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResidentialHistory => "residential history",
            Self::CommercialHistory => "commercial history",
            Self::IndustrialHistory => "industrial history",
            Self::CrimeHistory => "crime history",
            Self::PollutionHistory => "pollution history",
            Self::MoneyHistory => "money history",
            Self::MiscHistory => "misc history",
            Self::TileMap => "tile map",
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
