//! Fixed-size section buffers.

use std::ops::{Index, IndexMut};

use schema::{decode_field, read_packed, Decoded, FieldDef, SchemaResult};
use wire::{HISTORY_LEN, MISC_LEN};

/// One graph history section: 120 signed samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryBuffer([i16; HISTORY_LEN]);

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Creates a zeroed history.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; HISTORY_LEN])
    }

    /// Creates a history from its samples.
    #[must_use]
    pub const fn from_samples(samples: [i16; HISTORY_LEN]) -> Self {
        Self(samples)
    }

    #[must_use]
    pub const fn as_slice(&self) -> &[i16] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [i16] {
        &mut self.0
    }

    /// Returns the number of samples (always [`HISTORY_LEN`]).
    #[must_use]
    pub const fn len(&self) -> usize {
        HISTORY_LEN
    }

    /// Always `false`; histories have a fixed length.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i16> {
        self.0.iter()
    }
}

impl Index<usize> for HistoryBuffer {
    type Output = i16;

    fn index(&self, index: usize) -> &i16 {
        &self.0[index]
    }
}

impl IndexMut<usize> for HistoryBuffer {
    fn index_mut(&mut self, index: usize) -> &mut i16 {
        &mut self.0[index]
    }
}

/// The misc section: 120 slots holding packed header fields.
///
/// Slots are kept as raw normalized words. Typed access goes through the
/// field table in the `schema` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiscBuffer([i16; MISC_LEN]);

impl Default for MiscBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MiscBuffer {
    /// Creates a zeroed misc buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; MISC_LEN])
    }

    #[must_use]
    pub const fn from_slots(slots: [i16; MISC_LEN]) -> Self {
        Self(slots)
    }

    #[must_use]
    pub const fn slots(&self) -> &[i16] {
        &self.0
    }

    pub fn slots_mut(&mut self) -> &mut [i16] {
        &mut self.0
    }

    /// Reads the packed 32-bit value starting at `slot`.
    #[must_use]
    pub fn packed(&self, slot: usize) -> Option<i32> {
        read_packed(&self.0, slot)
    }

    /// Decodes one field from this buffer.
    pub fn decode(&self, def: &FieldDef) -> SchemaResult<Decoded> {
        decode_field(def, &self.0)
    }
}

impl Index<usize> for MiscBuffer {
    type Output = i16;

    fn index(&self, index: usize) -> &i16 {
        &self.0[index]
    }
}

impl IndexMut<usize> for MiscBuffer {
    fn index_mut(&mut self, index: usize) -> &mut i16 {
        &mut self.0[index]
    }
}
