//! Tile map layouts and the conversion between them.
//!
//! [`TileGrid`] owns the map exactly as it is stored in the file: a flat
//! row-major run of unsigned 16-bit tile codes. [`LegacyMap`] is a borrowed
//! view that indexes it by row (`map[row][col]`), and [`NormalizedGrid`] is a
//! typed export with full-width signed cells produced by [`project`].

use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

use wire::{TILE_COUNT, WORLD_H, WORLD_W};

use crate::error::{CodecError, CodecResult};

/// The city map: [`WORLD_W`] rows of [`WORLD_H`] tile codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Box<[u16]>,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TileGrid {
    /// Creates a map of empty (zero) tiles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: vec![0; TILE_COUNT].into_boxed_slice(),
        }
    }

    /// Creates a map from row-major tile codes.
    ///
    /// Returns `None` unless exactly [`TILE_COUNT`] tiles are given.
    #[must_use]
    pub fn from_tiles(tiles: Vec<u16>) -> Option<Self> {
        (tiles.len() == TILE_COUNT).then(|| Self {
            tiles: tiles.into_boxed_slice(),
        })
    }

    /// Narrows a normalized grid back to tile codes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TileOutOfRange`] for the first cell (in
    /// row-major order) that is negative or above `u16::MAX`.
    pub fn try_from_normalized(grid: &NormalizedGrid) -> CodecResult<Self> {
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        for (row, cells) in grid.rows().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let tile = u16::try_from(value)
                    .map_err(|_| CodecError::TileOutOfRange { row, col, value })?;
                tiles.push(tile);
            }
        }
        Ok(Self {
            tiles: tiles.into_boxed_slice(),
        })
    }

    /// Returns the tile at (`row`, `col`).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        index_of(row, col).map(|idx| self.tiles[idx])
    }

    /// Sets the tile at (`row`, `col`), returning the previous code.
    pub fn set(&mut self, row: usize, col: usize, tile: u16) -> Option<u16> {
        let idx = index_of(row, col)?;
        Some(std::mem::replace(&mut self.tiles[idx], tile))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.tiles
    }

    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.tiles
    }

    /// Returns a row-indexed view of the map.
    #[must_use]
    pub fn legacy(&self) -> LegacyMap<'_> {
        LegacyMap { base: &self.tiles }
    }

    /// Counts tiles with a nonzero code.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile != 0).count()
    }
}

const fn index_of(row: usize, col: usize) -> Option<usize> {
    if row < WORLD_W && col < WORLD_H {
        Some(row * WORLD_H + col)
    } else {
        None
    }
}

/// Row-indexed view over a [`TileGrid`].
///
/// `map[row]` is the slice of [`WORLD_H`] tiles in that row, so
/// `map[row][col]` addresses a single tile.
#[derive(Debug, Clone, Copy)]
pub struct LegacyMap<'a> {
    base: &'a [u16],
}

impl<'a> LegacyMap<'a> {
    /// Returns the tiles of `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&'a [u16]> {
        if row >= WORLD_W {
            return None;
        }
        let start = row * WORLD_H;
        self.base.get(start..start + WORLD_H)
    }

    /// Returns the tile at (`row`, `col`).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        index_of(row, col).map(|idx| self.base[idx])
    }

    /// Iterates the rows in order.
    pub fn rows(&self) -> ChunksExact<'a, u16> {
        self.base.chunks_exact(WORLD_H)
    }
}

impl Index<usize> for LegacyMap<'_> {
    type Output = [u16];

    fn index(&self, row: usize) -> &[u16] {
        assert!(row < WORLD_W, "row {row} out of range");
        &self.base[row * WORLD_H..(row + 1) * WORLD_H]
    }
}

/// Typed export of the map with full-width signed cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGrid {
    cells: Box<[[i32; WORLD_H]]>,
}

impl Default for NormalizedGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizedGrid {
    /// Creates a grid of zero cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![[0; WORLD_H]; WORLD_W].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.cells.get(row)?.get(col).copied()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[i32; WORLD_H]> {
        self.cells.get(row)
    }

    pub fn rows(&self) -> std::slice::Iter<'_, [i32; WORLD_H]> {
        self.cells.iter()
    }
}

impl Index<(usize, usize)> for NormalizedGrid {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for NormalizedGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i32 {
        &mut self.cells[row][col]
    }
}

/// Copies every tile of `map` into a normalized grid at the same
/// (`row`, `col`).
#[must_use]
pub fn project(map: &LegacyMap<'_>) -> NormalizedGrid {
    let mut grid = NormalizedGrid::new();
    for (dst, src) in grid.cells.iter_mut().zip(map.rows()) {
        for (cell, &tile) in dst.iter_mut().zip(src) {
            *cell = i32::from(tile);
        }
    }
    grid
}
