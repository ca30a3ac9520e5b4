//! Inspection and conversion tools for legacy city save files.
//!
//! This crate backs the `cityfile` binary:
//!
//! - Convert a city file through the full load, project and save cycle
//! - Summarize a city file's header, histories and tile map
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what a save file holds.

use std::fmt;
use std::path::Path;

use codec::{
    save_file_with, CityFile, CityHeader, CodecOptions, CodecResult, HistoryBuffer, Service,
};
use log::info;
use serde::Serialize;
use wire::{SectionTag, TILE_COUNT};

/// Summary of one converted city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Nonzero cells in the projected grid.
    pub occupied_cells: usize,
    /// Total funds decoded from the header.
    pub total_funds: i32,
}

/// Loads `src`, projects its tile map and saves it to `dst`.
///
/// `src` and `dst` may be the same path.
pub fn convert_city(src: &Path, dst: &Path, options: &CodecOptions) -> CodecResult<ConvertSummary> {
    let mut city = CityFile::load(src)?;
    let grid = city.copy_arrays();
    let occupied_cells = grid
        .rows()
        .flat_map(|row| row.iter())
        .filter(|&&cell| cell != 0)
        .count();
    save_file_with(&mut city, dst, options)?;
    info!(
        "converted {} -> {} ({occupied_cells} occupied cells)",
        src.display(),
        dst.display()
    );
    Ok(ConvertSummary {
        occupied_cells,
        total_funds: city.header.total_funds,
    })
}

/// Inspection report for one city file.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub header: CityHeader,
    pub funding_percent: FundingPercent,
    pub histories: Vec<HistorySummary>,
    pub tiles: TileSummary,
}

/// Funding levels as whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FundingPercent {
    pub police: i32,
    pub fire: i32,
    pub road: i32,
}

/// Range and latest sample of one history section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub section: &'static str,
    pub min: i16,
    pub max: i16,
    pub latest: i16,
}

impl HistorySummary {
    fn new(tag: SectionTag, history: &HistoryBuffer) -> Self {
        let samples = history.as_slice();
        Self {
            section: tag.name(),
            min: samples.iter().copied().min().unwrap_or_default(),
            max: samples.iter().copied().max().unwrap_or_default(),
            latest: samples.first().copied().unwrap_or_default(),
        }
    }
}

/// Tile map statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileSummary {
    pub total: usize,
    pub occupied: usize,
}

/// Builds an inspection report for a decoded city.
pub fn inspect_city(city: &CityFile) -> InspectReport {
    let header = city.header;
    InspectReport {
        header,
        funding_percent: FundingPercent {
            police: header.funding_percent(Service::Police),
            fire: header.funding_percent(Service::Fire),
            road: header.funding_percent(Service::Road),
        },
        histories: city
            .histories()
            .map(|(tag, history)| HistorySummary::new(tag, history))
            .collect(),
        tiles: TileSummary {
            total: TILE_COUNT,
            occupied: city.tiles.occupied_cells(),
        },
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        writeln!(f, "city time: {} months", header.city_time)?;
        writeln!(f, "funds: {}", header.total_funds)?;
        writeln!(f, "tax: {}% speed: {}", header.city_tax, header.sim_speed)?;
        writeln!(
            f,
            "funding: police {}% fire {}% road {}%",
            self.funding_percent.police, self.funding_percent.fire, self.funding_percent.road
        )?;
        writeln!(
            f,
            "options: bulldoze={} budget={} goto={} sound={}",
            header.auto_bulldoze, header.auto_budget, header.auto_goto, header.user_sound
        )?;
        writeln!(f, "histories:")?;
        for history in &self.histories {
            writeln!(
                f,
                "  {}: latest {} (min {}, max {})",
                history.section, history.latest, history.min, history.max
            )?;
        }
        write!(
            f,
            "tiles: {} of {} occupied",
            self.tiles.occupied, self.tiles.total
        )
    }
}
