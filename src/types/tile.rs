//! Highest-concentration tiles: one summary per pollutant, always six of
//! them, in the fixed display order of [`Pollutant::ALL`].

use crate::types::pollutant::{ConcentrationLevel, Pollutant};
use serde::Serialize;
use std::slice;

const UNAVAILABLE: &str = "--";

/// A single pollutant's highest observed value for the displayed month.
///
/// `day` and `concentration` are `None` when the value is unavailable; such
/// tiles render as `--`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighestTile {
    pub pollutant: Pollutant,
    /// Label of the chart point or backend date the value was observed at.
    pub date: String,
    pub day: Option<u32>,
    pub month_name: String,
    pub concentration: Option<f64>,
    pub unit: String,
}

impl HighestTile {
    /// A tile for a pollutant neither the backend nor the chart reported.
    pub fn placeholder(pollutant: Pollutant) -> Self {
        Self {
            pollutant,
            date: UNAVAILABLE.to_string(),
            day: None,
            month_name: String::new(),
            concentration: None,
            unit: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.day.is_none() && self.concentration.is_none()
    }

    pub fn display_day(&self) -> String {
        self.day
            .map(|d| d.to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    /// Concentration followed by its unit, e.g. `42 ppb` or `-- µg/m³`.
    ///
    /// Falls back to the pollutant's own unit when the tile carries none.
    pub fn display_concentration(&self) -> String {
        let value = self
            .concentration
            .map(|c| c.to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string());
        let unit = if self.unit.is_empty() {
            self.pollutant.unit()
        } else {
            self.unit.as_str()
        };
        format!("{} {}", value, unit)
    }

    pub fn level(&self) -> ConcentrationLevel {
        self.pollutant.concentration_level(self.concentration)
    }
}

/// Exactly one [`HighestTile`] per pollutant, in display order.
///
/// # Examples
///
/// ```
/// use airsight::{HighestTile, Pollutant, TileSet};
///
/// let mut pm = HighestTile::placeholder(Pollutant::Pm25);
/// pm.concentration = Some(48.0);
/// pm.day = Some(12);
///
/// let tiles = TileSet::merge(vec![pm], None);
/// assert_eq!(tiles.iter().count(), 6);
/// assert_eq!(tiles.get(Pollutant::Pm25).concentration, Some(48.0));
/// assert!(tiles.get(Pollutant::O3).is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSet([HighestTile; 6]);

impl TileSet {
    pub fn placeholders() -> Self {
        Self(Pollutant::ALL.map(HighestTile::placeholder))
    }

    /// Merges backend candidates with a tile derived from the chart series.
    ///
    /// Later candidates for a pollutant replace earlier ones, and the
    /// derived tile replaces any candidate for its pollutant. Pollutants
    /// present in neither source get a placeholder.
    pub fn merge(
        candidates: impl IntoIterator<Item = HighestTile>,
        derived: Option<HighestTile>,
    ) -> Self {
        let mut tiles = Self::placeholders();
        for tile in candidates.into_iter().chain(derived) {
            tiles.replace(tile);
        }
        tiles
    }

    pub fn replace(&mut self, tile: HighestTile) {
        let slot = tile.pollutant.index();
        self.0[slot] = tile;
    }

    pub fn with_tile(mut self, tile: HighestTile) -> Self {
        self.replace(tile);
        self
    }

    pub fn get(&self, pollutant: Pollutant) -> &HighestTile {
        &self.0[pollutant.index()]
    }

    pub fn iter(&self) -> slice::Iter<'_, HighestTile> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[HighestTile] {
        &self.0
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self::placeholders()
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a HighestTile;
    type IntoIter = slice::Iter<'a, HighestTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
