//! Catalog of supported maps and planner defaults

use crate::error::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Default glide distance in meters
pub const DEFAULT_JUMP_DISTANCE: f64 = 1250.0;

/// Bounds of the glide distance slider, in meters
///
/// The planner accepts any value; this is the range the game's parachute
/// glide realistically covers and what a UI should offer.
pub const JUMP_DISTANCE_RANGE: RangeInclusive<f64> = 1200.0..=1300.0;

/// Default plane speed in km/h
pub const DEFAULT_PLANE_SPEED_KMH: f64 = 300.0;

/// Bounds of the plane speed slider, in km/h
pub const PLANE_SPEED_RANGE_KMH: RangeInclusive<f64> = 250.0..=350.0;

/// Map that is selected when nothing else was chosen
pub const DEFAULT_MAP_ID: MapId = MapId::Sanhok;

/// Identifier of a playable map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MapId {
    Sanhok,
    Erangel,
}

/// Static description of a map
///
/// Map coordinates run from `0` to `size` meters on both axes, with the
/// origin in the south-west corner.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub id: MapId,
    /// Stable lowercase identifier
    pub name: &'static str,
    /// Localized label for display
    pub display_name: &'static str,
    /// Side length in meters
    pub size: f64,
}

static SANHOK: MapConfig = MapConfig {
    id: MapId::Sanhok,
    name: "sanhok",
    display_name: "사녹",
    size: 4000.0,
};

static ERANGEL: MapConfig = MapConfig {
    id: MapId::Erangel,
    name: "erangel",
    display_name: "에란겔",
    size: 8000.0,
};

impl MapId {
    /// All maps, in display order
    pub const ALL: [MapId; 2] = [MapId::Sanhok, MapId::Erangel];

    pub fn config(self) -> &'static MapConfig {
        match self {
            MapId::Sanhok => &SANHOK,
            MapId::Erangel => &ERANGEL,
        }
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Side length of the map in meters
    pub fn size(self) -> f64 {
        self.config().size
    }
}

impl Default for MapId {
    fn default() -> Self {
        DEFAULT_MAP_ID
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapId {
    type Err = Error;

    /// Parse a map identifier, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self> {
        MapId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMap(s.to_string()))
    }
}
