//! Splitting a timetable by direction, and the per-station preference for
//! which direction to show.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cache::{CacheError, LocalCache, keys};
use crate::domain::{Direction, TimetableEntry};

/// A station's timetable split into the two DART directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionBoard {
    pub northbound: Vec<TimetableEntry>,
    pub southbound: Vec<TimetableEntry>,
}

impl DirectionBoard {
    /// Entries for the preferred direction.
    pub fn for_preference(&self, preference: DirectionPreference) -> &[TimetableEntry] {
        match preference {
            DirectionPreference::North => &self.northbound,
            DirectionPreference::South => &self.southbound,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.northbound.is_empty() && self.southbound.is_empty()
    }
}

/// Split entries into northbound and southbound buckets.
///
/// Order within each bucket follows the input. Entries whose direction is
/// neither "Northbound" nor "Southbound" are dropped.
pub fn partition_by_direction(
    entries: impl IntoIterator<Item = TimetableEntry>,
) -> DirectionBoard {
    let mut board = DirectionBoard::default();
    for entry in entries {
        match entry.direction_kind() {
            Direction::Northbound => board.northbound.push(entry),
            Direction::Southbound => board.southbound.push(entry),
            Direction::Other => {}
        }
    }
    board
}

/// Error returned when parsing an unknown direction preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction preference {0:?}: expected \"north\" or \"south\"")]
pub struct InvalidDirectionPreference(String);

/// Which direction a station's board shows first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionPreference {
    #[default]
    North,
    South,
}

impl DirectionPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionPreference::North => "north",
            DirectionPreference::South => "south",
        }
    }

    /// Load the stored preference for a station.
    ///
    /// Falls back to the default when nothing (or something unreadable) is
    /// stored.
    pub fn load(cache: &LocalCache, station: &str) -> Self {
        let Some(raw) = cache.get(&keys::direction_preference(station)) else {
            return Self::default();
        };

        raw.parse().unwrap_or_else(|e: InvalidDirectionPreference| {
            warn!(station, error = %e, "ignoring stored direction preference");
            Self::default()
        })
    }

    /// Store this preference for a station.
    pub fn save(&self, cache: &LocalCache, station: &str) -> Result<(), CacheError> {
        cache.set(&keys::direction_preference(station), self.as_str())
    }
}

impl FromStr for DirectionPreference {
    type Err = InvalidDirectionPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(DirectionPreference::North),
            "south" => Ok(DirectionPreference::South),
            _ => Err(InvalidDirectionPreference(s.to_string())),
        }
    }
}

impl fmt::Display for DirectionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
