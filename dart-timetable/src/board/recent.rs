//! Recently viewed stations and the launch shortcuts derived from them.

use serde::Serialize;

use crate::cache::{CacheError, LocalCache, keys};

/// Maximum number of launch shortcuts.
pub const MAX_SHORTCUTS: usize = 5;

const SHORTCUT_ID_PREFIX: &str = "station_";

/// A launch shortcut for a recent station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    /// Stable id, `station_{index}`.
    pub id: String,
    /// Station name shown on the shortcut.
    pub title: String,
}

/// Recently selected stations, kept sorted case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentStations {
    stations: Vec<String>,
}

impl RecentStations {
    /// Build from a list of names, sorting it.
    pub fn new(stations: Vec<String>) -> Self {
        let mut recent = Self { stations };
        recent.sort();
        recent
    }

    /// Load the stored list. A missing or unreadable entry loads as empty.
    pub fn load(cache: &LocalCache) -> Self {
        Self::new(cache.get_json_or_default(keys::RECENT))
    }

    /// Store the list.
    pub fn save(&self, cache: &LocalCache) -> Result<(), CacheError> {
        cache.set_json(keys::RECENT, &self.stations)
    }

    /// Record a station. Returns `false` if it was already present.
    pub fn add(&mut self, station: &str) -> bool {
        if self.contains(station) {
            return false;
        }
        self.stations.push(station.to_string());
        self.sort();
        true
    }

    pub fn contains(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s == station)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Shortcuts for the first [`MAX_SHORTCUTS`] stations.
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        self.stations
            .iter()
            .take(MAX_SHORTCUTS)
            .enumerate()
            .map(|(i, station)| Shortcut {
                id: format!("{SHORTCUT_ID_PREFIX}{i}"),
                title: station.clone(),
            })
            .collect()
    }

    /// Find the station a shortcut id refers to.
    pub fn resolve_shortcut(&self, id: &str) -> Option<&str> {
        let index: usize = id.strip_prefix(SHORTCUT_ID_PREFIX)?.parse().ok()?;
        if index >= MAX_SHORTCUTS {
            return None;
        }
        self.stations.get(index).map(String::as_str)
    }

    fn sort(&mut self) {
        self.stations.sort_by_cached_key(|s| s.to_lowercase());
    }
}
