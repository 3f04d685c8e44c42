//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::{DirectionPreference, RecentStations, Shortcut};
use crate::domain::{TimetableEntry, Urgency};

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Case-insensitive substring to match (empty matches all)
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Station search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<String>,
}

/// A train in a timetable response.
#[derive(Debug, Serialize)]
pub struct EntryResult {
    pub station: String,
    pub direction: String,
    pub origin: String,
    pub destination: String,
    pub due_in_minutes: i32,
    pub estimated_time: String,

    /// Last reported location, omitted when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_location: Option<String>,

    pub train_type: String,

    /// Whether this is a DART (vs. a mainline or commuter train)
    pub is_dart: bool,

    /// Whether the train is due within five minutes
    pub urgent: bool,
}

impl EntryResult {
    pub fn from_entry(entry: &TimetableEntry) -> Self {
        Self {
            station: entry.station.clone(),
            direction: entry.direction.clone(),
            origin: entry.origin.clone(),
            destination: entry.destination.clone(),
            due_in_minutes: entry.due_in_minutes,
            estimated_time: entry.estimated_time.clone(),
            last_location: entry.last_location().map(str::to_string),
            train_type: entry.train_type.clone(),
            is_dart: entry.is_dart(),
            urgent: entry.urgency() == Urgency::Urgent,
        }
    }
}

/// A station's live timetable, split by direction.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    pub station: String,
    pub preferred_direction: DirectionPreference,
    pub northbound: Vec<EntryResult>,
    pub southbound: Vec<EntryResult>,
}

/// Request to set a station's direction preference.
#[derive(Debug, Deserialize)]
pub struct DirectionRequest {
    /// "north" or "south"
    pub direction: String,
}

/// A station's stored direction preference.
#[derive(Debug, Serialize)]
pub struct DirectionResponse {
    pub station: String,
    pub direction: DirectionPreference,
}

/// Request to record a recently viewed station.
#[derive(Debug, Deserialize)]
pub struct AddRecentRequest {
    pub station: String,
}

/// Recent stations and their shortcuts.
#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub recent: Vec<String>,
    pub shortcuts: Vec<Shortcut>,
}

impl RecentResponse {
    pub fn from_recent(recent: &RecentStations) -> Self {
        Self {
            recent: recent.as_slice().to_vec(),
            shortcuts: recent.shortcuts(),
        }
    }
}

/// Launch parameters from a shortcut or deep link.
#[derive(Debug, Deserialize)]
pub struct LaunchRequest {
    /// Shortcut id, e.g. "station_0"
    pub shortcut: Option<String>,

    /// Station name
    pub station: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
