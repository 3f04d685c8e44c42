//! Station type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A station on the Irish Rail network, identified by its description.
///
/// The description (e.g. "Connolly", "Tara Street") is the only field kept
/// downstream: it is both the display name and the lookup key for the
/// timetable endpoint.
///
/// Serializes as a bare string, so a list of stations caches as a JSON
/// array of names.
///
/// # Examples
///
/// ```
/// use dart_timetable::domain::Station;
///
/// let station = Station::new("Tara Street");
/// assert_eq!(station.description(), "Tara Street");
/// assert_eq!(station.to_string(), "Tara Street");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station {
    description: String,
}

impl Station {
    /// Create a station from its description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Returns the station description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Consumes the station, returning its description.
    pub fn into_description(self) -> String {
        self.description
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<&str> for Station {
    fn from(s: &str) -> Self {
        Station::new(s)
    }
}
