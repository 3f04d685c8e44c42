//! Launch routing.
//!
//! A launch (from a shortcut or a deep link) is resolved into an explicit
//! [`LaunchTarget`] value that the router acts on. Nothing is stashed in
//! global state for a later screen to pick up.

use super::recent::RecentStations;

/// Where a launch should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// The home view (search and recent stations).
    Home,
    /// A station's timetable.
    Station(String),
}

/// A shortcut id that no longer maps to a station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shortcut {0:?}")]
pub struct UnknownShortcut(pub String);

impl LaunchTarget {
    /// Resolve a launch request.
    ///
    /// A shortcut id takes precedence over a station name. Blank values
    /// count as absent.
    pub fn resolve(
        shortcut: Option<&str>,
        station: Option<&str>,
        recent: &RecentStations,
    ) -> Result<Self, UnknownShortcut> {
        if let Some(id) = shortcut.map(str::trim).filter(|s| !s.is_empty()) {
            return recent
                .resolve_shortcut(id)
                .map(|s| LaunchTarget::Station(s.to_string()))
                .ok_or_else(|| UnknownShortcut(id.to_string()));
        }

        match station.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => Ok(LaunchTarget::Station(name.to_string())),
            None => Ok(LaunchTarget::Home),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recent() -> RecentStations {
        RecentStations::new(vec!["Bray".into(), "Howth".into()])
    }

    #[test]
    fn shortcut_resolves_to_station() {
        let target = LaunchTarget::resolve(Some("station_1"), None, &recent()).unwrap();
        assert_eq!(target, LaunchTarget::Station("Howth".into()));
    }

    #[test]
    fn shortcut_wins_over_station() {
        let target = LaunchTarget::resolve(Some("station_0"), Some("Pearse"), &recent()).unwrap();
        assert_eq!(target, LaunchTarget::Station("Bray".into()));
    }

    #[test]
    fn unknown_shortcut_is_an_error() {
        let err = LaunchTarget::resolve(Some("station_3"), None, &recent()).unwrap_err();
        assert_eq!(err, UnknownShortcut("station_3".into()));
    }

    #[test]
    fn station_name_is_used_directly() {
        let target = LaunchTarget::resolve(None, Some("Pearse"), &recent()).unwrap();
        assert_eq!(target, LaunchTarget::Station("Pearse".into()));
    }

    #[test]
    fn nothing_goes_home() {
        assert_eq!(
            LaunchTarget::resolve(None, None, &recent()).unwrap(),
            LaunchTarget::Home
        );
        assert_eq!(
            LaunchTarget::resolve(Some(""), Some("  "), &recent()).unwrap(),
            LaunchTarget::Home
        );
    }
}
