//! Keys under which the app stores its state.

/// JSON array of station descriptions (the memoized station list).
pub const STATIONS: &str = "stations";

/// JSON array of recently selected station names.
pub const RECENT: &str = "recent";

const DIRECTION_PREFERENCE_PREFIX: &str = "direction_preference_";

/// Key for a station's preferred direction (`"north"` or `"south"`).
pub fn direction_preference(station: &str) -> String {
    format!("{DIRECTION_PREFERENCE_PREFIX}{station}")
}
