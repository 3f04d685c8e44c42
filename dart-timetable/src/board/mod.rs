//! Consumer-side logic built on the client and the cache.
//!
//! This is what a front end does with the raw data: split a timetable by
//! direction, remember which direction a station was last viewed in, keep
//! the recent-stations list and its shortcuts, filter station suggestions,
//! and route launches.

mod direction;
mod launch;
mod recent;
mod stations;

pub use direction::{
    DirectionBoard, DirectionPreference, InvalidDirectionPreference, partition_by_direction,
};
pub use launch::{LaunchTarget, UnknownShortcut};
pub use recent::{MAX_SHORTCUTS, RecentStations, Shortcut};
pub use stations::{RefreshError, cached_stations, filter_suggestions, refresh_stations};
