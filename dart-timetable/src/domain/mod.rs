//! Domain types for the DART timetable.
//!
//! These are the records the rest of the crate works with once the XML
//! payloads have been mapped. They carry the app's vocabulary, not the
//! API's field names.

mod station;
mod timetable;

pub use station::Station;
pub use timetable::{Direction, TimetableEntry, TrainType, URGENT_DUE_IN_MINS, Urgency};

#[cfg(test)]
pub(crate) use timetable::sample_entry;
