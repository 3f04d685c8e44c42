//! Conversion from Irish Rail DTOs to domain types.
//!
//! Field names are mapped 1:1 into the app's vocabulary. Missing text
//! fields become empty strings; nothing is validated or dropped here.
//! Filtering by direction is the consumer's job (see `board`).

use crate::domain::{Station, TimetableEntry};

use super::types::{ArrayOfObjStation, ArrayOfObjStationData, ObjStationData};

/// Convert a station list response, keeping only descriptions in payload order.
pub fn convert_station_list(list: ArrayOfObjStation) -> Vec<Station> {
    list.stations
        .into_iter()
        .map(|s| Station::new(s.station_desc))
        .collect()
}

/// Convert a station data response into timetable entries, in payload order.
pub fn convert_station_data(data: ArrayOfObjStationData) -> Vec<TimetableEntry> {
    data.trains.into_iter().map(convert_train).collect()
}

/// Convert a single train record.
pub fn convert_train(train: ObjStationData) -> TimetableEntry {
    TimetableEntry {
        station: train.stationfullname.unwrap_or_default(),
        direction: train.direction.unwrap_or_default(),
        origin: train.origin.unwrap_or_default(),
        destination: train.destination.unwrap_or_default(),
        due_in_minutes: train.duein,
        estimated_time: train.exparrival.unwrap_or_default(),
        last_location: train.lastlocation.unwrap_or_default(),
        train_type: train.traintype.unwrap_or_default(),
    }
}
