//! Irish Rail realtime API response DTOs.
//!
//! These types map directly to the XML documents returned by
//! `realtime.asmx`. Element names are PascalCase or lowercase-prefixed
//! (`objStation`) on the wire, so every field is renamed explicitly.
//! Optional fields use `Option` or `#[serde(default)]` because the API
//! emits empty elements rather than omitting them, and omits a few
//! (`Traintype`) on older feeds.

use serde::Deserialize;

/// Response from `getAllStationsXML`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayOfObjStation {
    /// Every station, in the order the API lists them.
    #[serde(rename = "objStation", default)]
    pub stations: Vec<ObjStation>,
}

/// A station in the `getAllStationsXML` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjStation {
    /// Display name, e.g. "Tara Street".
    #[serde(rename = "StationDesc")]
    pub station_desc: String,

    /// Alternative name (often empty).
    #[serde(rename = "StationAlias", default)]
    pub station_alias: Option<String>,

    #[serde(rename = "StationLatitude", default)]
    pub station_latitude: Option<f64>,

    #[serde(rename = "StationLongitude", default)]
    pub station_longitude: Option<f64>,

    /// Five-letter station code, e.g. "TARA".
    #[serde(rename = "StationCode", default)]
    pub station_code: Option<String>,

    #[serde(rename = "StationId", default)]
    pub station_id: Option<u32>,
}

/// Response from `getStationDataByNameXML`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayOfObjStationData {
    /// Trains due at the station within the API's default window (90 mins).
    #[serde(rename = "objStationData", default)]
    pub trains: Vec<ObjStationData>,
}

/// A train due at the queried station.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjStationData {
    /// Full name of the queried station.
    #[serde(rename = "Stationfullname", default)]
    pub stationfullname: Option<String>,

    /// Short code of the queried station.
    #[serde(rename = "Stationcode", default)]
    pub stationcode: Option<String>,

    /// Unique train identifier for the day, e.g. "E109".
    #[serde(rename = "Traincode", default)]
    pub traincode: Option<String>,

    #[serde(rename = "Origin", default)]
    pub origin: Option<String>,

    #[serde(rename = "Destination", default)]
    pub destination: Option<String>,

    /// Minutes until the train is due.
    #[serde(rename = "Duein", default)]
    pub duein: i32,

    /// Minutes late.
    #[serde(rename = "Late", default)]
    pub late: Option<i32>,

    /// Expected arrival, "HH:MM".
    #[serde(rename = "Exparrival", default)]
    pub exparrival: Option<String>,

    /// Expected departure, "HH:MM".
    #[serde(rename = "Expdepart", default)]
    pub expdepart: Option<String>,

    /// "Northbound", "Southbound", or a line-specific value.
    #[serde(rename = "Direction", default)]
    pub direction: Option<String>,

    /// Free-text description of where the train was last seen.
    #[serde(rename = "Lastlocation", default)]
    pub lastlocation: Option<String>,

    /// "DART", "Train", etc.
    #[serde(rename = "Traintype", default)]
    pub traintype: Option<String>,
}
