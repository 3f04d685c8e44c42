//! Irish Rail realtime API client.
//!
//! This module provides an HTTP client for the public Irish Rail realtime
//! XML API (`realtime.asmx`), which serves live station predictions for
//! DART and mainline services.
//!
//! Key characteristics of the API:
//! - Stations are looked up by description ("Tara Street"), not by code
//! - Responses are XML only; the JSON variants are not used
//! - Trains on non-DART lines report a direction like "To Maynooth"
//!   rather than "Northbound"/"Southbound"

mod client;
mod convert;
mod error;
#[cfg(test)]
pub(crate) mod fixture;
mod types;

pub use client::{CertificatePolicy, RailClient, RailConfig};
pub use convert::{convert_station_data, convert_station_list, convert_train};
pub use error::RailError;
pub use types::{ArrayOfObjStation, ArrayOfObjStationData, ObjStation, ObjStationData};
