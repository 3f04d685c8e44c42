//! DART timetable server.
//!
//! Live Irish Rail station timetables: "which DARTs are due at my station,
//! in each direction?" Fetches from the public Irish Rail realtime API and
//! keeps a small persistent cache of stations and preferences.

pub mod board;
pub mod cache;
pub mod config;
pub mod domain;
pub mod irishrail;
pub mod web;
