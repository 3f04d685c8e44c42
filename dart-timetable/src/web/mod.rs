//! Web layer for the DART timetable.
//!
//! A JSON API over the client and cache: station search, live timetables
//! split by direction, direction preferences, recent stations and
//! shortcut launches.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
