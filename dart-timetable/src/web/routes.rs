//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, put},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::board::{
    DirectionPreference, LaunchTarget, RecentStations, cached_stations, filter_suggestions,
    partition_by_direction,
};
use crate::cache::CacheError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(search_stations))
        .route("/api/stations/:name/timetable", get(station_timetable))
        .route("/api/stations/:name/direction", put(set_direction))
        .route("/api/recent", get(recent_stations).post(add_recent_station))
        .route("/api/launch", get(launch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name.
///
/// The station list is fetched once and memoized in the cache.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let all = cached_stations(&state.rail, &state.cache).await;
    let limit = req.limit.unwrap_or(usize::MAX);

    let stations = filter_suggestions(&all, &req.q)
        .into_iter()
        .take(limit)
        .map(|s| s.description().to_string())
        .collect();

    Json(StationSearchResponse { stations })
}

/// Live timetable for a station, split by direction.
///
/// An unreachable API renders as an empty board, not an error.
async fn station_timetable(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<TimetableResponse> {
    let entries = state.rail.get_timetable(&name).await;
    let board = partition_by_direction(entries);
    let preferred_direction = DirectionPreference::load(&state.cache, &name);

    Json(TimetableResponse {
        station: name,
        preferred_direction,
        northbound: board.northbound.iter().map(EntryResult::from_entry).collect(),
        southbound: board.southbound.iter().map(EntryResult::from_entry).collect(),
    })
}

/// Remember which direction to show first for a station.
async fn set_direction(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<DirectionRequest>,
) -> Result<Json<DirectionResponse>, AppError> {
    let direction: DirectionPreference =
        req.direction.parse().map_err(|e| AppError::BadRequest {
            message: format!("{e}"),
        })?;

    direction.save(&state.cache, &name)?;

    Ok(Json(DirectionResponse {
        station: name,
        direction,
    }))
}

/// Recently viewed stations and their shortcuts.
async fn recent_stations(State(state): State<AppState>) -> Json<RecentResponse> {
    let recent = RecentStations::load(&state.cache);
    Json(RecentResponse::from_recent(&recent))
}

/// Record a recently viewed station.
async fn add_recent_station(
    State(state): State<AppState>,
    Json(req): Json<AddRecentRequest>,
) -> Result<Json<RecentResponse>, AppError> {
    let station = req.station.trim();
    if station.is_empty() {
        return Err(AppError::BadRequest {
            message: "station must not be blank".to_string(),
        });
    }

    let mut recent = RecentStations::load(&state.cache);
    if recent.add(station) {
        recent.save(&state.cache)?;
    }

    Ok(Json(RecentResponse::from_recent(&recent)))
}

/// Route a shortcut or deep-link launch to its station.
async fn launch(
    State(state): State<AppState>,
    Query(req): Query<LaunchRequest>,
) -> Result<Redirect, AppError> {
    let recent = RecentStations::load(&state.cache);
    let target = LaunchTarget::resolve(req.shortcut.as_deref(), req.station.as_deref(), &recent)
        .map_err(|e| AppError::NotFound {
            message: e.to_string(),
        })?;

    match target {
        LaunchTarget::Home => Ok(Redirect::to("/api/recent")),
        LaunchTarget::Station(name) => Ok(Redirect::to(&timetable_path(&name)?)),
    }
}

/// Path of a station's timetable route, with the name percent-encoded.
fn timetable_path(station: &str) -> Result<String, AppError> {
    let internal = |message: &str| AppError::Internal {
        message: message.to_string(),
    };

    let mut url = reqwest::Url::parse("http://localhost/api/stations")
        .map_err(|_| internal("failed to build timetable URL"))?;
    url.path_segments_mut()
        .map_err(|_| internal("failed to build timetable URL"))?
        .push(station)
        .push("timetable");

    Ok(url.path().to_string())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, reason = %message, "request failed");
        } else {
            warn!(%status, reason = %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
