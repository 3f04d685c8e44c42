use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dart_timetable::board::refresh_stations;
use dart_timetable::cache::LocalCache;
use dart_timetable::config::AppConfig;
use dart_timetable::irishrail::RailClient;
use dart_timetable::web::{AppState, create_router};

/// How often to refresh the station list (24 hours).
const STATION_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let rail = RailClient::new(config.rail_config())?;

    let cache = LocalCache::open(&config.cache_file)?;
    info!(path = %config.cache_file.display(), "opened cache");

    // Refresh station names in the background; the first tick is immediate
    let rail_refresh = rail.clone();
    let cache_refresh = cache.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATION_REFRESH_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = refresh_stations(&rail_refresh, &cache_refresh).await {
                warn!(error = %e, "failed to refresh station list");
            }
        }
    });

    let state = AppState::new(rail, cache);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "DART timetable listening");
    info!("  GET  /health");
    info!("  GET  /api/stations?q=          - Search stations");
    info!("  GET  /api/stations/:name/timetable - Live timetable by direction");
    info!("  PUT  /api/stations/:name/direction - Set preferred direction");
    info!("  GET  /api/recent               - Recent stations and shortcuts");
    info!("  POST /api/recent               - Record a recent station");
    info!("  GET  /api/launch?shortcut=     - Open a shortcut");

    axum::serve(listener, app).await?;
    Ok(())
}
