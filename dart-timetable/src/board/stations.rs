//! Memoized station list and name suggestions.

use tracing::{info, warn};

use crate::cache::{CacheError, LocalCache, keys};
use crate::domain::Station;
use crate::irishrail::{RailClient, RailError};

/// Errors from refreshing the memoized station list.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Rail(#[from] RailError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Get the station list, fetching and memoizing it on first use.
///
/// The cached list is used whenever it is non-empty. An empty fetch result
/// is returned but not stored, so the next call tries the API again.
pub async fn cached_stations(client: &RailClient, cache: &LocalCache) -> Vec<Station> {
    let cached: Vec<Station> = cache.get_json_or_default(keys::STATIONS);
    if !cached.is_empty() {
        return cached;
    }

    let fetched = client.get_stations().await;
    if !fetched.is_empty()
        && let Err(e) = cache.set_json(keys::STATIONS, &fetched)
    {
        warn!(error = %e, "failed to memoize station list");
    }

    fetched
}

/// Re-fetch the station list and replace the memoized copy.
///
/// On failure, or when the API returns no stations, the existing copy is
/// kept. Returns the number of stations stored.
pub async fn refresh_stations(
    client: &RailClient,
    cache: &LocalCache,
) -> Result<usize, RefreshError> {
    let stations = client.fetch_stations().await?;
    if stations.is_empty() {
        warn!("station refresh returned no stations, keeping cached list");
        return Ok(0);
    }

    cache.set_json(keys::STATIONS, &stations)?;
    info!(count = stations.len(), "refreshed station list");
    Ok(stations.len())
}

/// Stations whose description contains `query`, ignoring case.
///
/// Order follows `stations`. An empty query matches everything.
pub fn filter_suggestions<'a>(stations: &'a [Station], query: &str) -> Vec<&'a Station> {
    let needle = query.trim().to_lowercase();
    stations
        .iter()
        .filter(|s| s.description().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};

    use super::*;
    use crate::irishrail::{RailConfig, fixture};

    fn stations(names: &[&str]) -> Vec<Station> {
        names.iter().map(|n| Station::new(*n)).collect()
    }

    fn client_for(base_url: &str) -> RailClient {
        RailClient::new(RailConfig::new().with_base_url(base_url)).unwrap()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let all = stations(&["Connolly", "Tara Street", "Pearse", "Sandymount"]);

        let matched: Vec<&str> = filter_suggestions(&all, "aR")
            .into_iter()
            .map(|s| s.description())
            .collect();
        assert_eq!(matched, vec!["Tara Street", "Pearse"]);
    }

    #[test]
    fn empty_query_matches_all() {
        let all = stations(&["Connolly", "Pearse"]);
        assert_eq!(filter_suggestions(&all, "").len(), 2);
        assert_eq!(filter_suggestions(&all, "  ").len(), 2);
    }

    #[test]
    fn no_match_is_empty() {
        let all = stations(&["Connolly"]);
        assert!(filter_suggestions(&all, "Galway").is_empty());
    }

    #[tokio::test]
    async fn memoizes_on_first_fetch() {
        let base = fixture::spawn(fixture::upstream()).await;
        let client = client_for(&base);
        let cache = LocalCache::in_memory();

        let first = cached_stations(&client, &cache).await;
        assert_eq!(first.len(), 3);
        assert_eq!(
            cache.get("stations").as_deref(),
            Some(r#"["Connolly","Tara Street","Pearse"]"#)
        );
    }

    #[tokio::test]
    async fn uses_cache_without_fetching() {
        // Unreachable upstream: only the cache can answer.
        let client = client_for("http://127.0.0.1:1");
        let cache = LocalCache::in_memory();
        cache.set_json("stations", &["Howth", "Bray"]).unwrap();

        let result = cached_stations(&client, &cache).await;
        assert_eq!(result, stations(&["Howth", "Bray"]));
    }

    #[tokio::test]
    async fn empty_fetch_is_not_memoized() {
        let client = client_for("http://127.0.0.1:1");
        let cache = LocalCache::in_memory();

        assert!(cached_stations(&client, &cache).await.is_empty());
        assert!(!cache.contains_key("stations"));
    }

    #[tokio::test]
    async fn refresh_replaces_cached_list() {
        let base = fixture::spawn(fixture::upstream()).await;
        let client = client_for(&base);
        let cache = LocalCache::in_memory();
        cache.set_json("stations", &["Old"]).unwrap();

        let count = refresh_stations(&client, &cache).await.unwrap();
        assert_eq!(count, 3);
        let stored: Vec<String> = cache.get_json("stations").unwrap();
        assert_eq!(stored, vec!["Connolly", "Tara Street", "Pearse"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_cached_list() {
        let router = Router::new().route("/getAllStationsXML", get(|| async { "" }));
        let base = fixture::spawn(router).await;
        let client = client_for(&base);
        let cache = LocalCache::in_memory();
        cache.set_json("stations", &["Old"]).unwrap();

        assert!(matches!(
            refresh_stations(&client, &cache).await,
            Err(RefreshError::Rail(RailError::EmptyBody))
        ));
        let stored: Vec<String> = cache.get_json("stations").unwrap();
        assert_eq!(stored, vec!["Old"]);
    }
}
