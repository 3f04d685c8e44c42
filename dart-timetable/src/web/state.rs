//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::LocalCache;
use crate::irishrail::RailClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Irish Rail API client
    pub rail: Arc<RailClient>,

    /// Persistent local cache
    pub cache: LocalCache,
}

impl AppState {
    /// Create a new app state.
    pub fn new(rail: RailClient, cache: LocalCache) -> Self {
        Self {
            rail: Arc::new(rail),
            cache,
        }
    }
}
