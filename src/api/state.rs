use std::sync::Arc;

use crate::metrics::ErrorMetrics;
use crate::services::FeedService;
use crate::storage::{FallbackPool, FeedStore};

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService>,
    pub store: Arc<FeedStore>,
    pub metrics: Arc<ErrorMetrics>,
}

impl AppState {
    /// Wires the feed service over the given store, fallback pool, and error
    /// sink. The store and metrics handles are kept alongside the service so
    /// the stats endpoint can read their counters directly.
    pub fn new(
        store: Arc<FeedStore>,
        fallback: Arc<FallbackPool>,
        metrics: Arc<ErrorMetrics>,
    ) -> Self {
        let feed_service = Arc::new(FeedService::new(store.clone(), fallback, metrics.clone()));
        Self {
            feed_service,
            store,
            metrics,
        }
    }
}
