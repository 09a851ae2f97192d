use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use feed_api::api::{create_router, AppState};
use feed_api::config::Config;
use feed_api::metrics::ErrorMetrics;
use feed_api::storage::{FallbackPool, FeedStore};
use feed_api::updater;

/// How often the exceed counters are reported while the server runs.
const EXCEED_LOG_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("feed_api=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(FeedStore::new());
    let fallback = Arc::new(FallbackPool::golden());
    let metrics = Arc::new(ErrorMetrics::new());

    updater::seed_feeds(&store, config.seed_users, config.max_item_id);
    spawn_exceed_reporter(store.clone());

    let state = AppState::new(store, fallback, metrics);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Feed server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically reports how many reads have run past the end of a feed.
fn spawn_exceed_reporter(store: Arc<FeedStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(EXCEED_LOG_INTERVAL);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            let (count, fraction) = store.percentile_exceed();
            tracing::debug!(count, fraction, "Feed exceed events");
        }
    });
}
