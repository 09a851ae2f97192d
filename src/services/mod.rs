pub mod feed;

pub use feed::FeedService;

use crate::error::{AppError, AppResult};
use crate::models::{ItemId, UserId};

/// Source of precomputed per-user feed pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns the next up-to-`size` unseen items for the user.
    async fn next_feed(&self, user_id: UserId, size: u8) -> AppResult<Vec<ItemId>>;
}

/// Source of random padding items for feeds that come up short.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FallbackSource: Send + Sync {
    /// Returns up to `size` distinct items, none of which appear in `exclude`.
    async fn random_feed(&self, size: u8, exclude: &[ItemId]) -> Vec<ItemId>;
}

/// Sink for anomalies observed while assembling a feed.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink: Send + Sync {
    /// Records one feed assembly anomaly for the given user.
    fn record_feed_error(&self, user_id: UserId, error: &AppError);
}
