use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{ItemId, UserId, DEFAULT_FEED_SIZE};

use super::{ErrorSink, FallbackSource, FeedSource};

/// Assembles the feed a user actually receives: precomputed items first, then
/// random fallback items to cover any shortfall.
pub struct FeedService {
    feed_source: Arc<dyn FeedSource>,
    fallback: Arc<dyn FallbackSource>,
    error_sink: Arc<dyn ErrorSink>,
}

impl FeedService {
    pub fn new(
        feed_source: Arc<dyn FeedSource>,
        fallback: Arc<dyn FallbackSource>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            feed_source,
            fallback,
            error_sink,
        }
    }

    /// Returns `size` items for the user whenever the sources can supply that
    /// many, padding exhausted or missing precomputed feeds from the fallback
    /// source. A `size` of zero means the default page size.
    ///
    /// Anomalies along the way are reported to the error sink and absorbed;
    /// the only error surfaced to the caller is `NoFeedAvailable`, when both
    /// sources come up completely empty.
    pub async fn retrieve_feed(&self, user_id: UserId, size: u8) -> AppResult<Vec<ItemId>> {
        let size = if size == 0 { DEFAULT_FEED_SIZE } else { size };

        let mut items = match self.feed_source.next_feed(user_id, size).await {
            Ok(items) => items,
            Err(err) => {
                self.error_sink.record_feed_error(user_id, &err);
                Vec::new()
            }
        };

        let primary_len = items.len();
        let remaining = (size as usize).saturating_sub(primary_len);
        if remaining > 0 {
            let padding = self.fallback.random_feed(remaining as u8, &items).await;
            items.extend(padding);
        }

        if items.len() != size as usize {
            let err = AppError::SizeMismatch {
                requested: size,
                actual: items.len(),
            };
            self.error_sink.record_feed_error(user_id, &err);
            tracing::error!(
                user_id,
                requested_size = size,
                primary_size = primary_len,
                fallback_size = items.len() - primary_len,
                "Blended feed size does not match request"
            );
        }

        if items.is_empty() {
            return Err(AppError::NoFeedAvailable);
        }

        Ok(items)
    }
}
