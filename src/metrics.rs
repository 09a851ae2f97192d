use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::AppError;
use crate::models::UserId;
use crate::services::ErrorSink;

/// Process-local counter of feed assembly anomalies.
///
/// Stands in for a real metrics backend; the counter is exposed on the stats
/// endpoint so operators can watch it without extra infrastructure.
pub struct ErrorMetrics {
    feed_errors: AtomicU64,
}

impl ErrorMetrics {
    pub fn new() -> Self {
        Self {
            feed_errors: AtomicU64::new(0),
        }
    }

    /// Total anomalies recorded since startup
    pub fn errors_recorded(&self) -> u64 {
        self.feed_errors.load(Ordering::Relaxed)
    }
}

impl Default for ErrorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSink for ErrorMetrics {
    fn record_feed_error(&self, user_id: UserId, error: &AppError) {
        self.feed_errors.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(user_id, error = %error, "Feed anomaly recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let metrics = ErrorMetrics::new();
        assert_eq!(metrics.errors_recorded(), 0);
    }

    #[test]
    fn test_each_recorded_error_increments_counter() {
        let metrics = ErrorMetrics::new();

        metrics.record_feed_error(1, &AppError::FeedNotFound(1));
        metrics.record_feed_error(
            2,
            &AppError::SizeMismatch {
                requested: 10,
                actual: 3,
            },
        );
        metrics.record_feed_error(3, &AppError::NoFeedAvailable);

        assert_eq!(metrics.errors_recorded(), 3);
    }
}
