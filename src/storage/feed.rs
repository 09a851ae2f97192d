use std::sync::atomic::{AtomicU16, AtomicU64, Ordering};

use dashmap::DashMap;

use crate::error::{AppError, AppResult};
use crate::models::{FeedItems, ItemId, UserId, TOTAL_FEED_SIZE};
use crate::services::FeedSource;

/// A user's stored feed: the immutable precomputed payload plus the read cursor.
///
/// The payload is written once when the record is inserted and never mutated
/// afterwards, so concurrent readers may slice it without synchronization. The
/// cursor is the only mutable field and is advanced atomically.
struct UserFeed {
    items: Box<FeedItems>,
    cursor: AtomicU16,
}

impl UserFeed {
    fn new(items: FeedItems) -> Self {
        Self {
            items: Box::new(items),
            cursor: AtomicU16::new(0),
        }
    }
}

/// In-memory store of precomputed per-user feeds.
///
/// Records live in a sharded concurrent map keyed by user id, so reads and
/// writes for different users proceed in parallel without a global lock.
/// Advancing a cursor uses a compare-and-swap retry loop: two concurrent reads
/// for the same user always observe distinct offsets, and the final offset
/// equals the sum of the returned slice lengths.
pub struct FeedStore {
    feeds: DashMap<UserId, UserFeed>,
    num_exceed: AtomicU64,
}

impl FeedStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            feeds: DashMap::new(),
            num_exceed: AtomicU64::new(0),
        }
    }

    /// Stores (or fully replaces) a user's precomputed feed and resets their
    /// read cursor to the start of it.
    pub fn set_feed(&self, user_id: UserId, items: FeedItems) {
        self.feeds.insert(user_id, UserFeed::new(items));
    }

    /// Returns the next up-to-`size` unseen items for the user, advancing the
    /// cursor by the number of items returned.
    ///
    /// A cursor that already reached the end of the feed yields an empty vec,
    /// not an error; that read counts as an exceed event, as does the read
    /// that first lands on the end. Unknown users get `FeedNotFound` and leave
    /// all counters untouched.
    pub fn next_feed(&self, user_id: UserId, size: u8) -> AppResult<Vec<ItemId>> {
        let feed = self
            .feeds
            .get(&user_id)
            .ok_or(AppError::FeedNotFound(user_id))?;

        let advanced = feed
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Relaxed, |offset| {
                if offset as usize >= TOTAL_FEED_SIZE {
                    None
                } else {
                    Some((offset as usize + size as usize).min(TOTAL_FEED_SIZE) as u16)
                }
            });

        match advanced {
            Ok(offset) => {
                let last = (offset as usize + size as usize).min(TOTAL_FEED_SIZE);
                if last >= TOTAL_FEED_SIZE {
                    self.num_exceed.fetch_add(1, Ordering::Relaxed);
                }
                Ok(feed.items[offset as usize..last].to_vec())
            }
            // Cursor already past the end: the user has seen every item.
            Err(_) => {
                self.num_exceed.fetch_add(1, Ordering::Relaxed);
                Ok(Vec::new())
            }
        }
    }

    /// Returns the total number of exceed events and that count divided by the
    /// number of users with a stored feed (0.0 if there are none).
    ///
    /// Observability only; the two readings are not taken atomically and may
    /// lag concurrent mutation.
    pub fn percentile_exceed(&self) -> (u64, f64) {
        let count = self.num_exceed.load(Ordering::Relaxed);
        let users = self.feeds.len();
        let fraction = if users == 0 {
            0.0
        } else {
            count as f64 / users as f64
        };
        (count, fraction)
    }

    /// Number of users with a stored feed
    pub fn user_count(&self) -> usize {
        self.feeds.len()
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FeedSource for FeedStore {
    async fn next_feed(&self, user_id: UserId, size: u8) -> AppResult<Vec<ItemId>> {
        FeedStore::next_feed(self, user_id, size)
    }
}
