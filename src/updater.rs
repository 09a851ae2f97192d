use std::time::Instant;

use rand::Rng;

use crate::models::FeedItems;
use crate::storage::FeedStore;

/// Fills the store with freshly generated feeds for users `1..=users`.
///
/// Item ids are drawn uniformly from `1..=max_item_id`; a `max_item_id` of
/// zero is clamped to one so generation always has a valid range. Runs on the
/// caller's thread, so the server only starts listening once every feed is in
/// place.
pub fn seed_feeds(store: &FeedStore, users: u32, max_item_id: u32) {
    let started = Instant::now();
    let max_item_id = max_item_id.max(1);
    let mut rng = rand::rng();

    for user_id in 1..=users {
        let items: FeedItems = std::array::from_fn(|_| rng.random_range(1..=max_item_id));
        store.set_feed(user_id, items);
    }

    tracing::info!(
        users,
        max_item_id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Seeded precomputed feeds"
    );
}
