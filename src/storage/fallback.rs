use std::collections::HashSet;

use rand::Rng;

use crate::models::ItemId;
use crate::services::FallbackSource;

/// Curated pool of evergreen items used to pad feeds that come up short.
///
/// The pool is built once at startup and never mutated, so sampling needs no
/// synchronization beyond a thread-local RNG.
pub struct FallbackPool {
    items: Vec<ItemId>,
}

impl FallbackPool {
    /// Creates a pool over the given items. Duplicates are kept as provided;
    /// the sampler deduplicates on draw.
    pub fn new(items: Vec<ItemId>) -> Self {
        Self { items }
    }

    /// The default "golden" pool of editorially blessed item ids.
    pub fn golden() -> Self {
        Self::new((1..=50).collect())
    }

    /// Draws up to `size` distinct items from the pool, skipping everything in
    /// `exclude`. Returns fewer than `size` items when the pool cannot supply
    /// that many distinct eligible ids.
    pub fn random_feed(&self, size: u8, exclude: &[ItemId]) -> Vec<ItemId> {
        self.sample_with(&mut rand::rng(), size, exclude)
    }

    /// Partial Fisher-Yates walk over the pool: each step swaps a uniformly
    /// chosen remaining index into position, so every visited item is drawn
    /// without replacement and the loop touches each index at most once.
    fn sample_with<R: Rng>(&self, rng: &mut R, size: u8, exclude: &[ItemId]) -> Vec<ItemId> {
        if self.items.is_empty() || size == 0 {
            return Vec::new();
        }

        let mut excluded: HashSet<ItemId> = exclude.iter().copied().collect();
        let mut indices: Vec<usize> = (0..self.items.len()).collect();
        let mut result = Vec::with_capacity(size as usize);

        for step in 0..indices.len() {
            if result.len() == size as usize {
                break;
            }
            let swap_with = rng.random_range(step..indices.len());
            indices.swap(step, swap_with);
            let item = self.items[indices[step]];
            // Also screens out duplicates within the pool itself.
            if excluded.insert(item) {
                result.push(item);
            }
        }

        result
    }

    /// Number of items in the pool, duplicates included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool holds no items at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait::async_trait]
impl FallbackSource for FallbackPool {
    async fn random_feed(&self, size: u8, exclude: &[ItemId]) -> Vec<ItemId> {
        FallbackPool::random_feed(self, size, exclude)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_draws_requested_count_of_distinct_items() {
        let pool = FallbackPool::golden();

        let items = pool.random_feed(10, &[]);

        assert_eq!(items.len(), 10);
        let distinct: HashSet<ItemId> = items.iter().copied().collect();
        assert_eq!(distinct.len(), 10);
        assert!(items.iter().all(|item| (1..=50).contains(item)));
    }

    #[test]
    fn test_excluded_items_never_drawn() {
        let pool = FallbackPool::golden();
        let exclude: Vec<ItemId> = (1..=40).collect();

        let items = pool.random_feed(10, &exclude);

        assert_eq!(items.len(), 10);
        assert!(items.iter().all(|item| (41..=50).contains(item)));
    }

    #[test]
    fn test_golden_pool_holds_fifty_items() {
        let pool = FallbackPool::golden();

        assert_eq!(pool.len(), 50);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_pool_duplicates_collapse_on_draw() {
        let pool = FallbackPool::new(vec![5, 5, 5, 6]);

        let items = pool.random_feed(4, &[]);

        assert_eq!(items.len(), 2);
        let distinct: HashSet<ItemId> = items.iter().copied().collect();
        assert_eq!(distinct, HashSet::from([5, 6]));
        // Length counts slots, not distinct ids.
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_short_draw_when_pool_is_small() {
        let pool = FallbackPool::new(vec![1, 2, 3]);

        let items = pool.random_feed(10, &[]);

        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let pool = FallbackPool::new(Vec::new());

        assert!(pool.random_feed(10, &[]).is_empty());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_zero_size_yields_nothing() {
        let pool = FallbackPool::golden();

        assert!(pool.random_feed(0, &[1, 2]).is_empty());
    }

    #[test]
    fn test_fully_excluded_pool_yields_nothing() {
        let pool = FallbackPool::new(vec![1, 2, 3]);

        assert!(pool.random_feed(3, &[1, 2, 3]).is_empty());
    }

    #[test]
    fn test_foreign_exclusions_do_not_shrink_draws() {
        let pool = FallbackPool::golden();
        // Ids far outside the pool must not reduce how many items come back.
        let exclude: Vec<ItemId> = (1_000..1_050).collect();

        let items = pool.random_feed(50, &exclude);

        assert_eq!(items.len(), 50);
    }

    #[test]
    fn test_repeated_draws_stay_distinct_and_exclusion_free() {
        let pool = FallbackPool::golden();
        let exclude: Vec<ItemId> = (1..=20).collect();

        // Many rounds so varied swap positions across the walk get exercised.
        for _ in 0..200 {
            let items = pool.random_feed(10, &exclude);
            assert_eq!(items.len(), 10);
            let distinct: HashSet<ItemId> = items.iter().copied().collect();
            assert_eq!(distinct.len(), 10);
            assert!(items.iter().all(|item| (21..=50).contains(item)));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let pool = FallbackPool::golden();
        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);

        let first = pool.sample_with(&mut first_rng, 10, &[3]);
        let second = pool.sample_with(&mut second_rng, 10, &[3]);

        assert_eq!(first, second);
        assert!(!first.contains(&3));
    }

    #[test]
    fn test_fallback_source_trait_delegates() {
        let pool = FallbackPool::golden();

        let source: &dyn FallbackSource = &pool;
        let items = tokio_test::block_on(source.random_feed(5, &[]));
        assert_eq!(items.len(), 5);
    }
}
