pub mod fallback;
pub mod feed;

pub use fallback::FallbackPool;
pub use feed::FeedStore;
