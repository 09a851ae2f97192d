/// Identifier for a user with a precomputed feed
pub type UserId = u32;

/// Identifier for a single feed item (e.g. a video id)
pub type ItemId = u32;

/// Every precomputed feed holds exactly this many items
pub const TOTAL_FEED_SIZE: usize = 200;

/// Page size served when a request does not ask for a specific one
pub const DEFAULT_FEED_SIZE: u8 = 10;

/// A full precomputed feed payload, fixed-length by construction
pub type FeedItems = [ItemId; TOTAL_FEED_SIZE];
