//! Price feed abstraction
//!
//! A feed is the minimal capability the resolver needs from an external
//! price source: read the current `(answer, updated_at)` pair. Feeds are
//! read synchronously within the surrounding operation; there is no
//! timeout or retry. Concrete feeds are injected through the
//! [`FeedDirectory`] keyed by source id.

mod directory;
mod static_feed;

pub use directory::FeedDirectory;
pub use static_feed::StaticFeed;

use crate::math::DEFAULT_FEED_DECIMALS;

/// A single reading from a price feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedReading {
    /// Raw price at the feed's own decimal precision; non-positive
    /// readings are degenerate and rejected by the resolver
    pub answer: i128,
    /// Unix timestamp of the feed's last update; carried through but
    /// never used for staleness checks
    pub updated_at: i64,
}

/// Minimal read capability of an external price source
///
/// `decimals` is a fixed property of the feed object, reported once at
/// construction rather than re-queried per read.
#[cfg_attr(test, mockall::automock)]
pub trait PriceFeed: Send + Sync {
    /// Read the current price and its update timestamp
    fn latest_reading(&self) -> FeedReading;

    /// Decimal precision of the feed's raw answers
    fn decimals(&self) -> u32 {
        DEFAULT_FEED_DECIMALS
    }

    /// Human-readable feed label, for logs and diagnostics
    fn description(&self) -> String {
        "unnamed feed".to_string()
    }
}
