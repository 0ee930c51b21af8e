//! Fixed-value feed with a settable answer
//!
//! Backs the static/virtual pricing mode: the answer is set from
//! configuration (or by a test) instead of streaming from a live source.

use super::{FeedReading, PriceFeed};
use crate::math::DEFAULT_FEED_DECIMALS;
use parking_lot::Mutex;

/// A price feed that returns whatever reading was last stored in it
pub struct StaticFeed {
    reading: Mutex<FeedReading>,
    decimals: u32,
    description: String,
}

impl StaticFeed {
    /// Create a feed at the default ETH-denominated precision
    pub fn new(answer: i128, updated_at: i64) -> Self {
        Self::with_decimals(answer, updated_at, DEFAULT_FEED_DECIMALS)
    }

    /// Create a feed reporting a specific decimal precision
    pub fn with_decimals(answer: i128, updated_at: i64, decimals: u32) -> Self {
        Self {
            reading: Mutex::new(FeedReading { answer, updated_at }),
            decimals,
            description: "static feed".to_string(),
        }
    }

    /// Attach a human-readable label
    pub fn named(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the stored reading
    pub fn set_reading(&self, answer: i128, updated_at: i64) {
        *self.reading.lock() = FeedReading { answer, updated_at };
    }
}

impl PriceFeed for StaticFeed {
    fn latest_reading(&self) -> FeedReading {
        *self.reading.lock()
    }

    fn decimals(&self) -> u32 {
        self.decimals
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}
