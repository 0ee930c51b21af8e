//! Source-id to feed-object injection point

use super::PriceFeed;
use common::SourceId;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps source identifiers to the feed objects behind them
///
/// The registry only knows source ids; the directory is how the host
/// wires those ids to concrete [`PriceFeed`] implementations. A source
/// id with no entry here is indistinguishable from an unsourced asset
/// at resolution time.
#[derive(Default, Clone)]
pub struct FeedDirectory {
    feeds: HashMap<SourceId, Arc<dyn PriceFeed>>,
}

impl FeedDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the feed behind a source id
    pub fn insert(&mut self, source: SourceId, feed: Arc<dyn PriceFeed>) {
        self.feeds.insert(source, feed);
    }

    /// Look up the feed behind a source id
    pub fn get(&self, source: SourceId) -> Option<&Arc<dyn PriceFeed>> {
        self.feeds.get(&source)
    }

    /// Whether a feed is registered for this source id
    pub fn contains(&self, source: SourceId) -> bool {
        self.feeds.contains_key(&source)
    }

    /// Number of registered feeds
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

impl std::fmt::Debug for FeedDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedDirectory").field("feeds", &self.feeds.len()).finish()
    }
}
