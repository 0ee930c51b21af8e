//! ETH-denominated price oracle
//!
//! This crate resolves asset prices from per-asset external price feeds
//! and normalizes them to a canonical 18-decimal fixed-point unit
//! ("units of ETH per 1 unit of asset").
//!
//! # Core Components
//!
//! - [`registry`] - Owner-gated mapping from asset id to price-source id
//! - [`resolver`] - Price resolution, batch queries, reciprocal prices
//! - [`feed`] - The `PriceFeed` trait, feed directory, and static feeds
//! - [`math`] - Checked fixed-point rescaling and reciprocal arithmetic
//! - [`bootstrap`] - Resolver construction from a validated config
//!
//! # Key Invariants
//!
//! - At most one source per asset; overwriting an entry is a defined
//!   operation, not an error
//! - The native asset always prices at exactly `WAD` without consulting
//!   any source
//! - Every failing operation commits nothing: batch queries return no
//!   partial results and failed bulk-sets leave the registry untouched
//! - Non-positive readings and arithmetic that would wrap are rejected,
//!   never coerced

pub mod bootstrap;
pub mod error;
pub mod feed;
pub mod math;
pub mod registry;
pub mod resolver;

pub use bootstrap::build_resolver;
pub use error::OracleError;
pub use feed::{FeedDirectory, FeedReading, PriceFeed, StaticFeed};
pub use math::{Wad, DEFAULT_FEED_DECIMALS, WAD, WAD_DECIMALS};
pub use registry::SourceRegistry;
pub use resolver::PriceResolver;

pub type OracleResult<T> = std::result::Result<T, OracleError>;
