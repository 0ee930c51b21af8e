//! Oracle error types

use common::{AccountId, AssetId};
use thiserror::Error;

/// Errors that can occur while resolving prices or mutating the registry
///
/// Every variant is terminal for the triggering call: there are no
/// retries and no partial effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The asset has no registered price source
    #[error("no price source registered for asset {0}")]
    SourceMissing(AssetId),

    /// The source returned a non-positive reading, or a conversion
    /// would overflow or truncate to zero
    #[error("price source for asset {0} returned an invalid price")]
    InvalidPrice(AssetId),

    /// Bulk-set called with asset and source lists of different lengths
    #[error("inconsistent parameters: {assets} assets but {sources} sources")]
    InconsistentParams { assets: usize, sources: usize },

    /// The reserved zero address was supplied where a real identifier
    /// is required
    #[error("the zero address is reserved and cannot be used here")]
    ZeroAddress,

    /// A mutating operation was attempted by someone other than the owner
    #[error("caller {0} is not the registry owner")]
    Unauthorized(AccountId),
}
