//! Price resolver
//!
//! Produces canonical ETH-denominated prices for one or many assets,
//! plus reciprocal (ETH-in-asset-terms) prices. The resolver is
//! stateless logic over the [`SourceRegistry`] and the injected feeds:
//! it holds no mutable state of its own beyond what the registry owns.

use crate::error::OracleError;
use crate::feed::FeedDirectory;
use crate::math::{self, Wad, WAD, WAD_DECIMALS};
use crate::registry::SourceRegistry;
use crate::OracleResult;
use common::{AccountId, AssetId, SourceId};
use tracing::debug;

/// Resolves asset prices through the registry and feed directory
#[derive(Debug)]
pub struct PriceResolver {
    registry: SourceRegistry,
    feeds: FeedDirectory,
}

impl PriceResolver {
    /// Create a resolver over a registry and its wired feeds
    pub fn new(registry: SourceRegistry, feeds: FeedDirectory) -> Self {
        Self { registry, feeds }
    }

    /// Price of one asset unit, in ETH at canonical 18-decimal precision
    ///
    /// The native asset always resolves to exactly [`WAD`] without
    /// consulting any source. Anything else requires a registered
    /// source with a feed behind it, a positive reading, and a
    /// rescaling that fits the canonical range.
    pub fn asset_price(&self, asset: AssetId) -> OracleResult<Wad> {
        if self.registry.is_native(asset) {
            return Ok(WAD);
        }
        let source = self
            .registry
            .get_source(asset)
            .ok_or(OracleError::SourceMissing(asset))?;
        let feed = self
            .feeds
            .get(source)
            .ok_or(OracleError::SourceMissing(asset))?;

        let reading = feed.latest_reading();
        if reading.answer <= 0 {
            return Err(OracleError::InvalidPrice(asset));
        }
        let price = math::rescale(reading.answer as u128, feed.decimals(), WAD_DECIMALS)
            .ok_or(OracleError::InvalidPrice(asset))?;
        debug!(asset = %asset, source = %source, price, "asset price resolved");
        Ok(price)
    }

    /// Prices for a batch of assets, in input order
    ///
    /// All-or-nothing: the first failing asset aborts the whole call
    /// and no partial sequence is returned.
    pub fn assets_prices(&self, assets: &[AssetId]) -> OracleResult<Vec<Wad>> {
        assets.iter().map(|asset| self.asset_price(*asset)).collect()
    }

    /// Price of one ETH, denominated in the asset (`10^36 / price`)
    pub fn eth_price_in_asset(&self, asset: AssetId) -> OracleResult<Wad> {
        if self.registry.is_native(asset) {
            return Ok(WAD);
        }
        let price = self.asset_price(asset)?;
        math::reciprocal(price).ok_or(OracleError::InvalidPrice(asset))
    }

    /// The registered source for an asset, without dereferencing it
    pub fn source_of_asset(&self, asset: AssetId) -> Option<SourceId> {
        self.registry.get_source(asset)
    }

    /// Register or replace sources for a batch of assets (owner only)
    pub fn set_sources(
        &mut self,
        caller: AccountId,
        assets: &[AssetId],
        sources: &[SourceId],
    ) -> OracleResult<()> {
        self.registry.set_sources(caller, assets, sources)
    }

    /// Set the native-asset id (owner only, must be non-zero)
    pub fn set_native_asset(&mut self, caller: AccountId, asset: AssetId) -> OracleResult<()> {
        self.registry.set_native_asset(caller, asset)
    }

    /// Hand the registry to a new owner (owner only)
    pub fn transfer_ownership(
        &mut self,
        caller: AccountId,
        new_owner: AccountId,
    ) -> OracleResult<()> {
        self.registry.transfer_ownership(caller, new_owner)
    }

    /// The underlying registry
    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// The feed directory, for wiring feed objects to source ids
    pub fn feeds(&self) -> &FeedDirectory {
        &self.feeds
    }

    /// Mutable access to the feed directory
    pub fn feeds_mut(&mut self) -> &mut FeedDirectory {
        &mut self.feeds
    }
}
