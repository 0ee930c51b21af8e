//! Source registry
//!
//! Authoritative mapping from asset id to price-source id, plus the
//! native-asset sentinel and the single-owner mutation gate. There is no
//! ambient privileged-caller state: every mutating call takes the
//! authenticated caller explicitly and checks it by equality.

use crate::error::OracleError;
use crate::OracleResult;
use common::{AccountId, AssetId, SourceId};
use std::collections::HashMap;
use tracing::{debug, info};

/// Owner-gated asset-to-source mapping
///
/// Invariant: at most one source per asset. Overwriting an entry is a
/// defined operation; there is no deletion (overwriting with a zero
/// source id is the caller convention for "unset"). A failed bulk-set
/// leaves the mapping untouched.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    owner: AccountId,
    native_asset: AssetId,
    sources: HashMap<AssetId, SourceId>,
}

impl SourceRegistry {
    /// Create a registry with an initial bulk mapping
    ///
    /// The asset and source lists must be the same length; the mapping
    /// is populated atomically with construction. The native-asset id
    /// starts at the zero sentinel until [`Self::set_native_asset`] is
    /// called.
    pub fn new(
        owner: AccountId,
        assets: &[AssetId],
        sources: &[SourceId],
    ) -> OracleResult<Self> {
        if assets.len() != sources.len() {
            return Err(OracleError::InconsistentParams {
                assets: assets.len(),
                sources: sources.len(),
            });
        }
        let mapping: HashMap<_, _> =
            assets.iter().copied().zip(sources.iter().copied()).collect();
        info!(owner = %owner, entries = mapping.len(), "source registry created");
        Ok(Self {
            owner,
            native_asset: AssetId::ZERO,
            sources: mapping,
        })
    }

    /// Register or replace sources for a batch of assets (owner only)
    pub fn set_sources(
        &mut self,
        caller: AccountId,
        assets: &[AssetId],
        sources: &[SourceId],
    ) -> OracleResult<()> {
        self.ensure_owner(caller)?;
        // Checked before any write so a failed call commits nothing.
        if assets.len() != sources.len() {
            return Err(OracleError::InconsistentParams {
                assets: assets.len(),
                sources: sources.len(),
            });
        }
        for (asset, source) in assets.iter().zip(sources.iter()) {
            debug!(asset = %asset, source = %source, "source assigned");
            self.sources.insert(*asset, *source);
        }
        info!(entries = assets.len(), "price sources updated");
        Ok(())
    }

    /// Look up the source for an asset; `None` means unsourced
    pub fn get_source(&self, asset: AssetId) -> Option<SourceId> {
        self.sources.get(&asset).copied()
    }

    /// The configured native-asset id (zero sentinel when unset)
    pub fn native_asset(&self) -> AssetId {
        self.native_asset
    }

    /// Whether an asset id denotes the chain's native currency
    pub fn is_native(&self, asset: AssetId) -> bool {
        asset == self.native_asset
    }

    /// Set the native-asset id (owner only, must be non-zero)
    pub fn set_native_asset(&mut self, caller: AccountId, asset: AssetId) -> OracleResult<()> {
        self.ensure_owner(caller)?;
        if asset.is_zero() {
            return Err(OracleError::ZeroAddress);
        }
        info!(asset = %asset, "native asset configured");
        self.native_asset = asset;
        Ok(())
    }

    /// The current owner
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Hand the registry to a new owner (owner only, must be non-zero)
    pub fn transfer_ownership(
        &mut self,
        caller: AccountId,
        new_owner: AccountId,
    ) -> OracleResult<()> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(OracleError::ZeroAddress);
        }
        info!(from = %self.owner, to = %new_owner, "registry ownership transferred");
        self.owner = new_owner;
        Ok(())
    }

    /// Number of registered asset entries
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no assets are registered
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn ensure_owner(&self, caller: AccountId) -> OracleResult<()> {
        if caller != self.owner {
            return Err(OracleError::Unauthorized(caller));
        }
        Ok(())
    }
}
