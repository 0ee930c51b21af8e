//! Resolver construction from a loaded configuration
//!
//! Wires the registry and feed directory out of a parsed config file.
//! Entries with a `static_answer` get a [`StaticFeed`] created for them;
//! live entries only register the mapping and expect their feed object
//! to be inserted by the caller.

use crate::feed::{FeedDirectory, StaticFeed};
use crate::registry::SourceRegistry;
use crate::resolver::PriceResolver;
use anyhow::{Context, Result};
use common::{AccountId, AssetId, SourceId};
use config::OracleConfig;
use std::sync::Arc;
use tracing::info;

/// Build a resolver from a validated configuration
pub fn build_resolver(cfg: &OracleConfig) -> Result<PriceResolver> {
    let owner: AccountId = cfg
        .owner
        .parse()
        .with_context(|| format!("invalid owner address '{}'", cfg.owner))?;

    let mut assets = Vec::with_capacity(cfg.feeds.len());
    let mut sources = Vec::with_capacity(cfg.feeds.len());
    for feed in &cfg.feeds {
        let asset: AssetId = feed
            .asset
            .parse()
            .with_context(|| format!("feed '{}': invalid asset address", feed.label()))?;
        let source: SourceId = feed
            .source
            .parse()
            .with_context(|| format!("feed '{}': invalid source address", feed.label()))?;
        assets.push(asset);
        sources.push(source);
    }

    let mut registry = SourceRegistry::new(owner, &assets, &sources)
        .context("failed to populate the source registry")?;

    if let Some(ref native) = cfg.native_asset {
        let native: AssetId = native
            .parse()
            .with_context(|| format!("invalid native_asset address '{}'", native))?;
        registry
            .set_native_asset(owner, native)
            .context("failed to configure the native asset")?;
    }

    let mut feeds = FeedDirectory::new();
    let now = chrono::Utc::now().timestamp();
    for (mapping, source) in cfg.feeds.iter().zip(&sources) {
        let Some(ref answer) = mapping.static_answer else {
            continue;
        };
        let answer: i128 = answer
            .parse()
            .with_context(|| format!("feed '{}': invalid static_answer", mapping.label()))?;
        let feed = StaticFeed::with_decimals(answer, now, mapping.decimals)
            .named(mapping.label().to_string());
        feeds.insert(*source, Arc::new(feed));
    }

    info!(
        service = %cfg.service.name,
        entries = registry.len(),
        static_feeds = feeds.len(),
        "price resolver built from configuration"
    );
    Ok(PriceResolver::new(registry, feeds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::WAD;

    fn static_config() -> OracleConfig {
        let yaml = r#"
service:
  name: eth-oracle
owner: "0x0000000000000000000000000000000000000001"
native_asset: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
feeds:
  - asset: "0xdac17f958d2ee523a2206206994597c13d831ec7"
    source: "0xee9f2375b4bdf6387aa8265dd4fb8f16512a1d46"
    symbol: USDT
    static_answer: "1677000000000000"
  - asset: "0x514910771af9ca656af840dff83e8264ecf986ca"
    source: "0xdc530d9457755926550b59e8eccdae7624181557"
    symbol: LINK
    decimals: 8
    static_answer: "2496761"
"#;
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_builds_resolver_with_static_feeds() {
        let resolver = build_resolver(&static_config()).unwrap();

        let usdt: AssetId = "0xdac17f958d2ee523a2206206994597c13d831ec7".parse().unwrap();
        let link: AssetId = "0x514910771af9ca656af840dff83e8264ecf986ca".parse().unwrap();
        let weth: AssetId = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".parse().unwrap();

        assert_eq!(resolver.asset_price(usdt).unwrap(), 1_677_000_000_000_000);
        // The 8-decimal entry rescales to the same canonical range.
        assert_eq!(resolver.asset_price(link).unwrap(), 24_967_610_000_000_000);
        assert_eq!(resolver.asset_price(weth).unwrap(), WAD);
    }

    #[test]
    fn test_live_entries_register_mapping_without_feed_object() {
        let mut cfg = static_config();
        cfg.feeds[0].static_answer = None;
        let resolver = build_resolver(&cfg).unwrap();

        let usdt: AssetId = "0xdac17f958d2ee523a2206206994597c13d831ec7".parse().unwrap();
        // The mapping exists but no feed object has been wired yet.
        assert!(resolver.source_of_asset(usdt).is_some());
        assert!(matches!(
            resolver.asset_price(usdt),
            Err(crate::OracleError::SourceMissing(_))
        ));
    }

    #[test]
    fn test_bad_owner_address_aborts() {
        let mut cfg = static_config();
        cfg.owner = "${ORACLE_OWNER}".to_string();
        let err = build_resolver(&cfg).unwrap_err();
        assert!(err.to_string().contains("invalid owner address"));
    }

    #[test]
    fn test_bad_static_answer_aborts() {
        let mut cfg = static_config();
        cfg.feeds[1].static_answer = Some("2.49e6".to_string());
        let err = build_resolver(&cfg).unwrap_err();
        assert!(err.to_string().contains("invalid static_answer"));
    }

    #[test]
    fn test_zero_native_asset_aborts() {
        let mut cfg = static_config();
        cfg.native_asset = Some("0x0000000000000000000000000000000000000000".to_string());
        assert!(build_resolver(&cfg).is_err());
    }
}
