use crate::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load, substitute, and parse an oracle configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<OracleConfig> {
    let path = path.as_ref();
    info!("loading configuration from {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;

    let substituted = substitution::substitute_env_vars(&content)?;
    debug!("environment variable substitution completed");

    let config: OracleConfig =
        serde_yaml::from_str(&substituted).context("failed to parse YAML configuration")?;

    info!(feeds = config.feeds.len(), "configuration loaded");
    Ok(config)
}

/// A minimal starting configuration with the live USDT and LINK feeds
pub fn generate_default_config() -> OracleConfig {
    OracleConfig {
        service: ServiceConfig {
            name: default_service_name(),
            log_format: None,
        },
        owner: "${ORACLE_OWNER}".to_string(),
        native_asset: None,
        feeds: vec![
            FeedMapping {
                asset: "0xdac17f958d2ee523a2206206994597c13d831ec7".to_string(),
                source: "0xee9f2375b4bdf6387aa8265dd4fb8f16512a1d46".to_string(),
                symbol: Some("USDT".to_string()),
                decimals: default_feed_decimals(),
                static_answer: None,
            },
            FeedMapping {
                asset: "0x514910771af9ca656af840dff83e8264ecf986ca".to_string(),
                source: "0xdc530d9457755926550b59e8eccdae7624181557".to_string(),
                symbol: Some("LINK".to_string()),
                decimals: default_feed_decimals(),
                static_answer: None,
            },
        ],
    }
}

/// Serialize a configuration back to a YAML file
pub fn save_config<P: AsRef<Path>>(config: &OracleConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("saving configuration to {:?}", path);

    let yaml =
        serde_yaml::to_string(config).context("failed to serialize configuration to YAML")?;
    fs::write(path, yaml).with_context(|| format!("failed to write config file {:?}", path))?;

    Ok(())
}
