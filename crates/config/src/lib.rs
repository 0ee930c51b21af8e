use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod parser;
pub mod substitution;
pub mod validator;

pub use defaults::*;
pub use parser::*;
pub use substitution::*;
pub use validator::*;

/// Top-level oracle configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OracleConfig {
    pub service: ServiceConfig,
    /// Registry owner, the only identity allowed to mutate sources
    pub owner: String,
    /// Asset id treated as the chain's native currency (optional;
    /// must not be the zero address when present)
    #[serde(rename = "native_asset")]
    #[serde(default)]
    pub native_asset: Option<String>,
    /// Initial asset-to-source mapping
    #[serde(default)]
    pub feeds: Vec<FeedMapping>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
    /// Log output format: pretty, json, or compact
    #[serde(rename = "log_format")]
    #[serde(default)]
    pub log_format: Option<String>,
}

/// One asset-to-source entry of the initial mapping
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedMapping {
    /// Tracked asset id (token address)
    pub asset: String,
    /// Price-source id the asset resolves through
    pub source: String,
    /// Display symbol, used in logs and validation messages
    #[serde(default)]
    pub symbol: Option<String>,
    /// Decimal precision of the feed's raw answers
    #[serde(default = "default_feed_decimals")]
    pub decimals: u32,
    /// Fixed raw answer for static/virtual pricing mode; live feeds
    /// leave this unset
    #[serde(rename = "static_answer")]
    #[serde(default)]
    pub static_answer: Option<String>,
}

impl FeedMapping {
    /// Label for diagnostics: the symbol when present, else the asset id
    pub fn label(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.asset)
    }
}
