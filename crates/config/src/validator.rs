use crate::*;
use common::Address;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("registry owner is required")]
    MissingOwner,

    #[error("{field} is not a valid address: '{value}'")]
    InvalidAddress { field: String, value: String },

    #[error("registry owner must not be the zero address")]
    ZeroOwner,

    #[error("native_asset must not be the zero address")]
    ZeroNativeAsset,

    #[error("feed '{label}': asset is listed more than once")]
    DuplicateAsset { label: String },

    #[error("feed '{label}': decimals {decimals} cannot be rescaled to 18 within u128")]
    UnscalableDecimals { label: String, decimals: u32 },

    #[error("feed '{label}': static_answer '{value}' is not an integer")]
    InvalidStaticAnswer { label: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

/// Outcome of validating a configuration: hard errors plus advisory
/// warnings that do not block startup
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

// Power-of-ten scaling from this many decimals down to 18 overflows
// u128 even for an answer of 1.
const MAX_FEED_DECIMALS: u32 = 38;

pub fn validate_config(config: &OracleConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    validate_owner(&config.owner, &mut report);

    if let Some(ref native) = config.native_asset {
        match Address::from_hex(native) {
            Ok(addr) if addr.is_zero() => report.add_error(ValidationError::ZeroNativeAsset),
            Ok(_) => {}
            Err(_) => report.add_error(ValidationError::InvalidAddress {
                field: "native_asset".to_string(),
                value: native.clone(),
            }),
        }
    }

    if config.feeds.is_empty() {
        report.add_warning(
            "feeds",
            "no feeds configured; every non-native asset will resolve as missing until set_sources is called",
        );
    }

    let mut seen_assets = HashSet::new();
    for feed in &config.feeds {
        validate_feed(feed, &mut seen_assets, &mut report);
    }

    report
}

fn validate_owner(owner: &str, report: &mut ValidationReport) {
    if owner.is_empty() {
        report.add_error(ValidationError::MissingOwner);
        return;
    }
    match Address::from_hex(owner) {
        Ok(addr) if addr.is_zero() => report.add_error(ValidationError::ZeroOwner),
        Ok(_) => {}
        Err(_) => report.add_error(ValidationError::InvalidAddress {
            field: "owner".to_string(),
            value: owner.to_string(),
        }),
    }
}

fn validate_feed(
    feed: &FeedMapping,
    seen_assets: &mut HashSet<Address>,
    report: &mut ValidationReport,
) {
    let label = feed.label().to_string();

    match Address::from_hex(&feed.asset) {
        Ok(asset) => {
            if !seen_assets.insert(asset) {
                report.add_error(ValidationError::DuplicateAsset { label: label.clone() });
            }
            if asset.is_zero() {
                report.add_warning(
                    &format!("feeds.{}", label),
                    "asset is the zero sentinel; it shadows the default native-asset id",
                );
            }
        }
        Err(_) => report.add_error(ValidationError::InvalidAddress {
            field: format!("feeds.{}.asset", label),
            value: feed.asset.clone(),
        }),
    }

    match Address::from_hex(&feed.source) {
        Ok(source) if source.is_zero() => report.add_warning(
            &format!("feeds.{}", label),
            "source is the zero address; the asset will resolve as missing (unset convention)",
        ),
        Ok(_) => {}
        Err(_) => report.add_error(ValidationError::InvalidAddress {
            field: format!("feeds.{}.source", label),
            value: feed.source.clone(),
        }),
    }

    if feed.decimals > MAX_FEED_DECIMALS {
        report.add_error(ValidationError::UnscalableDecimals {
            label: label.clone(),
            decimals: feed.decimals,
        });
    }

    if let Some(ref answer) = feed.static_answer {
        match answer.parse::<i128>() {
            Ok(value) if value <= 0 => report.add_warning(
                &format!("feeds.{}", label),
                "static_answer is non-positive; reads will be rejected as invalid",
            ),
            Ok(_) => {}
            Err(_) => report.add_error(ValidationError::InvalidStaticAnswer {
                label,
                value: answer.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> OracleConfig {
        let mut config = crate::generate_default_config();
        config.owner = "0x0000000000000000000000000000000000000001".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        let report = validate_config(&base_config());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_owner_checks() {
        let mut config = base_config();
        config.owner = String::new();
        assert!(validate_config(&config)
            .errors
            .contains(&ValidationError::MissingOwner));

        config.owner = "${ORACLE_OWNER}".to_string();
        assert!(matches!(
            validate_config(&config).errors[0],
            ValidationError::InvalidAddress { .. }
        ));

        config.owner = "0x0000000000000000000000000000000000000000".to_string();
        assert!(validate_config(&config).errors.contains(&ValidationError::ZeroOwner));
    }

    #[test]
    fn test_zero_native_asset_is_rejected() {
        let mut config = base_config();
        config.native_asset = Some("0x0000000000000000000000000000000000000000".to_string());
        assert!(validate_config(&config)
            .errors
            .contains(&ValidationError::ZeroNativeAsset));
    }

    #[test]
    fn test_duplicate_asset_is_rejected() {
        let mut config = base_config();
        let duplicate = config.feeds[0].clone();
        config.feeds.push(duplicate);
        assert!(matches!(
            validate_config(&config).errors[0],
            ValidationError::DuplicateAsset { .. }
        ));
    }

    #[test]
    fn test_zero_source_is_a_warning_not_an_error() {
        let mut config = base_config();
        config.feeds[0].source = "0x0000000000000000000000000000000000000000".to_string();
        let report = validate_config(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_unscalable_decimals_are_rejected() {
        let mut config = base_config();
        config.feeds[0].decimals = 40;
        assert!(matches!(
            validate_config(&config).errors[0],
            ValidationError::UnscalableDecimals { decimals: 40, .. }
        ));
    }

    #[test]
    fn test_static_answer_checks() {
        let mut config = base_config();
        config.feeds[0].static_answer = Some("not-a-number".to_string());
        assert!(matches!(
            validate_config(&config).errors[0],
            ValidationError::InvalidStaticAnswer { .. }
        ));

        config.feeds[0].static_answer = Some("-5".to_string());
        let report = validate_config(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_empty_feed_list_warns() {
        let mut config = base_config();
        config.feeds.clear();
        let report = validate_config(&config);
        assert!(report.is_valid());
        assert!(!report.warnings.is_empty());
    }
}
