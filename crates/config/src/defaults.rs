//! Default values applied during deserialization

pub fn default_service_name() -> String {
    "eth-oracle".to_string()
}

pub fn default_feed_decimals() -> u32 {
    // ETH-denominated feeds report canonical 18-decimal answers.
    18
}
