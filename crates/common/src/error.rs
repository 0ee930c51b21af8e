//! Identifier parse errors

use thiserror::Error;

/// Errors raised when parsing a 160-bit address from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// The string contains non-hex characters
    #[error("invalid hex in address '{0}'")]
    InvalidHex(String),

    /// The string decodes to the wrong number of bytes
    #[error("address '{input}' decodes to {len} bytes, expected 20")]
    BadLength { input: String, len: usize },
}
