//! Shared domain types for the price oracle
//!
//! Assets, price sources, and callers are all identified by 160-bit
//! account addresses in the host system. Each role gets its own newtype
//! so an asset handle can never be passed where a caller identity is
//! expected.

use crate::error::AddressParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 160-bit account address, the opaque identifier of the host system
///
/// Equality is exact byte equality; no normalization is applied. The
/// all-zero value is reserved as a sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The reserved zero sentinel
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create an address from raw bytes
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
        let stripped = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let bytes = hex::decode(stripped)
            .map_err(|_| AddressParseError::InvalidHex(s.to_string()))?;
        let len = bytes.len();
        let arr: [u8; 20] = bytes.try_into().map_err(|_| AddressParseError::BadLength {
            input: s.to_string(),
            len,
        })?;
        Ok(Self(arr))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the reserved zero sentinel
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

macro_rules! address_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub Address);

        impl $name {
            /// The reserved zero sentinel
            pub const ZERO: $name = $name(Address::ZERO);

            /// Wrap an existing address
            pub fn new(address: Address) -> Self {
                Self(address)
            }

            /// Parse from a hex string, with or without a `0x` prefix
            pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
                Address::from_hex(s).map(Self)
            }

            /// Get the underlying address
            pub fn address(&self) -> Address {
                self.0
            }

            /// Returns true if this is the reserved zero sentinel
            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl From<Address> for $name {
            fn from(address: Address) -> Self {
                Self(address)
            }
        }

        impl FromStr for $name {
            type Err = AddressParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

address_newtype! {
    /// Identifier of a tracked asset (a token contract address)
    AssetId
}

address_newtype! {
    /// Identifier of an external price feed for one asset
    SourceId
}

address_newtype! {
    /// Authenticated caller identity for owner-gated operations
    AccountId
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDT: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";

    #[test]
    fn test_address_hex_round_trip() {
        let addr = Address::from_hex(USDT).unwrap();
        assert_eq!(addr.to_string(), USDT);
    }

    #[test]
    fn test_address_accepts_unprefixed_hex() {
        let prefixed = Address::from_hex(USDT).unwrap();
        let bare = Address::from_hex(&USDT[2..]).unwrap();
        assert_eq!(prefixed, bare);
    }

    #[test]
    fn test_address_rejects_bad_input() {
        assert!(matches!(
            Address::from_hex("0xzz"),
            Err(AddressParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Address::from_hex("0x1234"),
            Err(AddressParseError::BadLength { len: 2, .. })
        ));
    }

    #[test]
    fn test_zero_sentinel() {
        assert!(Address::ZERO.is_zero());
        assert!(AssetId::ZERO.is_zero());
        assert!(!AssetId::from_hex(USDT).unwrap().is_zero());
    }

    #[test]
    fn test_newtypes_are_distinct() {
        let addr = Address::from_hex(USDT).unwrap();
        let asset = AssetId::from(addr);
        let source = SourceId::from(addr);
        assert_eq!(asset.address(), source.address());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let asset = AssetId::from_hex(USDT).unwrap();
        let json = serde_json::to_string(&asset).unwrap();
        assert_eq!(json, format!("\"{}\"", USDT));
        let back: AssetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asset);
    }
}
