//! Common types for the ETH price oracle
//!
//! This crate provides the shared identifier types used across
//! the oracle crates.
//!
//! # Modules
//!
//! - [`error`] - Identifier parse errors
//! - [`types`] - Shared domain types (Address, AssetId, SourceId, AccountId)

pub mod error;
pub mod types;

pub use error::AddressParseError;
pub use types::{AccountId, Address, AssetId, SourceId};
