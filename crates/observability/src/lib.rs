//! Logging setup for the oracle service
//!
//! Structured logging via tracing, with the output format picked from
//! configuration and the level from `RUST_LOG`.
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("eth-oracle", LogFormat::Compact)?;
//! ```

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
