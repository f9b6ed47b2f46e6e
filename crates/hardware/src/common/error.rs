//! Error definitions.
//!
//! The engines themselves are built to stay usable after any misuse, so the
//! error surface is narrow. This module provides:
//! 1. **Cache Errors:** Rejected accesses (out-of-range addresses).
//! 2. **Configuration Errors:** Unreadable or malformed JSON configuration.
//! 3. **Load Errors:** Program source files that cannot be read.

use thiserror::Error;

/// Errors reported by the cache engine.
///
/// A failed access leaves the cache, its counters, and the backing memory untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The requested address lies outside the backing memory.
    #[error("address {address} is out of range (valid addresses are 0..{size})")]
    AddressOutOfRange {
        /// The address as supplied by the caller.
        address: i64,
        /// Number of words in the backing memory.
        size: usize,
    },
}

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A mapping policy name did not match any known policy.
    #[error("unknown mapping policy '{0}' (expected direct, set-associative or fully-associative)")]
    UnknownPolicy(String),
}

/// Errors raised while reading program source from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
