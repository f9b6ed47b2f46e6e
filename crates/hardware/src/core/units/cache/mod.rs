//! Cache Engine.
//!
//! This module implements the teaching cache. It models a 64-word backing
//! memory behind an eight-line cache and supports three mapping policies:
//! 1. **Direct:** The index field picks exactly one candidate line.
//! 2. **Set-associative:** The index field picks a set of two ways; LRU picks the victim.
//! 3. **Fully-associative:** Any line may hold any address; empty lines fill first, then LRU.
//!
//! Each access is reported as a structured `AccessExplanation` alongside the
//! hit flag and the delivered word.

/// Address decomposition into tag and index fields.
pub mod address;

/// Access explanations and line locations.
pub mod explain;

/// Cache line storage.
pub mod line;

/// Replacement policies (LRU, fill-first).
pub mod policies;

/// Cache organisation per mapping policy.
pub mod structure;

use serde::Serialize;

use self::address::AddressBreakdown;
use self::explain::AccessExplanation;
use self::structure::CacheStructure;
use crate::common::constants::BACKING_MEMORY_WORDS;
use crate::common::{CacheError, EventLog};
use crate::config::{CacheConfig, MappingPolicy};
use crate::stats::CacheStats;

/// What one successful [`CacheEngine::access`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessOutcome {
    /// Whether the data was already cached.
    pub hit: bool,
    /// The word delivered to the requester.
    pub data: u16,
    /// Breakdown, lookup result, and placement.
    pub explanation: AccessExplanation,
}

/// Snapshot of the engine state handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheState {
    /// Policy in force.
    pub policy: MappingPolicy,
    /// Cache contents.
    pub structure: CacheStructure,
    /// Access counters.
    pub stats: CacheStats,
}

/// The cache engine.
///
/// Owns its cache structure, backing memory, counters, and event log. Two
/// engines never share state.
#[derive(Debug, Clone)]
pub struct CacheEngine {
    policy: MappingPolicy,
    structure: CacheStructure,
    backing: [u16; BACKING_MEMORY_WORDS],
    stats: CacheStats,
    log: EventLog,
}

impl Default for CacheEngine {
    fn default() -> Self {
        Self::new(MappingPolicy::default())
    }
}

impl CacheEngine {
    /// Creates an empty cache using `policy`.
    pub fn new(policy: MappingPolicy) -> Self {
        Self {
            policy,
            structure: CacheStructure::new(policy),
            backing: backing_memory(),
            stats: CacheStats::default(),
            log: EventLog::with_marker("Cache system initialized"),
        }
    }

    /// Creates an empty cache from configuration.
    pub fn with_config(config: &CacheConfig) -> Self {
        Self::new(config.policy)
    }

    /// Switches to `policy`, discarding all cached lines and zeroing the counters.
    ///
    /// Selecting the policy already in force still clears the cache.
    pub fn set_mapping_policy(&mut self, policy: MappingPolicy) {
        self.policy = policy;
        self.structure = CacheStructure::new(policy);
        self.stats = CacheStats::default();
        self.log.info(format!("Mapping policy set to {policy}"));
    }

    /// Reads `address` through the cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::AddressOutOfRange`] when `address` is outside the
    /// backing memory. The rejection is logged; nothing else changes.
    pub fn access(&mut self, address: i64) -> Result<AccessOutcome, CacheError> {
        let Some(addr) = u8::try_from(address)
            .ok()
            .filter(|a| usize::from(*a) < BACKING_MEMORY_WORDS)
        else {
            let err = CacheError::AddressOutOfRange {
                address,
                size: BACKING_MEMORY_WORDS,
            };
            self.log.error(err.to_string());
            return Err(err);
        };

        let now = self.stats.begin_access();
        let data = self.backing[usize::from(addr)];
        let breakdown = AddressBreakdown::split(addr, self.policy);
        let result = self.structure.access(&breakdown, data, now);
        let hit = result.is_hit();
        if hit {
            self.stats.record_hit();
        }

        self.log.info(format!(
            "Access {now}: address {addr} - {} - data {data}",
            if hit { "HIT" } else { "MISS" }
        ));
        tracing::debug!(
            address = addr,
            policy = %self.policy,
            hit,
            location = %result.location(),
            "cache access"
        );

        Ok(AccessOutcome {
            hit,
            data,
            explanation: AccessExplanation {
                policy: self.policy,
                breakdown,
                result,
                data,
            },
        })
    }

    /// Empties the cache and zeroes the counters, keeping the current policy.
    pub fn reset(&mut self) -> CacheState {
        self.structure = CacheStructure::new(self.policy);
        self.stats = CacheStats::default();
        self.log.restart("Cache reset");
        self.state()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CacheState {
        CacheState {
            policy: self.policy,
            structure: self.structure.clone(),
            stats: self.stats,
        }
    }

    /// Policy in force.
    pub const fn policy(&self) -> MappingPolicy {
        self.policy
    }

    /// Cache contents.
    pub const fn structure(&self) -> &CacheStructure {
        &self.structure
    }

    /// Access counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// The backing memory; each word holds its own address.
    pub const fn backing_memory(&self) -> &[u16; BACKING_MEMORY_WORDS] {
        &self.backing
    }

    /// Event history.
    pub const fn log(&self) -> &EventLog {
        &self.log
    }
}

fn backing_memory() -> [u16; BACKING_MEMORY_WORDS] {
    std::array::from_fn(|i| i as u16)
}
