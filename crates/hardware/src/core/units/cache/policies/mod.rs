//! Cache Replacement Policies.
//!
//! Selects the victim line to overwrite on a miss, given the candidate lines
//! an address may occupy (a set's ways, or the whole cache).
//!
//! # Policies
//!
//! - `LruPolicy`: Least Recently Used, ranked by each line's logical access time.
//! - `FillFirst`: Any empty line first, in index order; otherwise defer to another policy.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::{FillFirst, LruPolicy};

use super::line::CacheLine;

/// Trait for cache replacement policies.
///
/// Policies are stateless: the only history they consult is the
/// `access_time` stamped on each candidate line.
pub trait ReplacementPolicy {
    /// Selects the line to overwrite.
    ///
    /// # Arguments
    ///
    /// * `candidates` - The lines eligible to hold the incoming tag, in index order.
    ///
    /// # Returns
    ///
    /// The position of the victim within `candidates`.
    fn victim(&self, candidates: &[CacheLine]) -> usize;
}
