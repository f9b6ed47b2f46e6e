//! Least Recently Used (LRU) Replacement Policy.
//!
//! Each line carries the value of the engine's access counter at its last
//! touch. The victim is the line with the smallest such value; ties go to the
//! lowest index because the scan is ascending and only a strictly smaller
//! time displaces the current choice.
//!
//! Empty lines keep an access time of 0, below any valid line, so plain LRU
//! already prefers them. `FillFirst` states that preference explicitly for
//! the fully-associative cache.

use super::ReplacementPolicy;
use crate::core::units::cache::line::CacheLine;

/// LRU victim selection by logical access time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    fn victim(&self, candidates: &[CacheLine]) -> usize {
        let mut victim = 0;
        let mut oldest = candidates.first().map_or(0, |line| line.access_time);
        for (i, line) in candidates.iter().enumerate().skip(1) {
            if line.access_time < oldest {
                victim = i;
                oldest = line.access_time;
            }
        }
        victim
    }
}

/// Picks the first invalid line, falling back to `P` when every line is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillFirst<P>(pub P);

impl<P: ReplacementPolicy> ReplacementPolicy for FillFirst<P> {
    fn victim(&self, candidates: &[CacheLine]) -> usize {
        candidates
            .iter()
            .position(|line| !line.valid)
            .unwrap_or_else(|| self.0.victim(candidates))
    }
}
