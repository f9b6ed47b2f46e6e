//! Simulation statistics collection and reporting.
//!
//! This module tracks counters for both engines. It provides:
//! 1. **CPU:** Micro-steps performed, instructions fetched and completed.
//! 2. **Cache:** Accesses and hits, with derived misses and hit rate.

use serde::Serialize;

/// Counters for the CPU engine. Cleared by `load_program` and `reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CpuStats {
    /// Micro-steps performed (fetch, decode, and execute each count once).
    pub steps: u64,
    /// Instructions fetched.
    pub fetches: u64,
    /// Instructions whose execute step has run.
    pub instructions_completed: u64,
    /// Executed instructions whose opcode was not recognized.
    pub unknown_opcodes: u64,
}

impl CpuStats {
    /// Prints a summary to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CPU ENGINE STATISTICS");
        println!("==========================================================");
        println!("cpu.steps                {}", self.steps);
        println!("cpu.fetches              {}", self.fetches);
        println!("cpu.instructions         {}", self.instructions_completed);
        println!("cpu.unknown_opcodes      {}", self.unknown_opcodes);
        println!("==========================================================\n");
    }
}

/// Access counters for the cache engine.
///
/// `hit_count <= access_count` always holds; both are zero after a reset or
/// a mapping policy change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Successful (in-range) accesses.
    pub access_count: u64,
    /// Accesses that found their data in the cache.
    pub hit_count: u64,
}

impl CacheStats {
    /// Counts one access and returns the new access count, which is also the
    /// logical time stamped on the line it touches.
    pub const fn begin_access(&mut self) -> u64 {
        self.access_count += 1;
        self.access_count
    }

    /// Counts a hit for the access in progress.
    pub const fn record_hit(&mut self) {
        self.hit_count += 1;
    }

    /// Accesses that missed.
    pub const fn miss_count(&self) -> u64 {
        self.access_count - self.hit_count
    }

    /// Fraction of accesses that hit, 0.0 before the first access.
    pub fn hit_rate(&self) -> f64 {
        if self.access_count == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.access_count as f64
        }
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CACHE ENGINE STATISTICS");
        println!("==========================================================");
        println!("cache.accesses           {}", self.access_count);
        println!("cache.hits               {}", self.hit_count);
        println!("cache.misses             {}", self.miss_count());
        if self.access_count > 0 {
            println!("cache.hit_rate           {:.2}%", self.hit_rate() * 100.0);
        } else {
            println!("cache.hit_rate           No Accesses");
        }
        println!("==========================================================\n");
    }
}
