//! Simulator: owns the CPU engine and the cache engine side by side.
//!
//! The engines are independent; the simulator only wires them to one
//! configuration and applies the run-level settings (step budget, tracing).

use std::path::Path;

use super::loader;
use crate::common::{CacheError, LoadError};
use crate::config::Config;
use crate::core::CpuEngine;
use crate::core::cpu::{CpuState, StepOutcome};
use crate::core::units::cache::{AccessOutcome, CacheEngine};

/// Top-level simulator.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// The accumulator CPU.
    pub cpu: CpuEngine,
    /// The teaching cache.
    pub cache: CacheEngine,
    config: Config,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Simulator {
    /// Creates both engines from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: CpuEngine::new(&config.cpu),
            cache: CacheEngine::with_config(&config.cache),
            config: config.clone(),
        }
    }

    /// The configuration the simulator was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Reads `path` and loads it into the CPU.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read; the CPU is left as it was.
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> Result<CpuState, LoadError> {
        let source = loader::load_source(path)?;
        Ok(self.cpu.load_program(&source))
    }

    /// Runs the loaded program until it halts or the configured step budget
    /// (`cpu.max_steps`) is spent.
    pub fn run_program(&mut self) -> Vec<StepOutcome> {
        let outcomes = self.cpu.run_to_completion(self.config.cpu.max_steps);
        if self.config.general.trace {
            for (n, outcome) in outcomes.iter().enumerate() {
                tracing::info!(
                    step = n + 1,
                    phase = %outcome.explanation.phase(),
                    "{}",
                    outcome.state.registers.dump()
                );
            }
        }
        outcomes
    }

    /// Feeds each address in turn through the cache, stopping at the first rejected one.
    ///
    /// # Errors
    ///
    /// Returns the first [`CacheError`]; accesses before it have already been applied.
    pub fn access_all(
        &mut self,
        addresses: impl IntoIterator<Item = i64>,
    ) -> Result<Vec<AccessOutcome>, CacheError> {
        addresses
            .into_iter()
            .map(|address| self.cache.access(address))
            .collect()
    }

    /// Resets both engines. The cache keeps its current policy.
    pub fn reset(&mut self) {
        let _ = self.cpu.reset();
        let _ = self.cache.reset();
    }
}
