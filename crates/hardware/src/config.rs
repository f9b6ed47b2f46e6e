//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize
//! both engines. It provides:
//! 1. **Defaults:** Demonstration data, run budget, and initial mapping policy.
//! 2. **Structures:** General, CPU, and cache sections of the root `Config`.
//! 3. **Enums:** The cache mapping policy.
//!
//! Configuration is supplied as JSON (`Config::from_file` / `Config::from_json_str`);
//! every field is optional, so `{}` yields `Config::default()`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants::DEMO_DATA;
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Upper bound on micro-steps for a full program run (100 instructions).
    pub const MAX_STEPS: usize = 300;
}

/// Cache address mapping policies.
///
/// Determines how a 6-bit address is split into tag and index, and
/// therefore which cache lines may hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MappingPolicy {
    /// Direct mapping: 8 lines, 3-bit index, 3-bit tag.
    #[default]
    #[serde(alias = "Direct")]
    Direct,
    /// 2-way set-associative mapping: 4 sets, 2-bit index, 4-bit tag.
    #[serde(alias = "SetAssociative", alias = "set_associative")]
    SetAssociative,
    /// Fully-associative mapping: 8 lines, the whole address is the tag.
    #[serde(alias = "FullyAssociative", alias = "fully_associative")]
    FullyAssociative,
}

impl MappingPolicy {
    /// Every policy, in menu order.
    pub const ALL: [Self; 3] = [Self::Direct, Self::SetAssociative, Self::FullyAssociative];

    /// Canonical kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::SetAssociative => "set-associative",
            Self::FullyAssociative => "fully-associative",
        }
    }
}

impl fmt::Display for MappingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MappingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "direct" => Ok(Self::Direct),
            "set-associative" | "set" => Ok(Self::SetAssociative),
            "fully-associative" | "fully" => Ok(Self::FullyAssociative),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// One memory cell forced to a value after every program load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedCell {
    /// Memory address of the cell.
    pub address: usize,
    /// Value written to the cell.
    pub value: u16,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use archsim_core::config::{Config, MappingPolicy};
///
/// let config = Config::default();
/// assert_eq!(config.cache.policy, MappingPolicy::Direct);
/// assert_eq!(config.cpu.seed_data.len(), 2);
///
/// let json = r#"{
///     "general": { "trace": true },
///     "cpu": { "seed_data": [{ "address": 12, "value": 7 }], "max_steps": 30 },
///     "cache": { "policy": "fully-associative" }
/// }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.cpu.max_steps, 30);
/// assert_eq!(config.cache.policy, MappingPolicy::FullyAssociative);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// CPU engine settings
    #[serde(default)]
    pub cpu: CpuConfig,
    /// Cache engine settings
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON for `Config`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit an info-level `tracing` record for every executed micro-step
    #[serde(default)]
    pub trace: bool,
}

/// CPU engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CpuConfig {
    /// Cells forced to fixed values after each program load
    #[serde(default = "CpuConfig::default_seed_data")]
    pub seed_data: Vec<SeedCell>,

    /// Micro-step budget for running a program to completion
    #[serde(default = "CpuConfig::default_max_steps")]
    pub max_steps: usize,
}

impl CpuConfig {
    /// Returns the default demonstration data (cell 10 = 5, cell 11 = 3).
    fn default_seed_data() -> Vec<SeedCell> {
        DEMO_DATA
            .iter()
            .map(|&(address, value)| SeedCell { address, value })
            .collect()
    }

    /// Returns the default micro-step budget.
    const fn default_max_steps() -> usize {
        defaults::MAX_STEPS
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            seed_data: Self::default_seed_data(),
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Cache engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Mapping policy the engine starts with
    #[serde(default)]
    pub policy: MappingPolicy,
}
