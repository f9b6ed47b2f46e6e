//! Common utilities and types shared by both simulation engines.
//!
//! This module provides the building blocks used across the simulator. It includes:
//! 1. **Constants:** Memory sizes, instruction layout, and cache geometry.
//! 2. **Error Handling:** Error types for cache access, configuration, and loading.
//! 3. **Event Log:** The human-readable history each engine keeps for its caller.
//! 4. **Register Management:** The CPU register set and register names.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Human-readable event log kept by each engine.
pub mod log;

/// Register file implementation.
pub mod reg;

pub use error::{CacheError, ConfigError, LoadError};
pub use log::{EventLog, LogEntry, LogLevel};
pub use reg::{Register, RegisterFile};
