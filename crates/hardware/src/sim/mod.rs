//! Simulation utilities and program loading.
//!
//! Provides source file loading and a `Simulator` that owns one instance of
//! each engine, built from a single `Config`.

pub mod loader;

/// Both engines side by side.
pub mod simulator;

pub use simulator::Simulator;
