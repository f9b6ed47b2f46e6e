//! # Unit Components
//!
//! Tests grouped by the module they exercise: the CPU and cache engines, the
//! instruction set helpers, and the supporting configuration, statistics,
//! and event log.
