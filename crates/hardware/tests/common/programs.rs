//! Canned accumulator programs.

/// Loads cell 10, adds cell 11, stores the sum to cell 12, and reads it back.
///
/// With the default seed data (cell 10 = 5, cell 11 = 3) this leaves AC = 8
/// and cell 12 = 8. The closing LOAD is fetched, then the machine halts.
pub const ADD_AND_STORE: &str = "LOAD 10\nADD 11\nSTORE 12\nLOAD 12";

/// A single LOAD.
pub const SINGLE_LOAD: &str = "LOAD 10";

/// An instruction the machine does not know, followed by real ones.
pub const WITH_UNKNOWN: &str = "JUMP 3\nLOAD 11\nSTORE 12";

/// Adds cell 10 into the accumulator four times.
pub const ACCUMULATE: &str = "LOAD 10\nADD 10\nADD 10\nADD 10";
