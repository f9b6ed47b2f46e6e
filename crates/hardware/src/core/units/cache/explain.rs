//! Access explanations.
//!
//! The engine reports each access as structured data: how the address was
//! split, whether it hit, and which line was used or replaced. `Display`
//! renders the walkthrough text.

use std::fmt;

use serde::Serialize;

use super::address::{AddressBreakdown, binary};
use crate::common::constants::ADDRESS_BITS;
use crate::config::MappingPolicy;

/// Where in the cache an address was found or placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LineLocation {
    /// A line of a flat cache (direct or fully-associative).
    Line {
        /// Line index.
        line: usize,
    },
    /// A way within a set.
    Way {
        /// Set index.
        set: usize,
        /// Way within the set.
        way: usize,
    },
}

impl fmt::Display for LineLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line { line } => write!(f, "line {line}"),
            Self::Way { set, way } => write!(f, "set {set}, way {way}"),
        }
    }
}

/// How a missing block was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Placement {
    /// The chosen line was empty.
    Filled,
    /// The chosen line held another block, which was discarded.
    Evicted {
        /// Tag of the discarded block.
        previous_tag: u8,
    },
}

/// Outcome of the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum AccessResult {
    /// The block was present.
    Hit {
        /// Line holding the block.
        location: LineLocation,
    },
    /// The block was loaded from backing memory.
    Miss {
        /// Line the block was placed in.
        location: LineLocation,
        /// Whether that line was empty or had to be evicted.
        placement: Placement,
    },
}

impl AccessResult {
    /// Whether the lookup hit.
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// The line that served the access.
    pub const fn location(&self) -> LineLocation {
        match self {
            Self::Hit { location } | Self::Miss { location, .. } => *location,
        }
    }
}

/// Everything the engine knows about one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessExplanation {
    /// Policy in force.
    pub policy: MappingPolicy,
    /// Address fields.
    pub breakdown: AddressBreakdown,
    /// Hit or miss, and where.
    pub result: AccessResult,
    /// The word delivered.
    pub data: u16,
}

impl fmt::Display for AccessExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.breakdown;
        writeln!(
            f,
            "Access to address {} (binary: {})",
            b.address,
            binary(b.address, ADDRESS_BITS)
        )?;
        writeln!(f, "Address breakdown ({}):", self.policy)?;
        writeln!(f, "  tag: {} ({})", binary(b.tag, b.tag_bits), b.tag)?;
        if let Some(index) = b.index {
            let label = match self.policy {
                MappingPolicy::SetAssociative => "set",
                _ => "index",
            };
            writeln!(f, "  {label}: {} ({index})", binary(index, b.index_bits))?;
        }
        match self.result {
            AccessResult::Hit { location } => {
                write!(f, "HIT - data found in {location}: {}", self.data)
            }
            AccessResult::Miss {
                location,
                placement,
            } => {
                writeln!(f, "MISS - data not in cache, loading from main memory")?;
                match placement {
                    Placement::Filled => write!(
                        f,
                        "Using empty {location} with tag {} and data {}",
                        b.tag, self.data
                    ),
                    Placement::Evicted { previous_tag } => write!(
                        f,
                        "Replacing {location} (tag {previous_tag}) with tag {} and data {}",
                        b.tag, self.data
                    ),
                }
            }
        }
    }
}
