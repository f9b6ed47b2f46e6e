//! Cache organisation per mapping policy.
//!
//! The cache is a tagged variant rather than one reshaped container, so each
//! policy's geometry is fixed by its type: eight indexed lines, four sets of
//! two ways, or eight unindexed lines.

use serde::Serialize;

use super::address::AddressBreakdown;
use super::explain::{AccessResult, LineLocation, Placement};
use super::line::CacheLine;
use super::policies::{FillFirst, LruPolicy, ReplacementPolicy};
use crate::common::constants::{CACHE_LINES, CACHE_SETS, CACHE_WAYS};
use crate::config::MappingPolicy;

/// Cache contents, shaped by the mapping policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", content = "lines", rename_all = "kebab-case")]
pub enum CacheStructure {
    /// One candidate line per address, chosen by the index field.
    Direct([CacheLine; CACHE_LINES]),
    /// Sets of ways; the index field picks the set.
    SetAssociative([[CacheLine; CACHE_WAYS]; CACHE_SETS]),
    /// Any line can hold any address.
    FullyAssociative([CacheLine; CACHE_LINES]),
}

impl CacheStructure {
    /// An empty cache for `policy`.
    pub const fn new(policy: MappingPolicy) -> Self {
        match policy {
            MappingPolicy::Direct => Self::Direct([CacheLine::INVALID; CACHE_LINES]),
            MappingPolicy::SetAssociative => {
                Self::SetAssociative([[CacheLine::INVALID; CACHE_WAYS]; CACHE_SETS])
            }
            MappingPolicy::FullyAssociative => {
                Self::FullyAssociative([CacheLine::INVALID; CACHE_LINES])
            }
        }
    }

    /// The policy this structure implements.
    pub const fn policy(&self) -> MappingPolicy {
        match self {
            Self::Direct(_) => MappingPolicy::Direct,
            Self::SetAssociative(_) => MappingPolicy::SetAssociative,
            Self::FullyAssociative(_) => MappingPolicy::FullyAssociative,
        }
    }

    /// Every line, in index order (set-major for set-associative).
    pub fn lines(&self) -> impl Iterator<Item = &CacheLine> + '_ {
        let flat: &[CacheLine] = match self {
            Self::Direct(lines) | Self::FullyAssociative(lines) => lines,
            Self::SetAssociative(sets) => sets.as_flattened(),
        };
        flat.iter()
    }

    /// The line at `location`, if it exists in this structure.
    pub fn line(&self, location: LineLocation) -> Option<&CacheLine> {
        match (self, location) {
            (Self::Direct(lines) | Self::FullyAssociative(lines), LineLocation::Line { line }) => {
                lines.get(line)
            }
            (Self::SetAssociative(sets), LineLocation::Way { set, way }) => {
                sets.get(set).and_then(|ways| ways.get(way))
            }
            _ => None,
        }
    }

    /// Number of valid lines.
    pub fn occupancy(&self) -> usize {
        self.lines().filter(|line| line.valid).count()
    }

    /// Looks up `breakdown`, refreshing the line on a hit and replacing one
    /// on a miss. `now` is stamped as the line's access time either way.
    pub(super) fn access(
        &mut self,
        breakdown: &AddressBreakdown,
        data: u16,
        now: u64,
    ) -> AccessResult {
        let tag = breakdown.tag;
        let index = breakdown.index_position();
        match self {
            Self::Direct(lines) => {
                let line = &mut lines[index];
                let location = LineLocation::Line { line: index };
                if line.matches(tag) {
                    line.access_time = now;
                    AccessResult::Hit { location }
                } else {
                    let placement = placement_of(line);
                    *line = CacheLine::filled(tag, data, now);
                    AccessResult::Miss {
                        location,
                        placement,
                    }
                }
            }
            Self::SetAssociative(sets) => {
                let ways = &mut sets[index];
                let (way, result) = lookup_or_replace(ways, tag, data, now, &LruPolicy);
                let location = LineLocation::Way { set: index, way };
                result.at(location)
            }
            Self::FullyAssociative(lines) => {
                let (line, result) =
                    lookup_or_replace(lines, tag, data, now, &FillFirst(LruPolicy));
                result.at(LineLocation::Line { line })
            }
        }
    }
}

/// Hit or miss before the location is attached.
enum Lookup {
    Hit,
    Miss(Placement),
}

impl Lookup {
    const fn at(self, location: LineLocation) -> AccessResult {
        match self {
            Self::Hit => AccessResult::Hit { location },
            Self::Miss(placement) => AccessResult::Miss {
                location,
                placement,
            },
        }
    }
}

/// Scans `candidates` in order for `tag`; on a miss overwrites the line
/// `policy` selects. Returns the position used.
fn lookup_or_replace(
    candidates: &mut [CacheLine],
    tag: u8,
    data: u16,
    now: u64,
    policy: &impl ReplacementPolicy,
) -> (usize, Lookup) {
    if let Some(pos) = candidates.iter().position(|line| line.matches(tag)) {
        candidates[pos].access_time = now;
        return (pos, Lookup::Hit);
    }
    let victim = policy.victim(candidates);
    let placement = placement_of(&candidates[victim]);
    candidates[victim] = CacheLine::filled(tag, data, now);
    (victim, Lookup::Miss(placement))
}

const fn placement_of(line: &CacheLine) -> Placement {
    if line.valid {
        Placement::Evicted {
            previous_tag: line.tag,
        }
    } else {
        Placement::Filled
    }
}
