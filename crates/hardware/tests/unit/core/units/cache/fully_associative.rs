//! # Fully-Associative Cache Tests
//!
//! The tag is the whole address. Empty lines fill first, in index order; once
//! all eight are valid the least recently touched line is replaced.

use crate::common::harness::{access_ok, cache_after, hit_pattern};
use archsim_core::config::MappingPolicy;
use archsim_core::core::units::cache::explain::{AccessResult, LineLocation, Placement};
use archsim_core::core::units::cache::structure::CacheStructure;
use pretty_assertions::assert_eq;

const POLICY: MappingPolicy = MappingPolicy::FullyAssociative;

#[test]
fn eight_addresses_fill_every_line() {
    let cache = cache_after(POLICY, &[0, 8, 16, 24, 32, 40, 48, 56]);
    assert_eq!(cache.structure().occupancy(), 8);
    let CacheStructure::FullyAssociative(lines) = cache.structure() else {
        panic!("fully-associative cache has the wrong shape");
    };
    let tags: Vec<u8> = lines.iter().map(|line| line.tag).collect();
    assert_eq!(tags, vec![0, 8, 16, 24, 32, 40, 48, 56]);
}

#[test]
fn ninth_address_evicts_the_oldest_line() {
    let mut cache = cache_after(POLICY, &[0, 1, 2, 3, 4, 5, 6, 7]);
    let outcome = access_ok(&mut cache, 8);
    assert_eq!(
        outcome.explanation.result,
        AccessResult::Miss {
            location: LineLocation::Line { line: 0 },
            placement: Placement::Evicted { previous_tag: 0 }
        }
    );
    assert!(!access_ok(&mut cache, 0).hit);
}

#[test]
fn recently_hit_line_survives() {
    let mut cache = cache_after(POLICY, &[0, 1, 2, 3, 4, 5, 6, 7, 0]);
    let outcome = access_ok(&mut cache, 8);
    assert_eq!(
        outcome.explanation.result.location(),
        LineLocation::Line { line: 1 }
    );
    assert!(access_ok(&mut cache, 0).hit);
    assert!(!access_ok(&mut cache, 1).hit);
}

#[test]
fn no_conflict_misses_below_capacity() {
    // These would all collide in a direct-mapped cache.
    let pattern = hit_pattern(POLICY, &[1, 9, 17, 25, 1, 9, 17, 25]);
    assert_eq!(
        pattern,
        vec![false, false, false, false, true, true, true, true]
    );
    assert_eq!(
        hit_pattern(MappingPolicy::Direct, &[1, 9, 17, 25, 1, 9, 17, 25]),
        vec![false; 8]
    );
}

#[test]
fn explanation_has_no_index_field() {
    let mut cache = cache_after(POLICY, &[]);
    let text = access_ok(&mut cache, 42).explanation.to_string();
    assert!(text.contains("  tag: 101010 (42)"));
    assert!(!text.contains("index"));
    assert!(!text.contains("set:"));
}
