//! # Direct-Mapped Cache Tests
//!
//! Index = address bits `[2:0]`, tag = bits `[5:3]`. Each address has exactly
//! one candidate line.

use crate::common::harness::{access_ok, cache_after, hit_pattern};
use archsim_core::config::MappingPolicy;
use archsim_core::core::units::cache::explain::{AccessResult, LineLocation, Placement};
use archsim_core::core::units::cache::line::CacheLine;
use archsim_core::core::units::cache::structure::CacheStructure;
use pretty_assertions::assert_eq;

const POLICY: MappingPolicy = MappingPolicy::Direct;

#[test]
fn cold_miss_fills_the_indexed_line() {
    let mut cache = cache_after(POLICY, &[]);
    let outcome = access_ok(&mut cache, 0b101_110);

    assert!(!outcome.hit);
    assert_eq!(outcome.data, 46);
    assert_eq!(
        outcome.explanation.result,
        AccessResult::Miss {
            location: LineLocation::Line { line: 6 },
            placement: Placement::Filled
        }
    );
    let CacheStructure::Direct(lines) = cache.structure() else {
        panic!("direct cache has the wrong shape");
    };
    assert_eq!(lines[6], CacheLine::filled(0b101, 46, 1));
}

#[test]
fn repeat_access_hits() {
    assert_eq!(hit_pattern(POLICY, &[3, 3, 3]), vec![false, true, true]);
}

#[test]
fn conflicting_tag_evicts() {
    // 1 and 9 share index 1 with tags 0 and 1.
    assert_eq!(hit_pattern(POLICY, &[1, 9, 1]), vec![false, false, false]);

    let mut cache = cache_after(POLICY, &[1]);
    let outcome = access_ok(&mut cache, 9);
    assert_eq!(
        outcome.explanation.result,
        AccessResult::Miss {
            location: LineLocation::Line { line: 1 },
            placement: Placement::Evicted { previous_tag: 0 }
        }
    );
}

#[test]
fn distinct_indices_coexist() {
    assert_eq!(
        hit_pattern(POLICY, &[0, 1, 2, 3, 0, 1, 2, 3]),
        vec![false, false, false, false, true, true, true, true]
    );
}

#[test]
fn hit_refreshes_access_time() {
    let mut cache = cache_after(POLICY, &[4, 12, 4]);
    let _ = access_ok(&mut cache, 4);
    let CacheStructure::Direct(lines) = cache.structure() else {
        panic!("direct cache has the wrong shape");
    };
    assert_eq!(lines[4].access_time, 4);
    assert_eq!(lines[4].tag, 0);
}

#[test]
fn explanation_names_tag_and_index() {
    let mut cache = cache_after(POLICY, &[]);
    let text = access_ok(&mut cache, 9).explanation.to_string();
    assert!(text.contains("Access to address 9 (binary: 001001)"));
    assert!(text.contains("  tag: 001 (1)"));
    assert!(text.contains("  index: 001 (1)"));
    assert!(text.ends_with("Using empty line 1 with tag 1 and data 9"));
}
