//! # Set-Associative Cache Tests
//!
//! Four sets of two ways. Set = address bits `[1:0]`, tag = bits `[5:2]`.
//! Addresses 1, 5, 9, and 13 all map to set 1 with tags 0 through 3.

use crate::common::harness::{access_ok, cache_after, hit_pattern};
use archsim_core::config::MappingPolicy;
use archsim_core::core::units::cache::explain::{AccessResult, LineLocation, Placement};
use archsim_core::core::units::cache::structure::CacheStructure;
use pretty_assertions::assert_eq;

const POLICY: MappingPolicy = MappingPolicy::SetAssociative;

#[test]
fn two_tags_share_a_set() {
    assert_eq!(
        hit_pattern(POLICY, &[1, 5, 1, 5]),
        vec![false, false, true, true]
    );
}

#[test]
fn empty_ways_fill_in_order() {
    let mut cache = cache_after(POLICY, &[]);
    let first = access_ok(&mut cache, 1).explanation.result;
    let second = access_ok(&mut cache, 5).explanation.result;
    assert_eq!(
        first,
        AccessResult::Miss {
            location: LineLocation::Way { set: 1, way: 0 },
            placement: Placement::Filled
        }
    );
    assert_eq!(
        second,
        AccessResult::Miss {
            location: LineLocation::Way { set: 1, way: 1 },
            placement: Placement::Filled
        }
    );
}

#[test]
fn third_tag_evicts_the_least_recent_way() {
    let mut cache = cache_after(POLICY, &[1, 5]);
    let outcome = access_ok(&mut cache, 9);
    assert_eq!(
        outcome.explanation.result,
        AccessResult::Miss {
            location: LineLocation::Way { set: 1, way: 0 },
            placement: Placement::Evicted { previous_tag: 0 }
        }
    );
    assert_eq!(
        hit_pattern(POLICY, &[1, 5, 9, 5, 1]),
        vec![false, false, false, true, false]
    );
}

#[test]
fn hit_protects_a_way_from_eviction() {
    // Touching 1 again makes 5 the least recently used.
    assert_eq!(
        hit_pattern(POLICY, &[1, 5, 1, 9, 1, 5]),
        vec![false, false, true, false, true, false]
    );
}

#[test]
fn other_sets_are_unaffected() {
    let cache = cache_after(POLICY, &[1, 5, 9, 13, 2]);
    let CacheStructure::SetAssociative(sets) = cache.structure() else {
        panic!("set-associative cache has the wrong shape");
    };
    assert!(sets[0].iter().all(|way| !way.valid));
    assert!(sets[3].iter().all(|way| !way.valid));
    assert_eq!(sets[2][0].tag, 0);
    let tags: Vec<u8> = sets[1].iter().map(|way| way.tag).collect();
    assert_eq!(tags, vec![2, 3]);
}

#[test]
fn explanation_labels_the_set_field() {
    let mut cache = cache_after(POLICY, &[]);
    let text = access_ok(&mut cache, 9).explanation.to_string();
    assert!(text.contains("  tag: 0010 (2)"));
    assert!(text.contains("  set: 01 (1)"));
    assert!(text.ends_with("Using empty set 1, way 0 with tag 2 and data 9"));
}
