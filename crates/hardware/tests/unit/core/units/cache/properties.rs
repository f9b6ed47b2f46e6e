//! # Cache Property Tests
//!
//! Invariants that hold for any access sequence under any mapping policy.

use std::collections::HashSet;

use archsim_core::CacheEngine;
use archsim_core::config::MappingPolicy;
use archsim_core::core::units::cache::structure::CacheStructure;
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = MappingPolicy> {
    prop::sample::select(MappingPolicy::ALL.to_vec())
}

fn addresses() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..64, 0..64)
}

/// Each group of lines an address could occupy.
fn candidate_groups(structure: &CacheStructure) -> Vec<Vec<(bool, u8)>> {
    match structure {
        CacheStructure::Direct(lines) => lines.iter().map(|l| vec![(l.valid, l.tag)]).collect(),
        CacheStructure::SetAssociative(sets) => sets
            .iter()
            .map(|ways| ways.iter().map(|l| (l.valid, l.tag)).collect())
            .collect(),
        CacheStructure::FullyAssociative(lines) => {
            vec![lines.iter().map(|l| (l.valid, l.tag)).collect()]
        }
    }
}

proptest! {
    #[test]
    fn repeated_access_hits_with_unchanged_data(
        policy in policy(),
        warmup in addresses(),
        address in 0i64..64,
    ) {
        let mut cache = CacheEngine::new(policy);
        for a in warmup {
            prop_assert!(cache.access(a).is_ok());
        }
        let first = cache.access(address);
        let second = cache.access(address);
        prop_assert!(matches!(&second, Ok(o) if o.hit));
        let (Ok(first), Ok(second)) = (first, second) else {
            return Err(TestCaseError::fail("in-range access rejected"));
        };
        prop_assert_eq!(first.data, second.data);
        prop_assert_eq!(second.data, address as u16);
        prop_assert_eq!(first.explanation.result.location(), second.explanation.result.location());
    }

    #[test]
    fn hits_never_exceed_accesses(policy in policy(), sequence in addresses()) {
        let mut cache = CacheEngine::new(policy);
        prop_assert_eq!(cache.stats().hit_count, 0);
        for (n, a) in sequence.iter().enumerate() {
            let _ = cache.access(*a);
            let stats = cache.stats();
            prop_assert!(stats.hit_count <= stats.access_count);
            prop_assert_eq!(stats.access_count, n as u64 + 1);
        }
    }

    #[test]
    fn a_tag_is_cached_at_most_once_per_group(policy in policy(), sequence in addresses()) {
        let mut cache = CacheEngine::new(policy);
        for a in sequence {
            let _ = cache.access(a);
        }
        for group in candidate_groups(cache.structure()) {
            let mut seen = HashSet::new();
            for (valid, tag) in group {
                if valid {
                    prop_assert!(seen.insert(tag), "tag {} cached twice", tag);
                }
            }
        }
    }

    #[test]
    fn cached_data_matches_backing_memory(policy in policy(), sequence in addresses()) {
        let mut cache = CacheEngine::new(policy);
        for a in sequence {
            let outcome = cache.access(a);
            prop_assert!(matches!(outcome, Ok(o) if i64::from(o.data) == a));
        }
    }

    #[test]
    fn rejected_addresses_change_nothing(
        policy in policy(),
        warmup in addresses(),
        bad in prop_oneof![i64::MIN..0i64, 64i64..i64::MAX],
    ) {
        let mut cache = CacheEngine::new(policy);
        for a in warmup {
            let _ = cache.access(a);
        }
        let before = cache.state();
        prop_assert!(cache.access(bad).is_err());
        prop_assert_eq!(cache.state(), before);
    }
}
