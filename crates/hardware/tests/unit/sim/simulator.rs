//! # Simulator Tests
//!
//! The simulator builds both engines from one `Config` and applies the
//! run-level settings.

use std::io::Write as _;

use crate::common::programs::ADD_AND_STORE;
use archsim_core::Simulator;
use archsim_core::common::CacheError;
use archsim_core::config::{Config, MappingPolicy};

fn write_program(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn engines_follow_the_config() {
    let config = Config::from_json_str(r#"{ "cache": { "policy": "set-associative" } }"#).unwrap();
    let sim = Simulator::new(&config);
    assert_eq!(sim.cache.policy(), MappingPolicy::SetAssociative);
    assert_eq!(sim.config(), &config);
}

#[test]
fn runs_a_program_file() {
    let file = write_program(ADD_AND_STORE);
    let mut sim = Simulator::default();
    let state = sim.load_program_file(file.path()).unwrap();
    assert_eq!(state.program.len(), 4);

    let outcomes = sim.run_program();
    assert_eq!(outcomes.len(), 10);
    assert_eq!(sim.cpu.registers().ac, 8);
}

#[test]
fn step_budget_comes_from_the_config() {
    let mut config = Config::default();
    config.cpu.max_steps = 4;
    config.general.trace = true;
    let file = write_program(ADD_AND_STORE);
    let mut sim = Simulator::new(&config);
    let _ = sim.load_program_file(file.path()).unwrap();

    assert_eq!(sim.run_program().len(), 4);
    assert!(sim.cpu.is_running());
}

#[test]
fn unreadable_program_leaves_the_cpu_alone() {
    let mut sim = Simulator::default();
    assert!(sim.load_program_file("/nonexistent/program.asm").is_err());
    assert!(!sim.cpu.is_running());
}

#[test]
fn access_all_stops_at_the_first_rejection() {
    let mut sim = Simulator::default();
    let result = sim.access_all([1, 1, 70, 2]);
    assert_eq!(
        result,
        Err(CacheError::AddressOutOfRange {
            address: 70,
            size: 64
        })
    );
    assert_eq!(sim.cache.stats().access_count, 2);

    let served = sim.access_all([2, 2]).unwrap();
    assert_eq!(served.iter().filter(|o| o.hit).count(), 1);
}

#[test]
fn reset_resets_both_engines() {
    let file = write_program(ADD_AND_STORE);
    let mut sim = Simulator::default();
    let _ = sim.load_program_file(file.path()).unwrap();
    let _ = sim.run_program();
    let _ = sim.access_all([3, 4]).unwrap();

    sim.reset();
    assert!(sim.cpu.program().is_empty());
    assert_eq!(sim.cache.stats().access_count, 0);
    assert_eq!(sim.cache.structure().occupancy(), 0);
}
