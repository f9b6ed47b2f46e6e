//! Computer architecture teaching simulator CLI.
//!
//! This binary drives the two engines from the shell. It provides:
//! 1. **CPU walkthrough:** Load an accumulator program and print every fetch, decode, and execute step.
//! 2. **Cache walkthrough:** Feed a list of addresses through the cache and print each lookup.
//! 3. **JSON output:** Emit the structured outcomes instead of text, for tooling.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use archsim_core::Simulator;
use archsim_core::config::{Config, MappingPolicy};
use archsim_core::core::cpu::StepOutcome;
use archsim_core::core::units::cache::AccessOutcome;
use archsim_core::stats::{CacheStats, CpuStats};

#[derive(Parser, Debug)]
#[command(
    name = "archsim",
    author,
    version,
    about = "Accumulator CPU and cache teaching simulator",
    long_about = "Step through the instruction cycle of a tiny accumulator machine, or watch a cache service a sequence of addresses.\n\nExamples:\n  archsim cpu programs/add.asm\n  archsim cache --policy set-associative 0 8 16 0\n  archsim --config sim.json cache 1 2 3 --json"
)]
struct Cli {
    /// JSON configuration file; missing sections use defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `warn`, `archsim_core=debug`); falls back to `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load an accumulator program and run it one micro-step at a time.
    Cpu {
        /// Program source (`LOAD 10`, `ADD 11`, `STORE 12`, one per line).
        file: PathBuf,

        /// Step budget; overrides `cpu.max_steps` from the config.
        #[arg(long)]
        steps: Option<usize>,

        /// Print JSON instead of explanations.
        #[arg(long)]
        json: bool,
    },

    /// Access a sequence of addresses through the cache.
    Cache {
        /// Mapping policy; overrides `cache.policy` from the config.
        #[arg(long)]
        policy: Option<MappingPolicy>,

        /// Addresses to access, in order (0-63).
        #[arg(required = true, allow_negative_numbers = true)]
        addresses: Vec<i64>,

        /// Print JSON instead of explanations.
        #[arg(long)]
        json: bool,
    },
}

/// JSON report for `archsim cpu`.
#[derive(Serialize)]
struct CpuReport<'a> {
    steps: &'a [StepOutcome],
    stats: &'a CpuStats,
}

/// One line of the `archsim cache` JSON report.
#[derive(Serialize)]
#[serde(untagged)]
enum AccessRecord {
    Served(AccessOutcome),
    Rejected { address: i64, error: String },
}

/// JSON report for `archsim cache`.
#[derive(Serialize)]
struct CacheReport<'a> {
    policy: MappingPolicy,
    accesses: Vec<AccessRecord>,
    stats: &'a CacheStats,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.log_level.as_deref());

    let mut config = cli.config.as_deref().map_or_else(Config::default, load_config);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Cpu { file, steps, json } => {
            if let Some(steps) = steps {
                config.cpu.max_steps = steps;
            }
            cmd_cpu(&config, &file, json);
        }
        Commands::Cache {
            policy,
            addresses,
            json,
        } => {
            if let Some(policy) = policy {
                config.cache.policy = policy;
            }
            cmd_cache(&config, &addresses, json);
        }
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// The filter comes from `--log-level`, then `RUST_LOG`, then defaults to `warn`.
fn init_logger(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
    {
        eprintln!("[!] could not install logger: {e}");
    }
}

fn load_config(path: &Path) -> Config {
    Config::from_file(path).unwrap_or_else(|e| {
        eprintln!("[!] {e}");
        process::exit(2);
    })
}

/// Loads a program, runs it to completion (or until the budget is spent), and reports every step.
fn cmd_cpu(config: &Config, file: &Path, json: bool) {
    let mut sim = Simulator::new(config);
    if let Err(e) = sim.load_program_file(file) {
        eprintln!("[!] {e}");
        process::exit(1);
    }

    if !json {
        println!("[*] Program: {}", file.display());
        for instr in sim.cpu.program() {
            println!("    {:>2}: {} {}", instr.source_line, instr.mnemonic, instr.operand_address);
        }
        println!();
    }

    let outcomes = sim.run_program();

    if json {
        print_json(&CpuReport {
            steps: &outcomes,
            stats: sim.cpu.stats(),
        });
        return;
    }

    for outcome in &outcomes {
        println!("{}", outcome.explanation);
        println!("    {}", outcome.state.registers.dump());
        println!();
    }
    if sim.cpu.is_running() {
        println!(
            "[*] Stopped after {} steps with the program still running",
            outcomes.len()
        );
    }
    sim.cpu.stats().print();
}

/// Accesses each address and reports every lookup, continuing past rejected addresses.
fn cmd_cache(config: &Config, addresses: &[i64], json: bool) {
    let mut sim = Simulator::new(config);
    let mut records = Vec::with_capacity(addresses.len());

    if !json {
        println!("[*] Mapping policy: {}", sim.cache.policy());
        println!();
    }

    for &address in addresses {
        match sim.cache.access(address) {
            Ok(outcome) => {
                if !json {
                    println!("{}", outcome.explanation);
                    println!();
                }
                records.push(AccessRecord::Served(outcome));
            }
            Err(e) => {
                if !json {
                    eprintln!("[!] {e}");
                    println!();
                }
                records.push(AccessRecord::Rejected {
                    address,
                    error: e.to_string(),
                });
            }
        }
    }

    if json {
        print_json(&CacheReport {
            policy: sim.cache.policy(),
            accesses: records,
            stats: sim.cache.stats(),
        });
        return;
    }
    sim.cache.stats().print();
}

fn print_json(report: &impl Serialize) {
    match serde_json::to_string_pretty(report) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("[!] could not serialize report: {e}");
            process::exit(1);
        }
    }
}
