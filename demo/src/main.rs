//! SGRS Audit Chain — Demo CLI
//!
//! Runs one or all of the three audit-chain demo scenarios.  Each scenario
//! uses real components (audit core, in-memory chain store) with mock
//! grievance data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- lifecycle
//!   cargo run -p demo -- tamper
//!   cargo run -p demo -- contention

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod scenarios;

use scenarios::{contention, lifecycle, tamper};

// ── CLI definition ────────────────────────────────────────────────────────────

/// SGRS — tamper-evident grievance audit chain demo.
///
/// Each subcommand walks a complaint through state transitions and shows how
/// the per-complaint SHA-256 hash chain records and protects that history.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "SGRS audit chain demo",
    long_about = "Runs SGRS audit chain demo scenarios showing hash-chained\n\
                  state-change records, tamper detection with position\n\
                  diagnostics, and append serialization under contention."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: complaint lifecycle (create → review → resolve, verified).
    Lifecycle,
    /// Scenario 2: out-of-band storage edit caught by verification.
    Tamper,
    /// Scenario 3: concurrent appends serialize into one valid chain.
    Contention,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::Lifecycle => lifecycle::run_scenario(),
        Command::Tamper => tamper::run_scenario(),
        Command::Contention => contention::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_all() -> sgrs_contracts::error::AuditResult<()> {
    lifecycle::run_scenario()?;
    tamper::run_scenario()?;
    contention::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("SGRS — Tamper-Evident Grievance Audit Chain");
    println!("===========================================");
    println!();
    println!("Per state change:");
    println!("  [1] Fetch the complaint's current chain tail");
    println!("  [2] Hash the canonical event content + previous hash (SHA-256)");
    println!("  [3] Conditional append — retried if a concurrent writer won the tail");
    println!("  [4] Verification recomputes every hash to detect any later edit");
    println!();
}
