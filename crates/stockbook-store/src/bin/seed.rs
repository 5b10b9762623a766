//! # Seed Data Generator
//!
//! Populates a store with demo items and walks one candidate through the
//! validate-then-save flow, for development and manual inspection.
//!
//! ## Usage
//! ```bash
//! # Seed the default two demo items (testA, testB)
//! cargo run -p stockbook-store --bin seed
//!
//! # Seed a custom amount
//! cargo run -p stockbook-store --bin seed -- --count 50
//!
//! # Verbose logging
//! RUST_LOG=debug cargo run -p stockbook-store --bin seed
//! ```
//!
//! ## Generated Items
//! Deterministic demo data on the `testA` pattern: names `testA`, `testB`,
//! ..., prices cycling 10000/15000/20000, quantities cycling 10..40. Every
//! generated draft passes the save rule set; the binary also demonstrates a
//! rejected candidate so the error report shape is visible end to end.

use std::env;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockbook_core::{validate, ItemDraft, Mode};
use stockbook_store::ItemStore;

fn main() -> ExitCode {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 2;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(2);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockbook Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to generate (default: 2)");
                println!("  -h, --help         Show this help message");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    println!("🌱 Stockbook Seed Data Generator");
    println!("================================");
    println!("Items: {}", count);
    println!();

    let store = ItemStore::new();

    // Seed items through the same gate the web layer uses: validate first,
    // save only on an empty result.
    let mut seeded = 0;
    for index in 0..count {
        let draft = generate_item(index);

        let result = validate(&draft, Mode::Save);
        if result.has_errors() {
            eprintln!("Generator produced an invalid draft {:?}:", draft);
            for error in &result {
                eprintln!("  {}", error);
            }
            return ExitCode::FAILURE;
        }

        let saved = store.save(draft);
        info!(id = saved.id, name = %saved.name, "Seeded item");
        seeded += 1;

        if seeded % 500 == 0 {
            println!("  Seeded {} items...", seeded);
        }
    }

    println!("✓ Seeded {} items", seeded);
    println!();

    // Demonstrate a rejection: price below the floor AND a total below the
    // minimum. The store is never touched for this candidate.
    println!("Validating a deliberately bad candidate...");
    let bad = ItemDraft::new("itemA", Some(500), Some(10));
    let report = validate(&bad, Mode::Save);

    println!("  Candidate: {:?}", bad);
    println!("  Violations: {}", report.len());
    for error in &report {
        println!("    {}", error);
    }
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("  Report as the web layer sees it:\n{}", json),
        Err(e) => eprintln!("  Failed to serialize report: {}", e),
    }
    println!();

    // Final listing, insertion order.
    println!("Store contents ({} items):", store.count());
    match serde_json::to_string_pretty(&store.find_all()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize listing: {}", e);
            return ExitCode::FAILURE;
        }
    }

    println!();
    println!("✓ Seed complete!");

    ExitCode::SUCCESS
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockbook_store=debug` - Debug for the store only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockbook_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Generates a single valid demo item.
///
/// Names run `testA`..`testZ` then fall back to numeric suffixes. Prices
/// and quantities cycle so every draft satisfies the save rule set.
fn generate_item(index: usize) -> ItemDraft {
    let name = if index < 26 {
        format!("test{}", (b'A' + index as u8) as char)
    } else {
        format!("test{}", index + 1)
    };

    let price = 10_000 + 5_000 * (index % 3) as i64;
    let quantity = 10 * ((index % 4) + 1) as i64;

    ItemDraft::new(name, Some(price), Some(quantity))
}
