// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: Compare fill strategies on a synthetic arrival stream.
//!
//! Both strategies honour the same rules and the same priority order; they
//! differ only in which leftover units pad a bouquet. First-fit drains the
//! alphabetically earliest categories, most-abundant spreads consumption
//! across whatever is plentiful. The difference shows up in how many
//! bouquets later rules manage to assemble.
//!
//! ```bash
//! cargo run -p engine --example strategy_comparison
//! ```

use allocator::{FillStrategy, FirstFit, MostAbundant};
use engine::{run_stream, BouquetEngine, ErrorPolicy};
use inventory::FlowerKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const RULE_SETS: &[(&str, &[&str])] = &[
    ("padding-heavy", &["AS1a6", "BS2b3", "CS1c1"]),
    ("mixed", &["AL2a1b5", "BS0S4", "CL1c1d3", "DS3d3"]),
    ("scarce", &["AS4a4", "BS1b8", "ZS0S2"]),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let arrivals = synthetic_stream(5_000);
    println!("Stream: {} arrivals over categories a..f\n", arrivals.len());

    let strategies: Vec<Arc<dyn FillStrategy>> =
        vec![Arc::new(FirstFit::new()), Arc::new(MostAbundant::new())];

    println!(
        "{:<16} {:<15} {:>9} {:>9} {:>7}  Per rule",
        "Rules", "Strategy", "Bouquets", "Consumed", "Held",
    );
    println!("{}", "-".repeat(78));

    for (set_name, rules) in RULE_SETS {
        for strategy in &strategies {
            let mut engine = BouquetEngine::new(Arc::clone(strategy));
            for rule in *rules {
                engine.add_rule(rule)?;
            }
            for &key in &arrivals {
                engine.add_flower_key(key)?;
            }

            let metrics = engine.metrics();
            let per_rule: Vec<String> = metrics
                .rules
                .iter()
                .map(|r| format!("{}={}", r.rule, r.bouquets))
                .collect();
            println!(
                "{:<16} {:<15} {:>9} {:>9} {:>7}  {}",
                set_name,
                strategy.name(),
                metrics.bouquets_assembled,
                metrics.units_consumed,
                engine.inventory().total(),
                per_rule.join(" "),
            );
        }
    }

    // Drive the line protocol end to end.
    println!("\n--- Line protocol, most-abundant ---\n");
    let input = "AS2aS1bS3\nBL0L5\n\naS\naL\nbL\naS\ncL\naL\nbS\ndL\n";
    let mut engine = BouquetEngine::new(Arc::new(MostAbundant::new()));
    let metrics = run_stream(
        &mut engine,
        input.as_bytes(),
        std::io::stdout().lock(),
        ErrorPolicy::Abort,
    )?;
    println!("\nMetrics: {}", metrics.summary());
    println!("Residual: {}", engine.inventory().to_json()?);
    println!("Inventory: {}", engine.inventory().stats().summary());

    Ok(())
}

/// Skewed synthetic stream: category `a` arrives most often, `f` least.
fn synthetic_stream(len: usize) -> Vec<FlowerKey> {
    // 6 + 5 + 4 + 3 + 2 + 1 = 21 weighted slots.
    const SLOTS: &[char] = &[
        'a', 'a', 'a', 'a', 'a', 'a', 'b', 'b', 'b', 'b', 'b', 'c', 'c', 'c', 'c', 'd', 'd',
        'd', 'e', 'e', 'f',
    ];
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            let category = SLOTS[rng.gen_range(0..SLOTS.len())];
            let size = if rng.gen_bool(1.0 / 3.0) { 'L' } else { 'S' };
            format!("{category}{size}")
                .parse()
                .expect("generated key is valid")
        })
        .collect()
}
