// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bouquet check-rule` command: parse definitions and show what they mean.

use rule_spec::RuleSpec;

pub fn execute(definitions: &[String]) -> anyhow::Result<()> {
    println!(
        "  {:<20} {:<4} {:<4} {:<24} {:>6} {:>7}  {}",
        "Definition", "Type", "Size", "Requirements", "Target", "Padding", "Canonical",
    );
    println!("  {}", "-".repeat(84));

    let mut invalid = 0usize;
    for definition in definitions {
        match RuleSpec::parse(definition) {
            Ok(rule) => {
                let requirements: Vec<String> = rule
                    .requirements()
                    .iter_nonzero()
                    .map(|(k, n)| format!("{n}×{k}"))
                    .collect();
                println!(
                    "  {:<20} {:<4} {:<4} {:<24} {:>6} {:>7}  {}{}",
                    definition,
                    rule.bouquet_type(),
                    rule.size().as_char(),
                    if requirements.is_empty() {
                        "-".to_string()
                    } else {
                        requirements.join(" ")
                    },
                    rule.target_total(),
                    rule.padding(),
                    rule,
                    if rule.is_clamped() {
                        format!(" (declared {} raised)", rule.declared_total())
                    } else {
                        String::new()
                    },
                );
            }
            Err(e) => {
                invalid += 1;
                println!("  {definition:<20} INVALID: {e}");
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} rule definitions invalid", definitions.len());
    }
    Ok(())
}
