// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Most-abundant padding strategy.
//!
//! Takes padding one unit at a time from whichever key of the rule's size
//! has the largest leftover stock, re-evaluating after every unit. Ties go
//! to the key that comes first in canonical order.
//!
//! Compared to [`crate::FirstFit`] this spreads padding across plentiful
//! categories and leaves scarce ones for the rules that name them.
//!
//! # Cost
//! One pass over 26 keys per padding unit. Padding is bounded by the
//! number of units in stock.

use crate::plan::PlanBuilder;
use crate::strategy::FillStrategy;
use crate::{AllocError, ConsumptionPlan};
use inventory::{FlowerKey, Inventory};
use rule_spec::RuleSpec;

/// Largest leftover stock first, canonical order on ties.
#[derive(Debug, Clone, Default)]
pub struct MostAbundant;

impl MostAbundant {
    pub fn new() -> Self {
        Self
    }
}

impl FillStrategy for MostAbundant {
    fn name(&self) -> &str {
        "most-abundant"
    }

    fn fill(&self, rule: &RuleSpec, inventory: &Inventory) -> Result<ConsumptionPlan, AllocError> {
        let mut builder = PlanBuilder::new(self.name(), rule);
        let mut remaining = rule.padding();

        while remaining > 0 {
            let mut best: Option<(FlowerKey, u32)> = None;
            for key in FlowerKey::all_of_size(rule.size()) {
                let leftover = builder.leftover(inventory, key);
                if leftover > 0 && best.map_or(true, |(_, b)| leftover > b) {
                    best = Some((key, leftover));
                }
            }

            let (key, _) = best.ok_or_else(|| AllocError::PaddingExhausted {
                rule: rule.to_string(),
                remaining,
            })?;
            builder.take(key, 1);
            remaining -= 1;
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> FlowerKey {
        s.parse().unwrap()
    }

    fn stocked(entries: &[(&str, u32)]) -> Inventory {
        let mut inv = Inventory::new();
        for &(k, n) in entries {
            inv.increment_by(key(k), n).unwrap();
        }
        inv
    }

    #[test]
    fn test_prefers_plentiful_keys() {
        let rule = RuleSpec::parse("BL0L3").unwrap();
        let inv = stocked(&[("aL", 1), ("zL", 5)]);
        let plan = MostAbundant::new().fill(&rule, &inv).unwrap();
        assert_eq!(plan.get(key("aL")), 0);
        assert_eq!(plan.get(key("zL")), 3);
        plan.validate(&rule, &inv).unwrap();
    }

    #[test]
    fn test_balances_between_equal_keys() {
        // zL 5, yL 4: take z, then tie at 4 → y (canonical first), then z.
        let rule = RuleSpec::parse("BL3").unwrap();
        let inv = stocked(&[("yL", 4), ("zL", 5)]);
        let plan = MostAbundant::new().fill(&rule, &inv).unwrap();
        assert_eq!(plan.get(key("yL")), 1);
        assert_eq!(plan.get(key("zL")), 2);
    }

    #[test]
    fn test_counts_leftover_after_requirements() {
        // aS holds 6 but 5 are required: leftover 1, so bS (3) wins.
        let rule = RuleSpec::parse("AS5a7").unwrap();
        let inv = stocked(&[("aS", 6), ("bS", 3)]);
        let plan = MostAbundant::new().fill(&rule, &inv).unwrap();
        assert_eq!(plan.get(key("aS")), 5);
        assert_eq!(plan.get(key("bS")), 2);
    }

    #[test]
    fn test_exhausted() {
        let rule = RuleSpec::parse("BS2").unwrap();
        let inv = stocked(&[("aL", 5)]);
        assert!(matches!(
            MostAbundant::new().fill(&rule, &inv),
            Err(AllocError::PaddingExhausted { remaining: 2, .. })
        ));
    }
}
