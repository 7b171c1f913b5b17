// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Consumption plan: the output of an allocator.
//!
//! A plan lists exactly which units one bouquet consumes. It is computed
//! against an inventory snapshot, handed to the engine, subtracted, and
//! discarded. The plan is the contract between allocator and engine.

use crate::AllocError;
use inventory::{FlowerKey, Inventory, KeyCounts, Size};
use rule_spec::RuleSpec;

/// The units consumed to realise one bouquet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConsumptionPlan {
    /// Strategy that distributed the padding.
    pub strategy_name: String,
    /// Bouquet type of the rule this plan realises.
    pub bouquet_type: char,
    /// Size of every unit in the plan.
    pub size: Size,
    counts: KeyCounts,
}

impl ConsumptionPlan {
    /// Per-key counts. Keys of the other size are always zero.
    pub fn counts(&self) -> &KeyCounts {
        &self.counts
    }

    /// Units of `key` consumed.
    pub fn get(&self, key: FlowerKey) -> u32 {
        self.counts.get(key)
    }

    /// Total units consumed.
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Non-zero entries in canonical key order.
    pub fn entries(&self) -> impl Iterator<Item = (FlowerKey, u32)> + '_ {
        self.counts.iter_nonzero()
    }

    /// Validates the plan against its rule and the inventory it was
    /// computed from.
    ///
    /// Checks:
    /// - Bouquet type and size match the rule.
    /// - The plan holds exactly `target_total` units.
    /// - Every named requirement is covered.
    /// - No key exceeds what the inventory holds.
    /// - No unit of the other size is used.
    pub fn validate(&self, rule: &RuleSpec, inventory: &Inventory) -> Result<(), AllocError> {
        let fail = |detail: String| AllocError::InvalidPlan {
            rule: rule.to_string(),
            strategy: self.strategy_name.clone(),
            detail,
        };

        if self.bouquet_type != rule.bouquet_type() || self.size != rule.size() {
            return Err(fail(format!(
                "plan is for {}{}, rule is {}{}",
                self.bouquet_type,
                self.size,
                rule.bouquet_type(),
                rule.size(),
            )));
        }

        let total = self.total();
        if total != u64::from(rule.target_total()) {
            return Err(fail(format!(
                "plan holds {total} units, bouquet needs {}",
                rule.target_total(),
            )));
        }

        for (key, planned) in self.counts.iter() {
            if key.size != rule.size() {
                if planned > 0 {
                    return Err(fail(format!("plan uses {planned} × {key} of the wrong size")));
                }
                continue;
            }
            let required = rule.required(key);
            if planned < required {
                return Err(fail(format!(
                    "plan takes {planned} × {key}, rule requires {required}",
                )));
            }
            let available = inventory.get(key);
            if planned > available {
                return Err(fail(format!(
                    "plan takes {planned} × {key}, inventory holds {available}",
                )));
            }
        }

        Ok(())
    }

    /// Returns a human-readable summary of the plan.
    pub fn summary(&self) -> String {
        let entries: Vec<String> = self.entries().map(|(k, n)| format!("{n}×{k}")).collect();
        format!(
            "Plan '{}' for {}{}: {} units [{}]",
            self.strategy_name,
            self.bouquet_type,
            self.size,
            self.total(),
            entries.join(", "),
        )
    }
}

/// Builder for a `ConsumptionPlan`, seeded with a rule's requirements.
///
/// Used internally by strategy implementations.
pub(crate) struct PlanBuilder {
    strategy_name: String,
    bouquet_type: char,
    size: Size,
    counts: KeyCounts,
}

impl PlanBuilder {
    /// Starts a plan holding exactly the rule's named requirements.
    pub fn new(strategy_name: &str, rule: &RuleSpec) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            bouquet_type: rule.bouquet_type(),
            size: rule.size(),
            counts: rule.requirements().clone(),
        }
    }

    /// Units of `key` planned so far.
    pub fn get(&self, key: FlowerKey) -> u32 {
        self.counts.get(key)
    }

    /// Units of `key` still free in `inventory` after this plan.
    pub fn leftover(&self, inventory: &Inventory, key: FlowerKey) -> u32 {
        inventory.get(key).saturating_sub(self.get(key))
    }

    /// Adds `n` units of `key` to the plan.
    pub fn take(&mut self, key: FlowerKey, n: u32) {
        self.counts.set(key, self.counts.get(key).saturating_add(n));
    }

    /// Consumes the builder and returns the finished plan.
    pub fn build(self) -> ConsumptionPlan {
        ConsumptionPlan {
            strategy_name: self.strategy_name,
            bouquet_type: self.bouquet_type,
            size: self.size,
            counts: self.counts,
        }
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

    fn sample_plan(rule: &RuleSpec, extra: &[(&str, u32)]) -> ConsumptionPlan {
        let mut b = PlanBuilder::new("test", rule);
        for &(k, n) in extra {
            b.take(key(k), n);
        }
        b.build()
    }

    #[test]
    fn test_builder_seeds_requirements() {
        let rule = RuleSpec::parse("AS2a1b3").unwrap();
        let plan = sample_plan(&rule, &[]);
        assert_eq!(plan.get(key("aS")), 2);
        assert_eq!(plan.get(key("bS")), 1);
        assert_eq!(plan.total(), 3);
        assert_eq!(plan.bouquet_type, 'A');
        assert_eq!(plan.size, Size::Small);
    }

    #[test]
    fn test_validate_ok() {
        let rule = RuleSpec::parse("AS2a4").unwrap();
        let inv = stocked(&[("aS", 3), ("cS", 1)]);
        let plan = sample_plan(&rule, &[("aS", 1), ("cS", 1)]);
        plan.validate(&rule, &inv).unwrap();
    }

    #[test]
    fn test_validate_wrong_total() {
        let rule = RuleSpec::parse("AS2a4").unwrap();
        let inv = stocked(&[("aS", 5)]);
        let plan = sample_plan(&rule, &[("aS", 1)]);
        assert!(matches!(
            plan.validate(&rule, &inv),
            Err(AllocError::InvalidPlan { .. })
        ));
    }

    #[test]
    fn test_validate_exceeds_inventory() {
        let rule = RuleSpec::parse("AS2a3").unwrap();
        let inv = stocked(&[("aS", 2)]);
        let plan = sample_plan(&rule, &[("aS", 1)]);
        let err = plan.validate(&rule, &inv).unwrap_err();
        assert!(err.to_string().contains("inventory holds 2"));
    }

    #[test]
    fn test_validate_wrong_size() {
        let rule = RuleSpec::parse("AS2a3").unwrap();
        let inv = stocked(&[("aS", 2), ("aL", 1)]);
        let plan = sample_plan(&rule, &[("aL", 1)]);
        let err = plan.validate(&rule, &inv).unwrap_err();
        assert!(err.to_string().contains("wrong size"));
    }

    #[test]
    fn test_validate_other_rule() {
        let rule = RuleSpec::parse("AS1a1").unwrap();
        let other = RuleSpec::parse("BS1a1").unwrap();
        let inv = stocked(&[("aS", 1)]);
        let plan = sample_plan(&rule, &[]);
        assert!(plan.validate(&other, &inv).is_err());
    }

    #[test]
    fn test_leftover() {
        let rule = RuleSpec::parse("AS2a4").unwrap();
        let inv = stocked(&[("aS", 3)]);
        let b = PlanBuilder::new("test", &rule);
        assert_eq!(b.leftover(&inv, key("aS")), 1);
        assert_eq!(b.leftover(&inv, key("bS")), 0);
    }

    #[test]
    fn test_summary() {
        let rule = RuleSpec::parse("AS2a1b3").unwrap();
        let s = sample_plan(&rule, &[]).summary();
        assert!(s.contains("test"));
        assert!(s.contains("3 units"));
        assert!(s.contains("2×aS, 1×bS"));
    }
}
