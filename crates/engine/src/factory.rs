// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The bouquet engine: rule registry, inventory owner, arrival loop.
//!
//! # Arrival flow
//! ```text
//! add_flower("aS")
//!   → inventory.increment(aS)
//!   → for each allocator, in registration order:
//!       try_create(&inventory)  ── None → next rule
//!                               └─ Some(plan) → subtract, emit, stop
//! ```
//!
//! At most one bouquet comes out of each arrival. Earlier rules win: a
//! later rule only sees the inventory if every earlier rule missed.

use crate::{Bouquet, EngineConfig, EngineError, EngineMetrics};
use allocator::{Allocator, FillStrategy};
use inventory::{FlowerKey, Inventory};
use rule_spec::RuleSpec;
use std::sync::Arc;

/// Owns the inventory and the ordered list of rule allocators.
pub struct BouquetEngine {
    strategy: Arc<dyn FillStrategy>,
    allocators: Vec<Allocator>,
    inventory: Inventory,
    metrics: EngineMetrics,
}

impl BouquetEngine {
    /// Creates an engine with no rules and an empty inventory.
    pub fn new(strategy: Arc<dyn FillStrategy>) -> Self {
        Self {
            strategy,
            allocators: Vec::new(),
            inventory: Inventory::new(),
            metrics: EngineMetrics::new(),
        }
    }

    /// Creates an engine using the strategy named in `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self::new(config.create_strategy()?))
    }

    // ── Rules ───────────────────────────────────────────────────

    /// Parses and registers a rule. Returns its index.
    ///
    /// A rejected definition leaves the registry unchanged.
    pub fn add_rule(&mut self, definition: &str) -> Result<usize, EngineError> {
        let rule = match RuleSpec::parse(definition) {
            Ok(rule) => rule,
            Err(e) => {
                self.metrics.record_rule_rejected();
                return Err(e.into());
            }
        };
        Ok(self.register(rule))
    }

    /// Registers an already parsed rule. Returns its index.
    pub fn register(&mut self, rule: RuleSpec) -> usize {
        let index = self.allocators.len();
        if rule.is_clamped() {
            tracing::warn!(
                rule = rule.definition(),
                declared = rule.declared_total(),
                target = rule.target_total(),
                "declared total below named units; raised"
            );
        }
        tracing::info!("Registered rule #{index}: {}", rule.summary());
        self.metrics.record_rule(rule.to_string());
        self.allocators
            .push(Allocator::new(rule, Arc::clone(&self.strategy)));
        index
    }

    /// Registered rules in priority order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleSpec> + '_ {
        self.allocators.iter().map(Allocator::rule)
    }

    pub fn num_rules(&self) -> usize {
        self.allocators.len()
    }

    // ── Arrivals ────────────────────────────────────────────────

    /// Records one arriving unit by its text form and tries to assemble a
    /// bouquet.
    ///
    /// An unknown key is rejected before the inventory is touched.
    pub fn add_flower(&mut self, key: &str) -> Result<Option<Bouquet>, EngineError> {
        let key: FlowerKey = match key.parse() {
            Ok(key) => key,
            Err(e) => {
                self.metrics.record_arrival_rejected();
                return Err(EngineError::Inventory(e));
            }
        };
        self.add_flower_key(key)
    }

    /// Records one arriving unit and tries to assemble a bouquet.
    ///
    /// Returns the first bouquet any rule can assemble, or `None`.
    pub fn add_flower_key(&mut self, key: FlowerKey) -> Result<Option<Bouquet>, EngineError> {
        self.inventory.increment(key)?;
        self.metrics.record_arrival();

        let mut matched = None;
        for (index, allocator) in self.allocators.iter().enumerate() {
            if let Some(plan) = allocator.try_create(&self.inventory)? {
                matched = Some((index, plan));
                break;
            }
        }

        let Some((index, plan)) = matched else {
            tracing::trace!(%key, held = self.inventory.total(), "no rule satisfied");
            return Ok(None);
        };

        self.inventory.subtract(plan.counts())?;
        self.metrics.record_bouquet(index, plan.total());

        let bouquet = Bouquet::from_plan(index, &plan);
        tracing::debug!(rule = index, %key, "Assembled {bouquet}");
        Ok(Some(bouquet))
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut EngineMetrics {
        &mut self.metrics
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl std::fmt::Debug for BouquetEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BouquetEngine")
            .field("strategy", &self.strategy.name())
            .field("rules", &self.allocators.len())
            .field("held", &self.inventory.total())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocator::{FirstFit, MostAbundant};
    use inventory::InventoryError;

    fn engine() -> BouquetEngine {
        BouquetEngine::new(Arc::new(FirstFit::new()))
    }

    fn feed(engine: &mut BouquetEngine, keys: &[&str]) -> Vec<String> {
        keys.iter()
            .filter_map(|k| engine.add_flower(k).unwrap())
            .map(|b| b.to_string())
            .collect()
    }

    #[test]
    fn test_add_rule_indices() {
        let mut e = engine();
        assert_eq!(e.add_rule("AS2a3").unwrap(), 0);
        assert_eq!(e.add_rule("BL0L5").unwrap(), 1);
        assert_eq!(e.num_rules(), 2);
        let canon: Vec<String> = e.rules().map(|r| r.to_string()).collect();
        assert_eq!(canon, ["AS2a3", "BL5"]);
    }

    #[test]
    fn test_bad_rule_not_registered() {
        let mut e = engine();
        let err = e.add_rule("AX2a3").unwrap_err();
        assert!(matches!(err, EngineError::Rule(_)));
        assert!(err.is_recoverable());
        assert_eq!(e.num_rules(), 0);
        assert_eq!(e.metrics().rules_rejected, 1);
    }

    #[test]
    fn test_exact_requirements() {
        let mut e = engine();
        e.add_rule("AS2aS1bS3").unwrap();
        let out = feed(&mut e, &["aS", "bS", "aS"]);
        assert_eq!(out, ["AS2a1b"]);
        assert_eq!(e.inventory().total(), 0);
    }

    #[test]
    fn test_padding_only() {
        let mut e = engine();
        e.add_rule("BL0L5").unwrap();
        let out = feed(&mut e, &["aL", "bL", "cL", "aL", "dL"]);
        assert_eq!(out, ["BL2a1b1c1d"]);
        assert_eq!(e.inventory().total(), 0);
    }

    #[test]
    fn test_unknown_key_leaves_inventory() {
        let mut e = engine();
        e.add_rule("AS1a1").unwrap();
        let err = e.add_flower("Ax").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Inventory(InventoryError::UnknownKey { .. })
        ));
        assert_eq!(e.inventory().total(), 0);
        assert_eq!(e.metrics().arrivals, 0);
        assert_eq!(e.metrics().arrivals_rejected, 1);
    }

    #[test]
    fn test_first_rule_wins() {
        let mut e = engine();
        e.add_rule("AS1a1").unwrap();
        e.add_rule("BS1a1").unwrap();
        let out: Vec<Bouquet> = ["aS", "aS"]
            .iter()
            .filter_map(|k| e.add_flower(k).unwrap())
            .collect();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|b| b.rule_index == 0));
        assert_eq!(e.metrics().rules[1].bouquets, 0);
    }

    #[test]
    fn test_later_rule_when_earlier_misses() {
        let mut e = engine();
        e.add_rule("AS2a2").unwrap();
        e.add_rule("BS1b1").unwrap();
        let b = e.add_flower("bS").unwrap().unwrap();
        assert_eq!(b.rule_index, 1);
        assert_eq!(b.to_string(), "BS1b");
    }

    #[test]
    fn test_one_bouquet_per_arrival() {
        let mut e = engine();
        // Stock builds up while no rule exists.
        assert!(feed(&mut e, &["aS", "bS"]).is_empty());
        e.add_rule("AS1a1").unwrap();
        e.add_rule("BS1b1").unwrap();

        // Both rules are satisfiable, but only the first fires.
        let b = e.add_flower("cS").unwrap().unwrap();
        assert_eq!(b.rule_index, 0);
        assert_eq!(e.inventory().get_str("bS").unwrap(), 1);

        let b = e.add_flower("cS").unwrap().unwrap();
        assert_eq!(b.rule_index, 1);
        assert_eq!(e.metrics().bouquets_assembled, 2);
        assert_eq!(e.inventory().get_str("cS").unwrap(), 2);
    }

    #[test]
    fn test_no_rules_accumulates() {
        let mut e = engine();
        assert!(feed(&mut e, &["aS", "aS", "zL"]).is_empty());
        assert_eq!(e.inventory().total(), 3);
        assert_eq!(e.metrics().arrivals, 3);
    }

    #[test]
    fn test_zero_target_rule_fires_every_arrival() {
        let mut e = engine();
        e.add_rule("ZS0").unwrap();
        let out = feed(&mut e, &["aS", "bL"]);
        assert_eq!(out, ["ZS", "ZS"]);
        // The arrivals themselves are not consumed.
        assert_eq!(e.inventory().total(), 2);
    }

    #[test]
    fn test_size_isolation() {
        let mut e = engine();
        e.add_rule("AL0L2").unwrap();
        assert!(feed(&mut e, &["aS", "bS", "cS", "aL"]).is_empty());
        assert_eq!(feed(&mut e, &["bL"]), ["AL1a1b"]);
        assert_eq!(e.inventory().total_of_size(inventory::Size::Small), 3);
    }

    #[test]
    fn test_most_abundant_engine() {
        let mut e = BouquetEngine::new(Arc::new(MostAbundant::new()));
        assert_eq!(e.strategy_name(), "most-abundant");
        e.add_rule("BL0L5").unwrap();
        let out = feed(&mut e, &["aL", "bL", "cL", "aL", "dL"]);
        assert_eq!(out, ["BL2a1b1c1d"]);
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig {
            strategy: "most-abundant".into(),
            ..Default::default()
        };
        let e = BouquetEngine::from_config(&config).unwrap();
        assert_eq!(e.strategy_name(), "most-abundant");
        assert!(format!("{e:?}").contains("most-abundant"));
    }
}
