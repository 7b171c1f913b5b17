// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-rule matching.
//!
//! An [`Allocator`] answers one question for one rule: can a bouquet be
//! assembled from the current inventory, and if so, from which units?
//!
//! ```text
//! 1. requirements   inventory[k] >= required[k]        for every named k
//! 2. padding        Σ (inventory[k] - required[k])     over keys of the size
//!                     >= padding
//! 3. plan           FillStrategy::fill, then ConsumptionPlan::validate
//! ```
//!
//! Steps 1 and 2 reject cheaply. Step 3 only runs once feasibility is
//! proven, so a strategy that still fails signals a bug, not a miss.

use crate::{AllocError, ConsumptionPlan, FillStrategy};
use inventory::{FlowerKey, Inventory};
use rule_spec::RuleSpec;
use std::sync::Arc;

/// Matches one rule against the shared inventory.
///
/// The allocator never mutates the inventory: it borrows it for the
/// duration of [`Allocator::try_create`] and the engine applies the plan.
///
/// # Example
/// ```
/// use allocator::{Allocator, FirstFit};
/// use inventory::Inventory;
/// use rule_spec::RuleSpec;
/// use std::sync::Arc;
///
/// let rule = RuleSpec::parse("AS2a2").unwrap();
/// let alloc = Allocator::new(rule, Arc::new(FirstFit::new()));
///
/// let mut inv = Inventory::new();
/// inv.increment("aS".parse().unwrap()).unwrap();
/// assert!(alloc.try_create(&inv).unwrap().is_none());
///
/// inv.increment("aS".parse().unwrap()).unwrap();
/// let plan = alloc.try_create(&inv).unwrap().unwrap();
/// assert_eq!(plan.total(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Allocator {
    rule: RuleSpec,
    strategy: Arc<dyn FillStrategy>,
}

impl Allocator {
    pub fn new(rule: RuleSpec, strategy: Arc<dyn FillStrategy>) -> Self {
        Self { rule, strategy }
    }

    /// The rule this allocator assembles.
    pub fn rule(&self) -> &RuleSpec {
        &self.rule
    }

    /// Name of the padding strategy in use.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Returns `true` if every named requirement is in stock.
    pub fn requirements_met(&self, inventory: &Inventory) -> bool {
        self.rule
            .requirements()
            .iter_nonzero()
            .all(|(key, required)| inventory.get(key) >= required)
    }

    /// Units of the rule's size left over once the named requirements are
    /// set aside.
    pub fn additional_available(&self, inventory: &Inventory) -> u64 {
        FlowerKey::all_of_size(self.rule.size())
            .map(|k| u64::from(inventory.get(k).saturating_sub(self.rule.required(k))))
            .sum()
    }

    /// Returns `true` if enough leftover stock exists to cover the padding.
    pub fn padding_met(&self, inventory: &Inventory) -> bool {
        u64::from(self.rule.padding()) <= self.additional_available(inventory)
    }

    /// Tries to plan one bouquet.
    ///
    /// Returns `Ok(None)` when the rule cannot be satisfied right now.
    /// Calling this twice on an unchanged inventory returns equal results.
    pub fn try_create(&self, inventory: &Inventory) -> Result<Option<ConsumptionPlan>, AllocError> {
        if !self.requirements_met(inventory) {
            tracing::trace!(rule = %self.rule, "requirements not met");
            return Ok(None);
        }
        if !self.padding_met(inventory) {
            tracing::trace!(
                rule = %self.rule,
                padding = self.rule.padding(),
                available = self.additional_available(inventory),
                "padding not met",
            );
            return Ok(None);
        }

        let plan = self.strategy.fill(&self.rule, inventory)?;
        plan.validate(&self.rule, inventory)?;
        tracing::debug!("{}", plan.summary());
        Ok(Some(plan))
    }
}
