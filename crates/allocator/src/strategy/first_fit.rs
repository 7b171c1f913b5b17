// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! First-fit padding strategy.
//!
//! Walks the keys of the rule's size in canonical order (`a` to `z`) and
//! takes as many padding units as possible from the first key that still
//! has leftover stock, then moves on to the next one.
//!
//! ```text
//! leftover(k) = inventory[k] - plan[k]
//! take        = min(remaining, leftover(k))
//! ```
//!
//! This is not an optimal allocation. It happily drains a scarce category
//! that a later rule may need. The upside is a plan that is trivial to
//! predict from the inventory alone.

use crate::plan::PlanBuilder;
use crate::strategy::FillStrategy;
use crate::{AllocError, ConsumptionPlan};
use inventory::{FlowerKey, Inventory};
use rule_spec::RuleSpec;

/// First key with leftover stock, in canonical order.
#[derive(Debug, Clone, Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Self
    }
}

impl FillStrategy for FirstFit {
    fn name(&self) -> &str {
        "first-fit"
    }

    fn fill(&self, rule: &RuleSpec, inventory: &Inventory) -> Result<ConsumptionPlan, AllocError> {
        let mut builder = PlanBuilder::new(self.name(), rule);
        let mut remaining = rule.padding();

        while remaining > 0 {
            let (key, leftover) = FlowerKey::all_of_size(rule.size())
                .map(|k| (k, builder.leftover(inventory, k)))
                .find(|&(_, leftover)| leftover > 0)
                .ok_or_else(|| AllocError::PaddingExhausted {
                    rule: rule.to_string(),
                    remaining,
                })?;

            let take = remaining.min(leftover);
            builder.take(key, take);
            remaining -= take;
        }

        Ok(builder.build())
    }
}
