// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`FillStrategy`] trait and strategy implementations.

pub mod first_fit;
pub mod most_abundant;

use crate::{AllocError, ConsumptionPlan};
use inventory::Inventory;
use rule_spec::RuleSpec;

/// Trait for padding strategies.
///
/// A strategy receives a rule whose requirements and padding are already
/// known to be satisfiable from `inventory`, and produces a plan holding
/// the named requirements plus `rule.padding()` free-choice units of the
/// rule's size.
///
/// Strategies are purely algorithmic and never mutate the inventory, so
/// the same inputs always yield the same plan.
pub trait FillStrategy: Send + Sync + std::fmt::Debug {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Produces a consumption plan for `rule` against `inventory`.
    fn fill(&self, rule: &RuleSpec, inventory: &Inventory) -> Result<ConsumptionPlan, AllocError>;
}
