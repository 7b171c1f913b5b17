// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Assembled bouquet record.

use allocator::ConsumptionPlan;
use inventory::{Category, Size};
use std::fmt;

/// One assembled bouquet.
///
/// Displays as `<type><size>` followed by `<count><category>` for every
/// category used, in alphabetical order, e.g. `AS2a1b`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Bouquet {
    /// Index of the rule that produced it, in registration order.
    pub rule_index: usize,
    pub bouquet_type: char,
    pub size: Size,
    /// Non-zero `(count, category)` pairs in alphabetical order.
    pub flowers: Vec<(u32, Category)>,
}

impl Bouquet {
    pub fn from_plan(rule_index: usize, plan: &ConsumptionPlan) -> Self {
        Self {
            rule_index,
            bouquet_type: plan.bouquet_type,
            size: plan.size,
            flowers: plan.entries().map(|(k, n)| (n, k.category)).collect(),
        }
    }

    /// Total units in the bouquet.
    pub fn total(&self) -> u64 {
        self.flowers.iter().map(|&(n, _)| u64::from(n)).sum()
    }
}

impl fmt::Display for Bouquet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.bouquet_type, self.size)?;
        for (n, category) in &self.flowers {
            write!(f, "{n}{}", category.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocator::{Allocator, FirstFit};
    use inventory::{FlowerKey, Inventory};
    use rule_spec::RuleSpec;
    use std::sync::Arc;

    #[test]
    fn test_display_from_plan() {
        let rule = RuleSpec::parse("AS1b2a3").unwrap();
        let mut inv = Inventory::new();
        for k in ["bS", "aS", "aS"] {
            inv.increment(k.parse::<FlowerKey>().unwrap()).unwrap();
        }
        let plan = Allocator::new(rule, Arc::new(FirstFit::new()))
            .try_create(&inv)
            .unwrap()
            .unwrap();
        let b = Bouquet::from_plan(4, &plan);
        assert_eq!(b.to_string(), "AS2a1b");
        assert_eq!(b.rule_index, 4);
        assert_eq!(b.total(), 3);
    }

    #[test]
    fn test_display_empty() {
        let b = Bouquet {
            rule_index: 0,
            bouquet_type: 'Z',
            size: Size::Large,
            flowers: Vec::new(),
        };
        assert_eq!(b.to_string(), "ZL");
    }
}
