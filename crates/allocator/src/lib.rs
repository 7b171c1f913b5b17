// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # allocator
//!
//! Decides whether a bouquet rule can be satisfied from the inventory, and
//! which exact units to consume.
//!
//! # Strategies
//!
//! Named requirements are fixed by the rule. Padding units are picked by a
//! pluggable [`FillStrategy`]:
//!
//! | Strategy | Picks padding from | Effect |
//! |---|---|---|
//! | [`FirstFit`] | first key with stock, `a` → `z` | predictable, drains early categories |
//! | [`MostAbundant`] | key with most leftover stock | spreads load, preserves scarce keys |
//!
//! Both are deterministic: the same inventory and rule always give the
//! same plan.
//!
//! # Example
//! ```
//! use allocator::{Allocator, FirstFit};
//! use inventory::Inventory;
//! use rule_spec::RuleSpec;
//! use std::sync::Arc;
//!
//! let mut inv = Inventory::new();
//! for k in ["aL", "bL", "bL"] {
//!     inv.increment(k.parse().unwrap()).unwrap();
//! }
//!
//! let alloc = Allocator::new(RuleSpec::parse("BL1b3").unwrap(), Arc::new(FirstFit::new()));
//! let plan = alloc.try_create(&inv).unwrap().expect("satisfiable");
//! println!("{}", plan.summary());
//! ```

mod allocator;
mod error;
pub(crate) mod plan;
pub mod strategy;

pub use crate::allocator::Allocator;
pub use error::AllocError;
pub use plan::ConsumptionPlan;
pub use strategy::first_fit::FirstFit;
pub use strategy::most_abundant::MostAbundant;
pub use strategy::FillStrategy;
