// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # inventory
//!
//! The flower inventory: a fixed-cardinality counter set over the closed
//! space of 52 Category×Size keys.
//!
//! # Key Components
//!
//! - [`FlowerKey`] — a `(Category, Size)` pair such as `aL`, with a
//!   canonical order (`aS, aL, bS, bL, …`).
//! - [`KeyCounts`] — one `u32` counter per key, backed by a fixed array.
//!   Shared by the inventory, rule requirements, and consumption plans.
//! - [`Inventory`] — the authoritative stock. Counts never go negative:
//!   an over-subtraction is rejected as a whole.
//! - [`InventoryStats`] — cumulative movement metrics.
//!
//! # Example
//! ```
//! use inventory::{FlowerKey, Inventory};
//!
//! let mut inv = Inventory::new();
//! inv.increment("bS".parse::<FlowerKey>().unwrap()).unwrap();
//! assert_eq!(inv.get_str("bS").unwrap(), 1);
//! assert!(inv.get_str("b?").is_err());
//! ```

mod counts;
mod error;
pub mod key;
mod stats;
mod stock;

pub use counts::KeyCounts;
pub use error::InventoryError;
pub use key::{Category, FlowerKey, Size, CATEGORY_COUNT, KEY_COUNT};
pub use stats::InventoryStats;
pub use stock::Inventory;
