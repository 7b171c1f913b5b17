// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The flower inventory.
//!
//! [`Inventory`] is the authoritative record of available units. It:
//!
//! 1. Holds one counter for each of the 52 keys, all present from the start.
//! 2. Rejects any subtraction that would drive a counter negative. The
//!    whole subtraction is checked before any counter changes, so a rejected
//!    subtraction leaves the inventory untouched.
//! 3. Tracks cumulative [`InventoryStats`].
//!
//! # Ownership
//! The bouquet engine owns the single inventory and is its only mutator.
//! Allocators see it through a shared borrow while planning, so a plan is
//! always computed against a state that cannot change until the engine
//! applies it.

use crate::{FlowerKey, InventoryError, InventoryStats, KeyCounts, Size};
use std::fmt;

/// Counter set of currently available, unconsumed units.
///
/// # Example
/// ```
/// use inventory::{FlowerKey, Inventory, KeyCounts};
///
/// let mut inv = Inventory::new();
/// let al: FlowerKey = "aL".parse().unwrap();
/// inv.increment(al).unwrap();
/// inv.increment(al).unwrap();
/// assert_eq!(inv.get(al), 2);
///
/// let plan: KeyCounts = [(al, 2)].into_iter().collect();
/// inv.subtract(&plan).unwrap();
/// assert_eq!(inv.get(al), 0);
///
/// // Over-subtraction is rejected and changes nothing.
/// let too_many: KeyCounts = [(al, 1)].into_iter().collect();
/// assert!(inv.subtract(&too_many).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Inventory {
    counts: KeyCounts,
    stats: InventoryStats,
}

impl Inventory {
    /// Creates an inventory with every key at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count for `key`.
    pub fn get(&self, key: FlowerKey) -> u32 {
        self.counts.get(key)
    }

    /// Looks up a key by its text form.
    pub fn get_str(&self, key: &str) -> Result<u32, InventoryError> {
        let key: FlowerKey = key.parse()?;
        Ok(self.get(key))
    }

    /// Records the arrival of one unit. Returns the new count.
    pub fn increment(&mut self, key: FlowerKey) -> Result<u32, InventoryError> {
        self.increment_by(key, 1)
    }

    /// Records the arrival of `n` units. Returns the new count.
    pub fn increment_by(&mut self, key: FlowerKey, n: u32) -> Result<u32, InventoryError> {
        let count = self
            .counts
            .checked_add(key, n)
            .ok_or_else(|| InventoryError::CountOverflow {
                key: key.to_string(),
            })?;
        self.stats.record_received(n);
        Ok(count)
    }

    /// Removes every unit named in `plan`.
    ///
    /// Either all counters are decremented or, if any counter would go
    /// negative, none are and `NegativeInventory` names the first offending
    /// key in canonical order.
    pub fn subtract(&mut self, plan: &KeyCounts) -> Result<(), InventoryError> {
        if let Some((key, requested)) = plan
            .iter_nonzero()
            .find(|&(key, requested)| self.counts.get(key) < requested)
        {
            self.stats.record_rejection();
            return Err(InventoryError::NegativeInventory {
                key: key.to_string(),
                available: self.counts.get(key),
                requested,
            });
        }

        for (key, n) in plan.iter_nonzero() {
            self.counts.set(key, self.counts.get(key) - n);
        }
        self.stats.record_subtraction(plan.total());
        Ok(())
    }

    /// Read-only view of the counters.
    pub fn counts(&self) -> &KeyCounts {
        &self.counts
    }

    /// Total units held across all keys.
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Total units held of one size.
    pub fn total_of_size(&self, size: Size) -> u64 {
        self.counts.total_of_size(size)
    }

    /// Cumulative movement statistics.
    pub fn stats(&self) -> &InventoryStats {
        &self.stats
    }

    /// Non-zero counters as a JSON object, e.g. `{"aL":2,"cS":1}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.counts)
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("counts", &self.counts)
            .field("held", &self.total())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> FlowerKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_starts_at_zero() {
        let inv = Inventory::new();
        assert!(FlowerKey::all().all(|k| inv.get(k) == 0));
        assert_eq!(inv.total(), 0);
    }

    #[test]
    fn test_increment() {
        let mut inv = Inventory::new();
        assert_eq!(inv.increment(key("aL")).unwrap(), 1);
        assert_eq!(inv.increment(key("aL")).unwrap(), 2);
        assert_eq!(inv.increment_by(key("bS"), 5).unwrap(), 5);
        assert_eq!(inv.total(), 7);
        assert_eq!(inv.total_of_size(Size::Large), 2);
        assert_eq!(inv.stats().units_received, 7);
    }

    #[test]
    fn test_get_str() {
        let mut inv = Inventory::new();
        inv.increment(key("qS")).unwrap();
        assert_eq!(inv.get_str("qS").unwrap(), 1);
        assert!(matches!(
            inv.get_str("QS"),
            Err(InventoryError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_subtract_exact() {
        let mut inv = Inventory::new();
        inv.increment_by(key("aS"), 2).unwrap();
        inv.increment_by(key("bS"), 1).unwrap();

        let plan: KeyCounts = [(key("aS"), 2), (key("bS"), 1)].into_iter().collect();
        inv.subtract(&plan).unwrap();

        assert_eq!(inv.total(), 0);
        assert_eq!(inv.stats().units_consumed, 3);
        assert_eq!(inv.stats().subtractions, 1);
    }

    #[test]
    fn test_subtract_is_all_or_nothing() {
        let mut inv = Inventory::new();
        inv.increment_by(key("aS"), 5).unwrap();
        inv.increment_by(key("bS"), 1).unwrap();

        // aS is fine, bS is short by one.
        let plan: KeyCounts = [(key("aS"), 3), (key("bS"), 2)].into_iter().collect();
        let err = inv.subtract(&plan).unwrap_err();

        assert_eq!(
            err,
            InventoryError::NegativeInventory {
                key: "bS".into(),
                available: 1,
                requested: 2,
            }
        );
        assert_eq!(inv.get(key("aS")), 5);
        assert_eq!(inv.get(key("bS")), 1);
        assert_eq!(inv.stats().rejected_subtractions, 1);
    }

    #[test]
    fn test_subtract_empty_plan() {
        let mut inv = Inventory::new();
        inv.subtract(&KeyCounts::new()).unwrap();
        assert_eq!(inv.total(), 0);
    }

    #[test]
    fn test_overflow_rejected() {
        let mut inv = Inventory::new();
        inv.increment_by(key("aS"), u32::MAX).unwrap();
        assert!(matches!(
            inv.increment(key("aS")),
            Err(InventoryError::CountOverflow { .. })
        ));
        assert_eq!(inv.get(key("aS")), u32::MAX);
    }

    #[test]
    fn test_to_json() {
        let mut inv = Inventory::new();
        inv.increment(key("cS")).unwrap();
        inv.increment_by(key("aL"), 2).unwrap();
        assert_eq!(inv.to_json().unwrap(), r#"{"aL":2,"cS":1}"#);
    }
}
