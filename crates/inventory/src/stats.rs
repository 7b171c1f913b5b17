// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Inventory statistics for diagnostics.
//!
//! [`InventoryStats`] tracks cumulative movement through the inventory:
//! how many units arrived, how many were consumed, and the high-water mark
//! of units held at once.

/// Cumulative statistics about inventory movement.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct InventoryStats {
    /// Total units added.
    pub units_received: u64,
    /// Total units removed by successful subtractions.
    pub units_consumed: u64,
    /// Number of successful bulk subtractions.
    pub subtractions: u64,
    /// Number of subtractions rejected because they would go negative.
    pub rejected_subtractions: u64,
    /// Peak number of units held at once.
    pub peak_units_held: u64,
}

impl InventoryStats {
    /// Units currently held, derived from the running totals.
    pub fn units_held(&self) -> u64 {
        self.units_received - self.units_consumed
    }

    pub(crate) fn record_received(&mut self, n: u32) {
        self.units_received += u64::from(n);
        self.peak_units_held = self.peak_units_held.max(self.units_held());
    }

    pub(crate) fn record_subtraction(&mut self, units: u64) {
        self.subtractions += 1;
        self.units_consumed += units;
    }

    pub(crate) fn record_rejection(&mut self) {
        self.rejected_subtractions += 1;
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Inventory: {} received, {} consumed in {} subtractions, {} held (peak {}), {} rejected",
            self.units_received,
            self.units_consumed,
            self.subtractions,
            self.units_held(),
            self.peak_units_held,
            self.rejected_subtractions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let s = InventoryStats::default();
        assert_eq!(s.units_received, 0);
        assert_eq!(s.units_held(), 0);
    }

    #[test]
    fn test_peak_tracking() {
        let mut s = InventoryStats::default();
        s.record_received(3);
        assert_eq!(s.peak_units_held, 3);
        s.record_subtraction(2);
        s.record_received(1);
        assert_eq!(s.units_held(), 2);
        assert_eq!(s.peak_units_held, 3); // Doesn't decrease.
        s.record_received(5);
        assert_eq!(s.peak_units_held, 7);
    }

    #[test]
    fn test_summary() {
        let mut s = InventoryStats::default();
        s.record_received(4);
        s.record_subtraction(4);
        s.record_rejection();
        let summary = s.summary();
        assert!(summary.contains("4 received"));
        assert!(summary.contains("4 consumed in 1 subtractions"));
        assert!(summary.contains("1 rejected"));
    }
}
