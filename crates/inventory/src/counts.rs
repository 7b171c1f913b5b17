// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A fixed-size counter per [`FlowerKey`].
//!
//! [`KeyCounts`] is the storage shared by the inventory, rule requirements,
//! and consumption plans. It is a plain `[u32; 52]` indexed by the
//! canonical key index, so iteration order is always canonical.

use crate::key::{FlowerKey, Size, KEY_COUNT};

/// One non-negative counter for every key in the closed key space.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KeyCounts {
    counts: [u32; KEY_COUNT],
}

impl KeyCounts {
    /// All 52 counters at zero.
    pub fn new() -> Self {
        Self {
            counts: [0; KEY_COUNT],
        }
    }

    /// Returns the count for `key`.
    pub fn get(&self, key: FlowerKey) -> u32 {
        self.counts[key.index()]
    }

    /// Overwrites the count for `key`.
    pub fn set(&mut self, key: FlowerKey, value: u32) {
        self.counts[key.index()] = value;
    }

    /// Adds `n` to the count for `key`. Returns `None` on overflow,
    /// leaving the counter unchanged.
    pub fn checked_add(&mut self, key: FlowerKey, n: u32) -> Option<u32> {
        let slot = &mut self.counts[key.index()];
        *slot = slot.checked_add(n)?;
        Some(*slot)
    }

    /// Iterates over every key and its count in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FlowerKey, u32)> + '_ {
        FlowerKey::all().map(move |k| (k, self.get(k)))
    }

    /// Iterates over keys with a non-zero count, in canonical order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (FlowerKey, u32)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }

    /// Sum over all keys.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&n| u64::from(n)).sum()
    }

    /// Sum over the keys of one size.
    pub fn total_of_size(&self, size: Size) -> u64 {
        FlowerKey::all_of_size(size)
            .map(|k| u64::from(self.get(k)))
            .sum()
    }

    /// Returns `true` if every counter is zero.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }
}

impl Default for KeyCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(FlowerKey, u32)> for KeyCounts {
    /// Builds counts from `(key, n)` pairs; repeated keys accumulate
    /// (saturating).
    fn from_iter<I: IntoIterator<Item = (FlowerKey, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (key, n) in iter {
            let slot = &mut counts.counts[key.index()];
            *slot = slot.saturating_add(n);
        }
        counts
    }
}

impl std::fmt::Debug for KeyCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter_nonzero().map(|(k, n)| (k.to_string(), n)))
            .finish()
    }
}

/// Serialises only the non-zero entries, as a key → count map.
impl serde::Serialize for KeyCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter_nonzero())
    }
}
