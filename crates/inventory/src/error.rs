// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for inventory management.

/// Errors that can occur while reading or mutating the inventory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The key is not one of the 52 Category×Size keys.
    #[error("unknown flower key '{key}': expected a lowercase category followed by 'S' or 'L'")]
    UnknownKey { key: String },

    /// A subtraction would drive a count below zero.
    #[error("negative inventory for '{key}': requested {requested}, only {available} available")]
    NegativeInventory {
        key: String,
        available: u32,
        requested: u32,
    },

    /// A counter would exceed `u32::MAX`.
    #[error("count overflow for '{key}'")]
    CountOverflow { key: String },
}
