// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for rule parsing.

/// Errors that can occur when parsing a rule definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The definition is too short to hold a type and a size.
    #[error("rule definition '{definition}' is too short: expected a type and a size character")]
    Empty { definition: String },

    /// The second character is not a size letter.
    #[error("rule definition '{definition}' has invalid size '{found}': expected 'S' or 'L'")]
    InvalidSize { definition: String, found: char },

    /// Part of the definition does not fit the grammar.
    #[error("malformed rule definition '{definition}' at '{fragment}': {reason}")]
    Malformed {
        definition: String,
        fragment: String,
        reason: String,
    },

    /// A requirement names a key outside the closed key space.
    #[error("rule definition '{definition}' references {source}")]
    UnknownKey {
        definition: String,
        #[source]
        source: inventory::InventoryError,
    },
}
