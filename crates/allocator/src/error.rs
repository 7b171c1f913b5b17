// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the allocator.
//!
//! "No match" is not an error: it is `Ok(None)` from
//! [`crate::Allocator::try_create`]. Every variant here means a plan was
//! attempted and came out wrong, which is an internal invariant violation.

/// Errors that can occur while building a consumption plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// A strategy produced a plan that breaks a plan invariant.
    #[error("strategy '{strategy}' produced an invalid plan for rule '{rule}': {detail}")]
    InvalidPlan {
        rule: String,
        strategy: String,
        detail: String,
    },

    /// A strategy ran out of leftover stock after feasibility was proven.
    #[error("padding exhausted for rule '{rule}' with {remaining} units still to place")]
    PaddingExhausted { rule: String, remaining: u32 },
}
