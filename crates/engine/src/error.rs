// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the bouquet engine.

use inventory::InventoryError;

/// Errors that can occur while registering rules or processing arrivals.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An inventory operation failed (unknown key, negative count).
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// A rule definition was rejected.
    #[error("rule error: {0}")]
    Rule(#[from] rule_spec::RuleError),

    /// An allocator produced an invalid plan.
    #[error("allocation error: {0}")]
    Alloc(#[from] allocator::AllocError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// An input line that is not valid UTF-8.
    #[error("line is not valid UTF-8: '{text}'")]
    InvalidText { text: String },

    /// An error tied to a specific input line.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Returns `true` if the error only invalidates the current line.
    ///
    /// Unknown keys, undecodable lines and rejected rule definitions are
    /// input problems: the line is dropped and the stream can go on. Invariant violations
    /// (negative inventory, invalid plans), overflow, I/O and configuration
    /// errors are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Inventory(InventoryError::UnknownKey { .. }) => true,
            Self::Rule(_) | Self::InvalidText { .. } => true,
            Self::AtLine { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }

    /// Attaches a 1-based input line number.
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        let unknown = EngineError::from(InventoryError::UnknownKey { key: "xx".into() });
        assert!(unknown.is_recoverable());

        let negative = EngineError::from(InventoryError::NegativeInventory {
            key: "aS".into(),
            available: 0,
            requested: 1,
        });
        assert!(!negative.is_recoverable());

        let rule = EngineError::from(rule_spec::RuleError::Empty {
            definition: String::new(),
        });
        assert!(rule.is_recoverable());

        assert!(!EngineError::ConfigError("bad".into()).is_recoverable());

        let text = EngineError::InvalidText {
            text: String::from_utf8_lossy(b"\xffS").into_owned(),
        };
        assert!(text.is_recoverable());
        assert!(text.to_string().contains("\u{fffd}S"));
    }

    #[test]
    fn test_at_line() {
        let e = EngineError::from(InventoryError::UnknownKey { key: "Q".into() }).at_line(7);
        assert!(e.is_recoverable());
        let msg = e.to_string();
        assert!(msg.starts_with("line 7:"), "{msg}");
        assert!(msg.contains("'Q'"), "{msg}");
    }
}
