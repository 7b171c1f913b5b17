// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Engine configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! strategy = "first-fit"
//! on_error = "skip"
//! show_inventory = false
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::EngineError;
use allocator::{FillStrategy, FirstFit, MostAbundant};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// What to do when a line cannot be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the error, drop the line, continue with the next one.
    #[default]
    Skip,
    /// Stop at the first error.
    Abort,
}

impl FromStr for ErrorPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(EngineError::ConfigError(format!(
                "unknown error policy '{other}'; expected 'skip' or 'abort'"
            ))),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Skip => "skip",
            Self::Abort => "abort",
        })
    }
}

/// Configuration for the bouquet engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Padding strategy name: `"first-fit"` or `"most-abundant"`.
    pub strategy: String,
    /// Recovery policy for bad lines.
    pub on_error: ErrorPolicy,
    /// Whether to report the residual inventory when input ends.
    pub show_inventory: bool,
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str)
            .map_err(|e| EngineError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Creates the padding strategy specified by this config.
    pub fn create_strategy(&self) -> Result<Arc<dyn FillStrategy>, EngineError> {
        match self.strategy.to_lowercase().as_str() {
            "first-fit" | "first" => Ok(Arc::new(FirstFit::new())),
            "most-abundant" | "abundant" => Ok(Arc::new(MostAbundant::new())),
            other => Err(EngineError::ConfigError(format!(
                "unknown strategy '{other}'; expected 'first-fit' or 'most-abundant'"
            ))),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: "first-fit".to_string(),
            on_error: ErrorPolicy::Skip,
            show_inventory: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = EngineConfig::default();
        assert_eq!(c.strategy, "first-fit");
        assert_eq!(c.on_error, ErrorPolicy::Skip);
        assert!(!c.show_inventory);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
strategy = "most-abundant"
on_error = "abort"
show_inventory = true
"#;
        let c = EngineConfig::from_toml(toml).unwrap();
        assert_eq!(c.strategy, "most-abundant");
        assert_eq!(c.on_error, ErrorPolicy::Abort);
        assert!(c.show_inventory);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c = EngineConfig::from_toml("on_error = \"abort\"\n").unwrap();
        assert_eq!(c.strategy, "first-fit");
        assert_eq!(c.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_bad_toml() {
        assert!(EngineConfig::from_toml("on_error = \"retry\"\n").is_err());
        assert!(EngineConfig::from_toml("strategy = [").is_err());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = EngineConfig {
            strategy: "most-abundant".into(),
            on_error: ErrorPolicy::Abort,
            show_inventory: true,
        };
        let back = EngineConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_create_strategy() {
        for (name, expected) in [
            ("first-fit", "first-fit"),
            ("First", "first-fit"),
            ("most-abundant", "most-abundant"),
            ("abundant", "most-abundant"),
        ] {
            let c = EngineConfig {
                strategy: name.into(),
                ..Default::default()
            };
            assert_eq!(c.create_strategy().unwrap().name(), expected);
        }
    }

    #[test]
    fn test_create_strategy_unknown() {
        let c = EngineConfig {
            strategy: "optimal".into(),
            ..Default::default()
        };
        assert!(matches!(
            c.create_strategy(),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_error_policy_parse() {
        assert_eq!("skip".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Skip);
        assert_eq!("ABORT".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Abort);
        assert!("retry".parse::<ErrorPolicy>().is_err());
        assert_eq!(ErrorPolicy::Abort.to_string(), "abort");
    }
}
