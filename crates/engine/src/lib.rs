// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # engine
//!
//! Bouquet assembly engine. Ties the inventory, rule parser and allocators
//! into a single arrival loop and drives it from line-oriented input.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                BouquetEngine                 │
//! │  ┌───────────┐  ┌────────────┐  ┌─────────┐  │
//! │  │ Allocator │  │ Allocator  │  │ Metrics │  │
//! │  │  rule #0  │→ │  rule #1   │→ │         │  │
//! │  └─────┬─────┘  └─────┬──────┘  └─────────┘  │
//! │        └──── &Inventory ────┘                │
//! └──────────────────────────────────────────────┘
//!           ▲
//!     LineDispatcher ← rules, blank line, arrivals
//! ```
//!
//! # Example
//! ```
//! use allocator::FirstFit;
//! use engine::BouquetEngine;
//! use std::sync::Arc;
//!
//! let mut engine = BouquetEngine::new(Arc::new(FirstFit::new()));
//! engine.add_rule("AS2aS1bS3").unwrap();
//!
//! assert!(engine.add_flower("aS").unwrap().is_none());
//! assert!(engine.add_flower("bS").unwrap().is_none());
//! let bouquet = engine.add_flower("aS").unwrap().unwrap();
//! assert_eq!(bouquet.to_string(), "AS2a1b");
//! ```

mod bouquet;
pub mod config;
pub mod dispatch;
mod error;
mod factory;
pub mod metrics;

pub use bouquet::Bouquet;
pub use config::{EngineConfig, ErrorPolicy};
pub use dispatch::{run_stream, LineDispatcher, LineOutcome, Phase};
pub use error::EngineError;
pub use factory::BouquetEngine;
pub use metrics::{EngineMetrics, RuleMetrics};
