// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # rule-spec
//!
//! Parser for the compact bouquet rule language.
//!
//! A rule such as `CL20a15c40` names a bouquet type (`C`), a size (`L`),
//! the units it must contain (20 × `aL`, 15 × `cL`), and its total size
//! (40). The difference between the total and the named units is the
//! *padding*: free-choice units of the same size.
//!
//! - [`RuleSpec`] — the parsed, immutable rule, with a canonical text form
//!   via `Display`.
//! - [`RuleError`] — why a definition was rejected, naming the offending
//!   fragment.
//!
//! # Example
//! ```
//! use rule_spec::RuleSpec;
//!
//! let rule: RuleSpec = "AS2aS1bS3".parse().unwrap();
//! println!("{}", rule.summary());
//! assert_eq!(rule.to_string(), "AS2a1b3");
//! ```

mod error;
mod rule;

pub use error::RuleError;
pub use rule::RuleSpec;
