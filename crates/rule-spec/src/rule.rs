// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rule definitions.
//!
//! A rule describes one kind of bouquet in a compact text form:
//!
//! ```text
//! CL20a15c33
//! ││└──┬───┘└─ declared total (33)
//! ││   └───── requirements: 20 × aL, 15 × cL
//! │└───────── size (L)
//! └────────── bouquet type (C)
//! ```
//!
//! Each requirement is a count followed by a lowercase category. A category
//! may carry an explicit size qualifier (`2aS`), which must match the rule
//! size. A count followed directly by the size letter (`0L`, `3L`) is a
//! wildcard: that many units of any category of the rule's size. The
//! trailing digit run is the declared total; when absent it reads as zero.
//!
//! The bouquet always has at least as many units as its requirements, so
//! the target total is clamped:
//!
//! ```text
//! target  = max(declared, named + wildcard)
//! padding = target - named
//! ```
//!
//! Padding units are free-choice units of the rule's size, picked by the
//! allocator.

use crate::RuleError;
use inventory::{Category, FlowerKey, InventoryError, KeyCounts, Size};
use std::fmt;

/// A parsed, immutable bouquet rule.
///
/// # Example
/// ```
/// use rule_spec::RuleSpec;
///
/// let rule = RuleSpec::parse("CL20a15c40").unwrap();
/// assert_eq!(rule.bouquet_type(), 'C');
/// assert_eq!(rule.requirements_total(), 35);
/// assert_eq!(rule.target_total(), 40);
/// assert_eq!(rule.padding(), 5);
/// assert_eq!(rule.to_string(), "CL20a15c40");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RuleSpec {
    /// The definition text this rule was parsed from.
    definition: String,
    /// Single identifying character of the bouquet.
    bouquet_type: char,
    /// Size shared by every unit of the bouquet.
    size: Size,
    /// Named requirements, only for keys of `size`.
    requirements: KeyCounts,
    /// Sum of the named requirements.
    requirements_total: u32,
    /// Total as written in the definition, before clamping.
    declared_total: u32,
    /// Number of units in an assembled bouquet.
    target_total: u32,
    /// Free-choice units beyond the named requirements.
    padding: u32,
}

/// What the scanner saw last, used to tell a size qualifier from a
/// wildcard.
#[derive(Debug, Clone, Copy)]
enum Prev {
    Start,
    Digits,
    Category(usize),
    Closed,
}

impl RuleSpec {
    /// Parses a rule definition.
    ///
    /// Nothing is returned for a partially valid definition: any error
    /// rejects the whole rule.
    pub fn parse(definition: &str) -> Result<Self, RuleError> {
        let malformed = |fragment: &str, reason: &str| RuleError::Malformed {
            definition: definition.to_string(),
            fragment: fragment.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = definition.chars();
        let (Some(bouquet_type), Some(size_char)) = (chars.next(), chars.next()) else {
            return Err(RuleError::Empty {
                definition: definition.to_string(),
            });
        };
        let size = Size::from_char(size_char).ok_or_else(|| RuleError::InvalidSize {
            definition: definition.to_string(),
            found: size_char,
        })?;
        let body = chars.as_str();

        let mut requirements = KeyCounts::new();
        let mut requirements_total: u32 = 0;
        let mut wildcard_total: u32 = 0;
        // Pending digit run: (byte offset where it started, value).
        let mut pending: Option<(usize, u32)> = None;
        let mut prev = Prev::Start;

        for (i, c) in body.char_indices() {
            let here = &body[i..i + c.len_utf8()];

            if let Some(d) = c.to_digit(10) {
                let (start, value) = pending.unwrap_or((i, 0));
                let value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(d))
                    .ok_or_else(|| malformed(&body[start..=i], "count overflows u32"))?;
                pending = Some((start, value));
                prev = Prev::Digits;
            } else if let Some(category) = Category::from_char(c) {
                let (_, count) = pending
                    .take()
                    .ok_or_else(|| malformed(here, "category has no preceding count"))?;
                let key = FlowerKey::new(category, size);
                requirements
                    .checked_add(key, count)
                    .ok_or_else(|| malformed(here, "requirement overflows u32"))?;
                requirements_total = requirements_total
                    .checked_add(count)
                    .ok_or_else(|| malformed(here, "requirement total overflows u32"))?;
                prev = Prev::Category(i);
            } else if let Some(z) = Size::from_char(c) {
                match prev {
                    Prev::Category(at) => {
                        if z != size {
                            return Err(malformed(
                                &body[at..i + 1],
                                "size qualifier does not match the rule size",
                            ));
                        }
                    }
                    Prev::Digits => {
                        let (start, count) = pending.take().unwrap_or((i, 0));
                        if z != size {
                            return Err(malformed(
                                &body[start..i + 1],
                                "wildcard size does not match the rule size",
                            ));
                        }
                        wildcard_total = wildcard_total
                            .checked_add(count)
                            .ok_or_else(|| malformed(here, "wildcard total overflows u32"))?;
                    }
                    Prev::Start | Prev::Closed => {
                        return Err(malformed(here, "size letter without a count or category"));
                    }
                }
                prev = Prev::Closed;
            } else {
                return Err(RuleError::UnknownKey {
                    definition: definition.to_string(),
                    source: InventoryError::UnknownKey {
                        key: format!("{c}{size}"),
                    },
                });
            }
        }

        let declared_total = pending.map_or(0, |(_, v)| v);
        let minimum = requirements_total
            .checked_add(wildcard_total)
            .ok_or_else(|| malformed(body, "bouquet size overflows u32"))?;
        let target_total = declared_total.max(minimum);

        Ok(Self {
            definition: definition.to_string(),
            bouquet_type,
            size,
            requirements,
            requirements_total,
            declared_total,
            target_total,
            padding: target_total - requirements_total,
        })
    }

    /// The definition text this rule was parsed from.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn bouquet_type(&self) -> char {
        self.bouquet_type
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Named requirements. Only keys of [`RuleSpec::size`] are non-zero.
    pub fn requirements(&self) -> &KeyCounts {
        &self.requirements
    }

    /// Required count for `key` (zero when not named).
    pub fn required(&self, key: FlowerKey) -> u32 {
        self.requirements.get(key)
    }

    pub fn requirements_total(&self) -> u32 {
        self.requirements_total
    }

    /// The total as written, before clamping.
    pub fn declared_total(&self) -> u32 {
        self.declared_total
    }

    /// Number of units every assembled bouquet contains.
    pub fn target_total(&self) -> u32 {
        self.target_total
    }

    /// Free-choice units beyond the named requirements.
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Returns `true` if the declared total was raised to fit the
    /// requirements.
    pub fn is_clamped(&self) -> bool {
        self.target_total != self.declared_total
    }

    /// One-line human-readable description.
    pub fn summary(&self) -> String {
        let named: Vec<String> = self
            .requirements
            .iter_nonzero()
            .map(|(k, n)| format!("{n}×{k}"))
            .collect();
        format!(
            "bouquet {}{}: requires [{}] = {}, target {}{}, padding {}",
            self.bouquet_type,
            self.size,
            named.join(", "),
            self.requirements_total,
            self.target_total,
            if self.is_clamped() {
                format!(" (declared {})", self.declared_total)
            } else {
                String::new()
            },
            self.padding,
        )
    }
}

/// Canonical text: `<type><size>(<count><category>)*<target>`.
///
/// Parsing the canonical text yields the same requirements and padding.
impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.bouquet_type, self.size)?;
        for (key, n) in self.requirements.iter_nonzero() {
            write!(f, "{n}{}", key.category)?;
        }
        write!(f, "{}", self.target_total)
    }
}

impl std::str::FromStr for RuleSpec {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
