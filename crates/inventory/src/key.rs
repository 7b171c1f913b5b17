// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The closed Category×Size key space.
//!
//! Every flower is identified by a [`FlowerKey`]: one of 26 lowercase
//! categories (`a`–`z`) paired with a [`Size`] (`S` or `L`). The key space
//! is fixed at 52 entries and has a canonical order:
//!
//! ```text
//! aS, aL, bS, bL, …, zS, zL
//! ```
//!
//! Matching and output both iterate in this order, so it is part of the
//! observable behaviour and must not depend on hash-map iteration.

use crate::InventoryError;
use std::fmt;
use std::str::FromStr;

/// Number of flower categories (`a`–`z`).
pub const CATEGORY_COUNT: usize = 26;

/// Number of sizes (`S`, `L`).
pub const SIZE_COUNT: usize = 2;

/// Total number of distinct keys.
pub const KEY_COUNT: usize = CATEGORY_COUNT * SIZE_COUNT;

/// Flower size. Units only combine within a matching size.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Size {
    /// Small (`S`).
    #[serde(rename = "S")]
    Small,
    /// Large (`L`).
    #[serde(rename = "L")]
    Large,
}

impl Size {
    /// Both sizes, in canonical order.
    pub const ALL: [Size; SIZE_COUNT] = [Size::Small, Size::Large];

    /// Parses a size letter. Only uppercase `S` and `L` are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Small),
            'L' => Some(Self::Large),
            _ => None,
        }
    }

    /// Returns the size letter.
    pub fn as_char(self) -> char {
        match self {
            Self::Small => 'S',
            Self::Large => 'L',
        }
    }

    /// Position within a category's pair of keys.
    pub fn index(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Large => 1,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A flower category: one of the 26 lowercase letters.
///
/// Newtype over the alphabet position so that an out-of-range category
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(u8);

impl Category {
    /// Parses a category letter.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Self(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Creates a category from its alphabet position, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CATEGORY_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the category letter.
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Alphabet position (`a` = 0).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A Category×Size key, e.g. `aL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlowerKey {
    pub category: Category,
    pub size: Size,
}

impl FlowerKey {
    pub fn new(category: Category, size: Size) -> Self {
        Self { category, size }
    }

    /// Canonical index in `0..KEY_COUNT`.
    pub fn index(self) -> usize {
        self.category.index() * SIZE_COUNT + self.size.index()
    }

    /// Inverse of [`FlowerKey::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        let category = Category::from_index(index / SIZE_COUNT)?;
        let size = Size::ALL[index % SIZE_COUNT];
        Some(Self { category, size })
    }

    /// Iterates over all 52 keys in canonical order.
    pub fn all() -> impl Iterator<Item = FlowerKey> {
        (0..KEY_COUNT).filter_map(FlowerKey::from_index)
    }

    /// Iterates over the 26 keys of one size in canonical order.
    pub fn all_of_size(size: Size) -> impl Iterator<Item = FlowerKey> {
        (0..CATEGORY_COUNT)
            .filter_map(Category::from_index)
            .map(move |category| FlowerKey { category, size })
    }
}

impl FromStr for FlowerKey {
    type Err = InventoryError;

    /// Parses the two-character text form: category letter, then size letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || InventoryError::UnknownKey { key: s.to_string() };

        let mut chars = s.chars();
        let (Some(c), Some(z), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(unknown());
        };
        let category = Category::from_char(c).ok_or_else(unknown)?;
        let size = Size::from_char(z).ok_or_else(unknown)?;
        Ok(Self { category, size })
    }
}

impl fmt::Display for FlowerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category, self.size)
    }
}

// Keys serialise in their text form so JSON dumps read `{"aL": 3}`.
impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl serde::Serialize for FlowerKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
