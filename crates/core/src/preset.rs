// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The preset label catalog.
//!
//! The catalog is the static, externally maintained list of every label
//! the bot may apply, across all categories. Catalog order is semantic:
//! when several labels in one category match a title, the earliest one in
//! the catalog wins.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::label::{Category, Label};

/// Ordered, read-only collection of all preset labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetCatalog(Vec<Label>);

impl PresetCatalog {
    /// Creates a catalog from labels in their tie-break order.
    pub fn new(labels: Vec<Label>) -> Self {
        PresetCatalog(labels)
    }

    /// Parses a catalog from its JSON representation (an array of labels).
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serializes the catalog back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of labels in the catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the catalog holds no labels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All labels in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }

    /// Labels belonging to the given category, preserving catalog order.
    pub fn labels_in(&self, category: Category) -> impl Iterator<Item = &Label> {
        self.0.iter().filter(move |label| label.category == category)
    }
}

impl FromIterator<Label> for PresetCatalog {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        PresetCatalog(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;
