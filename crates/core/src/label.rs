// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core data types for the triage rule evaluators.
//!
//! This module contains the fundamental records the evaluators read:
//! User, Issue, Label, and the Category grouping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Grouping of preset labels by the classification purpose they serve.
///
/// An issue should carry at most one label per category; the classifier
/// enforces this by replacing existing category labels, not just adding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Issue-type labels ("bug", "feature", "question", ...).
    Classification,
    /// Urgency labels ("priority: high", ...).
    Priority,
}

impl Category {
    /// The categories the classifier evaluates, in evaluation order.
    pub const RECOGNIZED: [Category; 2] = [Category::Classification, Category::Priority];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Classification => "classification",
            Category::Priority => "priority",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "classification" => Ok(Category::Classification),
            "priority" => Ok(Category::Priority),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// A preset label the bot may apply to an issue.
///
/// Labels are immutable value objects loaded from the preset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Display name as the tracker shows it, unique within a category.
    pub name: String,
    /// Keyword token matched against issue titles (case-insensitive).
    pub keyword: String,
    /// The grouping this label belongs to.
    pub category: Category,
}

impl Label {
    /// Creates a new preset label.
    pub fn new(name: String, keyword: String, category: Category) -> Self {
        Label { name, keyword, category }
    }
}

/// A tracked issue as the rule evaluators see it.
///
/// Externally sourced and read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Short description of the work; the input to title matching.
    pub title: String,
    /// Labels currently attached, in the order the tracker reports them.
    pub labels: Vec<Label>,
}

impl Issue {
    /// Creates an issue with no labels attached.
    pub fn new(title: String) -> Self {
        Issue { title, labels: Vec::new() }
    }

    /// Sets the currently attached labels (builder pattern).
    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }
}

/// The author of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login handle.
    pub login: String,
}

impl User {
    /// Creates a user from a login handle.
    pub fn new(login: String) -> Self {
        User { login }
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
