// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Title-driven label classification.
//!
//! Scans an issue's title against the preset catalog and computes the
//! label additions and removals that keep each recognized category down
//! to a single, title-derived label. The classifier never mutates the
//! issue; it hands the delta to an injected replacement effect.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::label::{Category, Issue, Label};
use crate::preset::PresetCatalog;

/// The label changes needed to bring an issue in line with its title.
///
/// An empty delta is the no-op signal: callers must not invoke the
/// replacement effect for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelDelta {
    /// Names of labels to remove from the issue.
    pub removals: Vec<String>,
    /// Names of labels to add to the issue.
    pub additions: Vec<String>,
}

impl LabelDelta {
    /// Returns true if there is nothing to remove and nothing to add.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.additions.is_empty()
    }
}

/// Trait for applying a label delta to the tracker.
///
/// Fire and forget: the core never observes a result, and retries (if
/// any) belong to the implementation behind this seam.
#[async_trait]
pub trait LabelReplacer: Send + Sync {
    /// Removes `removals` from the issue and adds `additions`.
    async fn replace(&self, removals: &[String], additions: &[String]);
}

#[async_trait]
impl<R: LabelReplacer> LabelReplacer for &R {
    async fn replace(&self, removals: &[String], additions: &[String]) {
        (*self).replace(removals, additions).await;
    }
}

/// Selects the first preset label of `category` whose keyword pattern
/// appears in `title`.
///
/// Matching is case-insensitive over the lower-cased title:
/// - Classification labels match when the keyword occurs followed by a
///   colon anywhere in the title ("bug: app crashes").
/// - Priority labels match when the keyword's leading character occurs
///   bracketed ("[a] general question").
///
/// A label with an empty keyword never matches in either category.
///
/// Catalog order is the tie-break: when several labels of the category
/// match, the earliest one in the catalog is selected and the scan stops.
pub fn resolve_auto_label<'a>(
    category: Category,
    title: &str,
    catalog: &'a PresetCatalog,
) -> Option<&'a Label> {
    let title = title.to_lowercase();
    catalog.labels_in(category).find(|label| {
        let keyword = label.keyword.to_lowercase();
        match category {
            Category::Classification => {
                !keyword.is_empty() && title.contains(&format!("{keyword}:"))
            }
            Category::Priority => match keyword.chars().next() {
                Some(initial) => title.contains(&format!("[{initial}]")),
                None => false,
            },
        }
    })
}

/// Computes the label delta for `issue` against `catalog`.
///
/// Runs [`resolve_auto_label`] for every recognized category. When no
/// category matches the title, the delta is empty. Otherwise the
/// additions are the matched label names (one per matching category) and
/// the removals are ALL labels currently on the issue whose category is
/// recognized, whether or not that category produced a new match, so a
/// stale priority label never survives a title edit that dropped its tag.
pub fn compute_label_delta(issue: &Issue, catalog: &PresetCatalog) -> LabelDelta {
    let additions: Vec<String> = Category::RECOGNIZED
        .iter()
        .filter_map(|&category| resolve_auto_label(category, &issue.title, catalog))
        .map(|label| label.name.clone())
        .collect();

    if additions.is_empty() {
        return LabelDelta::default();
    }

    let removals = issue
        .labels
        .iter()
        .filter(|label| Category::RECOGNIZED.contains(&label.category))
        .map(|label| label.name.clone())
        .collect();

    LabelDelta { removals, additions }
}

/// Computes the delta for `issue` and applies it through `replacer`.
///
/// The replacer is invoked only for a non-empty delta. Returns the delta
/// either way so callers can record what was (or was not) applied.
pub async fn relabel<R: LabelReplacer>(
    issue: &Issue,
    catalog: &PresetCatalog,
    replacer: R,
) -> LabelDelta {
    let delta = compute_label_delta(issue, catalog);
    if delta.is_empty() {
        debug!("no label rules matched '{}'", issue.title);
        return delta;
    }

    debug!(
        "relabeling '{}': removing {:?}, adding {:?}",
        issue.title, delta.removals, delta.additions
    );
    replacer.replace(&delta.removals, &delta.additions).await;
    delta
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
