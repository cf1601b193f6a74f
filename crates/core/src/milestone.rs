// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Milestone detection and congratulation formatting.
//!
//! A milestone is a specific count of issues opened by one author that
//! triggers a congratulatory message. Counts come from an injected
//! retriever so the evaluator never talks to the tracker itself.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::label::{Issue, User};

/// Issue counts that trigger a congratulatory message.
pub const MILESTONES: [u64; 5] = [1, 25, 50, 75, 100];

/// Trait for fetching a user's issue history from the tracker.
///
/// This allows injecting a fake retriever for testing. `None` means the
/// tracker does not know the login, which is distinct from a user with an
/// empty history.
#[async_trait]
pub trait IssueRetriever: Send + Sync {
    /// Returns all issues opened by the given login, or `None` if the
    /// login is unknown to the tracker.
    async fn issues_for(&self, login: &str) -> Option<Vec<Issue>>;
}

#[async_trait]
impl<R: IssueRetriever> IssueRetriever for &R {
    async fn issues_for(&self, login: &str) -> Option<Vec<Issue>> {
        (*self).issues_for(login).await
    }
}

/// Counts the issues a user has opened.
///
/// Fails with [`Error::UserNotFound`] when the retriever reports the
/// login as unknown; an empty history is a count of zero, not an error.
/// The distinction matters: a retrieval failure must never read as
/// "this user has opened no issues".
pub async fn count_issues_by_user<R: IssueRetriever>(user: &User, retriever: R) -> Result<u64> {
    match retriever.issues_for(&user.login).await {
        Some(issues) => {
            let count = issues.len() as u64;
            debug!("counted {} issues for '{}'", count, user.login);
            Ok(count)
        }
        None => Err(Error::UserNotFound(user.login.clone())),
    }
}

/// Returns true iff the count exactly equals one of [`MILESTONES`].
///
/// Exact membership only: no modulo or interval logic.
pub fn is_milestone(count: u64) -> bool {
    MILESTONES.contains(&count)
}

/// Formats the congratulatory message for a milestone count.
///
/// The ordinal suffix is intentionally naive: 1 gets "st", every other
/// value gets "th". All the later milestones (25, 50, 75, 100) happen to
/// read correctly with "th", so the bot keeps the simple rule.
pub fn congratulation(count: u64) -> String {
    format!(
        "Nice work opening your {count}{} issue! \u{1f601}\u{1f38a}\u{1f44d}",
        ordinal_suffix(count)
    )
}

fn ordinal_suffix(count: u64) -> &'static str {
    if count == 1 {
        "st"
    } else {
        "th"
    }
}

#[cfg(test)]
#[path = "milestone_tests.rs"]
mod tests;
