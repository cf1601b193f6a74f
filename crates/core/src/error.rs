// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for triage-core operations.

use thiserror::Error;

/// All possible errors that can occur in triage-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not retrieve issues for user '{0}'\n  hint: the retriever reported this login as unknown")]
    UserNotFound(String),

    #[error("invalid label category: '{0}'\n  hint: valid categories are: classification, priority")]
    InvalidCategory(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for triage-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
