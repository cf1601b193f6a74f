// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! triage-core: rule evaluation for the triage issue bot
//!
//! This crate provides the two stateless rule evaluators the bot runs on
//! incoming issues: milestone detection (congratulate an author on their
//! Nth opened issue) and title-driven label classification (keep each
//! label category down to a single, title-derived label). Everything that
//! touches the tracker itself is an injected capability.

pub mod classify;
pub mod error;
pub mod label;
pub mod milestone;
pub mod preset;

pub use classify::{compute_label_delta, relabel, resolve_auto_label, LabelDelta, LabelReplacer};
pub use error::{Error, Result};
pub use label::{Category, Issue, Label, User};
pub use milestone::{
    congratulation, count_issues_by_user, is_milestone, IssueRetriever, MILESTONES,
};
pub use preset::PresetCatalog;
